//! Per-request render pipeline
//!
//! Load → style and annotate → assemble → serialize, plus the statistics for
//! the side panel. Each call owns its graph; nothing is cached between calls.

use crate::config::{RenderOptions, VizConfig};
use crate::error::{VizError, VizResult};
use crate::graph::KnowledgeGraph;
use crate::graphml::{load_graph, DEFAULT_GRAPH_FILE};
use crate::stats::GraphStatistics;
use crate::viz::{assemble_scene, render_html, Annotations, RenderScene, StyleAssignment};
use std::path::Path;
use tracing::{error, info, warn};

/// Everything the host displays for one graph
#[derive(Debug, Clone)]
pub struct GraphView {
    pub scene: RenderScene,
    /// Standalone HTML artifact
    pub html: String,
    pub statistics: GraphStatistics,
}

/// Render an already loaded graph
///
/// Failures are logged with full detail and returned to the caller.
pub fn render_graph(graph: &KnowledgeGraph, options: &RenderOptions) -> VizResult<GraphView> {
    let result = assemble_view(graph, options);
    if let Err(err) = &result {
        log_failure("in-memory graph", err);
    }
    result
}

/// Load a GraphML file and render it
///
/// Failures are logged here with full detail and returned to the caller; no
/// partial view is produced.
pub fn render_graph_file(path: impl AsRef<Path>, options: &RenderOptions) -> VizResult<GraphView> {
    let path = path.as_ref();
    let result = load_graph(path).and_then(|graph| assemble_view(&graph, options));

    match &result {
        Ok(view) => info!(
            "Rendered {}: {} nodes, {} edges, {} bytes of HTML",
            path.display(),
            view.scene.nodes.len(),
            view.scene.edges.len(),
            view.html.len()
        ),
        Err(err) => log_failure(&path.display().to_string(), err),
    }

    result
}

/// Render the graph the indexing engine keeps in a working directory
///
/// Uses [`DEFAULT_GRAPH_FILE`]; [`render_configured_project`] honours a
/// configured file name instead.
pub fn render_project(dir: impl AsRef<Path>, options: &RenderOptions) -> VizResult<GraphView> {
    render_graph_file(dir.as_ref().join(DEFAULT_GRAPH_FILE), options)
}

/// Render a working directory with the graph file and options of a [`VizConfig`]
pub fn render_configured_project(dir: impl AsRef<Path>, config: &VizConfig) -> VizResult<GraphView> {
    render_graph_file(config.graph_path(dir), &config.render)
}

fn assemble_view(graph: &KnowledgeGraph, options: &RenderOptions) -> VizResult<GraphView> {
    options.validate()?;

    let styles = StyleAssignment::resolve(graph);
    let annotations = Annotations::build(graph);
    let scene = assemble_scene(
        graph,
        &styles,
        options.simulation(),
        &annotations,
        options.display(),
    )?;
    let html = render_html(&scene)?;
    let statistics = GraphStatistics::compute(graph);

    Ok(GraphView {
        scene,
        html,
        statistics,
    })
}

fn log_failure(source: &str, err: &VizError) {
    let report = err.report();
    if err.is_missing_graph() {
        warn!("{}", report.message);
    } else {
        error!(
            source = %source,
            detail = %report.detail,
            "{}",
            report.message
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, PropertyMap, WEIGHT};
    use std::fs;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    const GRAPH: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
  <key id="d0" for="node" attr.name="entity_type" attr.type="string"/>
  <key id="d1" for="edge" attr.name="weight" attr.type="double"/>
  <graph edgedefault="undirected">
    <node id="A"><data key="d0">Person</data></node>
    <node id="B"><data key="d0">Place</data></node>
    <edge source="A" target="B"><data key="d1">3.5</data></edge>
  </graph>
</graphml>"#;

    #[test]
    fn test_render_project_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_GRAPH_FILE), GRAPH).unwrap();

        let view = render_project(dir.path(), &RenderOptions::default()).unwrap();
        assert_eq!(view.scene.nodes.len(), 2);
        assert_eq!(view.statistics.count_of("Person"), 1);
        assert!(view.html.contains("\"weight\":3.5"));
    }

    #[test]
    fn test_missing_project_graph() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_project(dir.path(), &RenderOptions::default()).unwrap_err();
        assert!(err.is_missing_graph());
    }

    #[test]
    fn test_invalid_options_abort() {
        let graph = KnowledgeGraph::new();
        let options = RenderOptions { height: 0, ..Default::default() };
        assert!(matches!(render_graph(&graph, &options), Err(VizError::Config(_))));
    }

    #[test]
    fn test_configured_graph_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("entities.graphml"), GRAPH).unwrap();
        let config = VizConfig {
            graph_file: "entities.graphml".to_string(),
            ..Default::default()
        };

        let view = render_configured_project(dir.path(), &config).unwrap();
        assert_eq!(view.scene.nodes.len(), 2);
        assert!(render_project(dir.path(), &config.render)
            .unwrap_err()
            .is_missing_graph());
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_render_failure_on_loaded_graph_is_logged() {
        let mut graph = KnowledgeGraph::new();
        graph.add_node(Node::new("A"));
        graph.add_node(Node::new("B"));
        let mut props = PropertyMap::new();
        props.insert(WEIGHT.to_string(), "strong".into());
        graph.add_edge("A", "B", props).unwrap();

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            render_graph(&graph, &RenderOptions::default())
        });
        assert!(matches!(result, Err(VizError::Render(_))));

        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ERROR"));
        assert!(output.contains("Rendering the knowledge graph failed."));
        assert!(output.contains("strong"));
    }

    #[test]
    fn test_empty_graph_renders() {
        let view = render_graph(&KnowledgeGraph::new(), &RenderOptions::default()).unwrap();
        assert!(view.scene.nodes.is_empty());
        assert!(view.statistics.type_distribution.is_empty());
    }
}
