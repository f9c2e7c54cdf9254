//! BlueGraph Knowledge Graph Visualizer
//!
//! Renders the entity/relation graph produced by a graph-based retrieval
//! indexer as an interactive, force-directed HTML view, together with summary
//! statistics for a side panel.
//!
//! # Pipeline
//!
//! - `graphml`: load the GraphML document into a [`KnowledgeGraph`]
//! - `viz::style`: colors per entity type, sizes per degree
//! - `viz::layout`: physics parameters for the force-directed layout
//! - `viz::annotate`: hover tooltips for nodes and relations
//! - `viz::scene` / `viz::html`: assemble and serialize a self-contained page
//! - `stats`: type histogram and node/relation tables
//!
//! Every call works on its own graph instance; nothing is shared between
//! requests.
//!
//! ## Example Usage
//!
//! ```rust
//! use bluegraph::{graphml, render_graph, RenderOptions};
//!
//! let input = r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns">
//!   <key id="t" for="node" attr.name="entity_type" attr.type="string"/>
//!   <graph edgedefault="undirected">
//!     <node id="ALICE"><data key="t">Person</data></node>
//!     <node id="ACME"><data key="t">Organization</data></node>
//!     <edge source="ALICE" target="ACME"/>
//!   </graph>
//! </graphml>"#;
//!
//! let graph = graphml::parse_str(input).unwrap();
//! let view = render_graph(&graph, &RenderOptions::default()).unwrap();
//!
//! assert_eq!(view.scene.nodes.len(), 2);
//! assert_eq!(view.statistics.count_of("Person"), 1);
//! assert!(view.html.starts_with("<!DOCTYPE html>"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod graph;
pub mod graphml;
pub mod render;
pub mod stats;
pub mod viz;

// Re-export main types for convenience
pub use graph::{
    Edge, EdgeId, GraphError, GraphResult, KnowledgeGraph, Node, NodeId, PropertyMap,
    PropertyValue,
};

pub use config::{RenderOptions, VizConfig};
pub use error::{ErrorReport, VizError, VizResult};
pub use graphml::{load_graph, DEFAULT_GRAPH_FILE};
pub use render::{
    render_configured_project, render_graph, render_graph_file, render_project, GraphView,
};
pub use stats::GraphStatistics;
pub use viz::{embed_fragment, RenderScene, SimulationConfig, StyleAssignment};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
