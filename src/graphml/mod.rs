//! GraphML loading
//!
//! The upstream indexing engine writes its entity/relation graph as a GraphML
//! document. This module reads it into a [`KnowledgeGraph`]. Loading is the
//! only I/O the engine performs: one blocking read, no caching, no retries.

pub mod keys;
pub mod reader;

pub use keys::{AttrType, KeyDomain, KeySpec};
pub use reader::{parse_str, ParseError, ParseResult};

use crate::error::{VizError, VizResult};
use crate::graph::KnowledgeGraph;
use std::io;
use std::path::Path;
use tracing::info;

/// File name the indexing engine gives its graph inside a working directory
pub const DEFAULT_GRAPH_FILE: &str = "graph_chunk_entity_relation.graphml";

/// Load a GraphML file
///
/// A missing file is reported as [`VizError::GraphNotFound`] and a malformed
/// one as [`VizError::GraphParse`].
pub fn load_graph(path: impl AsRef<Path>) -> VizResult<KnowledgeGraph> {
    let path = path.as_ref();

    let input = match std::fs::read_to_string(path) {
        Ok(input) => input,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(VizError::GraphNotFound(path.to_path_buf()));
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(VizError::GraphParse {
                path: path.to_path_buf(),
                reason: "file is not valid UTF-8".to_string(),
            });
        }
        Err(e) => return Err(VizError::Io(e)),
    };

    let graph = parse_str(&input).map_err(|err| VizError::GraphParse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    info!(
        "Loaded graph from {}: {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_GRAPH_FILE);

        match load_graph(&path) {
            Err(VizError::GraphNotFound(missing)) => assert_eq!(missing, path),
            other => panic!("expected GraphNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "<graphml><graph><node id=\"A\"></graph>").unwrap();

        match load_graph(file.path()) {
            Err(VizError::GraphParse { path, .. }) => assert_eq!(path, file.path()),
            other => panic!("expected GraphParse, got {:?}", other),
        }
    }

    #[test]
    fn test_non_utf8_file_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x3c, 0xff, 0xfe, 0x3e]).unwrap();

        assert!(matches!(load_graph(file.path()), Err(VizError::GraphParse { .. })));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"<graphml><key id="d0" for="node" attr.name="entity_type"/><graph>
<node id="A"><data key="d0">Person</data></node></graph></graphml>"#
        )
        .unwrap();

        let graph = load_graph(file.path()).unwrap();
        assert_eq!(graph.get_node("A").unwrap().category(), "Person");
    }
}
