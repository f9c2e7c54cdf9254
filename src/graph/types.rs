//! Core type definitions for the knowledge graph

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique identifier for a node
///
/// Entities are keyed by their canonical name as written by the upstream
/// indexing engine, so the id is a string rather than a counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Position of an edge in the graph's edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn new(index: usize) -> Self {
        EdgeId(index)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeId({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id() {
        let id = NodeId::new("ALICE");
        assert_eq!(id.as_str(), "ALICE");
        assert_eq!(format!("{}", id), "ALICE");

        let id2: NodeId = "\"BOB\"".into();
        assert_eq!(id2.as_str(), "\"BOB\"");
    }

    #[test]
    fn test_node_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::new("A")).unwrap();
        assert_eq!(json, "\"A\"");
    }

    #[test]
    fn test_edge_id() {
        let id = EdgeId::new(3);
        assert_eq!(id.0, 3);
        assert_eq!(format!("{}", id), "EdgeId(3)");
    }

    #[test]
    fn test_id_ordering() {
        assert!(NodeId::new("a") < NodeId::new("b"));
        assert!(EdgeId::new(1) < EdgeId::new(2));
    }
}
