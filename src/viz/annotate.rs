//! Tooltip text for nodes and edges
//!
//! Each present attribute contributes one line. Absent attributes contribute
//! nothing, not even an empty line.

use crate::graph::node::text_attribute;
use crate::graph::{
    EdgeId, KnowledgeGraph, NodeId, PropertyMap, DESCRIPTION, ENTITY_ID, ENTITY_TYPE, KEYWORDS,
};
use indexmap::IndexMap;

/// Tooltip for a node: entity id, description, then `type: <entity_type>`
pub fn node_tooltip(attributes: &PropertyMap) -> String {
    let lines = [
        text_attribute(attributes, ENTITY_ID),
        text_attribute(attributes, DESCRIPTION),
        text_attribute(attributes, ENTITY_TYPE).map(|t| format!("type: {}", t)),
    ];
    join_present(lines)
}

/// Tooltip for an edge: description, then `keywords: <keywords>`
pub fn edge_tooltip(attributes: &PropertyMap) -> String {
    let lines = [
        text_attribute(attributes, DESCRIPTION),
        text_attribute(attributes, KEYWORDS).map(|k| format!("keywords: {}", k)),
    ];
    join_present(lines)
}

fn join_present<const N: usize>(lines: [Option<String>; N]) -> String {
    lines.into_iter().flatten().collect::<Vec<_>>().join("\n")
}

/// Precomputed tooltips for a whole graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Annotations {
    pub nodes: IndexMap<NodeId, String>,
    pub edges: IndexMap<EdgeId, String>,
}

impl Annotations {
    pub fn build(graph: &KnowledgeGraph) -> Self {
        Self {
            nodes: graph
                .nodes()
                .map(|node| (node.id.clone(), node_tooltip(&node.properties)))
                .collect(),
            edges: graph
                .edges()
                .map(|edge| (edge.id, edge_tooltip(&edge.properties)))
                .collect(),
        }
    }

    pub fn node(&self, id: &NodeId) -> &str {
        self.nodes.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn edge(&self, id: EdgeId) -> &str {
        self.edges.get(&id).map(String::as_str).unwrap_or("")
    }
}
