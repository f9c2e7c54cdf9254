//! Summary statistics for the side panel
//!
//! Counts per entity type plus node and relation tables. Rows follow the
//! graph's iteration order; nothing is sorted here.

use crate::graph::{KnowledgeGraph, WEIGHT};
use serde::Serialize;

/// Longest description shown in a table cell before truncation
pub const DESCRIPTION_LIMIT: usize = 50;
/// Appended to truncated descriptions
pub const ELLIPSIS: &str = "...";
/// Cell content for an absent value
pub const EMPTY_CELL: &str = "-";

/// Shorten a description to [`DESCRIPTION_LIMIT`] characters
///
/// Only strings longer than the limit are cut; the cut never splits a
/// character.
pub fn truncate_description(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_LIMIT) {
        Some((cut, _)) => format!("{}{}", &description[..cut], ELLIPSIS),
        None => description.to_string(),
    }
}

/// Number of nodes of one entity type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    pub entity_type: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeRow {
    pub id: String,
    pub entity_type: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeRow {
    pub source: String,
    pub target: String,
    pub weight: String,
    pub description: String,
}

/// Aggregate views over a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Entity type histogram in first-encounter order
    pub type_distribution: Vec<TypeCount>,
    pub nodes: Vec<NodeRow>,
    pub edges: Vec<EdgeRow>,
}

impl GraphStatistics {
    pub fn compute(graph: &KnowledgeGraph) -> Self {
        let mut type_distribution: Vec<TypeCount> = Vec::new();
        let mut nodes = Vec::with_capacity(graph.node_count());

        for node in graph.nodes() {
            let category = node.category();
            match type_distribution.iter_mut().find(|t| t.entity_type == category) {
                Some(bucket) => bucket.count += 1,
                None => type_distribution.push(TypeCount {
                    entity_type: category,
                    count: 1,
                }),
            }

            nodes.push(NodeRow {
                id: node.id.to_string(),
                entity_type: node.entity_type().unwrap_or_else(|| EMPTY_CELL.to_string()),
                description: description_cell(node.description()),
            });
        }

        let edges = graph
            .edges()
            .map(|edge| EdgeRow {
                source: edge.source.to_string(),
                target: edge.target.to_string(),
                weight: edge
                    .get_property(WEIGHT)
                    .filter(|w| !w.is_null())
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| EMPTY_CELL.to_string()),
                description: description_cell(edge.description()),
            })
            .collect();

        Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            type_distribution,
            nodes,
            edges,
        }
    }

    /// Count for one entity type, zero if absent
    pub fn count_of(&self, entity_type: &str) -> usize {
        self.type_distribution
            .iter()
            .find(|t| t.entity_type == entity_type)
            .map(|t| t.count)
            .unwrap_or(0)
    }
}

fn description_cell(description: Option<String>) -> String {
    description
        .map(|text| truncate_description(&text))
        .unwrap_or_else(|| EMPTY_CELL.to_string())
}
