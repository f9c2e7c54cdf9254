//! Node styling
//!
//! Colors come from entity types, sizes from connectivity. Both are pure
//! functions of the graph, so the same document always renders the same way.

use crate::graph::{KnowledgeGraph, NodeId};
use indexmap::IndexMap;

/// Colors handed out to entity types in first-encounter order
pub const PALETTE: [&str; 7] = [
    "#F38181", "#FCE38A", "#A1EAFB", "#C8F4DE", "#FFB6B9", "#EAFFD0", "#FFCEF3",
];

/// Color for a node the style maps do not cover
pub const FALLBACK_COLOR: &str = "#00ffff";

/// Size of a node without edges
pub const BASE_SIZE: f64 = 10.0;

/// Entity type -> color, in the order types are first met
///
/// Types beyond the palette size wrap around.
pub fn type_palette(graph: &KnowledgeGraph) -> IndexMap<String, &'static str> {
    let mut palette = IndexMap::new();
    for node in graph.nodes() {
        let category = node.category();
        if !palette.contains_key(&category) {
            let color = PALETTE[palette.len() % PALETTE.len()];
            palette.insert(category, color);
        }
    }
    palette
}

/// Node id -> color of its entity type
pub fn assign_colors(graph: &KnowledgeGraph) -> IndexMap<NodeId, &'static str> {
    let palette = type_palette(graph);
    graph
        .nodes()
        .map(|node| {
            let color = palette
                .get(&node.category())
                .copied()
                .unwrap_or(FALLBACK_COLOR);
            (node.id.clone(), color)
        })
        .collect()
}

/// Node id -> `10 + degree`
pub fn assign_sizes(graph: &KnowledgeGraph) -> IndexMap<NodeId, f64> {
    graph
        .nodes()
        .map(|node| {
            let degree = graph.degree(node.id.as_str()).unwrap_or(0);
            (node.id.clone(), BASE_SIZE + degree as f64)
        })
        .collect()
}

/// Colors and sizes for every node of a graph
#[derive(Debug, Clone, PartialEq)]
pub struct StyleAssignment {
    pub colors: IndexMap<NodeId, &'static str>,
    pub sizes: IndexMap<NodeId, f64>,
    /// Legend: entity type -> color
    pub legend: IndexMap<String, &'static str>,
}

impl StyleAssignment {
    pub fn resolve(graph: &KnowledgeGraph) -> Self {
        Self {
            colors: assign_colors(graph),
            sizes: assign_sizes(graph),
            legend: type_palette(graph),
        }
    }

    pub fn color_of(&self, id: &NodeId) -> &'static str {
        self.colors.get(id).copied().unwrap_or(FALLBACK_COLOR)
    }

    pub fn size_of(&self, id: &NodeId) -> f64 {
        self.sizes.get(id).copied().unwrap_or(BASE_SIZE)
    }
}
