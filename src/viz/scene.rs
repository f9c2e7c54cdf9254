//! Render scene assembly
//!
//! A [`RenderScene`] is everything the display layer needs: styled nodes,
//! weighted edges, tooltips and the physics configuration. It is a plain value
//! built fresh for each request.

use super::annotate::Annotations;
use super::layout::SimulationConfig;
use super::style::StyleAssignment;
use crate::error::{VizError, VizResult};
use crate::graph::{KnowledgeGraph, NodeId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Divisor of the weight-to-width mapping
pub const WIDTH_SCALE: f64 = 7.0;

/// Stroke width of an edge with the given weight
pub fn edge_width(weight: f64) -> f64 {
    1.0 + weight / WIDTH_SCALE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Dot,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub id: NodeId,
    pub label: String,
    /// Tooltip text
    pub title: String,
    pub size: f64,
    pub color: String,
    pub shape: NodeShape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Tooltip text
    pub title: String,
    pub width: f64,
    pub weight: f64,
}

/// Entity type shown in the legend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub entity_type: String,
    pub color: String,
}

/// Canvas appearance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Canvas height in pixels
    pub height: u32,
    /// CSS width of the canvas
    pub width: String,
    pub background: String,
    pub font_color: String,
    /// Always false: relations are drawn without arrows
    pub directed: bool,
}

impl DisplayOptions {
    pub fn with_height(height: u32) -> Self {
        Self {
            height,
            ..Self::default()
        }
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            height: 800,
            width: "100%".to_string(),
            background: "#3E4149".to_string(),
            font_color: "white".to_string(),
            directed: false,
        }
    }
}

/// Fully styled, annotated and layout-configured graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderScene {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
    pub legend: Vec<LegendEntry>,
    pub physics: SimulationConfig,
    pub display: DisplayOptions,
}

/// Compose a scene from a loaded graph and its derived views
///
/// Fails with [`VizError::Render`] when an edge weight is not a finite
/// number; no partial scene is returned.
pub fn assemble_scene(
    graph: &KnowledgeGraph,
    styles: &StyleAssignment,
    simulation: SimulationConfig,
    annotations: &Annotations,
    display: DisplayOptions,
) -> VizResult<RenderScene> {
    let nodes = graph
        .nodes()
        .map(|node| SceneNode {
            id: node.id.clone(),
            label: node.id.to_string(),
            title: annotations.node(&node.id).to_string(),
            size: styles.size_of(&node.id),
            color: styles.color_of(&node.id).to_string(),
            shape: NodeShape::Dot,
        })
        .collect();

    let mut edges = Vec::with_capacity(graph.edge_count());
    for edge in graph.edges() {
        let weight = edge
            .weight()
            .map_err(|err| VizError::Render(err.to_string()))?;
        if !weight.is_finite() {
            return Err(VizError::Render(format!(
                "Edge {} -> {} has a non-finite weight",
                edge.source, edge.target
            )));
        }

        edges.push(SceneEdge {
            from: edge.source.clone(),
            to: edge.target.clone(),
            title: annotations.edge(edge.id).to_string(),
            width: edge_width(weight),
            weight,
        });
    }

    let legend = styles
        .legend
        .iter()
        .map(|(entity_type, color)| LegendEntry {
            entity_type: entity_type.clone(),
            color: color.to_string(),
        })
        .collect();

    debug!(
        "Assembled scene with {} nodes and {} edges",
        graph.node_count(),
        edges.len()
    );

    Ok(RenderScene {
        nodes,
        edges,
        legend,
        physics: simulation,
        display,
    })
}
