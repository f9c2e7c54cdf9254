//! In-memory knowledge graph
//!
//! Nodes and edges are kept in insertion order, which is the document order
//! of the source file. Every downstream view (colors, tables, scene) relies
//! on that order being stable.

use super::edge::Edge;
use super::node::Node;
use super::property::{PropertyMap, PropertyValue};
use super::types::{EdgeId, NodeId};
use indexmap::IndexMap;
use thiserror::Error;

/// Errors that can occur during graph operations
#[derive(Error, Debug, PartialEq)]
pub enum GraphError {
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    #[error("Invalid edge: source node {0} does not exist")]
    InvalidEdgeSource(NodeId),

    #[error("Invalid edge: target node {0} does not exist")]
    InvalidEdgeTarget(NodeId),

    #[error("Edge {edge} has a non-numeric weight: {value}")]
    InvalidWeight { edge: EdgeId, value: String },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Attributed knowledge graph
///
/// - nodes: NodeId -> Node, insertion ordered
/// - edges: dense list, EdgeId is the position
/// - incident: NodeId -> edge endpoints at the node (a self loop is listed twice)
#[derive(Debug, Clone, Default)]
pub struct KnowledgeGraph {
    /// Node storage
    nodes: IndexMap<NodeId, Node>,

    /// Edge storage
    edges: Vec<Edge>,

    /// Incident edges for each node
    incident: IndexMap<NodeId, Vec<EdgeId>>,

    /// Whether the source document declared its edges as directed
    directed: bool,

    /// Graph-level attributes
    attributes: PropertyMap,
}

impl KnowledgeGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record whether the source document was directed
    ///
    /// Display ignores direction either way.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    /// Whether the source document was directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Set a graph-level attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Graph-level attributes
    pub fn attributes(&self) -> &PropertyMap {
        &self.attributes
    }

    /// Add a node, or merge its attributes into an existing node with the same id
    pub fn add_node(&mut self, node: Node) -> &mut Node {
        let id = node.id.clone();
        self.incident.entry(id.clone()).or_default();
        match self.nodes.entry(id) {
            indexmap::map::Entry::Occupied(entry) => {
                let existing = entry.into_mut();
                existing.properties.extend(node.properties);
                existing
            }
            indexmap::map::Entry::Vacant(entry) => entry.insert(node),
        }
    }

    /// Add an edge between two existing nodes
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> GraphResult<EdgeId> {
        let source = source.into();
        let target = target.into();

        if !self.nodes.contains_key(&source) {
            return Err(GraphError::InvalidEdgeSource(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::InvalidEdgeTarget(target));
        }

        let id = EdgeId::new(self.edges.len());
        self.incident.entry(source.clone()).or_default().push(id);
        self.incident.entry(target.clone()).or_default().push(id);
        self.edges
            .push(Edge::new_with_properties(id, source, target, properties));

        Ok(id)
    }

    /// Get a node by id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Check if a node exists
    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of edge endpoints at the node
    ///
    /// Parallel edges each count, and a self loop counts twice.
    pub fn degree(&self, id: &str) -> GraphResult<usize> {
        self.incident
            .get(id)
            .map(|edges| edges.len())
            .ok_or_else(|| GraphError::NodeNotFound(NodeId::new(id)))
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
