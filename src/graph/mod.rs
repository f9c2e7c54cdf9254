//! Knowledge graph data model
//!
//! This module implements the attributed graph the visualizer works on:
//! - Nodes keyed by entity name, with typed attributes
//! - Relations between two nodes, possibly parallel, rendered undirected
//! - Insertion-ordered storage so every derived view is deterministic

pub mod edge;
pub mod node;
pub mod property;
pub mod store;
pub mod types;

// Re-export main types
pub use edge::{Edge, DEFAULT_WEIGHT, KEYWORDS, WEIGHT};
pub use node::{Node, DESCRIPTION, ENTITY_ID, ENTITY_TYPE, UNKNOWN_TYPE};
pub use property::{PropertyMap, PropertyValue};
pub use store::{GraphError, GraphResult, KnowledgeGraph};
pub use types::{EdgeId, NodeId};
