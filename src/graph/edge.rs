//! Edge implementation for the knowledge graph
//!
//! The source document stores relations as directed edges, but direction
//! carries no meaning for display: degree counts both endpoints alike.

use super::node::text_attribute;
use super::property::{PropertyMap, PropertyValue};
use super::store::{GraphError, GraphResult};
use super::types::{EdgeId, NodeId};
use serde::{Deserialize, Serialize};

/// Attribute holding the relation strength
pub const WEIGHT: &str = "weight";
/// Attribute holding the relation keywords
pub const KEYWORDS: &str = "keywords";
pub use super::node::DESCRIPTION;

/// Weight assumed when an edge carries none
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A relation between two entities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// Position of this edge in the graph
    pub id: EdgeId,

    /// Source node as written on disk
    pub source: NodeId,

    /// Target node as written on disk
    pub target: NodeId,

    /// Attributes associated with this edge
    pub properties: PropertyMap,
}

impl Edge {
    /// Create an edge without attributes
    pub fn new(id: EdgeId, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Edge {
            id,
            source: source.into(),
            target: target.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create an edge with attributes
    pub fn new_with_properties(
        id: EdgeId,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> Self {
        Edge {
            id,
            source: source.into(),
            target: target.into(),
            properties,
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// Numeric weight of the relation
    ///
    /// Absent or null weights default to [`DEFAULT_WEIGHT`]. A value that
    /// cannot be read as a number is an error rather than a silent default.
    pub fn weight(&self) -> GraphResult<f64> {
        match self.properties.get(WEIGHT) {
            None | Some(PropertyValue::Null) => Ok(DEFAULT_WEIGHT),
            Some(value) => value.to_f64().ok_or_else(|| GraphError::InvalidWeight {
                edge: self.id,
                value: value.to_string(),
            }),
        }
    }

    /// The relation description, if any
    pub fn description(&self) -> Option<String> {
        text_attribute(&self.properties, DESCRIPTION)
    }

    /// The relation keywords, if any
    pub fn keywords(&self) -> Option<String> {
        text_attribute(&self.properties, KEYWORDS)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_edge() {
        let edge = Edge::new(EdgeId::new(0), "A", "B");

        assert_eq!(edge.id, EdgeId::new(0));
        assert_eq!(edge.source, NodeId::new("A"));
        assert_eq!(edge.target, NodeId::new("B"));
        assert!(edge.properties.is_empty());
    }

    #[test]
    fn test_weight_defaults_when_absent() {
        let edge = Edge::new(EdgeId::new(0), "A", "B");
        assert_eq!(edge.weight().unwrap(), DEFAULT_WEIGHT);

        let mut null_weight = Edge::new(EdgeId::new(1), "A", "B");
        null_weight.set_property(WEIGHT, PropertyValue::Null);
        assert_eq!(null_weight.weight().unwrap(), DEFAULT_WEIGHT);
    }

    #[test]
    fn test_weight_from_numbers_and_strings() {
        let mut edge = Edge::new(EdgeId::new(0), "A", "B");
        edge.set_property(WEIGHT, 3.5);
        assert_eq!(edge.weight().unwrap(), 3.5);

        edge.set_property(WEIGHT, 2i64);
        assert_eq!(edge.weight().unwrap(), 2.0);

        edge.set_property(WEIGHT, "9.0");
        assert_eq!(edge.weight().unwrap(), 9.0);
    }

    #[test]
    fn test_malformed_weight_is_error() {
        let mut edge = Edge::new(EdgeId::new(4), "A", "B");
        edge.set_property(WEIGHT, "strong");

        let err = edge.weight().unwrap_err();
        assert_eq!(
            err,
            GraphError::InvalidWeight {
                edge: EdgeId::new(4),
                value: "strong".to_string(),
            }
        );
    }

    #[test]
    fn test_text_attributes() {
        let mut edge = Edge::new(EdgeId::new(0), "A", "B");
        assert_eq!(edge.description(), None);
        assert_eq!(edge.keywords(), None);

        edge.set_property(DESCRIPTION, "met in Paris");
        edge.set_property(KEYWORDS, "travel,meeting");
        assert_eq!(edge.description().as_deref(), Some("met in Paris"));
        assert_eq!(edge.keywords().as_deref(), Some("travel,meeting"));
    }
}
