//! Node implementation for the knowledge graph
//!
//! A node is an extracted entity. Only a handful of its attributes are
//! interpreted; the rest are carried along untouched.

use super::property::{PropertyMap, PropertyValue};
use super::types::NodeId;
use serde::{Deserialize, Serialize};

/// Attribute holding the entity category
pub const ENTITY_TYPE: &str = "entity_type";
/// Attribute holding the free-text entity description
pub const DESCRIPTION: &str = "description";
/// Attribute holding the entity display name
pub const ENTITY_ID: &str = "entity_id";

/// Category used when a node carries no `entity_type`
pub const UNKNOWN_TYPE: &str = "unknown";

/// A node in the knowledge graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier for this node
    pub id: NodeId,

    /// Attributes associated with this node
    pub properties: PropertyMap,
}

impl Node {
    /// Create a node without attributes
    pub fn new(id: impl Into<NodeId>) -> Self {
        Node {
            id: id.into(),
            properties: PropertyMap::new(),
        }
    }

    /// Create a node with attributes
    pub fn new_with_properties(id: impl Into<NodeId>, properties: PropertyMap) -> Self {
        Node {
            id: id.into(),
            properties,
        }
    }

    /// Set a property value
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.properties.insert(key.into(), value.into())
    }

    /// Get a property value
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// The declared entity type, if any
    pub fn entity_type(&self) -> Option<String> {
        text_attribute(&self.properties, ENTITY_TYPE)
    }

    /// The entity type, falling back to [`UNKNOWN_TYPE`]
    pub fn category(&self) -> String {
        self.entity_type().unwrap_or_else(|| UNKNOWN_TYPE.to_string())
    }

    /// The entity description, if any
    pub fn description(&self) -> Option<String> {
        text_attribute(&self.properties, DESCRIPTION)
    }

    /// The entity display name, if any
    pub fn entity_id(&self) -> Option<String> {
        text_attribute(&self.properties, ENTITY_ID)
    }
}

/// Read an attribute as text. Null values count as absent.
pub(crate) fn text_attribute(properties: &PropertyMap, key: &str) -> Option<String> {
    properties
        .get(key)
        .filter(|value| !value.is_null())
        .map(|value| value.to_string())
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
