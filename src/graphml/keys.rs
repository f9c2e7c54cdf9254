//! GraphML attribute declarations
//!
//! A `<key>` element binds a short id (`d0`, `d1`, ...) to an attribute name
//! and a value type. `<data>` elements refer to keys by id.

use crate::graph::PropertyValue;

/// Which elements a key applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDomain {
    Node,
    Edge,
    Graph,
    All,
}

impl KeyDomain {
    pub fn parse(value: Option<&str>) -> Result<Self, String> {
        match value.unwrap_or("all") {
            "node" => Ok(KeyDomain::Node),
            "edge" => Ok(KeyDomain::Edge),
            "graph" => Ok(KeyDomain::Graph),
            "all" => Ok(KeyDomain::All),
            other => Err(format!("unsupported key domain '{}'", other)),
        }
    }
}

/// Declared value type of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Boolean,
    Int,
    Long,
    Float,
    Double,
    String,
}

impl AttrType {
    /// Parse an `attr.type` value; a missing type means string
    pub fn parse(value: Option<&str>) -> Result<Self, String> {
        match value.unwrap_or("string") {
            "boolean" => Ok(AttrType::Boolean),
            "int" => Ok(AttrType::Int),
            "long" => Ok(AttrType::Long),
            "float" => Ok(AttrType::Float),
            "double" => Ok(AttrType::Double),
            "string" => Ok(AttrType::String),
            other => Err(format!("unsupported attribute type '{}'", other)),
        }
    }

    /// Convert the text content of a `<data>` element
    ///
    /// Strings are kept verbatim. Typed values are trimmed first; an empty
    /// typed value is read as null.
    pub fn convert(&self, raw: &str) -> Result<PropertyValue, String> {
        let text = raw.trim();
        if *self != AttrType::String && text.is_empty() {
            return Ok(PropertyValue::Null);
        }

        match self {
            AttrType::String => Ok(PropertyValue::String(raw.to_string())),
            AttrType::Boolean => match text.to_ascii_lowercase().as_str() {
                "true" | "1" => Ok(PropertyValue::Boolean(true)),
                "false" | "0" => Ok(PropertyValue::Boolean(false)),
                _ => Err(format!("'{}' is not a boolean", text)),
            },
            AttrType::Int | AttrType::Long => text
                .parse::<i64>()
                .map(PropertyValue::Integer)
                .map_err(|_| format!("'{}' is not an integer", text)),
            AttrType::Float | AttrType::Double => text
                .parse::<f64>()
                .map(PropertyValue::Float)
                .map_err(|_| format!("'{}' is not a number", text)),
        }
    }
}

/// A `<key>` declaration
#[derive(Debug, Clone, PartialEq)]
pub struct KeySpec {
    /// Id referenced by `<data key="...">`
    pub id: String,
    /// Attribute name the value is stored under
    pub name: String,
    pub domain: KeyDomain,
    pub attr_type: AttrType,
    /// Declared default; recorded but never applied to elements
    pub default: Option<PropertyValue>,
}
