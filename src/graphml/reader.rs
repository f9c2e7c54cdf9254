//! Streaming GraphML reader built on quick-xml events

use super::keys::{AttrType, KeyDomain, KeySpec};
use crate::graph::{KnowledgeGraph, Node, PropertyMap};
use indexmap::IndexMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

/// A GraphML document that could not be read
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message} (at byte {position})")]
pub struct ParseError {
    pub message: String,
    pub position: u64,
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Element currently collecting `<data>` children
enum Owner {
    Graph,
    Node(Node),
    Edge {
        source: String,
        target: String,
        properties: PropertyMap,
    },
}

impl Owner {
    fn domain(&self) -> KeyDomain {
        match self {
            Owner::Graph => KeyDomain::Graph,
            Owner::Node(_) => KeyDomain::Node,
            Owner::Edge { .. } => KeyDomain::Edge,
        }
    }
}

/// Text being collected for a `<data>` or `<default>` element
struct PendingText {
    key: String,
    text: String,
}

#[derive(Default)]
struct GraphMlReader {
    keys: HashMap<String, KeySpec>,
    graph: KnowledgeGraph,
    edges: Vec<(String, String, PropertyMap)>,

    seen_root: bool,
    graph_open: bool,
    graph_done: bool,

    owners: Vec<Owner>,
    open_key: Option<KeySpec>,
    data: Option<PendingText>,
    default: Option<PendingText>,
}

/// Parse a GraphML document held in memory
pub fn parse_str(input: &str) -> ParseResult<KnowledgeGraph> {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    let mut reader = Reader::from_str(input);
    let mut state = GraphMlReader::default();

    loop {
        let position = reader.buffer_position() as u64;
        let fail = |message: String| ParseError { message, position };

        match reader.read_event() {
            Ok(Event::Start(e)) => state.open(&e).map_err(fail)?,
            Ok(Event::Empty(e)) => {
                state.open(&e).map_err(fail)?;
                state.close(e.local_name().as_ref()).map_err(fail)?;
            }
            Ok(Event::End(e)) => state.close(e.local_name().as_ref()).map_err(fail)?,
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|err| fail(err.to_string()))?;
                state.push_text(&text);
            }
            Ok(Event::CData(c)) => {
                let text = std::str::from_utf8(&c)
                    .map_err(|err| fail(format!("invalid UTF-8 in CDATA: {}", err)))?;
                state.push_text(text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(err) => return Err(fail(err.to_string())),
        }

        if state.graph_done {
            break;
        }
    }

    let position = reader.buffer_position() as u64;
    state.finish().map_err(|message| ParseError { message, position })
}

fn attributes(e: &BytesStart) -> Result<IndexMap<String, String>, String> {
    let mut out = IndexMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| err.to_string())?
            .into_owned();
        out.insert(key, value);
    }
    Ok(out)
}

fn required(attrs: &IndexMap<String, String>, name: &str, element: &str) -> Result<String, String> {
    attrs
        .get(name)
        .cloned()
        .ok_or_else(|| format!("<{}> element without '{}' attribute", element, name))
}

impl GraphMlReader {
    fn open(&mut self, e: &BytesStart) -> Result<(), String> {
        let name = e.local_name();
        let name = name.as_ref();

        if !self.seen_root {
            if name != b"graphml" {
                return Err(format!(
                    "root element is <{}>, expected <graphml>",
                    String::from_utf8_lossy(name)
                ));
            }
            self.seen_root = true;
            return Ok(());
        }

        match name {
            b"key" => {
                let attrs = attributes(e)?;
                let id = required(&attrs, "id", "key")?;
                let spec = KeySpec {
                    name: attrs.get("attr.name").cloned().unwrap_or_else(|| id.clone()),
                    id,
                    domain: KeyDomain::parse(attrs.get("for").map(String::as_str))?,
                    attr_type: AttrType::parse(attrs.get("attr.type").map(String::as_str))?,
                    default: None,
                };
                self.open_key = Some(spec);
            }
            b"default" => {
                if let Some(key) = &self.open_key {
                    self.default = Some(PendingText {
                        key: key.id.clone(),
                        text: String::new(),
                    });
                }
            }
            b"graph" => {
                if self.graph_open {
                    return Err("nested graphs are not supported".to_string());
                }
                let attrs = attributes(e)?;
                let directed = match attrs.get("edgedefault").map(String::as_str) {
                    Some("directed") => true,
                    Some("undirected") | None => false,
                    Some(other) => return Err(format!("invalid edgedefault '{}'", other)),
                };
                self.graph.set_directed(directed);
                self.graph_open = true;
                self.owners.push(Owner::Graph);
            }
            b"node" if self.graph_open => {
                let attrs = attributes(e)?;
                let id = required(&attrs, "id", "node")?;
                self.owners.push(Owner::Node(Node::new(id)));
            }
            b"edge" if self.graph_open => {
                let attrs = attributes(e)?;
                self.owners.push(Owner::Edge {
                    source: required(&attrs, "source", "edge")?,
                    target: required(&attrs, "target", "edge")?,
                    properties: PropertyMap::new(),
                });
            }
            b"hyperedge" => return Err("hyperedges are not supported".to_string()),
            b"data" if self.graph_open => {
                let attrs = attributes(e)?;
                let key = required(&attrs, "key", "data")?;
                if !self.keys.contains_key(&key) {
                    return Err(format!("<data> references undeclared key '{}'", key));
                }
                self.data = Some(PendingText {
                    key,
                    text: String::new(),
                });
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) -> Result<(), String> {
        match name {
            b"key" => {
                if let Some(spec) = self.open_key.take() {
                    self.keys.insert(spec.id.clone(), spec);
                }
            }
            b"default" => {
                if let (Some(pending), Some(spec)) = (self.default.take(), self.open_key.as_mut()) {
                    spec.default = Some(spec.attr_type.convert(&pending.text)?);
                }
            }
            b"data" => {
                if let Some(pending) = self.data.take() {
                    self.store_data(pending)?;
                }
            }
            b"node" if self.graph_open => {
                if let Some(Owner::Node(node)) = self.owners.pop() {
                    self.graph.add_node(node);
                }
            }
            b"edge" if self.graph_open => {
                if let Some(Owner::Edge {
                    source,
                    target,
                    properties,
                }) = self.owners.pop()
                {
                    self.edges.push((source, target, properties));
                }
            }
            b"graph" if self.graph_open => {
                self.owners.pop();
                self.graph_open = false;
                self.graph_done = true;
            }
            _ => {}
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if let Some(pending) = self.data.as_mut().or(self.default.as_mut()) {
            pending.text.push_str(text);
        }
    }

    fn store_data(&mut self, pending: PendingText) -> Result<(), String> {
        let spec = self
            .keys
            .get(&pending.key)
            .ok_or_else(|| format!("<data> references undeclared key '{}'", pending.key))?;
        let value = spec
            .attr_type
            .convert(&pending.text)
            .map_err(|reason| format!("attribute '{}': {}", spec.name, reason))?;

        let Some(owner) = self.owners.last_mut() else {
            return Ok(());
        };
        if spec.domain != KeyDomain::All && spec.domain != owner.domain() {
            warn!(key = %spec.id, attribute = %spec.name, "GraphML key used outside its declared domain");
        }

        let name = spec.name.clone();
        match owner {
            Owner::Graph => self.graph.set_attribute(name, value),
            Owner::Node(node) => {
                node.set_property(name, value);
            }
            Owner::Edge { properties, .. } => {
                properties.insert(name, value);
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<KnowledgeGraph, String> {
        if !self.seen_root {
            return Err("document has no <graphml> root element".to_string());
        }
        if !self.graph_done {
            return Err(if self.graph_open {
                "unexpected end of document inside <graph>".to_string()
            } else {
                "no <graph> element found".to_string()
            });
        }

        for (source, target, properties) in self.edges {
            for endpoint in [&source, &target] {
                if !self.graph.has_node(endpoint) {
                    debug!(node = %endpoint, "Edge endpoint not declared as a node, adding it");
                    self.graph.add_node(Node::new(endpoint.as_str()));
                }
            }
            self.graph
                .add_edge(source, target, properties)
                .map_err(|err| err.to_string())?;
        }

        Ok(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PropertyValue;

    const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<graphml xmlns="http://graphml.graphdrawing.org/xmlns">"#;

    fn doc(body: &str) -> String {
        format!("{}\n{}\n</graphml>", HEADER, body)
    }

    #[test]
    fn test_minimal_document() {
        let graph = parse_str(&doc(r#"<graph edgedefault="undirected"><node id="A"/></graph>"#)).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_typed_data_and_escapes() {
        let input = doc(
            r#"<key id="d0" for="node" attr.name="description" attr.type="string"/>
<key id="d1" for="edge" attr.name="weight" attr.type="double"/>
<graph edgedefault="directed">
  <node id="A"><data key="d0">Fish &amp; chips</data></node>
  <node id="B"><data key="d0"><![CDATA[<raw>]]></data></node>
  <edge source="A" target="B"><data key="d1">2.0</data></edge>
</graph>"#,
        );
        let graph = parse_str(&input).unwrap();

        assert!(graph.is_directed());
        assert_eq!(graph.get_node("A").unwrap().description().as_deref(), Some("Fish & chips"));
        assert_eq!(graph.get_node("B").unwrap().description().as_deref(), Some("<raw>"));
        let edge = graph.edges().next().unwrap();
        assert_eq!(edge.get_property("weight"), Some(&PropertyValue::Float(2.0)));
    }

    #[test]
    fn test_key_default_is_recorded_not_applied() {
        let input = doc(
            r#"<key id="t" for="node" attr.name="entity_type" attr.type="string"><default>thing</default></key>
<graph><node id="A"/></graph>"#,
        );
        let graph = parse_str(&input).unwrap();
        assert_eq!(graph.get_node("A").unwrap().entity_type(), None);
    }

    #[test]
    fn test_graph_level_data() {
        let input = doc(
            r#"<key id="g" for="graph" attr.name="name"/>
<graph><data key="g">corpus</data><node id="A"/></graph>"#,
        );
        let graph = parse_str(&input).unwrap();
        assert_eq!(graph.attributes().get("name").unwrap().as_string(), Some("corpus"));
    }

    #[test]
    fn test_edge_before_nodes() {
        let input = doc(r#"<graph><edge source="A" target="B"/><node id="B"/><node id="A"/></graph>"#);
        let graph = parse_str(&input).unwrap();
        let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_only_first_graph_is_read() {
        let input = doc(r#"<graph><node id="A"/></graph><graph><node id="B"/></graph>"#);
        let graph = parse_str(&input).unwrap();
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_undeclared_endpoint_is_created() {
        let input = doc(
            r#"<key id="s" for="node" attr.name="source_id" attr.type="string"/>
<graph><node id="A"><data key="s">c1</data></node><edge source="A" target="Z"/></graph>"#,
        );
        let graph = parse_str(&input).unwrap();

        let ids: Vec<&str> = graph.nodes().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["A", "Z"]);
        assert!(graph.get_node("Z").unwrap().properties.is_empty());
        assert_eq!(graph.degree("Z").unwrap(), 1);
        assert_eq!(
            graph.get_node("A").unwrap().get_property("source_id"),
            Some(&PropertyValue::String("c1".to_string()))
        );
    }

    #[test]
    fn test_unsupported_structures_are_rejected() {
        let cases = [
            (
                r#"<graph><node id="A"><data key="zz">x</data></node></graph>"#,
                "undeclared key 'zz'",
            ),
            (
                r#"<graph><node id="A"/><hyperedge><endpoint node="A"/></hyperedge></graph>"#,
                "hyperedges are not supported",
            ),
            (
                r#"<graph><node id="A"><graph><node id="B"/></graph></node></graph>"#,
                "nested graphs are not supported",
            ),
            (r#"<graph><node/></graph>"#, "<node> element without 'id'"),
            (
                r#"<graph><node id="A"/><edge source="A"/></graph>"#,
                "<edge> element without 'target'",
            ),
            (
                r#"<graph><node id="A"/><edge target="A"/></graph>"#,
                "<edge> element without 'source'",
            ),
            (r#"<graph edgedefault="sideways"/>"#, "invalid edgedefault 'sideways'"),
        ];

        for (body, expected) in cases {
            let err = parse_str(&doc(body)).unwrap_err();
            assert!(
                err.message.contains(expected),
                "expected '{}', got '{}'",
                expected,
                err.message
            );
        }
    }

    #[test]
    fn test_error_carries_position() {
        let err = parse_str("<graph></graph>").unwrap_err();
        assert!(err.message.contains("expected <graphml>"));
        assert_eq!(err.to_string(), format!("{} (at byte {})", err.message, err.position));
    }
}
