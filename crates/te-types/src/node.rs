//! Structured argument nodes.
//!
//! A [`Node`] is the unit callers hand to the coercer. Only its flattened text
//! content is consumed during coercion; the node itself can also be passed through
//! unchanged to parameters that accept structured input.
//!
//! Nodes deserialize from JSON: a string is a text node, an object is an element.
//!
//! ```
//! use te_invoke_types::node::{Element, Node};
//!
//! let node = Node::Element(
//!     Element::new("point")
//!         .with_child(Node::text("3"))
//!         .with_child(Node::Element(Element::new("y").with_child(Node::text("4")))),
//! );
//! assert_eq!(node.text_content(), "34");
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A text-bearing structured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Character data.
    Text(String),
    /// A named element with attributes and ordered children.
    Element(Element),
}

/// An element node.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Element {
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    /// Create an element `<name>value</name>` holding a single text child.
    pub fn element_with_text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Element(Element::new(name).with_child(Node::text(value)))
    }

    /// Flattened character data of this node and all its descendants, in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Element name, or `None` for a text node.
    pub fn name(&self) -> Option<&str> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => Some(&element.name),
        }
    }
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(text) => write!(f, "{:?}", text),
            Node::Element(element) => {
                write!(f, "<{}", element.name)?;
                for (key, value) in &element.attributes {
                    write!(f, " {}={:?}", key, value)?;
                }
                if element.children.is_empty() {
                    return write!(f, "/>");
                }
                write!(f, ">")?;
                for child in &element.children {
                    match child {
                        Node::Text(text) => write!(f, "{}", text)?,
                        other => write!(f, "{}", other)?,
                    }
                }
                write!(f, "</{}>", element.name)
            }
        }
    }
}
