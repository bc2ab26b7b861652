//! # HTML Node Model
//!
//! An owned tree of renderable nodes. A [`HtmlNode`] is either a leaf carrying
//! literal content or a parent whose content is entirely its ordered children.
//!
//! Nodes are validated on construction and immutable afterwards; the tree only
//! exposes read-only accessors.
//!
//! ## Serialization
//!
//! - Untagged leaf: the value verbatim
//! - Tagged leaf: `<tag attrs>value</tag>`
//! - Void element (`img`): `<tag attrs>` with no closing tag
//! - Parent: `<tag attrs>` + each child in order + `</tag>`
//!
//! Attribute values are written as-is inside double quotes. No escaping is
//! performed on values or text.

pub mod attributes;

use std::fmt;

use thiserror::Error;

pub use attributes::Attributes;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NodeError {
    #[error("leaf node requires a non-empty value")]
    EmptyValue,
    #[error("node requires a tag")]
    MissingTag,
    #[error("parent node <{0}> requires at least one child")]
    EmptyChildren(String),
}

/// A node in the HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl HtmlNode {
    /// Serializes the node and all of its descendants.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            HtmlNode::Leaf(leaf) => leaf.write_html(out),
            HtmlNode::Parent(parent) => parent.write_html(out),
        }
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf(leaf) => leaf.tag(),
            HtmlNode::Parent(parent) => Some(parent.tag()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf(leaf) => leaf.attributes(),
            HtmlNode::Parent(parent) => parent.attributes(),
        }
    }

    /// Children of a parent node; leaves have none.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            HtmlNode::Leaf(_) => &[],
            HtmlNode::Parent(parent) => parent.children(),
        }
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

impl From<LeafNode> for HtmlNode {
    fn from(leaf: LeafNode) -> Self {
        HtmlNode::Leaf(leaf)
    }
}

impl From<ParentNode> for HtmlNode {
    fn from(parent: ParentNode) -> Self {
        HtmlNode::Parent(parent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum LeafContent {
    Text(String),
    /// Self-contained element such as `<img>`, rendered without a closing tag.
    Void,
}

/// A node without children: a raw text run or a self-contained element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafNode {
    tag: Option<String>,
    content: LeafContent,
    attributes: Attributes,
}

impl LeafNode {
    /// Builds a leaf from a value, optionally wrapped in `tag`.
    ///
    /// Fails with [`NodeError::EmptyValue`] when `value` is empty.
    pub fn new(
        tag: Option<&str>,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        let value = value.into();
        if value.is_empty() {
            return Err(NodeError::EmptyValue);
        }
        Ok(Self {
            tag: tag.map(str::to_string),
            content: LeafContent::Text(value),
            attributes,
        })
    }

    /// An untagged text run.
    pub fn text(value: impl Into<String>) -> Result<Self, NodeError> {
        Self::new(None, value, Attributes::new())
    }

    /// A void element that carries only attributes, e.g. `<img src="..">`.
    pub fn void(tag: &str, attributes: Attributes) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        Ok(Self {
            tag: Some(tag.to_string()),
            content: LeafContent::Void,
            attributes,
        })
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The literal content. Void elements have none.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            LeafContent::Text(value) => Some(value),
            LeafContent::Void => None,
        }
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        match (&self.tag, &self.content) {
            (None, LeafContent::Text(value)) => out.push_str(value),
            (Some(tag), LeafContent::Text(value)) => {
                write_open_tag(out, tag, &self.attributes);
                out.push_str(value);
                write_close_tag(out, tag);
            }
            (Some(tag), LeafContent::Void) => write_open_tag(out, tag, &self.attributes),
            // `void` always sets a tag
            (None, LeafContent::Void) => {}
        }
    }
}

/// A node whose content is its non-empty, ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentNode {
    tag: String,
    children: Vec<HtmlNode>,
    attributes: Attributes,
}

impl ParentNode {
    /// Fails with [`NodeError::MissingTag`] for an empty tag and
    /// [`NodeError::EmptyChildren`] when there is nothing to wrap.
    pub fn new(
        tag: &str,
        children: Vec<HtmlNode>,
        attributes: Attributes,
    ) -> Result<Self, NodeError> {
        if tag.is_empty() {
            return Err(NodeError::MissingTag);
        }
        if children.is_empty() {
            return Err(NodeError::EmptyChildren(tag.to_string()));
        }
        Ok(Self {
            tag: tag.to_string(),
            children,
            attributes,
        })
    }

    /// Shorthand for a parent without attributes.
    pub fn wrap(tag: &str, children: Vec<HtmlNode>) -> Result<Self, NodeError> {
        Self::new(tag, children, Attributes::new())
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn children(&self) -> &[HtmlNode] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    fn write_html(&self, out: &mut String) {
        write_open_tag(out, &self.tag, &self.attributes);
        for child in &self.children {
            child.write_html(out);
        }
        write_close_tag(out, &self.tag);
    }
}

fn write_open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    if !attributes.is_empty() {
        out.push(' ');
        out.push_str(&attributes.to_html());
    }
    out.push('>');
}

fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
