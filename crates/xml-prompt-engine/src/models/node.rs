use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Tag given to nodes created by hand before the user names them
pub const DEFAULT_TAG: &str = "new_tag";

/// Opaque identifier of a [`ContentNode`], unique across every forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled text node: the universal unit of the content tree.
///
/// Field names serialize in camelCase (`tagName`, `codeBlock`, `forceCDATA`)
/// to match the persisted JSON shape of a forest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNode {
    pub id: NodeId,
    pub tag_name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub children: Vec<ContentNode>,
    /// Presentation only, never serialized to XML
    #[serde(default)]
    pub collapsed: bool,
    /// Content is verbatim (fenced code body)
    #[serde(default)]
    pub code_block: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_language: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
    #[serde(default, rename = "forceCDATA")]
    pub force_cdata: bool,
}

impl ContentNode {
    /// Create an empty node with a fresh id
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(),
            tag_name: tag_name.into(),
            content: String::new(),
            children: Vec::new(),
            collapsed: false,
            code_block: false,
            code_language: None,
            attributes: BTreeMap::new(),
            force_cdata: false,
        }
    }

    pub fn with_content(tag_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::new(tag_name)
        }
    }

    pub fn with_children(mut self, children: Vec<ContentNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Mark the content as a verbatim code body
    pub fn with_code(mut self, language: Option<String>) -> Self {
        self.code_block = true;
        self.code_language = language;
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Deep copy of this subtree where every node receives a new id.
    ///
    /// Used whenever an existing subtree (template, parse result) is placed
    /// into a forest next to the original.
    pub fn fresh_copy(&self) -> Self {
        Self {
            id: NodeId::new(),
            children: self.children.iter().map(ContentNode::fresh_copy).collect(),
            ..self.clone()
        }
    }
}

impl Default for ContentNode {
    fn default() -> Self {
        Self::new(DEFAULT_TAG)
    }
}
