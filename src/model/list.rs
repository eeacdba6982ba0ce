//! List types.

use serde::{Deserialize, Serialize};

use super::node::null_as_empty;
use super::Node;
use crate::style::StyleSet;

/// Items of an ordered or unordered list.
///
/// Whether the list is numbered is decided by the wrapping [`Node`] variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// List items in order
    #[serde(default)]
    pub items: Vec<ListItem>,

    /// List style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list of plain text items.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            items: values
                .into_iter()
                .map(|v| ListItem::new(Node::text(v)))
                .collect(),
            style: StyleSet::new(),
        }
    }

    /// Set the list style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    /// Add an item and return self.
    pub fn item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single list item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item content
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Box<Node>,

    /// Item style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl ListItem {
    /// Create an unstyled item.
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: Box::new(content.into()),
            style: StyleSet::new(),
        }
    }

    /// Set the item style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }
}
