//! Leaf and wrapper elements: links, images and generic tags.

use serde::{Deserialize, Serialize};

use super::node::null_as_empty;
use super::Node;
use crate::style::StyleSet;

/// A hyperlink.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL, emitted as-is
    #[serde(default)]
    pub action_url: String,

    /// Link label, emitted as-is
    #[serde(default)]
    pub label: String,

    /// Link style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl Link {
    /// Create an unstyled link.
    pub fn new(action_url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            action_url: action_url.into(),
            label: label.into(),
            style: StyleSet::new(),
        }
    }

    /// Set the link style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }
}

/// An inline image.
///
/// The image carries no identifier: the renderer assigns a fresh content-id
/// per occurrence and reports it with the source path in the render result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Location of the image bytes
    #[serde(default)]
    pub source_path: String,

    /// Width in pixels
    #[serde(default)]
    pub width: u32,

    /// Height in pixels
    #[serde(default)]
    pub height: u32,
}

impl Image {
    /// Create an image with dimensions.
    pub fn new(source_path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            source_path: source_path.into(),
            width,
            height,
        }
    }
}

/// An element wrapping a single child.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Element name (e.g. "p", "div"); an empty name renders nothing
    #[serde(default)]
    pub tag_name: String,

    /// Element style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,

    /// Wrapped child
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Box<Node>,
}

impl Tag {
    /// Create an unstyled element around `content`.
    pub fn new(tag_name: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            tag_name: tag_name.into(),
            style: StyleSet::new(),
            content: Box::new(content.into()),
        }
    }

    /// Set the element style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }
}

/// A self-closing element such as `<br />` or `<hr />`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosedTag {
    /// Element name; an empty name renders nothing
    #[serde(default)]
    pub tag_name: String,

    /// Element style
    #[serde(default, skip_serializing_if = "StyleSet::is_empty")]
    pub style: StyleSet,
}

impl ClosedTag {
    /// Create an unstyled self-closing element.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            style: StyleSet::new(),
        }
    }

    /// Set the element style and return self.
    pub fn styled(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_json() {
        let link: Link = serde_json::from_str(
            r##"{"action_url":"https://example.com","label":"Go","style":{"color":"#fff"}}"##,
        )
        .unwrap();
        assert_eq!(link.action_url, "https://example.com");
        assert_eq!(link.style.get("color"), Some("#fff"));
    }

    #[test]
    fn test_tag_wraps_content() {
        let tag = Tag::new("p", "hello").styled(StyleSet::new().with("margin", "0"));
        assert_eq!(tag.tag_name, "p");
        assert_eq!(*tag.content, Node::text("hello"));
        assert_eq!(tag.style.len(), 1);
    }

    #[test]
    fn test_image_serializes_without_id() {
        let json = serde_json::to_string(&Image::new("logo.png", 120, 40)).unwrap();
        assert_eq!(json, r#"{"source_path":"logo.png","width":120,"height":40}"#);
    }

    #[test]
    fn test_missing_names_default_to_empty() {
        let link: Link = serde_json::from_str(r#"{"label":"Go"}"#).unwrap();
        assert_eq!(link, Link::new("", "Go"));

        let image: Image = serde_json::from_str(r#"{"width":3}"#).unwrap();
        assert_eq!(image, Image::new("", 3, 0));

        let tag: Tag = serde_json::from_str(r#"{"content":{"type":"text","value":"x"}}"#).unwrap();
        assert!(tag.tag_name.is_empty());

        let tag: ClosedTag = serde_json::from_str("{}").unwrap();
        assert!(tag.tag_name.is_empty());
    }
}
