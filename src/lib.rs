//! # htmlpart
//!
//! Render structured HTML parts into inline-styled markup for email bodies.
//!
//! A document is a tree of [`Node`] values: tables, lists, links, images and
//! generic tags. Rendering produces one markup string plus the ordered list of
//! resources that must travel with it as inline parts. Images are referenced
//! from the markup as `cid:<id>`, and each id is generated by the renderer.
//!
//! ## Quick Start
//!
//! ```
//! use htmlpart::{render_body, Image, Link, Node, Tag};
//!
//! fn main() -> htmlpart::Result<()> {
//!     let doc = Node::parts([
//!         Tag::new("h1", "Welcome").into(),
//!         Image::new("assets/logo.png", 120, 40).into(),
//!         Link::new("https://example.com/start", "Get started").into(),
//!     ]);
//!
//!     let body = render_body(&doc)?;
//!     assert!(body.markup.contains("cid:image1"));
//!     assert_eq!(body.resources[0].source_path, "assets/logo.png");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Closed node model**: every node kind is matched exhaustively
//! - **Linked resources**: one entry per image, in document order
//! - **Pluggable styles**: bring your own [`StyleComposer`]
//! - **JSON documents**: load and save node trees with serde
//! - **Batch rendering**: render many bodies in parallel with Rayon

pub mod error;
pub mod model;
pub mod render;
pub mod style;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    to_horizontal_token, to_vertical_token, ClosedTag, HorizontalAlignment, Image, InlineResource,
    Link, LinkedResource, List, ListItem, Node, RowItem, Table, TableRow, Tag, VerticalAlignment,
};
pub use render::{
    render_all, HtmlRenderer, JsonFormat, RenderOptions, RenderStats, RenderedBody,
};
pub use style::{InlineStyleComposer, StyleComposer, StyleSet};

use std::path::Path;

/// Render a node tree with default options.
///
/// # Example
///
/// ```
/// use htmlpart::{render_body, Node};
///
/// let body = render_body(&Node::text("Hello")).unwrap();
/// assert_eq!(body.markup, "Hello");
/// ```
pub fn render_body(node: &Node) -> Result<RenderedBody> {
    render::render(node, &RenderOptions::default())
}

/// Load a JSON document and render it with default options.
///
/// # Example
///
/// ```
/// use htmlpart::render_json;
///
/// let body = render_json(r#"{"type":"text","value":"Hi"}"#).unwrap();
/// assert_eq!(body.markup, "Hi");
/// ```
pub fn render_json(json: &str) -> Result<RenderedBody> {
    let node = render::from_json(json)?;
    render_body(&node)
}

/// Load a JSON document from a file.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Node> {
    let json = std::fs::read_to_string(path)?;
    render::from_json(&json)
}

/// Builder for rendering HTML parts.
///
/// # Example
///
/// ```
/// use htmlpart::{HtmlPart, Image, Node};
///
/// let body = HtmlPart::new()
///     .with_content_id_prefix("logo")
///     .with_content_id_domain("mail.example.com")
///     .with_stats()
///     .render(&Image::new("logo.png", 64, 64).into())?;
///
/// assert_eq!(body.resources[0].content_id, "logo1@mail.example.com");
/// assert_eq!(body.stats.image_count, 1);
/// # Ok::<(), htmlpart::Error>(())
/// ```
pub struct HtmlPart {
    render_options: RenderOptions,
}

impl HtmlPart {
    /// Create a new HtmlPart builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the content identifier prefix.
    pub fn with_content_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_content_id_prefix(prefix);
        self
    }

    /// Set the content identifier domain.
    pub fn with_content_id_domain(mut self, domain: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_content_id_domain(domain);
        self
    }

    /// Use a custom style composer.
    pub fn with_composer<C: StyleComposer + 'static>(mut self, composer: C) -> Self {
        self.render_options = self.render_options.with_composer(composer);
        self
    }

    /// Collect render statistics.
    pub fn with_stats(mut self) -> Self {
        self.render_options = self.render_options.with_stats(true);
        self
    }

    /// Disable parallel batch rendering.
    pub fn sequential(mut self) -> Self {
        self.render_options = self.render_options.sequential();
        self
    }

    /// Get the configured render options.
    pub fn options(&self) -> &RenderOptions {
        &self.render_options
    }

    /// Render a single node tree.
    pub fn render(&self, node: &Node) -> Result<RenderedBody> {
        render::render(node, &self.render_options)
    }

    /// Render a JSON document.
    pub fn render_json(&self, json: &str) -> Result<RenderedBody> {
        let node = render::from_json(json)?;
        self.render(&node)
    }

    /// Render several independent node trees.
    pub fn render_all(&self, nodes: &[Node]) -> Result<Vec<RenderedBody>> {
        render::render_all(nodes, &self.render_options)
    }
}

impl Default for HtmlPart {
    fn default() -> Self {
        Self::new()
    }
}
