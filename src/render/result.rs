//! Rendering result with linked resources and statistics.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{InlineResource, LinkedResource};

/// Result of rendering an HTML part tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedBody {
    /// The rendered markup
    pub markup: String,

    /// Resources referenced from the markup, in document order
    pub resources: Vec<LinkedResource>,

    /// Render statistics (all zero unless collection was enabled)
    pub stats: RenderStats,
}

impl RenderedBody {
    /// Create a new rendered body.
    pub fn new(markup: String, resources: Vec<LinkedResource>, stats: RenderStats) -> Self {
        Self {
            markup,
            resources,
            stats,
        }
    }

    /// Get the markup length in bytes.
    pub fn markup_len(&self) -> usize {
        self.markup.len()
    }

    /// Content identifiers in document order.
    pub fn content_ids(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(|r| r.content_id.as_str())
    }

    /// Load every linked resource, preserving order.
    ///
    /// Fails on the first resource that cannot be read.
    pub fn load_resources(&self) -> Result<Vec<InlineResource>> {
        self.resources.iter().map(LinkedResource::load).collect()
    }
}

/// Statistics collected during rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of tables rendered
    pub table_count: u64,

    /// Number of table rows rendered
    pub row_count: u64,

    /// Number of table cells rendered
    pub cell_count: u64,

    /// Number of links rendered
    pub link_count: u64,

    /// Number of images rendered
    pub image_count: u64,

    /// Number of open/close and self-closing tags rendered
    pub tag_count: u64,

    /// Number of lists rendered (ordered and unordered)
    pub list_count: u64,

    /// Number of list items rendered
    pub list_item_count: u64,

    /// Number of text nodes rendered
    pub text_count: u64,

    /// Number of empty or unrecognized nodes skipped
    pub empty_count: u64,

    /// Characters of literal text (text nodes and link labels)
    pub char_count: u64,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the character count of a literal text.
    pub fn count_text(&mut self, text: &str) {
        let chars = u64::try_from(text.chars().count()).unwrap_or(u64::MAX);
        self.char_count = self.char_count.saturating_add(chars);
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &RenderStats) {
        let add = |a: &mut u64, b: u64| *a = a.saturating_add(b);
        add(&mut self.table_count, other.table_count);
        add(&mut self.row_count, other.row_count);
        add(&mut self.cell_count, other.cell_count);
        add(&mut self.link_count, other.link_count);
        add(&mut self.image_count, other.image_count);
        add(&mut self.tag_count, other.tag_count);
        add(&mut self.list_count, other.list_count);
        add(&mut self.list_item_count, other.list_item_count);
        add(&mut self.text_count, other.text_count);
        add(&mut self.empty_count, other.empty_count);
        add(&mut self.char_count, other.char_count);
    }
}
