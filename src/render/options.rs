//! Rendering options and configuration.

use std::sync::Arc;

use crate::style::{InlineStyleComposer, StyleComposer};

/// Options for rendering HTML parts.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Prefix of generated content identifiers (e.g. "image" → "image1")
    pub content_id_prefix: String,

    /// Optional domain appended as `@domain` to content identifiers
    pub content_id_domain: Option<String>,

    /// Serializer for style attributes
    pub composer: Arc<dyn StyleComposer>,

    /// Collect render statistics
    pub collect_stats: bool,

    /// Render batches on the rayon thread pool
    pub parallel: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content identifier prefix.
    pub fn with_content_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.content_id_prefix = prefix.into();
        self
    }

    /// Set the content identifier domain.
    pub fn with_content_id_domain(mut self, domain: impl Into<String>) -> Self {
        self.content_id_domain = Some(domain.into());
        self
    }

    /// Set the style composer.
    pub fn with_composer<C: StyleComposer + 'static>(mut self, composer: C) -> Self {
        self.composer = Arc::new(composer);
        self
    }

    /// Enable or disable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }

    /// Disable parallel batch rendering.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            content_id_prefix: "image".to_string(),
            content_id_domain: None,
            composer: Arc::new(InlineStyleComposer),
            collect_stats: false,
            parallel: true,
        }
    }
}
