//! Rendering many independent documents at once.

use rayon::prelude::*;

use crate::error::Result;
use crate::model::Node;

use super::{HtmlRenderer, RenderOptions, RenderStats, RenderedBody};

/// Render independent node trees, e.g. one mail body per recipient.
///
/// Uses the rayon thread pool unless `options.parallel` is off. Results keep
/// the input order, and every tree gets its own resource registry, so
/// content identifiers restart at 1 for each body. The first failure aborts
/// the batch.
pub fn render_all(nodes: &[Node], options: &RenderOptions) -> Result<Vec<RenderedBody>> {
    let renderer = HtmlRenderer::new(options.clone());

    log::debug!(
        "rendering batch of {} documents ({})",
        nodes.len(),
        if options.parallel { "parallel" } else { "sequential" }
    );

    if options.parallel {
        nodes.par_iter().map(|node| renderer.render(node)).collect()
    } else {
        nodes.iter().map(|node| renderer.render(node)).collect()
    }
}

/// Sum the statistics of a rendered batch.
pub fn total_stats(bodies: &[RenderedBody]) -> RenderStats {
    let mut total = RenderStats::new();
    for body in bodies {
        total.merge(&body.stats);
    }
    total
}
