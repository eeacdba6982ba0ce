//! Rendering module for converting node trees to HTML with linked resources.

mod batch;
mod html;
mod json;
mod options;
mod registry;
mod result;

pub use batch::{render_all, total_stats};
pub use html::{render, HtmlRenderer};
pub use json::{body_to_json, from_json, to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{RenderStats, RenderedBody};
