//! JSON loading and saving for node trees and render results.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::alignment::parse_serde_message;
use crate::model::Node;

use super::RenderedBody;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a node tree to JSON.
pub fn to_json(node: &Node, format: JsonFormat) -> Result<String> {
    serialize(node, format)
}

/// Convert a render result (markup, resources, stats) to JSON.
pub fn body_to_json(body: &RenderedBody, format: JsonFormat) -> Result<String> {
    serialize(body, format)
}

/// Load a node tree from JSON.
///
/// Unknown node types and `null` children load as [`Node::Empty`]. An
/// alignment outside its enumeration fails with
/// [`Error::UnsupportedAlignment`]; any other malformed input fails with
/// [`Error::InvalidDocument`].
pub fn from_json(json: &str) -> Result<Node> {
    serde_json::from_str(json).map_err(classify_error)
}

fn serialize<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

fn classify_error(err: serde_json::Error) -> Error {
    let message = err.to_string();
    parse_serde_message(&message).unwrap_or(Error::InvalidDocument(message))
}
