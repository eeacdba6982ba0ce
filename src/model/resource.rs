//! Linked resources discovered while rendering, and their loaded form.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A resource referenced from the markup by `cid:<content_id>`.
///
/// One entry is produced per image occurrence, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedResource {
    /// Content identifier assigned by the renderer
    pub content_id: String,

    /// Location of the resource bytes
    pub source_path: String,
}

impl LinkedResource {
    /// Create a linked resource entry.
    pub fn new(content_id: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            source_path: source_path.into(),
        }
    }

    /// The reference string used in markup (`cid:<content_id>`).
    pub fn cid_url(&self) -> String {
        format!("cid:{}", self.content_id)
    }

    /// Read the resource bytes from `source_path`.
    ///
    /// The MIME type is sniffed from magic bytes; unrecognized data is
    /// reported as `application/octet-stream`.
    pub fn load(&self) -> Result<InlineResource> {
        let data = fs::read(Path::new(&self.source_path)).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ResourceNotFound(self.source_path.clone()),
            _ => Error::Io(e),
        })?;
        let mime_type = InlineResource::detect_mime_type(&data)
            .unwrap_or(InlineResource::OCTET_STREAM)
            .to_string();

        log::trace!(
            "loaded {} ({} bytes, {}) for cid {}",
            self.source_path,
            data.len(),
            mime_type,
            self.content_id
        );

        Ok(InlineResource {
            content_id: self.content_id.clone(),
            source_path: self.source_path.clone(),
            mime_type,
            data,
        })
    }
}

/// A linked resource with its bytes, ready to attach as an inline part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineResource {
    /// Content identifier to set on the inline part
    pub content_id: String,

    /// Where the bytes were read from
    pub source_path: String,

    /// MIME type (e.g., "image/png")
    pub mime_type: String,

    /// Raw binary data
    #[serde(skip_serializing, default)]
    pub data: Vec<u8>,
}

impl InlineResource {
    const OCTET_STREAM: &'static str = "application/octet-stream";

    /// Get the size of the resource data in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Check if the data was recognized as an image.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Get the file extension based on MIME type.
    pub fn extension(&self) -> &str {
        match self.mime_type.as_str() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/tiff" => "tiff",
            "image/bmp" => "bmp",
            "image/webp" => "webp",
            _ => "bin",
        }
    }

    /// Detect MIME type from data magic bytes.
    pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
        if data.len() < 8 {
            return None;
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some("image/jpeg");
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some("image/png");
        }

        // GIF: GIF87a or GIF89a
        if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            return Some("image/gif");
        }

        // TIFF: 49 49 2A 00 (little-endian) or 4D 4D 00 2A (big-endian)
        if data.starts_with(&[0x49, 0x49, 0x2A, 0x00])
            || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
        {
            return Some("image/tiff");
        }

        // BMP: BM
        if data.starts_with(b"BM") {
            return Some("image/bmp");
        }

        // WEBP: RIFF....WEBP
        if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
            return Some("image/webp");
        }

        None
    }
}
