//! Integration tests for loading linked resources.

use std::fs;

use htmlpart::{render_body, Error, Image, LinkedResource, Node, Tag};
use tempfile::TempDir;

const PNG_HEADER: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_HEADER: [u8; 8] = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> String {
    let path = dir.path().join(name);
    fs::write(&path, data).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_load_png() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "logo.png", &PNG_HEADER);

    let inline = LinkedResource::new("image1", path.clone()).load().unwrap();
    assert_eq!(inline.content_id, "image1");
    assert_eq!(inline.source_path, path);
    assert_eq!(inline.mime_type, "image/png");
    assert_eq!(inline.extension(), "png");
    assert_eq!(inline.size(), 8);
    assert!(inline.is_image());
}

#[test]
fn test_load_unrecognized_bytes() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", b"plain text, not an image");

    let inline = LinkedResource::new("image1", path).load().unwrap();
    assert_eq!(inline.mime_type, "application/octet-stream");
    assert_eq!(inline.extension(), "bin");
    assert!(!inline.is_image());
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.png").to_string_lossy().into_owned();

    match LinkedResource::new("image1", path.clone()).load() {
        Err(Error::ResourceNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected ResourceNotFound, got {:?}", other),
    }
}

#[test]
fn test_load_resources_preserves_order() {
    let dir = TempDir::new().unwrap();
    let png = write_file(&dir, "a.png", &PNG_HEADER);
    let jpeg = write_file(&dir, "b.jpg", &JPEG_HEADER);

    let doc = Node::parts([
        Image::new(jpeg.clone(), 10, 10).into(),
        Tag::new("p", Image::new(png.clone(), 20, 20)).into(),
        Image::new(jpeg, 10, 10).into(),
    ]);
    let body = render_body(&doc).unwrap();
    let loaded = body.load_resources().unwrap();

    let summary: Vec<_> = loaded
        .iter()
        .map(|r| (r.content_id.as_str(), r.mime_type.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            ("image1", "image/jpeg"),
            ("image2", "image/png"),
            ("image3", "image/jpeg"),
        ]
    );
}

#[test]
fn test_load_resources_fails_on_missing() {
    let dir = TempDir::new().unwrap();
    let png = write_file(&dir, "a.png", &PNG_HEADER);

    let doc = Node::parts([
        Image::new(png, 1, 1).into(),
        Image::new("/nonexistent/htmlpart/b.png", 1, 1).into(),
    ]);
    let body = render_body(&doc).unwrap();

    assert!(matches!(
        body.load_resources(),
        Err(Error::ResourceNotFound(_))
    ));
}

#[test]
fn test_manifest_omits_bytes() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "a.png", &PNG_HEADER);

    let inline = LinkedResource::new("image1", path).load().unwrap();
    let json = serde_json::to_string(&inline).unwrap();
    assert!(json.contains("\"mime_type\":\"image/png\""));
    assert!(!json.contains("\"data\""));
}
