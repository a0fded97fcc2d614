//! Test asset generation
//!
//! Builds sprite sheets with the image crate and manifests with serde_json.

use std::path::Path;

/// Frame entry: (filename, x, y, w, h)
pub type FrameEntry<'a> = (&'a str, u32, u32, u32, u32);

/// Generate an RGBA sheet whose pixel at (x, y) is `[x, y, seed, 255]`
pub fn generate_sheet_png(path: &Path, width: u32, height: u32, seed: u8) -> std::io::Result<()> {
    let sheet = image::RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([x as u8, y as u8, seed, 255])
    });
    sheet
        .save(path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

/// Write a manifest with one texture entry per `(image, frames)` pair
pub fn generate_manifest(path: &Path, textures: &[(&str, Vec<FrameEntry>)]) -> std::io::Result<()> {
    let textures: Vec<serde_json::Value> = textures
        .iter()
        .map(|(image, frames)| {
            let frames: Vec<serde_json::Value> = frames
                .iter()
                .map(|(filename, x, y, w, h)| {
                    serde_json::json!({
                        "filename": filename,
                        "frame": { "x": x, "y": y, "w": w, "h": h },
                        "rotated": false,
                        "trimmed": false
                    })
                })
                .collect();
            serde_json::json!({ "image": image, "frames": frames })
        })
        .collect();

    let manifest = serde_json::json!({
        "textures": textures,
        "meta": { "app": "atlas-unpack tests" }
    });
    std::fs::write(path, serde_json::to_string_pretty(&manifest)?)
}
