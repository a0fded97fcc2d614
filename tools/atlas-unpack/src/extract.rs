//! Atlas extraction
//!
//! Crops every frame of every texture in a manifest and writes each crop to
//! `<output_dir>/<frame.filename>`.
//!
//! Extraction runs in two passes. The preflight pass reads only image headers
//! and rejects the whole run (before any file is written) if a frame is out of
//! bounds, empty, or has an extension no encoder can write. The second pass
//! decodes each sheet once, writes its frames in manifest order, and drops the
//! sheet before moving to the next one. Later frames overwrite earlier frames
//! with the same filename.

use image::{DynamicImage, ImageFormat, ImageReader, ImageResult};
use std::path::{Path, PathBuf};

use crate::error::{ExtractError, Result};
use crate::manifest::{Manifest, Rect, Texture};
use crate::progress::FrameProgress;

/// Counts reported after a successful run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub textures: usize,
    pub frames: usize,
}

/// A texture that passed preflight: resolved sheet path plus the encoder
/// for each of its frames (same order as `texture.frames`).
struct TexturePlan<'a> {
    texture: &'a Texture,
    image_path: PathBuf,
    formats: Vec<ImageFormat>,
}

/// Extract every frame of the manifest at `manifest_path` into `output_dir`
pub fn extract(manifest_path: &Path, output_dir: &Path) -> Result<ExtractSummary> {
    extract_with_progress(manifest_path, output_dir, |_| {})
}

/// Same as [`extract`], calling `on_frame` after each frame is written
pub fn extract_with_progress<F>(
    manifest_path: &Path,
    output_dir: &Path,
    mut on_frame: F,
) -> Result<ExtractSummary>
where
    F: FnMut(FrameProgress<'_>),
{
    create_dir(output_dir)?;

    let manifest = Manifest::load(manifest_path)?;
    tracing::debug!(
        "Loaded manifest {:?}: {} textures, {} frames",
        manifest_path,
        manifest.textures.len(),
        manifest.frame_count()
    );

    let plans = preflight(manifest_path, &manifest)?;
    let texture_count = plans.len();
    let mut summary = ExtractSummary::default();

    for (texture_idx, plan) in plans.iter().enumerate() {
        let sheet = decode_image(&plan.image_path).map_err(|source| {
            ExtractError::SourceImageUnreadable {
                path: plan.image_path.clone(),
                source,
            }
        })?;
        tracing::info!(
            "Extracting {} frames from {:?} ({}x{})",
            plan.texture.frames.len(),
            plan.image_path,
            sheet.width(),
            sheet.height()
        );

        let frame_count = plan.texture.frames.len();
        let frames = plan.texture.frames.iter().zip(&plan.formats);
        for (frame_idx, (frame, format)) in frames.enumerate() {
            let crop = crop_frame(&sheet, &frame.frame, &frame.filename)?;
            let output = output_dir.join(&frame.filename);
            write_frame(&crop, &output, *format)?;
            tracing::debug!("Wrote {:?} ({})", output, frame.frame);

            summary.frames += 1;
            on_frame(FrameProgress {
                texture_index: texture_idx + 1,
                texture_count,
                frame_index: frame_idx + 1,
                frame_count,
                filename: &frame.filename,
            });
        }

        summary.textures += 1;
    }

    Ok(summary)
}

/// Resolve a texture's `image` against the directory holding the manifest
pub fn resolve_image_path(manifest_path: &Path, image: &str) -> PathBuf {
    manifest_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(image)
}

/// Copy `rect` out of `sheet` into a new, independent image
pub fn crop_frame(sheet: &DynamicImage, rect: &Rect, filename: &str) -> Result<DynamicImage> {
    check_rect(rect, sheet.width(), sheet.height(), filename)?;
    // In range after the bounds check: 0 <= x, x + w <= width <= u32::MAX
    Ok(sheet.crop_imm(rect.x as u32, rect.y as u32, rect.w as u32, rect.h as u32))
}

/// Encoder selected by the extension of `filename`
pub fn output_format(filename: &str) -> Result<ImageFormat> {
    match ImageFormat::from_path(filename) {
        Ok(format) if format.writing_enabled() => Ok(format),
        _ => Err(ExtractError::UnsupportedOutputFormat {
            filename: filename.to_string(),
        }),
    }
}

fn preflight<'a>(manifest_path: &Path, manifest: &'a Manifest) -> Result<Vec<TexturePlan<'a>>> {
    manifest
        .textures
        .iter()
        .map(|texture| -> Result<TexturePlan<'a>> {
            let image_path = resolve_image_path(manifest_path, &texture.image);
            let (width, height) = read_dimensions(&image_path).map_err(|source| {
                ExtractError::SourceImageUnreadable {
                    path: image_path.clone(),
                    source,
                }
            })?;

            let formats = texture
                .frames
                .iter()
                .map(|frame| -> Result<ImageFormat> {
                    check_rect(&frame.frame, width, height, &frame.filename)?;
                    output_format(&frame.filename)
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(TexturePlan {
                texture,
                image_path,
                formats,
            })
        })
        .collect()
}

fn check_rect(rect: &Rect, width: u32, height: u32, filename: &str) -> Result<()> {
    if rect.is_empty() {
        return Err(ExtractError::EmptyFrame {
            filename: filename.to_string(),
        });
    }
    if !rect.fits_within(width, height) {
        return Err(ExtractError::OutOfBoundsCrop {
            filename: filename.to_string(),
            rect: *rect,
            width,
            height,
        });
    }
    Ok(())
}

// Format is sniffed from content so a mislabelled extension still decodes.
fn read_dimensions(path: &Path) -> ImageResult<(u32, u32)> {
    ImageReader::open(path)?.with_guessed_format()?.into_dimensions()
}

fn decode_image(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

fn write_frame(crop: &DynamicImage, output: &Path, format: ImageFormat) -> Result<()> {
    if let Some(parent) = output.parent() {
        create_dir(parent)?;
    }

    // JPEG has no alpha channel
    let result = if format == ImageFormat::Jpeg && crop.color().has_alpha() {
        DynamicImage::ImageRgb8(crop.to_rgb8()).save_with_format(output, format)
    } else {
        crop.save_with_format(output, format)
    };

    result.map_err(|source| ExtractError::OutputWrite {
        path: output.to_path_buf(),
        source,
    })
}

fn create_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path).map_err(|source| ExtractError::OutputDirectory {
        path: path.to_path_buf(),
        source,
    })
}
