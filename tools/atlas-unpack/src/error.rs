//! Error type for atlas extraction.
//!
//! Every variant is fatal: extraction stops at the first error and nothing is
//! retried.

use std::path::PathBuf;

use crate::manifest::Rect;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Boxed source for errors that can come from more than one layer
/// (I/O, UTF-8 decoding, JSON syntax).
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Manifest missing, unreadable, not UTF-8 or not JSON
    #[error("Failed to read manifest {path:?}")]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: BoxedSource,
    },

    /// Manifest is JSON but a required key is absent or has the wrong type
    #[error("Malformed manifest {path:?}")]
    ManifestShape {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load source image {path:?}")]
    SourceImageUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Frame '{filename}' ({rect}) exceeds source image bounds {width}x{height}")]
    OutOfBoundsCrop {
        filename: String,
        rect: Rect,
        width: u32,
        height: u32,
    },

    #[error("Frame '{filename}' has zero width or height")]
    EmptyFrame { filename: String },

    #[error("Frame '{filename}' has no writable image extension")]
    UnsupportedOutputFormat { filename: String },

    #[error("Failed to create output directory {path:?}")]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ExtractError {
    /// Classify a manifest parse failure.
    ///
    /// Syntax, EOF and I/O failures mean the file is not JSON at all; data
    /// errors mean it is JSON of the wrong shape.
    pub fn from_json(path: impl Into<PathBuf>, err: serde_json::Error) -> Self {
        let path = path.into();
        match err.classify() {
            serde_json::error::Category::Data => Self::ManifestShape { path, source: err },
            _ => Self::ManifestUnreadable {
                path,
                source: Box::new(err),
            },
        }
    }
}
