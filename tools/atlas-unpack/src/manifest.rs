//! Atlas manifest parsing
//!
//! The manifest is the JSON document written by sprite-sheet packers:
//!
//! ```json
//! { "textures": [ { "image": "sheet.png",
//!                   "frames": [ { "filename": "hero.png",
//!                                 "frame": { "x": 0, "y": 0, "w": 16, "h": 16 } } ] } ] }
//! ```
//!
//! Keys this tool does not use (`meta`, `rotated`, `trimmed`, ...) are ignored.

use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::error::{ExtractError, Result};

/// Root manifest structure
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub textures: Vec<Texture>,
}

/// One packed sheet and the frames cut from it
#[derive(Debug, Clone, Deserialize)]
pub struct Texture {
    /// Sheet path, relative to the manifest's directory
    pub image: String,
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    /// Output file name; its extension selects the encoder
    pub filename: String,
    pub frame: Rect,
}

/// Pixel rectangle, origin at the top-left of the sheet
///
/// Signed so a negative corner is reported as an out-of-bounds crop rather
/// than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub w: i64,
    pub h: i64,
}

impl Rect {
    /// Exclusive right edge
    pub fn right(&self) -> i64 {
        self.x.saturating_add(self.w)
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i64 {
        self.y.saturating_add(self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True if the rectangle lies entirely inside a `width` x `height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= i64::from(width)
            && self.bottom() <= i64::from(height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x={} y={} w={} h={}", self.x, self.y, self.w, self.h)
    }
}

impl Manifest {
    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ExtractError::ManifestUnreadable {
                path: path.to_path_buf(),
                source: Box::new(e),
            })?;
        Self::parse(&content).map_err(|e| ExtractError::from_json(path, e))
    }

    /// Parse manifest from string
    pub fn parse(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Total number of frames across all textures
    pub fn frame_count(&self) -> usize {
        self.textures.iter().map(|t| t.frames.len()).sum()
    }
}
