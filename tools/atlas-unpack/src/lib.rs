//! atlas-unpack library
//!
//! Splits a packed texture atlas back into loose image files, one per frame
//! declared in the atlas JSON manifest.

pub mod error;
pub mod extract;
pub mod manifest;
pub mod progress;

pub use error::{ExtractError, Result};
pub use extract::{extract, extract_with_progress, ExtractSummary};
pub use manifest::{Frame, Manifest, Rect, Texture};
pub use progress::FrameProgress;
