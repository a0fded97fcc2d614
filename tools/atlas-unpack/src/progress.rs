//! Per-frame progress reporting.
//!
//! Progress is cosmetic: extraction behaves the same whatever the callback
//! does with it.

/// Snapshot passed to the progress callback after each frame is written.
///
/// Indices are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameProgress<'a> {
    pub texture_index: usize,
    pub texture_count: usize,
    pub frame_index: usize,
    pub frame_count: usize,
    pub filename: &'a str,
}

impl FrameProgress<'_> {
    /// True for the last frame of the current texture
    pub fn is_texture_done(&self) -> bool {
        self.frame_index == self.frame_count
    }
}

impl std::fmt::Display for FrameProgress<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[texture {}/{}] [{}/{}] {}",
            self.texture_index, self.texture_count, self.frame_index, self.frame_count, self.filename
        )
    }
}

/// Progress callback used by the CLI: one log line per written frame
pub fn log_progress(progress: FrameProgress<'_>) {
    tracing::info!("{}", progress);
    if progress.is_texture_done() {
        tracing::debug!(
            "Texture {}/{} done ({} frames)",
            progress.texture_index,
            progress.texture_count,
            progress.frame_count
        );
    }
}
