//! atlas-unpack - texture atlas unpacker
//!
//! Reads a JSON atlas manifest and writes every frame it declares to its own
//! image file in the output directory.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use atlas_unpack::{extract_with_progress, progress};

#[derive(Parser)]
#[command(name = "atlas-unpack")]
#[command(about = "Crop every frame of a texture atlas into its own image file")]
#[command(version)]
struct Cli {
    /// Path to the atlas JSON manifest
    input: PathBuf,

    /// Directory receiving the cropped frames (created if missing)
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    tracing::info!("Unpacking {:?} -> {:?}", cli.input, cli.output);
    let summary = extract_with_progress(&cli.input, &cli.output, progress::log_progress)
        .with_context(|| format!("Failed to unpack atlas {:?}", cli.input))?;
    tracing::info!(
        "Done! {} frames from {} textures",
        summary.frames,
        summary.textures
    );

    Ok(())
}
