//! spritecut - Split sprite sheets into sprites
//!
//! Reads a placement file, splits every placed sheet into sprites, writes
//! one image per sprite and a JSON index of sprite centers.

use anyhow::Context;
use clap::Parser;
use spritecut::config::{Args, SplitConfig};
use spritecut::logging::setup_logging;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.debug)?;

    let config = SplitConfig::try_from(args).context("invalid arguments")?;
    let summary = spritecut::run(&config)?;

    tracing::info!(
        processed = summary.images_processed,
        skipped = summary.images_skipped,
        sprites = summary.regions_written,
        discarded = summary.points_discarded,
        index = %summary.index_path.display(),
        "done"
    );
    Ok(())
}
