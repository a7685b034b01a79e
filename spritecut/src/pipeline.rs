//! Batch partitioning of sprite sheets
//!
//! For every sheet named in the placement file, in name order:
//!
//! 1. load `<src>/<name><ext>` and collect its visible pixels
//! 2. split them into sprites
//! 3. write each sprite to `<out>/<name>-<idx><ext>`
//! 4. record the sprite's center in placement space under `<name>-<idx>`
//!
//! A placement with a zero coordinate marks a sheet that has not been
//! placed yet; it is skipped. The collected centers are saved as
//! `<out>/<basename(config)>.json`.
//!
//! # Coordinates
//!
//! Sheet pixels map to placement units by `scale`. The sheet's boundary is
//! centered on its placement point, so with boundary `b` and placement
//! `(X, Y)` the sheet's top-left corner sits at
//! `(X - b.width * scale / 2, Y - b.height * scale / 2)`, and a sprite with
//! boundary `r` is centered at that corner plus
//! `((r.min.x + r.max.x) * scale / 2, (r.min.y + r.max.y) * scale / 2)`.

use crate::config::SplitConfig;
use anyhow::Context;
use spritecut_core::{Point, PointSet, Rect};
use spritecut_io::{PositionIndex, index_file_name, load_placements, read_points, save_index};
use spritecut_region::split_points_with;
use std::fs;
use std::path::PathBuf;

/// What a run did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sheets loaded and split
    pub images_processed: usize,
    /// Placements skipped for a zero coordinate
    pub images_skipped: usize,
    /// Sprite images written
    pub regions_written: usize,
    /// Pixels dropped as noise across all sheets
    pub points_discarded: usize,
    /// Where the position index was saved
    pub index_path: PathBuf,
}

/// Top-left corner of a sheet in placement space
pub fn sheet_origin(target: Point, bounds: &Rect, scale: i32) -> (i64, i64) {
    let scale = scale as i64;
    (
        target.x as i64 - bounds.width() as i64 * scale / 2,
        target.y as i64 - bounds.height() as i64 * scale / 2,
    )
}

/// Offset of a sprite's center from its sheet's top-left corner
pub fn region_offset(bounds: &Rect, scale: i32) -> (i64, i64) {
    let scale = scale as i64;
    (
        (bounds.min.x as i64 + bounds.max.x as i64) * scale / 2,
        (bounds.min.y as i64 + bounds.max.y as i64) * scale / 2,
    )
}

/// Run the whole batch.
///
/// # Errors
///
/// Stops at the first sheet that cannot be read or sprite that cannot be
/// written; the index is only saved when every sheet succeeded.
pub fn run(config: &SplitConfig) -> anyhow::Result<RunSummary> {
    config.validate()?;

    let placements = load_placements(&config.config_path).with_context(|| {
        format!(
            "failed to load placement file {}",
            config.config_path.display()
        )
    })?;

    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.out_dir.display()
        )
    })?;

    let mut summary = RunSummary::default();
    let mut index = PositionIndex::new();

    for (name, &target) in &placements {
        if target.x == 0 || target.y == 0 {
            tracing::warn!(sheet = %name, target = %target, "skipping sheet without placement");
            summary.images_skipped += 1;
            continue;
        }

        let source = config.source_path(name);
        let points = read_points(&source)
            .with_context(|| format!("failed to load sheet {}", source.display()))?;
        tracing::info!(sheet = %name, points = points.len(), target = %target, "splitting sheet");

        let (written, discarded) = split_sheet(config, name, target, &points, &mut index)?;
        summary.images_processed += 1;
        summary.regions_written += written;
        summary.points_discarded += discarded;
    }

    let index_path = config.out_dir.join(index_file_name(&config.config_path));
    save_index(&index_path, &index)
        .with_context(|| format!("failed to save index {}", index_path.display()))?;
    tracing::info!(
        path = %index_path.display(),
        entries = index.len(),
        "position index saved"
    );
    summary.index_path = index_path;

    Ok(summary)
}

/// Split one sheet, write its sprites and record their centers.
///
/// Returns the number of sprites written and of pixels discarded.
fn split_sheet(
    config: &SplitConfig,
    name: &str,
    target: Point,
    points: &PointSet,
    index: &mut PositionIndex,
) -> anyhow::Result<(usize, usize)> {
    let (left, top) = sheet_origin(target, &points.boundary(), config.scale);

    let report = split_points_with(points, &config.options)
        .with_context(|| format!("failed to split sheet {}", name))?;

    for (idx, region) in report.regions.iter().enumerate() {
        let region_name = format!("{}-{}", name, idx);
        let path = config.output_path(&region_name);
        spritecut_io::write_region(region, &path)
            .with_context(|| format!("failed to write sprite {}", path.display()))?;

        let bounds = region.boundary();
        let (dx, dy) = region_offset(&bounds, config.scale);
        tracing::debug!(
            sprite = %region_name,
            bounds = %bounds,
            points = region.len(),
            "sprite written"
        );
        index.insert(region_name, format!("{},{}", left + dx, top + dy));
    }

    if !report.discarded.is_empty() {
        tracing::debug!(sheet = %name, count = report.discarded.len(), "noise pixels dropped");
    }

    Ok((report.regions.len(), report.discarded.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_origin() {
        let bounds = Rect::new(Point::new(2, 2), Point::new(33, 13));
        assert_eq!(sheet_origin(Point::new(1000, 500), &bounds, 10), (845, 445));
        assert_eq!(sheet_origin(Point::new(10, 10), &bounds, 1), (-5, 5));
    }

    #[test]
    fn test_region_offset() {
        let bounds = Rect::new(Point::new(25, 5), Point::new(33, 13));
        assert_eq!(region_offset(&bounds, 10), (290, 90));
        assert_eq!(region_offset(&bounds, 1), (29, 9));
    }

    #[test]
    fn test_empty_boundary_origin_is_target() {
        assert_eq!(sheet_origin(Point::new(7, 9), &Rect::ZERO, 10), (7, 9));
    }
}
