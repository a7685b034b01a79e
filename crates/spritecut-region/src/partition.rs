//! Sprite partitioning
//!
//! Splits the visible points of a sprite sheet into disjoint regions, one
//! per sprite. Regions are discovered by gap-tolerant growth
//! ([`crate::grow`]) from the smallest unassigned point, repeatedly, until
//! every point is either part of a kept region or discarded as noise.

use crate::error::RegionResult;
use crate::grow::{checked_step, grow_region};
use crate::visit::VisitSet;
use spritecut_core::{Point, PointSet};

/// Default distance bridged by region growth
pub const DEFAULT_STEP: u32 = 3;

/// Regions with fewer points than this are treated as noise by default
pub const DEFAULT_MIN_REGION_SIZE: usize = 25;

/// What to drop when a grown region is too small to keep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscardPolicy {
    /// Drop only the seed. The other members stay unassigned and may still
    /// seed or join a later region.
    #[default]
    SeedOnly,
    /// Drop every member of the undersized region.
    WholeRegion,
}

/// Options for [`split_points_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOptions {
    /// Growth step; must be between 1 and [`crate::MAX_STEP`]
    pub step: u32,
    /// Smallest region that is kept
    pub min_region_size: usize,
    /// Handling of undersized regions
    pub discard: DiscardPolicy,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            min_region_size: DEFAULT_MIN_REGION_SIZE,
            discard: DiscardPolicy::default(),
        }
    }
}

impl SplitOptions {
    /// Default options with the given step
    pub fn new(step: u32) -> Self {
        Self {
            step,
            ..Default::default()
        }
    }

    /// Set the minimum kept region size
    pub fn with_min_region_size(mut self, min_region_size: usize) -> Self {
        self.min_region_size = min_region_size;
        self
    }

    /// Set the discard policy
    pub fn with_discard(mut self, discard: DiscardPolicy) -> Self {
        self.discard = discard;
        self
    }
}

/// Result of a partition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitReport {
    /// Kept regions in discovery order
    pub regions: Vec<PointSet>,
    /// Points dropped as noise, in the order they were dropped
    pub discarded: Vec<Point>,
}

impl SplitReport {
    /// Total number of points in kept regions
    pub fn kept_points(&self) -> usize {
        self.regions.iter().map(PointSet::len).sum()
    }
}

/// Split a point set into regions using the default size threshold and
/// discard policy.
///
/// # Errors
///
/// Same as [`split_points_with`].
pub fn split_points(points: &PointSet, step: u32) -> RegionResult<Vec<PointSet>> {
    Ok(split_points_with(points, &SplitOptions::new(step))?.regions)
}

/// Split a point set into regions.
///
/// Every input point ends up in exactly one kept region or in
/// `discarded`. Kept regions carry the colors of their points. The result
/// depends only on the input and the options.
///
/// # Errors
///
/// - [`crate::RegionError::InvalidStep`] if `options.step` is 0 or too large
/// - [`crate::RegionError::Core`] wrapping
///   [`spritecut_core::Error::CoordinateOverflow`] if a point has
///   `x == i32::MAX` or `y == i32::MAX`; every other `i32` coordinate is
///   accepted
///
/// An empty input is not an error.
pub fn split_points_with(points: &PointSet, options: &SplitOptions) -> RegionResult<SplitReport> {
    checked_step(options.step)?;

    let mut report = SplitReport::default();
    if points.is_empty() {
        return Ok(report);
    }

    let bounds = points.try_boundary()?;
    let mut visit = VisitSet::from_points(points);

    while let Some(seed) = visit.first() {
        let members = grow_region(&bounds, options.step, seed, &visit)?;

        if members.len() < options.min_region_size {
            tracing::debug!(
                seed = %seed,
                size = members.len(),
                "discarding undersized region"
            );
            match options.discard {
                DiscardPolicy::SeedOnly => {
                    visit.remove(seed);
                    report.discarded.push(seed);
                }
                DiscardPolicy::WholeRegion => {
                    for p in members {
                        visit.remove(p);
                        report.discarded.push(p);
                    }
                }
            }
            continue;
        }

        let mut region = PointSet::new();
        for p in members {
            if let Some(pixel) = points.get(p) {
                region.insert(p, pixel);
            }
            visit.remove(p);
        }

        tracing::debug!(
            index = report.regions.len(),
            size = region.len(),
            bounds = %region.boundary(),
            "region found"
        );
        report.regions.push(region);
    }

    Ok(report)
}
