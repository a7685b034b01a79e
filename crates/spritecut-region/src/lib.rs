//! spritecut-region - Region discovery for sprite sheets
//!
//! This crate splits the visible pixels of a sprite sheet into disjoint
//! regions, one per sprite:
//!
//! - **Window query** - Unassigned points in a square around a location
//! - **Gap-tolerant growth** - Flood fill that hops small transparent gaps
//! - **Partitioning** - Repeated growth until every point is assigned,
//!   with undersized regions dropped as noise
//!
//! # Examples
//!
//! ## Splitting a point set
//!
//! ```
//! use spritecut_core::{Point, PointSet};
//! use spritecut_region::split_points;
//!
//! let mut points = PointSet::new();
//! // Two 6x6 sprites, ten transparent columns apart
//! for x in (0..6).chain(16..22) {
//!     for y in 0..6 {
//!         points.insert(Point::new(x, y), 0xff00_00ff);
//!     }
//! }
//!
//! let regions = split_points(&points, 3).unwrap();
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[0].len(), 36);
//! ```
//!
//! ## Keeping small fragments
//!
//! ```
//! use spritecut_core::{Point, PointSet};
//! use spritecut_region::{split_points_with, SplitOptions};
//!
//! let mut points = PointSet::new();
//! points.insert(Point::new(0, 0), 0xffff_ffff);
//! points.insert(Point::new(2, 1), 0xffff_ffff);
//!
//! let report = split_points_with(&points, &SplitOptions::new(3).with_min_region_size(1)).unwrap();
//! assert_eq!(report.regions.len(), 1);
//! assert!(report.discarded.is_empty());
//! ```

pub mod error;
pub mod grow;
pub mod partition;
pub mod visit;
pub mod window;

// Re-export core types
pub use spritecut_core;

pub use error::{RegionError, RegionResult};

pub use grow::{Direction, MAX_STEP, checked_step, grow_region};
pub use partition::{
    DEFAULT_MIN_REGION_SIZE, DEFAULT_STEP, DiscardPolicy, SplitOptions, SplitReport,
    split_points, split_points_with,
};
pub use visit::VisitSet;
pub use window::{window_points, window_rect};
