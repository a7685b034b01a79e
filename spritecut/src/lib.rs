//! spritecut - Sprite sheet partitioning
//!
//! Splits sprite sheets into their individual sprites and records where
//! each sprite belongs in a shared placement space.
//!
//! # Overview
//!
//! - Image I/O for PNG and JPEG sheets ([`io`])
//! - Gap-tolerant region discovery that keeps antialiased sprites whole
//!   ([`region`])
//! - A batch pipeline driven by a JSON placement file ([`pipeline`]),
//!   exposed as the `spritecut` command line tool
//!
//! # Example
//!
//! ```
//! use spritecut::{Point, PointSet};
//! use spritecut::region::split_points;
//!
//! let mut sheet = PointSet::new();
//! for x in 0..10 {
//!     for y in 0..10 {
//!         sheet.insert(Point::new(x, y), 0xff00_00ff);
//!     }
//! }
//! sheet.insert(Point::new(500, 500), 0xff00_00ff);
//!
//! // The stray pixel is too small to be a sprite
//! let sprites = split_points(&sheet, 3).unwrap();
//! assert_eq!(sprites.len(), 1);
//! assert_eq!(sprites[0].len(), 100);
//! ```

pub mod config;
pub mod logging;
pub mod pipeline;

// Re-export core types (primary data structures used everywhere)
pub use spritecut_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use spritecut_io as io;
pub use spritecut_region as region;

pub use config::{Args, ConfigError, SplitConfig};
pub use pipeline::{RunSummary, run};
