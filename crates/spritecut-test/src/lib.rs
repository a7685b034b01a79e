//! spritecut-test - Regression test framework for spritecut
//!
//! Integration tests across the workspace share one harness:
//!
//! - [`RegParams`] numbers each check, records failures instead of
//!   panicking on the first one, and reports them in [`RegParams::cleanup`]
//! - fixture builders produce synthetic sprite sheets as [`PointSet`]s
//! - region images written during tests land in `tests/regout/`
//!
//! # Usage
//!
//! ```ignore
//! use spritecut_test::{RegParams, filled_rect};
//!
//! let mut rp = RegParams::new("partition");
//! let square = filled_rect(0, 0, 10, 10, 0xff0000ff);
//! rp.compare_values(100.0, square.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to write region images without
//!   reading them back

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use spritecut_core::{Point, PointSet};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // spritecut-test is at crates/spritecut-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get the path to a file inside the regout directory
pub fn regout_path(name: &str) -> String {
    format!("{}/{}", regout_dir(), name)
}

/// A filled `w x h` block of a single color with its top-left at `(x, y)`.
pub fn filled_rect(x: i32, y: i32, w: i32, h: i32, color: u32) -> PointSet {
    let mut set = PointSet::new();
    for px in x..x + w {
        for py in y..y + h {
            set.insert(Point::new(px, py), color);
        }
    }
    set
}

/// Merge several point sets; later sets win on overlapping points.
pub fn merge_sets<'a, I>(sets: I) -> PointSet
where
    I: IntoIterator<Item = &'a PointSet>,
{
    let mut merged = PointSet::new();
    for set in sets {
        merged.extend(set.iter());
    }
    merged
}
