//! Gap-tolerant region growth
//!
//! Sprites drawn with antialiasing have ragged edges and invisible holes,
//! so strict 4/8-neighbor flood fill splits one sprite into many pieces.
//! Growth here instead hops between *sample locations* on a lattice of
//! pitch `2·step` anchored at the seed. A sample location joins the region
//! when the window around it (see [`crate::window`]) holds at least one
//! unassigned point; every point in that window is absorbed and the
//! location is expanded further.
//!
//! Two consequences of anchoring the lattice at the seed:
//!
//! - points up to `step` apart always end up in the same region
//! - a point on an axis through the seed with nothing in between joins the
//!   seed's region when it is less than `3·step` away in `+x`/`+y`, or up to
//!   `3·step` away inclusive in `-x`/`-y` (windows are half-open)

use crate::error::{RegionError, RegionResult};
use crate::visit::VisitSet;
use crate::window::{window_points, window_rect};
use spritecut_core::{Point, Rect};
use std::collections::{BTreeSet, HashSet, VecDeque};

/// Largest accepted step. Keeps every window and jump well inside `i32`.
pub const MAX_STEP: u32 = 1 << 20;

/// Compass directions, in the order growth tries them
///
/// North is `+y`; the lattice does not care which way the image is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions in canonical order
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Unit offset `(dx, dy)`
    pub fn unit(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::NorthEast => (1, 1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, -1),
            Direction::South => (0, -1),
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
        }
    }

    /// The next sample location `2·step` away, `None` on coordinate overflow.
    pub fn jump(self, from: Point, step: i32) -> Option<Point> {
        let (dx, dy) = self.unit();
        from.checked_offset(dx * 2 * step, dy * 2 * step)
    }
}

/// Validate a step and convert it for coordinate arithmetic.
///
/// # Errors
///
/// Returns [`RegionError::InvalidStep`] for 0 or anything above [`MAX_STEP`].
pub fn checked_step(step: u32) -> RegionResult<i32> {
    if step == 0 || step > MAX_STEP {
        return Err(RegionError::InvalidStep {
            step,
            max: MAX_STEP,
        });
    }
    Ok(step as i32)
}

/// Grow the region containing `seed`.
///
/// Only points still in `visit` can join; `bounds` is the bounding
/// rectangle of the whole sheet and clips every window. Returns the
/// member points; `visit` is left untouched.
///
/// # Errors
///
/// - [`RegionError::InvalidStep`] if `step` is 0 or too large
/// - [`RegionError::SeedNotFound`] if `seed` is not in `visit`
pub fn grow_region(
    bounds: &Rect,
    step: u32,
    seed: Point,
    visit: &VisitSet,
) -> RegionResult<BTreeSet<Point>> {
    let step = checked_step(step)?;
    if !visit.contains(seed) {
        return Err(RegionError::SeedNotFound {
            x: seed.x,
            y: seed.y,
        });
    }

    let mut region: BTreeSet<Point> = window_points(&window_rect(bounds, seed, step), visit)
        .into_iter()
        .collect();

    // Sample locations already tested, whether or not they were fruitful
    let mut expect: HashSet<Point> = HashSet::new();
    expect.insert(seed);

    let mut queue = VecDeque::new();
    queue.push_back(seed);

    while let Some(head) = queue.pop_front() {
        for dir in Direction::ALL {
            let Some(next) = dir.jump(head, step) else {
                continue;
            };
            if !expect.insert(next) {
                continue;
            }

            let rect = window_rect(bounds, next, step);
            if rect.is_empty() {
                continue;
            }

            let near = window_points(&rect, visit);
            if near.is_empty() {
                continue;
            }

            region.extend(near);
            queue.push_back(next);
        }
    }

    tracing::trace!(
        seed = %seed,
        members = region.len(),
        samples = expect.len(),
        "region grown"
    );

    Ok(region)
}
