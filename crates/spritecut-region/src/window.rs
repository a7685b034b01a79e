//! Window query
//!
//! A window is the `2·step`-wide square `[c - step, c + step)` around a
//! sample location, clipped to the bounding rectangle of the whole sheet.
//! Querying it returns the unassigned points inside. This is the dominant
//! per-step cost of region growth, so larger steps make growth both more
//! gap tolerant and slower.

use crate::visit::VisitSet;
use spritecut_core::{Point, Rect};

/// The search window around `center`, clipped to `bounds`.
///
/// Returns an empty rectangle when the window lies outside `bounds`.
pub fn window_rect(bounds: &Rect, center: Point, step: i32) -> Rect {
    bounds.intersect(&Rect::around(center, step))
}

/// Unassigned points inside `rect`, in x-major then y order.
pub fn window_points(rect: &Rect, visit: &VisitSet) -> Vec<Point> {
    if rect.is_empty() {
        return Vec::new();
    }

    let mut pts = Vec::new();
    for x in rect.min.x..rect.max.x {
        pts.extend(visit.column(x, rect.min.y, rect.max.y));
    }
    pts
}
