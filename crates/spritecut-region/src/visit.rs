//! Working set of points not yet assigned to a region

use spritecut_core::{Point, PointSet};
use std::collections::BTreeSet;

/// Points still waiting to be assigned to a region.
///
/// Created from a [`PointSet`] at the start of a partition and shrunk
/// monotonically until empty. Kept ordered so the next seed and every
/// window query come out in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitSet {
    remaining: BTreeSet<Point>,
}

impl VisitSet {
    /// Mark every point of `points` as unassigned
    pub fn from_points(points: &PointSet) -> Self {
        Self {
            remaining: points.points().collect(),
        }
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.remaining.contains(&p)
    }

    /// Mark a point as assigned. Returns `false` if it already was.
    pub fn remove(&mut self, p: Point) -> bool {
        self.remaining.remove(&p)
    }

    /// The smallest remaining point in (x, y) order
    pub fn first(&self) -> Option<Point> {
        self.remaining.first().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remaining points in column `x` with `y_min <= y < y_max`, ascending.
    pub(crate) fn column(&self, x: i32, y_min: i32, y_max: i32) -> impl Iterator<Item = Point> + '_ {
        self.remaining
            .range(Point::new(x, y_min)..Point::new(x, y_max))
            .copied()
    }
}

impl FromIterator<Point> for VisitSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            remaining: iter.into_iter().collect(),
        }
    }
}
