//! Point - Integer image coordinate

/// An integer (x, y) coordinate in image space.
///
/// Ordering is x first, then y. The partitioner relies on this ordering
/// to pick the next unassigned point deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    /// X coordinate
    pub x: i32,
    /// Y coordinate
    pub y: i32,
}

impl Point {
    /// The origin.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this point shifted by `(dx, dy)`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Return this point shifted by `(dx, dy)`, or `None` on overflow.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
