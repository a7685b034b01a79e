//! Rect - Half-open rectangle regions
//!
//! A `Rect` covers the cells `min.x <= x < max.x`, `min.y <= y < max.y`.

use crate::error::{Error, Result};
use crate::point::Point;

/// An axis-aligned half-open rectangle
///
/// A small `Copy` type; rectangles are created and discarded freely while
/// searching windows, so there is no shared ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Top-left corner (inclusive)
    pub min: Point,
    /// Bottom-right corner (exclusive)
    pub max: Point,
}

impl Rect {
    /// The zero rectangle, returned for empty inputs and empty intersections.
    pub const ZERO: Rect = Rect {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    /// Create a rectangle from its corners without validation
    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from origin and size
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative, or if the far
    /// corner does not fit in `i32`.
    pub fn from_xywh(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "rect dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        match (x.checked_add(w), y.checked_add(h)) {
            (Some(max_x), Some(max_y)) => Ok(Self {
                min: Point::new(x, y),
                max: Point::new(max_x, max_y),
            }),
            _ => Err(Error::InvalidParameter(format!(
                "rect corner out of range: x={}, y={}, w={}, h={}",
                x, y, w, h
            ))),
        }
    }

    /// Width (0 for inverted rectangles, saturating at `i32::MAX`)
    #[inline]
    pub fn width(&self) -> i32 {
        span(self.min.x, self.max.x).min(i32::MAX as i64) as i32
    }

    /// Height (0 for inverted rectangles, saturating at `i32::MAX`)
    #[inline]
    pub fn height(&self) -> i32 {
        span(self.min.y, self.max.y).min(i32::MAX as i64) as i32
    }

    /// Number of cells covered
    #[inline]
    pub fn area(&self) -> i64 {
        span(self.min.x, self.max.x) * span(self.min.y, self.max.y)
    }

    /// Check if the rectangle covers no cells
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Check if a point is inside the rectangle
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Integer midpoint of the two corners
    pub fn center(&self) -> Point {
        let mid = |a: i32, b: i32| ((a as i64 + b as i64) / 2) as i32;
        Point::new(mid(self.min.x, self.max.x), mid(self.min.y, self.max.y))
    }

    /// Compute the intersection of two rectangles
    ///
    /// Disjoint rectangles intersect to [`Rect::ZERO`].
    pub fn intersect(&self, other: &Rect) -> Rect {
        let r = Rect {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Rect::ZERO } else { r }
    }

    /// Square of half-width `radius` centered on `center`: `[c - r, c + r)`.
    ///
    /// Corners saturate at the `i32` range.
    pub fn around(center: Point, radius: i32) -> Rect {
        Rect {
            min: Point::new(
                center.x.saturating_sub(radius),
                center.y.saturating_sub(radius),
            ),
            max: Point::new(
                center.x.saturating_add(radius),
                center.y.saturating_add(radius),
            ),
        }
    }
}

/// Length of `[min, max)`, or 0 when inverted
#[inline]
fn span(min: i32, max: i32) -> i64 {
    (max as i64 - min as i64).max(0)
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xywh() {
        let r = Rect::from_xywh(2, 3, 4, 5).unwrap();
        assert_eq!(r.min, Point::new(2, 3));
        assert_eq!(r.max, Point::new(6, 8));
        assert_eq!(r.width(), 4);
        assert_eq!(r.height(), 5);
        assert_eq!(r.area(), 20);
        assert!(Rect::from_xywh(0, 0, -1, 2).is_err());
    }

    #[test]
    fn test_empty() {
        assert!(Rect::ZERO.is_empty());
        assert!(Rect::new(Point::new(0, 0), Point::new(5, 0)).is_empty());
        assert!(Rect::new(Point::new(3, 3), Point::new(1, 9)).is_empty());
        assert!(!Rect::new(Point::new(0, 0), Point::new(1, 1)).is_empty());
    }

    #[test]
    fn test_contains_point_half_open() {
        let r = Rect::new(Point::new(0, 0), Point::new(3, 3));
        assert!(r.contains_point(Point::new(0, 0)));
        assert!(r.contains_point(Point::new(2, 2)));
        assert!(!r.contains_point(Point::new(3, 2)));
        assert!(!r.contains_point(Point::new(-1, 0)));
    }

    #[test]
    fn test_intersect() {
        let a = Rect::new(Point::new(0, 0), Point::new(10, 10));
        let b = Rect::new(Point::new(5, -5), Point::new(15, 5));
        assert_eq!(
            a.intersect(&b),
            Rect::new(Point::new(5, 0), Point::new(10, 5))
        );

        let c = Rect::new(Point::new(10, 0), Point::new(12, 2));
        assert_eq!(a.intersect(&c), Rect::ZERO);
    }

    #[test]
    fn test_around() {
        let r = Rect::around(Point::new(6, 0), 3);
        assert_eq!(r, Rect::new(Point::new(3, -3), Point::new(9, 3)));
        assert_eq!(r.width(), 6);
    }

    #[test]
    fn test_center() {
        let r = Rect::new(Point::new(0, 0), Point::new(10, 7));
        assert_eq!(r.center(), Point::new(5, 3));
    }

    #[test]
    fn test_extreme_corners() {
        let r = Rect::new(Point::new(i32::MIN, -1), Point::new(i32::MAX, 1));
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.height(), 2);
        assert_eq!(r.area(), (u32::MAX as i64) * 2);
        assert_eq!(r.center(), Point::new(0, 0));

        let edge = Rect::new(Point::new(i32::MAX - 4, 0), Point::new(i32::MAX, 2));
        assert_eq!(edge.width(), 4);
        assert_eq!(edge.center(), Point::new(i32::MAX - 2, 1));

        assert!(Rect::from_xywh(i32::MAX, 0, 1, 1).is_err());
        assert!(Rect::from_xywh(i32::MAX - 1, 0, 1, 1).is_ok());
    }
}
