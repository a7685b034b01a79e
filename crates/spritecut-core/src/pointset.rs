//! PointSet - Sparse set of colored points
//!
//! A sprite sheet is mostly empty space. Storing only the visible pixels
//! keyed by coordinate keeps the partitioner's lookups proportional to the
//! sprites themselves rather than to the canvas.
//!
//! # Invariant
//!
//! A `PointSet` never holds a fully transparent pixel: inserting one is a
//! no-op. Entries are kept in [`Point`] order, so equal sets iterate
//! identically and compare equal regardless of insertion order.

use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::color;
use crate::error::{Error, Result};
use crate::point::Point;
use crate::raster::Raster;
use crate::rect::Rect;

/// Sparse mapping from [`Point`] to packed RGBA color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointSet {
    points: BTreeMap<Point, u32>,
}

impl PointSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            points: BTreeMap::new(),
        }
    }

    /// Build a set from the visible pixels of a raster.
    ///
    /// Pixel `(x, y)` of the raster becomes point `(x, y)`; fully
    /// transparent pixels are skipped.
    pub fn from_raster(raster: &Raster) -> Self {
        let width = raster.width() as usize;
        let mut set = Self::new();
        for (i, &pixel) in raster.pixels().iter().enumerate() {
            if color::is_transparent(pixel) {
                continue;
            }
            let x = (i % width) as i32;
            let y = (i / width) as i32;
            set.points.insert(Point::new(x, y), pixel);
        }
        set
    }

    /// Render the set into a raster that exactly covers its boundary.
    ///
    /// Returns the raster together with the boundary's top-left corner, so
    /// raster pixel `(0, 0)` corresponds to that point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NullInput`] for an empty set and
    /// [`Error::CoordinateOverflow`] when the boundary does not fit in `i32`.
    pub fn to_raster(&self) -> Result<(Raster, Point)> {
        if self.is_empty() {
            return Err(Error::NullInput("point set"));
        }
        let bounds = self.try_boundary()?;
        let offset = |v: i32, min: i32| (v as i64 - min as i64) as u32;
        let mut raster = Raster::new(
            offset(bounds.max.x, bounds.min.x),
            offset(bounds.max.y, bounds.min.y),
        )?;
        for (&p, &pixel) in &self.points {
            raster.set_pixel(
                offset(p.x, bounds.min.x),
                offset(p.y, bounds.min.y),
                pixel,
            )?;
        }
        Ok((raster, bounds.min))
    }

    /// Insert a point, returning `false` if its color is fully transparent
    /// and the set was left unchanged.
    pub fn insert(&mut self, p: Point, pixel: u32) -> bool {
        if color::is_transparent(pixel) {
            return false;
        }
        self.points.insert(p, pixel);
        true
    }

    /// Color of the point, if present
    #[inline]
    pub fn get(&self, p: Point) -> Option<u32> {
        self.points.get(&p).copied()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.points.contains_key(&p)
    }

    pub fn remove(&mut self, p: Point) -> Option<u32> {
        self.points.remove(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate `(point, color)` pairs in point order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.points.iter(),
        }
    }

    /// Iterate the points in point order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.points.keys().copied()
    }

    /// Minimal half-open rectangle covering every point.
    ///
    /// Returns `[min_x, min_y] .. [max_x + 1, max_y + 1]`, or
    /// [`Rect::ZERO`] for an empty set. The far corner saturates at
    /// `i32::MAX`, so a point on that row or column falls outside the
    /// result; use [`PointSet::try_boundary`] to reject such sets instead.
    pub fn boundary(&self) -> Rect {
        match self.extremes() {
            Some((min, max)) => Rect::new(
                min,
                Point::new(max.x.saturating_add(1), max.y.saturating_add(1)),
            ),
            None => Rect::ZERO,
        }
    }

    /// Like [`PointSet::boundary`], but fails instead of saturating.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOverflow`] naming a point with
    /// `x == i32::MAX` or `y == i32::MAX`.
    pub fn try_boundary(&self) -> Result<Rect> {
        let Some((min, max)) = self.extremes() else {
            return Ok(Rect::ZERO);
        };
        match (max.x.checked_add(1), max.y.checked_add(1)) {
            (Some(x), Some(y)) => Ok(Rect::new(min, Point::new(x, y))),
            _ => {
                let p = self
                    .points()
                    .find(|p| p.x == i32::MAX || p.y == i32::MAX)
                    .unwrap_or(max);
                Err(Error::CoordinateOverflow { x: p.x, y: p.y })
            }
        }
    }

    /// Componentwise minimum and maximum over all points
    fn extremes(&self) -> Option<(Point, Point)> {
        let mut iter = self.points.keys();
        let first = iter.next()?;

        let (mut min_x, mut min_y) = (first.x, first.y);
        let (mut max_x, mut max_y) = (first.x, first.y);
        for p in iter {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }

    /// Integer midpoint of the boundary
    pub fn center(&self) -> Point {
        self.boundary().center()
    }
}

/// Iterator over `(Point, color)` pairs of a [`PointSet`]
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, Point, u32>,
}

impl Iterator for Iter<'_> {
    type Item = (Point, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&p, &c)| (p, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = (Point, u32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(Point, u32)> for PointSet {
    fn from_iter<I: IntoIterator<Item = (Point, u32)>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<(Point, u32)> for PointSet {
    fn extend<I: IntoIterator<Item = (Point, u32)>>(&mut self, iter: I) {
        for (p, c) in iter {
            self.insert(p, c);
        }
    }
}
