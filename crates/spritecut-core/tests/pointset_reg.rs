//! Point set regression test
//!
//! Exercises conversion between dense rasters and sparse point sets, and
//! the boundary computations the partitioner and pipeline rely on.
//!
//! Run with:
//! ```
//! cargo test -p spritecut-core --test pointset_reg
//! ```

use spritecut_core::{Point, PointSet, Raster, Rect, color};
use spritecut_test::{RegParams, filled_rect, merge_sets};

#[test]
fn pointset_reg() {
    let mut rp = RegParams::new("pointset");

    // -----------------------------------------------------------
    // Raster to points skips transparent pixels
    // -----------------------------------------------------------
    let mut raster = Raster::new(12, 9).unwrap();
    for (x, y) in [(1, 1), (2, 1), (10, 7), (5, 8)] {
        raster
            .set_pixel(x, y, color::compose_rgb(x as u8 * 10, y as u8 * 10, 0))
            .unwrap();
    }
    let points = PointSet::from_raster(&raster);
    rp.compare_values(4.0, points.len() as f64, 0.0); // 1
    rp.compare_values(
        color::compose_rgb(100, 70, 0) as f64,
        points.get(Point::new(10, 7)).unwrap_or(0) as f64,
        0.0,
    ); // 2

    // -----------------------------------------------------------
    // Boundary is min .. max + 1
    // -----------------------------------------------------------
    let b = points.boundary();
    rp.compare_values(
        1.0,
        (b == Rect::new(Point::new(1, 1), Point::new(11, 9))) as u8 as f64,
        0.0,
    ); // 3
    rp.compare_values(10.0, b.width() as f64, 0.0); // 4
    rp.compare_values(8.0, b.height() as f64, 0.0); // 5
    rp.compare_values(
        1.0,
        (PointSet::new().boundary() == Rect::ZERO) as u8 as f64,
        0.0,
    ); // 6

    // -----------------------------------------------------------
    // Points back to a cropped raster
    // -----------------------------------------------------------
    let (cropped, origin) = points.to_raster().unwrap();
    rp.compare_values(1.0, (origin == Point::new(1, 1)) as u8 as f64, 0.0); // 7
    rp.compare_values(10.0, cropped.width() as f64, 0.0); // 8
    rp.compare_values(8.0, cropped.height() as f64, 0.0); // 9
    rp.compare_values(4.0, cropped.count_opaque() as f64, 0.0); // 10
    let shifted: PointSet = PointSet::from_raster(&cropped)
        .iter()
        .map(|(p, c)| (p.offset(origin.x, origin.y), c))
        .collect();
    rp.compare_point_sets(&points, &shifted); // 11

    // -----------------------------------------------------------
    // Negative coordinates and merging
    // -----------------------------------------------------------
    let sheet = merge_sets([
        &filled_rect(-5, -5, 3, 3, color::compose_rgb(255, 0, 0)),
        &filled_rect(4, 2, 2, 2, color::compose_rgb(0, 255, 0)),
    ]);
    rp.compare_values(13.0, sheet.len() as f64, 0.0); // 12
    rp.compare_values(
        1.0,
        (sheet.boundary() == Rect::new(Point::new(-5, -5), Point::new(6, 4))) as u8 as f64,
        0.0,
    ); // 13
    rp.compare_values(
        1.0,
        (sheet.center() == Point::new(0, 0)) as u8 as f64,
        0.0,
    ); // 14
    let first = sheet.points().next();
    rp.compare_values(
        1.0,
        (first == Some(Point::new(-5, -5))) as u8 as f64,
        0.0,
    ); // 15

    assert!(rp.cleanup(), "pointset regression test failed");
}
