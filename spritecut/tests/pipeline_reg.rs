//! Batch pipeline regression test
//!
//! Builds a small source directory of sheets and a placement file under
//! `tests/regout/`, runs the pipeline and checks the sprites and the
//! position index it writes.
//!
//! Run with:
//! ```
//! cargo test -p spritecut --test pipeline_reg
//! ```

use spritecut::config::SplitConfig;
use spritecut::io::{ImageFormat, read_points, write_image};
use spritecut::region::DiscardPolicy;
use spritecut::{Point, PointSet, Raster, color, run};
use spritecut_test::{RegParams, filled_rect, merge_sets, regout_path};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const RED: u32 = 0xc020_20ff;
const GREEN: u32 = 0x20c0_20ff;

/// Render points at their own coordinates on a `w x h` sheet
fn write_sheet(path: &Path, w: u32, h: u32, points: &PointSet) {
    let mut raster = Raster::new(w, h).unwrap();
    for (p, c) in points {
        raster.set_pixel(p.x as u32, p.y as u32, c).unwrap();
    }
    write_image(&raster, path, ImageFormat::Png).unwrap();
}

/// Fresh, empty source and output directories for one test case
fn make_dirs(case: &str) -> (PathBuf, PathBuf) {
    let src = PathBuf::from(regout_path(&format!("{}_src", case)));
    let out = PathBuf::from(regout_path(&format!("{}_out", case)));
    for dir in [&src, &out] {
        let _ = fs::remove_dir_all(dir);
    }
    fs::create_dir_all(&src).unwrap();
    (src, out)
}

fn shift_to_origin(points: &PointSet) -> PointSet {
    let origin = points.boundary().min;
    points
        .iter()
        .map(|(p, c)| (Point::new(p.x - origin.x, p.y - origin.y), c))
        .collect()
}

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");
    let (src, out) = make_dirs("pipeline");

    // "hero": two sprites far apart plus one noise pixel
    let sprite_a = filled_rect(2, 2, 10, 10, RED);
    let sprite_b = filled_rect(25, 5, 8, 8, GREEN);
    let mut hero = merge_sets([&sprite_a, &sprite_b]);
    hero.insert(Point::new(55, 28), color::compose_rgb(255, 255, 255));
    write_sheet(&src.join("hero.png"), 60, 30, &hero);

    // "speck": nothing large enough to keep
    write_sheet(&src.join("speck.png"), 8, 8, &filled_rect(3, 3, 2, 2, RED));

    // "ghost" has no source sheet at all; its zero placement skips it
    let conf_path = src.join("units");
    fs::write(
        &conf_path,
        r#"{"hero": {"X": 1000, "Y": 500}, "speck": {"X": 50, "Y": 60}, "ghost": {"X": 0, "Y": 70}}"#,
    )
    .unwrap();

    let config = SplitConfig::new(&conf_path, &src, &out);
    let summary = run(&config).unwrap();
    rp.compare_values(2.0, summary.images_processed as f64, 0.0); // 1
    rp.compare_values(1.0, summary.images_skipped as f64, 0.0); // 2
    rp.compare_values(2.0, summary.regions_written as f64, 0.0); // 3
    rp.compare_values(5.0, summary.points_discarded as f64, 0.0); // 4

    // -----------------------------------------------------------
    // Sprites
    // -----------------------------------------------------------
    let hero0 = read_points(out.join("hero-0.png")).unwrap();
    let hero1 = read_points(out.join("hero-1.png")).unwrap();
    rp.compare_point_sets(&shift_to_origin(&sprite_a), &hero0); // 5
    rp.compare_point_sets(&shift_to_origin(&sprite_b), &hero1); // 6
    rp.compare_values(0.0, out.join("hero-2.png").exists() as u8 as f64, 0.0); // 7
    rp.compare_values(0.0, out.join("speck-0.png").exists() as u8 as f64, 0.0); // 8

    // -----------------------------------------------------------
    // Index
    // -----------------------------------------------------------
    // Sheet boundary (2,2)-(56,29): top-left at (1000 - 270, 500 - 135)
    rp.compare_values(
        1.0,
        (summary.index_path == out.join("units.json")) as u8 as f64,
        0.0,
    ); // 9
    let text = fs::read_to_string(&summary.index_path).unwrap();
    let index: BTreeMap<String, String> = serde_json::from_str(&text).unwrap();
    rp.compare_values(2.0, index.len() as f64, 0.0); // 10
    rp.compare_strings(index["hero-0"].as_bytes(), b"800,435"); // 11
    rp.compare_strings(index["hero-1"].as_bytes(), b"1020,455"); // 12

    assert!(rp.cleanup(), "pipeline regression test failed");
}

#[test]
fn pipeline_options_reg() {
    let mut rp = RegParams::new("pipeline_options");
    let (src, out) = make_dirs("pipeline_options");

    // Sprites with a 5-column gap: one sprite at step 3, two at step 1.
    // The sheet is PNG data under a .jpg name; sources are decoded by content.
    let sheet = merge_sets([&filled_rect(0, 0, 6, 6, RED), &filled_rect(11, 0, 6, 6, GREEN)]);
    write_sheet(&src.join("pair.jpg"), 17, 6, &sheet);
    fs::write(src.join("pairs.json"), r#"{"pair": {"X": 100, "Y": 100}}"#).unwrap();

    let mut config = SplitConfig::new(src.join("pairs.json"), &src, &out);
    config.ext = ".jpg".to_string();
    let summary = run(&config).unwrap();
    rp.compare_values(1.0, summary.regions_written as f64, 0.0); // 1
    rp.compare_values(1.0, out.join("pair-0.jpg").exists() as u8 as f64, 0.0); // 2

    config.options.step = 1;
    config.options.discard = DiscardPolicy::WholeRegion;
    let summary = run(&config).unwrap();
    rp.compare_values(2.0, summary.regions_written as f64, 0.0); // 3

    // step 1, scale 1: sheet (0,0)-(17,6) has its top-left at (92, 97)
    config.scale = 1;
    run(&config).unwrap();
    let text = fs::read_to_string(out.join("pairs.json.json")).unwrap();
    let index: BTreeMap<String, String> = serde_json::from_str(&text).unwrap();
    rp.compare_strings(index["pair-0"].as_bytes(), b"95,100"); // 4
    rp.compare_strings(index["pair-1"].as_bytes(), b"106,100"); // 5

    assert!(rp.cleanup(), "pipeline_options regression test failed");
}

#[test]
fn pipeline_errors_reg() {
    let mut rp = RegParams::new("pipeline_errors");
    let (src, out) = make_dirs("pipeline_errors");

    // Source sheet missing for a placed entry
    let conf_path = src.join("missing.json");
    fs::write(&conf_path, r#"{"nobody": {"X": 10, "Y": 10}}"#).unwrap();
    let result = run(&SplitConfig::new(&conf_path, &src, &out));
    rp.compare_values(1.0, result.is_err() as u8 as f64, 0.0); // 1
    rp.compare_values(0.0, out.join("missing.json.json").exists() as u8 as f64, 0.0); // 2

    // Malformed placement file
    let bad_path = src.join("bad.json");
    fs::write(&bad_path, "[1, 2, 3]").unwrap();
    let result = run(&SplitConfig::new(&bad_path, &src, &out));
    rp.compare_values(1.0, result.is_err() as u8 as f64, 0.0); // 3

    // Output would overwrite the sources
    let result = run(&SplitConfig::new(&conf_path, &src, &src));
    rp.compare_values(1.0, result.is_err() as u8 as f64, 0.0); // 4

    assert!(rp.cleanup(), "pipeline_errors regression test failed");
}
