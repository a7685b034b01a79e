//! Placement and position index regression test
//!
//! Run with:
//! ```
//! cargo test -p spritecut-io --test index_reg
//! ```

use spritecut_core::Point;
use spritecut_io::{PositionIndex, index_file_name, load_placements, save_index};
use spritecut_test::{RegParams, regout_path};

#[test]
fn index_reg() {
    let mut rp = RegParams::new("index");

    // -----------------------------------------------------------
    // Placement file
    // -----------------------------------------------------------
    let conf_path = regout_path("index_units");
    std::fs::write(
        &conf_path,
        r#"{
            "knight": {"X": 320, "Y": 240},
            "archer": {"X": 100, "Y": 0},
            "mage": {"x": -40, "y": 12}
        }"#,
    )
    .unwrap();

    let placements = load_placements(&conf_path).unwrap();
    rp.compare_values(3.0, placements.len() as f64, 0.0); // 1
    let names: Vec<&str> = placements.keys().map(String::as_str).collect();
    rp.compare_strings(
        names.join(",").as_bytes(),
        b"archer,knight,mage",
    ); // 2
    rp.compare_values(
        1.0,
        (placements["knight"] == Point::new(320, 240)) as u8 as f64,
        0.0,
    ); // 3
    rp.compare_values(
        1.0,
        (placements["mage"] == Point::new(-40, 12)) as u8 as f64,
        0.0,
    ); // 4

    // -----------------------------------------------------------
    // Index file
    // -----------------------------------------------------------
    let mut index = PositionIndex::new();
    index.insert("knight-1".to_string(), "330,250".to_string());
    index.insert("knight-0".to_string(), "300,230".to_string());

    let index_name = index_file_name(&conf_path);
    rp.compare_strings(index_name.as_bytes(), b"index_units.json"); // 5

    let index_path = regout_path(&index_name);
    save_index(&index_path, &index).unwrap();
    let written = std::fs::read(&index_path).unwrap();
    rp.compare_strings(&written, br#"{"knight-0":"300,230","knight-1":"330,250"}"#); // 6

    // -----------------------------------------------------------
    // Failures
    // -----------------------------------------------------------
    let bad_path = regout_path("index_bad");
    std::fs::write(&bad_path, "{\"knight\": ").unwrap();
    rp.compare_values(1.0, load_placements(&bad_path).is_err() as u8 as f64, 0.0); // 7
    let missing = load_placements(regout_path("index_missing"));
    rp.compare_values(1.0, missing.is_err() as u8 as f64, 0.0); // 8

    assert!(rp.cleanup(), "index regression test failed");
}
