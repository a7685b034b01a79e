//! Placement configuration and position index files
//!
//! The placement file maps a logical sprite sheet name to the point where
//! the sheet's center sits in the target coordinate space:
//!
//! ```json
//! { "hero": { "X": 640, "Y": 360 } }
//! ```
//!
//! The index file written after partitioning maps every extracted region
//! name to its center as an `"x,y"` string:
//!
//! ```json
//! { "hero-0": "615,340", "hero-1": "660,372" }
//! ```
//!
//! Both maps are ordered by name so output files are stable across runs.

use crate::IoResult;
use serde::Deserialize;
use spritecut_core::Point;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Region name to `"x,y"` center string
pub type PositionIndex = BTreeMap<String, String>;

/// On-disk form of a placement point
///
/// Keys match case-insensitively in the files this tool consumes, so both
/// spellings are accepted. A missing coordinate reads as 0, which the
/// pipeline treats as an unplaced sheet.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct Placement {
    #[serde(rename = "X", alias = "x", default)]
    x: i32,
    #[serde(rename = "Y", alias = "y", default)]
    y: i32,
}

impl From<Placement> for Point {
    fn from(p: Placement) -> Self {
        Point::new(p.x, p.y)
    }
}

/// Parse placement JSON text
pub fn parse_placements(json: &str) -> IoResult<BTreeMap<String, Point>> {
    let raw: BTreeMap<String, Placement> = serde_json::from_str(json)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

/// Load a placement file
pub fn load_placements<P: AsRef<Path>>(path: P) -> IoResult<BTreeMap<String, Point>> {
    let reader = BufReader::new(File::open(path)?);
    let raw: BTreeMap<String, Placement> = serde_json::from_reader(reader)?;
    Ok(raw.into_iter().map(|(k, v)| (k, v.into())).collect())
}

/// Write the position index as compact JSON
pub fn save_index<P: AsRef<Path>>(path: P, index: &PositionIndex) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, index)?;
    writer.flush()?;
    Ok(())
}

/// Name of the index file for a placement file: its base name plus `.json`
///
/// `conf/units.json` gives `units.json.json`, `conf/units` gives
/// `units.json`.
pub fn index_file_name<P: AsRef<Path>>(config_path: P) -> String {
    let base = config_path
        .as_ref()
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    format!("{}.json", base)
}
