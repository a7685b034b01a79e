//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::regout_dir;
use spritecut_core::{Point, PointSet};
use std::fs;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Write outputs and verify them (default)
    #[default]
    Compare,
    /// Display mode - write outputs for inspection without verification
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: the test name, current check
/// index, mode, and accumulated failures.
pub struct RegParams {
    /// Name of the test (e.g., "partition")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        let mode = RegTestMode::from_env();

        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `actual` is within `delta` of `expected`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two point sets for exact equality, colors included
    ///
    /// On mismatch the first differing point is reported.
    pub fn compare_point_sets(&mut self, expected: &PointSet, actual: &PointSet) -> bool {
        self.index += 1;

        if expected == actual {
            return true;
        }

        let missing = expected.iter().find(|&(p, c)| actual.get(p) != Some(c));
        let extra = actual.points().find(|&p| !expected.contains(p));
        let detail = match (missing, extra) {
            (Some((p, c)), _) => format!(
                "point {} expected color {:#010x}, got {:?}",
                p,
                c,
                actual.get(p)
            ),
            (None, Some(p)) => format!("unexpected point {}", p),
            (None, None) => "sets differ".to_string(),
        };

        let msg = format!(
            "Failure in {}_reg: point set comparison for index {} - {}\n\
             sizes: expected {}, actual {}",
            self.test_name,
            self.index,
            detail,
            expected.len(),
            actual.len()
        );
        self.fail(msg);
        false
    }

    /// Compare two byte strings for exact equality
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write a region as a PNG into the regout directory
    ///
    /// In compare mode the file is read back and its pixels are checked
    /// against the region, shifted so the region's boundary starts at the
    /// origin. Returns the written path.
    pub fn write_region(&mut self, region: &PointSet) -> TestResult<String> {
        self.index += 1;

        let local_path = format!(
            "{}/{}.{:02}.png",
            regout_dir(),
            self.test_name,
            self.index
        );

        spritecut_io::write_region(region, &local_path).map_err(|e| TestError::ImageWrite {
            path: local_path.clone(),
            message: e.to_string(),
        })?;

        if self.mode == RegTestMode::Compare {
            let decoded =
                spritecut_io::read_points(&local_path).map_err(|e| TestError::ImageLoad {
                    path: local_path.clone(),
                    message: e.to_string(),
                })?;
            let origin = region.boundary().min;
            let expected: PointSet = region
                .iter()
                .map(|(p, c)| (Point::new(p.x - origin.x, p.y - origin.y), c))
                .collect();

            // compare_point_sets advances the index; keep one index per image
            self.index -= 1;
            self.compare_point_sets(&expected, &decoded);
        }

        Ok(local_path)
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all checks passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filled_rect;

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(mode, RegTestMode::Compare | RegTestMode::Display));
    }

    #[test]
    fn test_compare_values_within_delta() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::new("test");
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_point_sets() {
        let mut rp = RegParams::new("test");
        let a = filled_rect(0, 0, 3, 3, 0xff);
        let b = filled_rect(0, 0, 3, 3, 0xff);
        assert!(rp.compare_point_sets(&a, &b));

        let c = filled_rect(0, 0, 3, 2, 0xff);
        assert!(!rp.compare_point_sets(&a, &c));
        assert!(rp.failures()[0].contains("point (0,2)"));
        assert_eq!(rp.index(), 2);
    }
}
