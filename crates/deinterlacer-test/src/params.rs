//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::{golden_dir, regout_dir};
use deinterlacer_core::RasterBuffer;
use deinterlacer_io::ImageMeta;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files when they exist (default)
    #[default]
    Compare,
    /// Display mode - write outputs without golden comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from environment variable or string
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the test name, the running comparison index, and every failure,
/// so that one test function can run many checks and report them all.
pub struct RegParams {
    /// Name of the test (e.g., "smooth")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
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

        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
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

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `|expected - actual| <= delta`.
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

    /// Compare two rasters for exact equality of format and bytes
    pub fn compare_raster(&mut self, expected: &RasterBuffer, actual: &RasterBuffer) -> bool {
        self.index += 1;

        if expected.width() != actual.width()
            || expected.height() != actual.height()
            || expected.color_type() != actual.color_type()
            || expected.bit_depth() != actual.bit_depth()
        {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - format mismatch: \
                 {}x{} {:?} {} bit vs {}x{} {:?} {} bit",
                self.test_name,
                self.index,
                expected.width(),
                expected.height(),
                expected.color_type(),
                expected.bit_depth().bits(),
                actual.width(),
                actual.height(),
                actual.color_type(),
                actual.bit_depth().bits()
            );
            self.fail(msg);
            return false;
        }

        for (y, (e, a)) in expected.rows().zip(actual.rows()).enumerate() {
            if let Some(x) = e.iter().zip(a).position(|(p, q)| p != q) {
                let msg = format!(
                    "Failure in {}_reg: raster comparison for index {} - byte mismatch at \
                     row {}, column {}: expected {}, got {}",
                    self.test_name, self.index, y, x, e[x], a[x]
                );
                self.fail(msg);
                return false;
            }
        }

        true
    }

    /// Compare two binary data arrays
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

    /// Write a raster as PNG, read it back, and check it is unchanged
    ///
    /// The file lands in the regout directory. In generate mode it is also
    /// copied to the golden directory; in compare mode the decoded bytes
    /// are checked against the golden file when one exists.
    pub fn write_raster_and_check(
        &mut self,
        raster: &RasterBuffer,
        meta: &ImageMeta,
    ) -> TestResult<()> {
        let local_path = format!(
            "{}/{}.{:02}.png",
            regout_dir(),
            self.test_name,
            self.index + 1
        );

        deinterlacer_io::encode(&local_path, raster, meta).map_err(|e| {
            TestError::ImageWrite {
                path: local_path.clone(),
                message: e.to_string(),
            }
        })?;
        let (reread, _) =
            deinterlacer_io::decode(&local_path).map_err(|e| TestError::ImageRead {
                path: local_path.clone(),
                message: e.to_string(),
            })?;

        if self.compare_raster(raster, &reread) {
            self.check_file(&local_path)?;
        }
        Ok(())
    }

    /// Check a written PNG against its golden counterpart
    fn check_file(&mut self, local_path: &str) -> TestResult<()> {
        let golden_path = format!(
            "{}/{}_golden.{:02}.png",
            golden_dir(),
            self.test_name,
            self.index
        );

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path);
            }
            RegTestMode::Compare => {
                if !Path::new(&golden_path).exists() {
                    eprintln!("No golden file for index {}: {}", self.index, golden_path);
                    return Ok(());
                }

                let local = deinterlacer_io::decode(local_path);
                let golden = deinterlacer_io::decode(&golden_path);
                let same = match (local, golden) {
                    (Ok((a, _)), Ok((b, _))) => a == b,
                    _ => false,
                };
                if !same {
                    let msg = format!(
                        "Failure in {}_reg, index {}: comparing {} with {}",
                        self.test_name, self.index, local_path, golden_path
                    );
                    self.fail(msg);
                }
            }
            RegTestMode::Display => {
                // Nothing to do in display mode
            }
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all tests passed, `false` if any failed.
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
    use deinterlacer_core::{BitDepth, ColorType};

    #[test]
    fn test_mode_from_env() {
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values() {
        let mut rp = RegParams::new("test");
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.index(), 2);
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_raster_reports_mismatch() {
        let a = RasterBuffer::new(2, 2, ColorType::Grayscale, BitDepth::Eight).unwrap();
        let mut b = a.clone();
        let mut rp = RegParams::new("test");
        assert!(rp.compare_raster(&a, &b));

        b.set(1, 1, 9).unwrap();
        assert!(!rp.compare_raster(&a, &b));
        assert!(rp.failures()[0].contains("row 1, column 1"));

        let c = RasterBuffer::new(2, 2, ColorType::Grayscale, BitDepth::Four).unwrap();
        assert!(!rp.compare_raster(&a, &c));
    }
}
