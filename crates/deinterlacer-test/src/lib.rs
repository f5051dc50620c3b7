//! deinterlacer-test - Regression test framework for the deinterlacer
//!
//! Provides [`RegParams`], which counts and reports comparisons the way a
//! regression harness does, plus synthetic fixtures so tests never depend
//! on image files checked into the repository:
//!
//! - [`fixtures::random_raster`] / [`fixtures::gradient_raster`] - rasters
//!   in any legal color type and bit depth
//! - [`fixtures::write_interlaced_png`] - an Adam7 PNG writer, since the
//!   codec only emits non-interlaced files
//!
//! # Usage
//!
//! ```ignore
//! use deinterlacer_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("smooth");
//! rp.compare_raster(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // deinterlacer-test is at crates/deinterlacer-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Get a path inside the regout directory, creating the directory first
pub fn regout_path(name: &str) -> String {
    let _ = std::fs::create_dir_all(regout_dir());
    format!("{}/{}", regout_dir(), name)
}
