//! edgemap-test - Regression test framework for edgemap
//!
//! This crate provides a small regression test harness and synthetic image
//! builders shared by the integration tests of the workspace crates.
//!
//! Two modes are supported:
//!
//! - **Compare**: Check every value and image, report failures (default)
//! - **Display**: Same checks, plus a line per comparison for inspection
//!
//! # Usage
//!
//! ```ignore
//! use edgemap_test::{RegParams, synthetic};
//!
//! let mut rp = RegParams::new("edge");
//! let pix = synthetic::uniform(16, 16, 0xff80_8080).unwrap();
//! rp.compare_values(16.0, pix.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"
//! - `RUST_LOG`: Log filter for the library crates (e.g. `edgemap_filter=trace`)

mod error;
mod params;
pub mod synthetic;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Install a test-friendly logger once per test binary.
///
/// Later calls are ignored, so every test may call this.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
