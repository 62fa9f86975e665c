//! Regression test parameters and operations

use crate::error::TestError;
use edgemap_core::{FPix, Pix};

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Check values and report failures (default)
    #[default]
    Compare,
    /// Check values and print every comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        Self::parse(&std::env::var("REGTEST_MODE").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, mode, and recorded failures.
pub struct RegParams {
    /// Name of the test (e.g., "edge")
    pub test_name: String,
    /// Current test index (incremented before each comparison)
    index: usize,
    /// Test mode
    pub mode: RegTestMode,
    /// Recorded failures
    failures: Vec<TestError>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode comes from the `REGTEST_MODE` environment variable. A test
    /// logger is installed so library logs appear under `RUST_LOG`.
    pub fn new(test_name: &str) -> Self {
        crate::init_logging();
        let mode = RegTestMode::from_env();

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
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

    fn record(&mut self, failure: TestError) {
        eprintln!("Failure in {}_reg: {}", self.test_name, failure);
        self.failures.push(failure);
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();
        if self.display() {
            eprintln!(
                "  [{:02}] expected {}, actual {}, delta {}",
                self.index, expected, actual, delta
            );
        }

        if diff > delta || diff.is_nan() {
            self.record(TestError::ValueMismatch {
                index: self.index,
                expected,
                actual,
                delta,
            });
            false
        } else {
            true
        }
    }

    /// Check a condition, counted as one comparison
    pub fn compare_true(&mut self, condition: bool) -> bool {
        self.compare_values(1.0, if condition { 1.0 } else { 0.0 }, 0.0)
    }

    /// Compare two Pix images for exact equality
    ///
    /// # Returns
    ///
    /// `true` if images have the same size and identical pixels.
    pub fn compare_pix(&mut self, pix1: &Pix, pix2: &Pix) -> bool {
        self.index += 1;

        if !pix1.sizes_equal(pix2) {
            eprintln!(
                "  [{:02}] dimension mismatch: {:?} vs {:?}",
                self.index,
                pix1.dimensions(),
                pix2.dimensions()
            );
            self.record(TestError::PixMismatch { index: self.index });
            return false;
        }

        let mismatch = (0..pix1.height())
            .flat_map(|y| (0..pix1.width()).map(move |x| (x, y)))
            .find(|&(x, y)| pix1.get_pixel(x, y) != pix2.get_pixel(x, y));
        if let Some((x, y)) = mismatch {
            eprintln!("  [{:02}] pixel mismatch at ({}, {})", self.index, x, y);
            self.record(TestError::PixMismatch { index: self.index });
            return false;
        }

        true
    }

    /// Compare two floating-point images cell by cell within `delta`
    pub fn compare_fpix(&mut self, fpix1: &FPix, fpix2: &FPix, delta: f32) -> bool {
        self.index += 1;

        let same_size = fpix1.dimensions() == fpix2.dimensions();
        let close = same_size
            && fpix1
                .data()
                .iter()
                .zip(fpix2.data())
                .all(|(a, b)| (a - b).abs() <= delta);
        if !close {
            self.record(TestError::PixMismatch { index: self.index });
        }
        close
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all comparisons passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        let success = self.failures.is_empty();
        if success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        success
    }

    /// Check if all comparisons have passed so far
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Get list of failures
    pub fn failures(&self) -> &[TestError] {
        &self.failures
    }
}
