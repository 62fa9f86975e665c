//! Magnitude calibration
//!
//! Gradient magnitudes are mapped to gray levels by a linear rescale from a
//! [`CalibrationRange`] into `[0, 1]`, clamped, then scaled by
//! [`GRAY_LEVELS`] and truncated.
//!
//! The default range is fixed at `0.0..=700.0` and does not depend on the
//! image. An image-derived range is available through
//! [`CalibrationRange::from_gradient`] but is never applied implicitly,
//! because it changes output values.

use crate::{FilterError, FilterResult};
use edgemap_core::FPix;

/// Default lower magnitude bound
pub const DEFAULT_MIN_MAGNITUDE: f64 = 0.0;

/// Default upper magnitude bound
pub const DEFAULT_MAX_MAGNITUDE: f64 = 700.0;

/// Scale applied to the normalized fraction. Output gray levels are `0..=254`.
pub const GRAY_LEVELS: f64 = 254.0;

/// Magnitude bounds used to rescale gradients into gray levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationRange {
    min: f64,
    max: f64,
}

impl Default for CalibrationRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_MAGNITUDE,
            max: DEFAULT_MAX_MAGNITUDE,
        }
    }
}

impl CalibrationRange {
    /// Create a range from explicit bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCalibration`] unless both bounds are
    /// finite and `min < max`.
    pub fn new(min: f64, max: f64) -> FilterResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(FilterError::InvalidCalibration { min, max });
        }
        Ok(Self { min, max })
    }

    /// Derive the range from the interior cells of a gradient grid.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidCalibration`] when the grid has no
    /// interior or every interior magnitude is equal.
    pub fn from_gradient(gradient: &FPix) -> FilterResult<Self> {
        let (lo, hi) = gradient
            .interior_range()
            .ok_or(FilterError::InvalidCalibration { min: 0.0, max: 0.0 })?;
        Self::new(lo as f64, hi as f64)
    }

    /// Lower magnitude bound.
    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper magnitude bound.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Rescale a magnitude into `[0, 1]`, clamping values outside the range.
    #[inline]
    pub fn normalize(&self, magnitude: f32) -> f64 {
        let percent = (magnitude as f64 - self.min) / (self.max - self.min);
        percent.clamp(0.0, 1.0)
    }

    /// Gray level (`0..=254`) for a magnitude.
    #[inline]
    pub fn gray_level(&self, magnitude: f32) -> u8 {
        (self.normalize(magnitude) * GRAY_LEVELS) as u8
    }
}
