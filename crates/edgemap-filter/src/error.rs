//! Error types for edgemap-filter

use thiserror::Error;

/// Errors that can occur during edge detection
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] edgemap_core::Error),

    /// Calibration bounds that cannot rescale magnitudes
    #[error("invalid calibration range: min {min}, max {max}")]
    InvalidCalibration {
        /// Lower magnitude bound
        min: f64,
        /// Upper magnitude bound
        max: f64,
    },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
