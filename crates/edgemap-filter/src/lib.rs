//! edgemap-filter - Gradient-magnitude edge maps
//!
//! This crate turns a packed ARGB [`Pix`](edgemap_core::Pix) into a
//! grayscale edge map:
//!
//! - [`SobelKernel`] - gradient estimates over a 3x3 neighborhood
//! - [`CalibrationRange`] - linear rescaling of magnitudes into gray levels
//! - [`EdgeDetector`] - the two-phase gradient / render pass
//!
//! # Example
//!
//! ```
//! use edgemap_core::{Pix, color};
//! use edgemap_filter::EdgeDetector;
//!
//! let pix = Pix::new_filled(16, 16, color::compose_rgb(200, 200, 200)).unwrap();
//! let mut detector = EdgeDetector::new(pix).unwrap();
//! detector.process().unwrap();
//! assert_eq!(detector.gradient().max_value(), Some(0.0));
//! ```
//!
//! # Features
//!
//! - `parallel`: process rows with rayon. Output is bit-identical to the
//!   sequential pass.

pub mod calibration;
pub mod edge;
mod error;
pub mod kernel;

pub use calibration::{CalibrationRange, DEFAULT_MAX_MAGNITUDE, DEFAULT_MIN_MAGNITUDE, GRAY_LEVELS};
pub use edge::{EdgeDetector, EdgeOptions, OutputMode, sobel_edge_map, sobel_edge_map_with};
pub use error::{FilterError, FilterResult};
pub use kernel::{Gradient, Neighborhood, SobelKernel};
