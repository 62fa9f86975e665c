//! edgemap - Gradient-magnitude edge maps for Rust
//!
//! Turns a packed ARGB image into a grayscale map of local intensity
//! change. Each interior pixel is replaced by the calibrated magnitude of a
//! 3x3 Sobel-style gradient over its eight neighbors; the one-pixel border
//! keeps its input color.
//!
//! # Example
//!
//! ```
//! use edgemap::{Pix, color, sobel_edge_map};
//!
//! let mut pix = Pix::new_filled(5, 5, color::compose_rgb(0, 0, 0)).unwrap().to_mut();
//! pix.set_rgb(2, 2, 255, 255, 255).unwrap();
//! let pix: Pix = pix.into();
//!
//! let edges = sobel_edge_map(&pix).unwrap();
//! assert_eq!(edges.get_pixel(1, 1), Some(color::compose_gray(93)));
//! assert_eq!(edges.get_pixel(0, 0), pix.get_pixel(0, 0));
//! ```
//!
//! # Features
//!
//! - `parallel`: row-parallel gradient and render passes via rayon
//! - `image`: conversions between [`Pix`] and `image::RgbImage` / `RgbaImage`

// Re-export core types (primary data structures used everywhere)
pub use edgemap_core::*;

// Re-export the filter crate as a module, plus its entry points
pub use edgemap_filter as filter;
pub use edgemap_filter::{
    CalibrationRange, EdgeDetector, EdgeOptions, OutputMode, SobelKernel, sobel_edge_map,
    sobel_edge_map_with,
};
