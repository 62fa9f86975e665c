//! FPix - Floating-point image
//!
//! `FPix` is a 2D array of `f32` values. The edge detector stores one
//! gradient magnitude per pixel in it (and, on request, one orientation
//! angle per pixel in a second grid).
//!
//! # Examples
//!
//! ```
//! use edgemap_core::FPix;
//!
//! // Create a 100x100 floating-point image
//! let mut fpix = FPix::new(100, 100).unwrap();
//!
//! // Set and get pixel values
//! fpix.set_pixel(10, 20, 0.5).unwrap();
//! assert_eq!(fpix.get_pixel(10, 20).unwrap(), 0.5);
//!
//! // Get statistics
//! let (min_val, _, _) = fpix.min().unwrap();
//! let (max_val, max_x, max_y) = fpix.max().unwrap();
//! assert_eq!((min_val, max_val, max_x, max_y), (0.0, 0.5, 10, 20));
//! ```

use crate::error::{Error, Result};

/// Floating-point image
///
/// A 2D array of `f32` values, indexed exactly like [`crate::Pix`].
///
/// # Memory Layout
///
/// Data is stored in row-major order with no padding. The pixel at (x, y)
/// is at index `y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct FPix {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<f32>,
}

impl FPix {
    /// Create a new FPix with all pixels set to zero
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use edgemap_core::FPix;
    ///
    /// let fpix = FPix::new(640, 480).unwrap();
    /// assert_eq!(fpix.width(), 640);
    /// assert_eq!(fpix.height(), 480);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_with_value(width, height, 0.0)
    }

    /// Create a new FPix with all pixels set to the specified value
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new_with_value(width: u32, height: u32, value: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = (width as usize) * (height as usize);
        Ok(FPix {
            width,
            height,
            data: vec![value; size],
        })
    }

    /// Get the image width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the image dimensions as (width, height)
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<f32> {
        let idx = self.checked_index(x, y)?;
        Ok(self.data[idx])
    }

    /// Set the pixel value at (x, y)
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if coordinates are out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: f32) -> Result<()> {
        let idx = self.checked_index(x, y)?;
        self.data[idx] = value;
        Ok(())
    }

    fn checked_index(&self, x: u32, y: u32) -> Result<usize> {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: idx,
                len: self.data.len(),
            });
        }
        Ok(idx)
    }

    /// Get the pixel value at (x, y) without the coordinate check
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the data.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> f32 {
        self.data[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Set the pixel value at (x, y) without the coordinate check
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, value: f32) {
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.data[idx] = value;
    }

    /// Get raw access to the pixel data
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get mutable access to the pixel data
    #[inline]
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get a row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        let start = (y as usize) * (self.width as usize);
        let end = start + (self.width as usize);
        &self.data[start..end]
    }

    /// Get a mutable row of pixel data
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [f32] {
        let start = (y as usize) * (self.width as usize);
        let end = start + (self.width as usize);
        &mut self.data[start..end]
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Find the minimum value and its location
    ///
    /// Returns `(min_value, x, y)` where (x, y) is the location of the first
    /// occurrence of the minimum value in row-major order.
    pub fn min(&self) -> Option<(f32, u32, u32)> {
        self.extreme(|candidate, best| candidate < best)
    }

    /// Find the minimum value only
    pub fn min_value(&self) -> Option<f32> {
        self.min().map(|(v, _, _)| v)
    }

    /// Find the maximum value and its location
    ///
    /// Returns `(max_value, x, y)` where (x, y) is the location of the first
    /// occurrence of the maximum value in row-major order.
    pub fn max(&self) -> Option<(f32, u32, u32)> {
        self.extreme(|candidate, best| candidate > best)
    }

    /// Find the maximum value only
    pub fn max_value(&self) -> Option<f32> {
        self.max().map(|(v, _, _)| v)
    }

    fn extreme(&self, better: impl Fn(f32, f32) -> bool) -> Option<(f32, u32, u32)> {
        let (first, rest) = self.data.split_first()?;
        let mut best = (*first, 0usize);
        for (i, &v) in rest.iter().enumerate() {
            if better(v, best.0) {
                best = (v, i + 1);
            }
        }
        let w = self.width as usize;
        Some((best.0, (best.1 % w) as u32, (best.1 / w) as u32))
    }

    /// Calculate the mean (average) of all pixel values
    pub fn mean(&self) -> Option<f32> {
        if self.data.is_empty() {
            return None;
        }

        let sum: f32 = self.data.iter().sum();
        Some(sum / self.data.len() as f32)
    }

    /// Minimum and maximum over interior cells only.
    ///
    /// Interior cells are those with all eight neighbors inside the grid:
    /// `1 <= x <= width - 2` and `1 <= y <= height - 2`. Returns `None`
    /// when the grid is narrower or shorter than 3 cells.
    pub fn interior_range(&self) -> Option<(f32, f32)> {
        if self.width < 3 || self.height < 3 {
            return None;
        }
        let w = self.width as usize;
        (1..self.height - 1)
            .flat_map(|y| self.row(y)[1..w - 1].iter().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((f32::min(lo, v), f32::max(hi, v))),
            })
    }
}
