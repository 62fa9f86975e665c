//! Image comparison operations
//!
//! - Whole-image pixel equality
//! - Border-ring equality (the pixels an edge map never rewrites)
//! - Pixel difference counting

use super::Pix;
use crate::error::{Error, Result};

/// Iterate the coordinates of the outermost ring of a `width` x `height` grid.
///
/// Each border pixel is yielded exactly once, also for 1-pixel-wide or
/// 1-pixel-tall images.
pub fn border_coords(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let top = (0..width).map(|x| (x, 0));
    let bottom = (0..width)
        .filter(move |_| height > 1)
        .map(move |x| (x, height - 1));
    let sides = (1..height.saturating_sub(1)).flat_map(move |y| {
        let right = (width > 1).then_some((width - 1, y));
        std::iter::once((0, y)).chain(right)
    });
    top.chain(bottom).chain(sides)
}

impl Pix {
    /// Check whether two images have the same size and identical pixels.
    pub fn equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other) && self.data() == other.data()
    }

    /// Check whether the outermost pixel ring is identical in both images.
    ///
    /// Interior pixels are ignored. Images of different sizes are never equal.
    pub fn border_equals(&self, other: &Pix) -> bool {
        self.sizes_equal(other)
            && border_coords(self.width(), self.height())
                .all(|(x, y)| self.get_pixel_unchecked(x, y) == other.get_pixel_unchecked(x, y))
    }

    /// Count the pixels that differ between two images of the same size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the sizes differ.
    pub fn count_pixel_diffs(&self, other: &Pix) -> Result<u64> {
        if !self.sizes_equal(other) {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                actual: other.dimensions(),
            });
        }
        Ok(self
            .data()
            .iter()
            .zip(other.data())
            .filter(|(a, b)| a != b)
            .count() as u64)
    }
}
