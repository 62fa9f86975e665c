//! Conversions to and from the `image` crate's in-memory buffers
//!
//! Only decoded buffers are converted here. Reading and writing image
//! files stays with the caller.

use super::{Pix, PixMut};
use crate::color;
use crate::error::Result;
use image::{Rgb, RgbImage, Rgba, RgbaImage};

impl Pix {
    /// Build an opaque PIX from an 8-bit RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] for an empty buffer.
    pub fn from_rgb_image(img: &RgbImage) -> Result<Self> {
        let data = img
            .pixels()
            .map(|&Rgb([r, g, b])| color::compose_rgb(r, g, b))
            .collect();
        Pix::from_argb(img.width(), img.height(), data)
    }

    /// Build a PIX from an 8-bit RGBA buffer, keeping alpha.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimension`] for an empty buffer.
    pub fn from_rgba_image(img: &RgbaImage) -> Result<Self> {
        let data = img
            .pixels()
            .map(|&Rgba([r, g, b, a])| color::compose_rgba(r, g, b, a))
            .collect();
        Pix::from_argb(img.width(), img.height(), data)
    }

    /// Copy the pixels into an 8-bit RGBA buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let (r, g, b, a) = color::extract_rgba(self.get_pixel_unchecked(x, y));
            Rgba([r, g, b, a])
        })
    }
}

impl PixMut {
    /// Copy the pixels into an 8-bit RGBA buffer.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width(), self.height(), |x, y| {
            let (r, g, b, a) = color::extract_rgba(self.get_pixel_unchecked(x, y));
            Rgba([r, g, b, a])
        })
    }
}
