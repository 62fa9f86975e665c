//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.
//! Checked accessors return `None` / [`Error::IndexOutOfBounds`] for
//! coordinates outside the image; the `_unchecked` variants rely on the
//! slice bounds check alone.

use super::{Pix, PixMut};
use crate::color;
use crate::error::{Error, Result};

#[inline]
fn index_of(width: u32, height: u32, x: u32, y: u32) -> Option<usize> {
    if x < width && y < height {
        Some((y as usize) * (width as usize) + (x as usize))
    } else {
        None
    }
}

impl Pix {
    /// Get the packed ARGB value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        index_of(self.width(), self.height(), x, y).map(|i| self.data()[i])
    }

    /// Get a pixel value without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get RGBA values at (x, y).
    pub fn get_rgba(&self, x: u32, y: u32) -> Option<(u8, u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgba)
    }
}

impl PixMut {
    /// Get the packed ARGB value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        index_of(self.width(), self.height(), x, y).map(|i| self.data()[i])
    }

    /// Get a pixel value without the coordinate check.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.data()[(y as usize) * (self.width() as usize) + (x as usize)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Set the packed ARGB value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        let len = self.data().len();
        let idx = index_of(self.width(), self.height(), x, y).ok_or(Error::IndexOutOfBounds {
            index: (y as usize) * (self.width() as usize) + (x as usize),
            len,
        })?;
        self.data_mut()[idx] = val;
        Ok(())
    }

    /// Set a pixel value without the coordinate check.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = (y as usize) * (self.width() as usize) + (x as usize);
        self.data_mut()[idx] = val;
    }

    /// Set an opaque RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set an RGBA pixel at (x, y).
    pub fn set_rgba(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8, a: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgba(r, g, b, a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_pixel_bounds() {
        let pix = Pix::new_filled(3, 2, 0xff01_0203).unwrap();
        assert_eq!(pix.get_pixel(2, 1), Some(0xff01_0203));
        assert_eq!(pix.get_pixel(3, 0), None);
        assert_eq!(pix.get_pixel(0, 2), None);
        assert_eq!(pix.get_rgb(0, 0), Some((1, 2, 3)));
        assert_eq!(pix.get_rgba(0, 0), Some((1, 2, 3, 255)));
    }

    #[test]
    fn test_set_pixel_bounds() {
        let mut pix = Pix::new(3, 2).unwrap().to_mut();
        pix.set_rgb(1, 1, 10, 20, 30).unwrap();
        assert_eq!(pix.get_rgb(1, 1), Some((10, 20, 30)));
        assert_eq!(pix.get_pixel_unchecked(1, 1), 0xff0a_141e);

        let err = pix.set_pixel(3, 1, 0).unwrap_err();
        assert!(matches!(err, Error::IndexOutOfBounds { len: 6, .. }));
        assert!(pix.set_rgba(0, 2, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn test_set_pixel_unchecked() {
        let mut pix = Pix::new(4, 4).unwrap().to_mut();
        pix.set_pixel_unchecked(3, 2, 7);
        assert_eq!(pix.data()[11], 7);
        let pix: Pix = pix.into();
        assert_eq!(pix.get_pixel_unchecked(3, 2), 7);
    }
}
