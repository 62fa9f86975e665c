//! edgemap Core - Basic data structures for edge detection
//!
//! This crate provides the fundamental data structures used throughout
//! the edgemap library:
//!
//! - [`Pix`] / [`PixMut`] - Packed 32-bit ARGB image container (immutable / mutable)
//! - [`FPix`] - Floating-point image, used for gradient magnitudes
//!
//! With the `image` feature enabled, [`Pix`] converts to and from the
//! `image` crate's in-memory RGB / RGBA buffers.

pub mod error;
pub mod fpix;
pub mod pix;

pub use error::{Error, Result};
pub use fpix::FPix;
pub use pix::{Pix, PixMut};

/// Color channel helpers for packed 32-bit ARGB pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xAARRGGBB`: alpha in bits 24-31, red in
/// bits 16-23, green in bits 8-15 and blue in bits 0-7.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const ALPHA_SHIFT: u32 = 24;
    pub const RED_SHIFT: u32 = 16;
    pub const GREEN_SHIFT: u32 = 8;
    pub const BLUE_SHIFT: u32 = 0;

    /// Fully opaque alpha value.
    pub const OPAQUE: u8 = 0xff;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, OPAQUE)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((a as u32) << ALPHA_SHIFT)
            | ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
    }

    /// Compose an opaque gray pixel with `gray` in all three color channels.
    #[inline]
    pub fn compose_gray(gray: u8) -> u32 {
        compose_rgb(gray, gray, gray)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

    /// Unweighted gray intensity of a pixel: `(r + g + b) / 3`, truncated.
    ///
    /// Alpha is ignored. The result is always in `0..=255`.
    #[inline]
    pub fn average(pixel: u32) -> u32 {
        let (r, g, b) = extract_rgb(pixel);
        (r as u32 + g as u32 + b as u32) / 3
    }

}
