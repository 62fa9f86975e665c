//! Synthetic test images
//!
//! Small deterministic ARGB images with known gradient structure. Every
//! builder returns [`TestError::Synthetic`] for zero-sized requests.

use crate::error::{TestError, TestResult};
use edgemap_core::{Pix, color};

/// Opaque black
pub const BLACK: u32 = 0xff00_0000;

/// Opaque white
pub const WHITE: u32 = 0xffff_ffff;

fn build(
    name: &'static str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> u32,
) -> TestResult<Pix> {
    let data = (0..height)
        .flat_map(|y| (0..width).map(move |x| (x, y)))
        .map(|(x, y)| f(x, y))
        .collect();
    Pix::from_argb(width, height, data).map_err(|source| TestError::Synthetic { name, source })
}

/// Every pixel set to `argb`.
pub fn uniform(width: u32, height: u32, argb: u32) -> TestResult<Pix> {
    build("uniform", width, height, |_, _| argb)
}

/// Black on the left, white from column `split` onwards.
pub fn vertical_step(width: u32, height: u32, split: u32) -> TestResult<Pix> {
    build("vertical_step", width, height, |x, _| {
        if x < split { BLACK } else { WHITE }
    })
}

/// Black on top, white from row `split` downwards.
pub fn horizontal_step(width: u32, height: u32, split: u32) -> TestResult<Pix> {
    build("horizontal_step", width, height, |_, y| {
        if y < split { BLACK } else { WHITE }
    })
}

/// Black background with one white pixel at (x, y).
pub fn single_dot(width: u32, height: u32, x: u32, y: u32) -> TestResult<Pix> {
    build("single_dot", width, height, |px, py| {
        if (px, py) == (x, y) { WHITE } else { BLACK }
    })
}

/// Gray level rising by `step` per column, wrapping at 256.
pub fn horizontal_ramp(width: u32, height: u32, step: u32) -> TestResult<Pix> {
    build("horizontal_ramp", width, height, |x, _| {
        color::compose_gray((x.wrapping_mul(step) & 0xff) as u8)
    })
}

/// Random opaque colors from a fixed seed.
pub fn noise(width: u32, height: u32, seed: u64) -> TestResult<Pix> {
    let mut rng = fastrand::Rng::with_seed(seed);
    let data = (0..(width as usize) * (height as usize))
        .map(|_| 0xff00_0000 | (rng.u32(..) & 0x00ff_ffff))
        .collect();
    Pix::from_argb(width, height, data).map_err(|source| TestError::Synthetic {
        name: "noise",
        source,
    })
}
