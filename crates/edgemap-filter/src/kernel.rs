//! 3x3 gradient kernels
//!
//! A [`Neighborhood`] holds the gray intensities of the eight pixels around
//! a center pixel. The center's own intensity is never read. A
//! [`SobelKernel`] turns a neighborhood into a [`Gradient`].
//!
//! Neighbor naming follows column/row offsets from the top-left corner:
//!
//! ```text
//! a00 a10 a20      (y - 1)
//! a01  .  a21      (y)
//! a02 a12 a22      (y + 1)
//! ```

use edgemap_core::color;

/// Gray intensities of the eight neighbors of a pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighborhood {
    pub a00: f64,
    pub a10: f64,
    pub a20: f64,
    pub a01: f64,
    pub a21: f64,
    pub a02: f64,
    pub a12: f64,
    pub a22: f64,
}

impl Neighborhood {
    /// Gather the neighbors of column `x` from three consecutive rows.
    ///
    /// `x` must satisfy `1 <= x <= row.len() - 2`.
    ///
    /// # Panics
    ///
    /// Panics if `x - 1` or `x + 1` falls outside any of the rows.
    #[inline]
    pub fn from_rows(above: &[u32], row: &[u32], below: &[u32], x: usize) -> Self {
        let avg = |p: u32| color::average(p) as f64;
        Neighborhood {
            a00: avg(above[x - 1]),
            a10: avg(above[x]),
            a20: avg(above[x + 1]),
            a01: avg(row[x - 1]),
            a21: avg(row[x + 1]),
            a02: avg(below[x - 1]),
            a12: avg(below[x]),
            a22: avg(below[x + 1]),
        }
    }
}

/// Horizontal and vertical gradient estimates at one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub gx: f64,
    pub gy: f64,
}

impl Gradient {
    /// Euclidean magnitude `sqrt(gx^2 + gy^2)`, narrowed to `f32` for storage.
    #[inline]
    pub fn magnitude(&self) -> f32 {
        (self.gx * self.gx + self.gy * self.gy).sqrt() as f32
    }

    /// Orientation `atan2(gy, gx)` in radians, in `(-pi, pi]`.
    #[inline]
    pub fn orientation(&self) -> f32 {
        self.gy.atan2(self.gx) as f32
    }
}

/// Weighting used to derive a [`Gradient`] from a [`Neighborhood`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SobelKernel {
    /// Non-standard weights kept for output compatibility:
    ///
    /// - `gy = (a00 + 2*a10 + a20 - a02 - 2*a12 - a22) / 9`
    /// - `gx = a00 - a20 + 2*a01 - 2*a21 + a02 - a22`
    ///
    /// The vertical estimate is scaled down by 9 while the horizontal one is
    /// not, so vertical edges dominate the magnitude.
    #[default]
    Legacy,
    /// Canonical Sobel weights, both directions unscaled.
    Canonical,
}

impl SobelKernel {
    /// Compute the gradient estimates for one neighborhood.
    #[inline]
    pub fn gradient(self, n: &Neighborhood) -> Gradient {
        let vertical = n.a00 + 2.0 * n.a10 + n.a20 - n.a02 - 2.0 * n.a12 - n.a22;
        let gx = n.a00 - n.a20 + 2.0 * n.a01 - 2.0 * n.a21 + n.a02 - n.a22;
        let gy = match self {
            SobelKernel::Legacy => vertical / 9.0,
            SobelKernel::Canonical => vertical,
        };
        Gradient { gx, gy }
    }
}
