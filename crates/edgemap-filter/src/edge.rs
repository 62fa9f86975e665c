//! Gradient-magnitude edge detection
//!
//! [`EdgeDetector`] runs in two phases over the interior pixels
//! (`1 <= x <= w - 2`, `1 <= y <= h - 2`):
//!
//! 1. For every interior pixel, average the eight neighbors to gray, apply
//!    the [`SobelKernel`] and store the magnitude in the gradient grid.
//! 2. For every interior pixel, map the magnitude through the
//!    [`CalibrationRange`] to a gray level `0..=254` and write it as an
//!    opaque gray pixel.
//!
//! Phase 2 starts only after phase 1 has finished, so neighborhoods are
//! always read from the original pixels, also when rendering in place.
//! Border pixels are never written and keep their input color. Images
//! narrower or shorter than 3 pixels have no interior and pass through
//! unchanged.

use crate::{CalibrationRange, FilterResult, Neighborhood, SobelKernel};
use edgemap_core::{FPix, Pix, PixMut, color};
use log::{debug, trace};

/// Where the rendered edge map is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Overwrite the interior of the input buffer. No second image is
    /// allocated when the detector receives the only reference to the
    /// input; otherwise the detector renders into a private copy so other
    /// holders never observe the change.
    #[default]
    InPlace,
    /// Render into an independent copy. The input is left untouched and
    /// remains available through [`EdgeDetector::image`].
    Copy,
}

/// Options for edge detection
#[derive(Debug, Clone, Default)]
pub struct EdgeOptions {
    /// Magnitude bounds mapped to gray levels `0..=254`
    pub calibration: CalibrationRange,
    /// Gradient weighting
    pub kernel: SobelKernel,
    /// Output buffer ownership
    pub output: OutputMode,
    /// Also record `atan2(gy, gx)` per interior pixel
    pub orientation: bool,
}

impl EdgeOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the calibration range
    pub fn with_calibration(mut self, calibration: CalibrationRange) -> Self {
        self.calibration = calibration;
        self
    }

    /// Set the gradient kernel
    pub fn with_kernel(mut self, kernel: SobelKernel) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the output mode
    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Enable or disable the orientation grid
    pub fn with_orientation(mut self, orientation: bool) -> Self {
        self.orientation = orientation;
        self
    }
}

/// Two-phase Sobel-style edge detector.
///
/// # Example
///
/// ```
/// use edgemap_core::{Pix, color};
/// use edgemap_filter::{EdgeDetector, EdgeOptions, OutputMode};
///
/// let white = color::compose_rgb(255, 255, 255);
/// let mut pix = Pix::new_filled(5, 5, white).unwrap().to_mut();
/// pix.set_rgb(2, 2, 0, 0, 0).unwrap();
/// let pix: Pix = pix.into();
///
/// let options = EdgeOptions::new().with_output(OutputMode::Copy);
/// let mut detector = EdgeDetector::with_options(pix, options).unwrap();
/// detector.process().unwrap();
///
/// assert!(detector.gradient().get_pixel(1, 1).unwrap() > 0.0);
/// assert_eq!(detector.results().get_pixel(0, 0), Some(white));
/// ```
#[derive(Debug)]
pub struct EdgeDetector {
    /// Input retained in [`OutputMode::Copy`]
    input: Option<Pix>,
    /// Rendered image
    output: PixMut,
    /// Gradient magnitude per pixel (interior cells only are written)
    gradient: FPix,
    /// Gradient orientation per pixel, when requested
    orientation: Option<FPix>,
    options: EdgeOptions,
    processed: bool,
}

impl EdgeDetector {
    /// Create a detector with default options.
    ///
    /// Renders in place, with the legacy kernel and the fixed
    /// `0.0..=700.0` calibration range.
    pub fn new(pix: Pix) -> FilterResult<Self> {
        Self::with_options(pix, EdgeOptions::default())
    }

    /// Create a detector with custom options.
    ///
    /// Allocates a zeroed gradient grid of the image's size and designates
    /// the output buffer according to [`EdgeOptions::output`].
    pub fn with_options(pix: Pix, options: EdgeOptions) -> FilterResult<Self> {
        let (w, h) = pix.dimensions();
        let gradient = FPix::new(w, h)?;
        let orientation = if options.orientation {
            Some(FPix::new(w, h)?)
        } else {
            None
        };

        let (input, output) = match options.output {
            OutputMode::InPlace => match pix.try_into_mut() {
                Ok(output) => (None, output),
                Err(shared) => {
                    debug!(
                        "EdgeDetector: input has {} references, rendering into a copy",
                        shared.ref_count()
                    );
                    (None, shared.to_mut())
                }
            },
            OutputMode::Copy => {
                let output = pix.to_mut();
                (Some(pix), output)
            }
        };

        debug!(
            "EdgeDetector: {}x{} image, {:?} output, {:?} kernel, calibration {}..{}",
            w,
            h,
            options.output,
            options.kernel,
            options.calibration.min(),
            options.calibration.max()
        );

        Ok(Self {
            input,
            output,
            gradient,
            orientation,
            options,
            processed: false,
        })
    }

    /// The input image, if it was retained.
    ///
    /// Only [`OutputMode::Copy`] keeps the input; in place rendering moves
    /// it into the output buffer.
    pub fn image(&self) -> Option<&Pix> {
        self.input.as_ref()
    }

    /// The rendered image.
    ///
    /// Before [`process`](Self::process) runs this holds the input pixels.
    pub fn results(&self) -> &PixMut {
        &self.output
    }

    /// Consume the detector and return the rendered image.
    pub fn into_results(self) -> Pix {
        self.output.into()
    }

    /// Gradient magnitudes. Border cells are always zero.
    pub fn gradient(&self) -> &FPix {
        &self.gradient
    }

    /// Gradient orientations in radians, if enabled in the options.
    pub fn orientation(&self) -> Option<&FPix> {
        self.orientation.as_ref()
    }

    /// The options this detector was built with.
    pub fn options(&self) -> &EdgeOptions {
        &self.options
    }

    /// Whether [`process`](Self::process) has already run.
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Compute the gradient grid and render the edge map.
    ///
    /// Runs once; further calls return `Ok(())` without touching the output,
    /// since an in place run would otherwise read its own rendered pixels.
    ///
    /// Always returns `Ok(())`: the constructors size the gradient and
    /// orientation grids from the image, and images without an interior
    /// pass through unchanged.
    pub fn process(&mut self) -> FilterResult<()> {
        if self.processed {
            debug!("EdgeDetector::process: already processed, skipping");
            return Ok(());
        }

        let (w, h) = self.output.dimensions();

        if w < 3 || h < 3 {
            debug!("EdgeDetector::process: {w}x{h} image has no interior, nothing to render");
            self.processed = true;
            return Ok(());
        }

        let (w, h) = (w as usize, h as usize);
        let kernel = self.options.kernel;
        compute_gradients(
            self.output.data(),
            w,
            h,
            kernel,
            self.gradient.data_mut(),
            self.orientation.as_mut().map(FPix::data_mut),
        );
        trace!(
            "EdgeDetector::process: phase 1 done, {} interior pixels, max magnitude {:?}",
            (w - 2) * (h - 2),
            self.gradient.interior_range().map(|(_, hi)| hi)
        );

        render(
            self.output.data_mut(),
            w,
            h,
            &self.options.calibration,
            self.gradient.data(),
        );
        trace!("EdgeDetector::process: phase 2 done");

        self.processed = true;
        Ok(())
    }
}

/// Render an edge map into a new image, leaving `pix` untouched.
///
/// Uses the default kernel and calibration range.
pub fn sobel_edge_map(pix: &Pix) -> FilterResult<Pix> {
    sobel_edge_map_with(pix, &EdgeOptions::default())
}

/// Render an edge map with custom options into a new image.
///
/// `options.output` is ignored: the input is borrowed, so the result is
/// always an independent copy.
pub fn sobel_edge_map_with(pix: &Pix, options: &EdgeOptions) -> FilterResult<Pix> {
    let options = EdgeOptions {
        output: OutputMode::Copy,
        ..options.clone()
    };
    let mut detector = EdgeDetector::with_options(pix.clone(), options)?;
    detector.process()?;
    Ok(detector.into_results())
}

// ============================================================================
// Phase 1: gradients
// ============================================================================

/// Fill the interior cells of one gradient row.
fn gradient_row(
    src: &[u32],
    w: usize,
    y: usize,
    kernel: SobelKernel,
    mag_row: &mut [f32],
    mut ori_row: Option<&mut [f32]>,
) {
    let above = &src[(y - 1) * w..y * w];
    let row = &src[y * w..(y + 1) * w];
    let below = &src[(y + 1) * w..(y + 2) * w];
    for x in 1..w - 1 {
        let g = kernel.gradient(&Neighborhood::from_rows(above, row, below, x));
        mag_row[x] = g.magnitude();
        if let Some(ori) = ori_row.as_deref_mut() {
            ori[x] = g.orientation();
        }
    }
}

fn compute_gradients(
    src: &[u32],
    w: usize,
    h: usize,
    kernel: SobelKernel,
    mag: &mut [f32],
    ori: Option<&mut [f32]>,
) {
    #[cfg(feature = "parallel")]
    {
        compute_gradients_parallel(src, w, h, kernel, mag, ori);
    }
    #[cfg(not(feature = "parallel"))]
    {
        compute_gradients_sequential(src, w, h, kernel, mag, ori);
    }
}

#[cfg(not(feature = "parallel"))]
fn compute_gradients_sequential(
    src: &[u32],
    w: usize,
    h: usize,
    kernel: SobelKernel,
    mag: &mut [f32],
    ori: Option<&mut [f32]>,
) {
    match ori {
        Some(ori) => mag
            .chunks_mut(w)
            .zip(ori.chunks_mut(w))
            .enumerate()
            .skip(1)
            .take(h - 2)
            .for_each(|(y, (m, o))| gradient_row(src, w, y, kernel, m, Some(o))),
        None => mag
            .chunks_mut(w)
            .enumerate()
            .skip(1)
            .take(h - 2)
            .for_each(|(y, m)| gradient_row(src, w, y, kernel, m, None)),
    }
}

#[cfg(feature = "parallel")]
fn compute_gradients_parallel(
    src: &[u32],
    w: usize,
    h: usize,
    kernel: SobelKernel,
    mag: &mut [f32],
    ori: Option<&mut [f32]>,
) {
    use rayon::prelude::*;

    match ori {
        Some(ori) => mag
            .par_chunks_mut(w)
            .zip(ori.par_chunks_mut(w))
            .enumerate()
            .skip(1)
            .take(h - 2)
            .for_each(|(y, (m, o))| gradient_row(src, w, y, kernel, m, Some(o))),
        None => mag
            .par_chunks_mut(w)
            .enumerate()
            .skip(1)
            .take(h - 2)
            .for_each(|(y, m)| gradient_row(src, w, y, kernel, m, None)),
    }
}

// ============================================================================
// Phase 2: normalization and rendering
// ============================================================================

/// Overwrite the interior pixels of one output row with gray levels.
fn render_row(out_row: &mut [u32], mag_row: &[f32], range: &CalibrationRange) {
    let w = out_row.len();
    for (out, &m) in out_row[1..w - 1].iter_mut().zip(&mag_row[1..w - 1]) {
        *out = color::compose_gray(range.gray_level(m));
    }
}

fn render(dst: &mut [u32], w: usize, h: usize, range: &CalibrationRange, mag: &[f32]) {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        dst.par_chunks_mut(w)
            .zip(mag.par_chunks(w))
            .skip(1)
            .take(h - 2)
            .for_each(|(out_row, mag_row)| render_row(out_row, mag_row, range));
    }
    #[cfg(not(feature = "parallel"))]
    {
        dst.chunks_mut(w)
            .zip(mag.chunks(w))
            .skip(1)
            .take(h - 2)
            .for_each(|(out_row, mag_row)| render_row(out_row, mag_row, range));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0xffff_ffff;
    const BLACK: u32 = 0xff00_0000;

    fn dot_image(size: u32, dot: (u32, u32)) -> Pix {
        let mut pix = Pix::new_filled(size, size, WHITE).unwrap().to_mut();
        pix.set_pixel(dot.0, dot.1, BLACK).unwrap();
        pix.into()
    }

    #[test]
    fn test_dot_scenario() {
        let mut detector = EdgeDetector::new(dot_image(5, (2, 2))).unwrap();
        detector.process().unwrap();
        let grad = detector.gradient();

        // The center pixel's own intensity is never read.
        assert_eq!(grad.get_pixel(2, 2).unwrap(), 0.0);
        assert!(grad.get_pixel(1, 1).unwrap() > 0.0);
        assert!(grad.get_pixel(3, 3).unwrap() > 0.0);

        let out = detector.results();
        assert_eq!(out.get_pixel(1, 1), Some(color::compose_gray(93)));
        assert_eq!(out.get_pixel(2, 2), Some(color::compose_gray(0)));
        assert_eq!(out.get_pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn test_in_place_reuses_storage() {
        let pix = dot_image(6, (3, 3));
        let ptr = pix.data().as_ptr();
        let mut detector = EdgeDetector::new(pix).unwrap();
        assert!(detector.image().is_none());
        detector.process().unwrap();
        assert_eq!(detector.results().data().as_ptr(), ptr);
    }

    #[test]
    fn test_in_place_shared_input_is_not_mutated() {
        let pix = dot_image(6, (3, 3));
        let keep = pix.clone();
        let mut detector = EdgeDetector::new(pix).unwrap();
        detector.process().unwrap();
        assert_eq!(keep.get_pixel(2, 2), Some(WHITE));
        assert_ne!(detector.results().get_pixel(2, 2), Some(WHITE));
    }

    #[test]
    fn test_copy_mode_keeps_input() {
        let pix = dot_image(6, (3, 3));
        let options = EdgeOptions::new().with_output(OutputMode::Copy);
        let mut detector = EdgeDetector::with_options(pix, options).unwrap();
        detector.process().unwrap();
        let input = detector.image().unwrap();
        assert_eq!(input.get_pixel(2, 2), Some(WHITE));
        assert_eq!(input.get_pixel(3, 3), Some(BLACK));
    }

    #[test]
    fn test_second_process_is_noop() {
        let mut detector = EdgeDetector::new(dot_image(7, (3, 3))).unwrap();
        assert!(!detector.is_processed());
        detector.process().unwrap();
        let first = detector.results().data().to_vec();
        detector.process().unwrap();
        assert!(detector.is_processed());
        assert_eq!(detector.results().data(), first.as_slice());
    }

    #[test]
    fn test_small_images_pass_through() {
        for (w, h) in [(1, 1), (2, 2), (2, 7), (7, 2), (1, 9)] {
            let pix = Pix::new_filled(w, h, 0xff12_3456).unwrap();
            let mut detector = EdgeDetector::new(pix.deep_clone()).unwrap();
            detector.process().unwrap();
            assert!(detector.is_processed());
            assert!(detector.gradient().data().iter().all(|&v| v == 0.0));
            assert!(pix.equals(&detector.into_results()));
        }
    }

    #[test]
    fn test_process_succeeds_for_every_size() {
        for (w, h) in [(1, 1), (1, 3), (3, 1), (2, 5), (3, 3), (9, 4), (16, 16)] {
            for output in [OutputMode::InPlace, OutputMode::Copy] {
                let options = EdgeOptions::new().with_output(output).with_orientation(true);
                let pix = Pix::new_filled(w, h, 0xff40_8020).unwrap();
                let mut detector = EdgeDetector::with_options(pix, options).unwrap();
                assert!(detector.process().is_ok());
                assert!(detector.process().is_ok());
                assert_eq!(detector.gradient().dimensions(), (w, h));
                assert_eq!(detector.orientation().map(FPix::dimensions), Some((w, h)));
                assert_eq!(detector.results().dimensions(), (w, h));
            }
        }
    }

    #[test]
    fn test_orientation_grid_only_when_enabled() {
        let mut plain = EdgeDetector::new(dot_image(5, (2, 2))).unwrap();
        plain.process().unwrap();
        assert!(plain.orientation().is_none());

        let options = EdgeOptions::new().with_orientation(true);
        let mut oriented = EdgeDetector::with_options(dot_image(5, (2, 2)), options).unwrap();
        oriented.process().unwrap();
        let ori = oriented.orientation().unwrap();
        assert_eq!(ori.dimensions(), (5, 5));
        // (1, 1) sees the dot at its bottom-right: gx > 0, gy > 0.
        let angle = ori.get_pixel(1, 1).unwrap();
        assert!(angle > 0.0 && angle < std::f32::consts::FRAC_PI_2);
        assert_eq!(ori.get_pixel(0, 0).unwrap(), 0.0);
        assert_eq!(plain.gradient(), oriented.gradient());
    }

    #[test]
    fn test_free_function_matches_detector() {
        let pix = dot_image(8, (4, 2));
        let edges = sobel_edge_map(&pix).unwrap();
        assert_eq!(pix.get_pixel(4, 2), Some(BLACK));

        let mut detector = EdgeDetector::new(pix.deep_clone()).unwrap();
        detector.process().unwrap();
        assert!(edges.equals(&detector.into_results()));
    }

    #[test]
    fn test_custom_calibration_brightens() {
        let pix = dot_image(5, (2, 2));
        let narrow = CalibrationRange::new(0.0, 100.0).unwrap();
        let options = EdgeOptions::new().with_calibration(narrow);
        let edges = sobel_edge_map_with(&pix, &options).unwrap();
        assert_eq!(edges.get_pixel(1, 1), Some(color::compose_gray(254)));
    }
}
