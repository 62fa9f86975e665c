//! Edge map regression test
//!
//! Exercises the gradient / render passes on synthetic images with known
//! gradient structure: flat fields, steps, ramps, isolated dots and noise.

use edgemap_core::{Pix, color};
use edgemap_filter::{
    CalibrationRange, EdgeDetector, EdgeOptions, OutputMode, SobelKernel, sobel_edge_map,
    sobel_edge_map_with,
};
use edgemap_test::{RegParams, synthetic};

fn gray_at(pix: &Pix, x: u32, y: u32) -> f64 {
    pix.get_pixel(x, y).map(color::red).unwrap_or(255) as f64
}

fn interior(pix: &Pix) -> impl Iterator<Item = (u32, u32)> + '_ {
    (1..pix.height().saturating_sub(1))
        .flat_map(move |y| (1..pix.width().saturating_sub(1)).map(move |x| (x, y)))
}

#[test]
fn edge_reg() {
    let mut rp = RegParams::new("edge");

    // --- Test 1: uniform images have zero gradient and a black interior ---
    for argb in [0xff00_0000, 0xff80_8080, color::compose_rgb(12, 200, 77)] {
        let pixs = synthetic::uniform(9, 6, argb).expect("uniform");
        let mut detector = EdgeDetector::new(pixs.deep_clone()).expect("detector");
        detector.process().expect("process");
        rp.compare_values(0.0, detector.gradient().max_value().unwrap_or(-1.0) as f64, 0.0);
        let edges = detector.into_results();
        let black = interior(&edges).all(|(x, y)| edges.get_pixel(x, y) == Some(0xff00_0000));
        rp.compare_true(black);
        rp.compare_true(edges.border_equals(&pixs));
    }

    // --- Test 2: a vertical step saturates the two columns beside it ---
    let step = synthetic::vertical_step(8, 5, 4).expect("vertical_step");
    let edges = sobel_edge_map(&step).expect("sobel_edge_map");
    for y in 1..4 {
        rp.compare_values(0.0, gray_at(&edges, 1, y), 0.0);
        rp.compare_values(0.0, gray_at(&edges, 2, y), 0.0);
        rp.compare_values(254.0, gray_at(&edges, 3, y), 0.0);
        rp.compare_values(254.0, gray_at(&edges, 4, y), 0.0);
        rp.compare_values(0.0, gray_at(&edges, 5, y), 0.0);
        rp.compare_values(0.0, gray_at(&edges, 6, y), 0.0);
    }
    if rp.display() {
        eprintln!("  vertical step row 2: {:?}", edges.row_data(2));
    }

    // --- Test 3: the legacy kernel damps horizontal edges by 9 ---
    let hstep = synthetic::horizontal_step(5, 8, 4).expect("horizontal_step");
    let legacy = sobel_edge_map(&hstep).expect("legacy");
    rp.compare_values(41.0, gray_at(&legacy, 2, 3), 0.0);
    rp.compare_values(41.0, gray_at(&legacy, 2, 4), 0.0);
    rp.compare_values(0.0, gray_at(&legacy, 2, 2), 0.0);

    let canonical_opts = EdgeOptions::new().with_kernel(SobelKernel::Canonical);
    let canonical = sobel_edge_map_with(&hstep, &canonical_opts).expect("canonical");
    rp.compare_values(254.0, gray_at(&canonical, 2, 3), 0.0);
    rp.compare_values(254.0, gray_at(&canonical, 2, 4), 0.0);

    // A vertical edge is not affected by the kernel choice.
    let vertical_canonical = sobel_edge_map_with(&step, &canonical_opts).expect("canonical");
    rp.compare_pix(&edges, &vertical_canonical);

    // --- Test 4: a linear ramp yields a constant gradient ---
    let ramp = synthetic::horizontal_ramp(10, 4, 10).expect("horizontal_ramp");
    let mut detector = EdgeDetector::new(ramp).expect("detector");
    detector.process().expect("process");
    let (lo, hi) = detector.gradient().interior_range().expect("interior");
    rp.compare_values(80.0, lo as f64, 0.0);
    rp.compare_values(80.0, hi as f64, 0.0);
    // 80 / 700 * 254 = 29.03
    let edges = detector.into_results();
    rp.compare_true(interior(&edges).all(|(x, y)| gray_at(&edges, x, y) == 29.0));

    assert!(rp.cleanup(), "edge regression test failed");
}

#[test]
fn edge_dot_reg() {
    let mut rp = RegParams::new("edge_dot");

    // --- Test 1: 5x5 black field with a white center dot ---
    let dot = synthetic::single_dot(5, 5, 2, 2).expect("single_dot");
    let mut detector = EdgeDetector::new(dot.deep_clone()).expect("detector");
    detector.process().expect("process");
    let grad = detector.gradient();

    // The center never reads its own intensity.
    rp.compare_values(0.0, grad.get_pixel(2, 2).expect("mag") as f64, 0.0);
    let diagonal = (255.0f64 * 255.0 + (255.0 / 9.0) * (255.0 / 9.0)).sqrt();
    rp.compare_values(diagonal, grad.get_pixel(1, 1).expect("mag") as f64, 1e-3);
    rp.compare_values(diagonal, grad.get_pixel(3, 3).expect("mag") as f64, 1e-3);
    rp.compare_values(510.0, grad.get_pixel(1, 2).expect("mag") as f64, 1e-3);
    rp.compare_values(510.0 / 9.0, grad.get_pixel(2, 1).expect("mag") as f64, 1e-3);

    let edges = detector.into_results();
    rp.compare_values(93.0, gray_at(&edges, 1, 1), 0.0);
    rp.compare_values(93.0, gray_at(&edges, 3, 3), 0.0);
    rp.compare_values(185.0, gray_at(&edges, 1, 2), 0.0);
    rp.compare_values(20.0, gray_at(&edges, 2, 1), 0.0);
    rp.compare_values(0.0, gray_at(&edges, 2, 2), 0.0);
    rp.compare_true(edges.border_equals(&dot));

    // --- Test 2: 7x7 field, cells away from the dot stay flat ---
    let dot = synthetic::single_dot(7, 7, 3, 3).expect("single_dot");
    let edges = sobel_edge_map(&dot).expect("sobel_edge_map");
    rp.compare_values(0.0, gray_at(&edges, 1, 1), 0.0);
    rp.compare_values(0.0, gray_at(&edges, 5, 1), 0.0);
    rp.compare_values(93.0, gray_at(&edges, 2, 2), 0.0);
    rp.compare_values(0.0, gray_at(&edges, 3, 3), 0.0);

    // --- Test 3: orientation follows atan2(gy, gx) ---
    let step = synthetic::vertical_step(6, 4, 3).expect("vertical_step");
    let options = EdgeOptions::new().with_orientation(true);
    let mut detector = EdgeDetector::with_options(step, options).expect("detector");
    detector.process().expect("process");
    let ori = detector.orientation().expect("orientation grid");
    rp.compare_values(std::f64::consts::PI, ori.get_pixel(2, 1).expect("ori") as f64, 1e-6);
    rp.compare_values(std::f64::consts::PI, ori.get_pixel(3, 2).expect("ori") as f64, 1e-6);
    rp.compare_values(0.0, ori.get_pixel(1, 1).expect("ori") as f64, 0.0);

    assert!(rp.cleanup(), "edge_dot regression test failed");
}

#[test]
fn edge_invariants_reg() {
    let mut rp = RegParams::new("edge_invariants");

    // --- Test 1: borders survive in both output modes, at every size ---
    let sizes = [(1, 1), (2, 2), (1, 5), (5, 1), (3, 3), (4, 7), (13, 9)];
    for (i, &(w, h)) in sizes.iter().enumerate() {
        let pixs = synthetic::noise(w, h, 100 + i as u64).expect("noise");
        let mut gradients = Vec::new();
        for mode in [OutputMode::InPlace, OutputMode::Copy] {
            let options = EdgeOptions::new().with_output(mode);
            let mut detector =
                EdgeDetector::with_options(pixs.deep_clone(), options).expect("detector");
            detector.process().expect("process");
            gradients.push(detector.gradient().clone());
            let edges = detector.into_results();
            rp.compare_true(edges.border_equals(&pixs));
            if w < 3 || h < 3 {
                rp.compare_pix(&pixs, &edges);
            }
        }
        // Both modes read the same original pixels.
        rp.compare_fpix(&gradients[0], &gradients[1], 0.0);
    }

    // --- Test 2: interior pixels are opaque gray in 0..=254 ---
    let pixs = synthetic::noise(24, 17, 7).expect("noise");
    let edges = sobel_edge_map(&pixs).expect("sobel_edge_map");
    let valid = interior(&edges).all(|(x, y)| {
        let p = edges.get_pixel_unchecked(x, y);
        let g = color::red(p);
        color::alpha(p) == 0xff && color::green(p) == g && color::blue(p) == g && g <= 254
    });
    rp.compare_true(valid);

    // --- Test 3: results are deterministic ---
    let again = sobel_edge_map(&pixs).expect("sobel_edge_map");
    rp.compare_pix(&edges, &again);
    let mut detector = EdgeDetector::new(pixs.deep_clone()).expect("detector");
    detector.process().expect("process");
    detector.process().expect("second process");
    rp.compare_pix(&edges, &detector.into_results());

    // --- Test 4: alpha does not enter the gray average ---
    let mut mixed = synthetic::uniform(6, 6, color::compose_rgb(90, 90, 90))
        .expect("uniform")
        .to_mut();
    for x in 0..6 {
        mixed
            .set_rgba(x, x, 90, 90, 90, (x * 40) as u8)
            .expect("set_rgba");
    }
    let mut detector = EdgeDetector::new(mixed.into()).expect("detector");
    detector.process().expect("process");
    rp.compare_values(0.0, detector.gradient().max_value().unwrap_or(-1.0) as f64, 0.0);

    // --- Test 5: a range taken from the image spans the full gray scale ---
    let mut probe = EdgeDetector::new(pixs.deep_clone()).expect("detector");
    probe.process().expect("process");
    let range = CalibrationRange::from_gradient(probe.gradient()).expect("range");
    let options = EdgeOptions::new().with_calibration(range);
    let stretched = sobel_edge_map_with(&pixs, &options).expect("stretched");
    let grays: Vec<f64> = interior(&stretched)
        .map(|(x, y)| gray_at(&stretched, x, y))
        .collect();
    let lo = grays.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = grays.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    rp.compare_values(0.0, lo, 0.0);
    rp.compare_values(254.0, hi, 0.0);

    // Invalid calibration bounds are rejected up front.
    rp.compare_true(CalibrationRange::new(700.0, 0.0).is_err());

    assert!(rp.cleanup(), "edge_invariants regression test failed");
}
