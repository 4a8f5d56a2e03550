//! Validates spline resampling of node polylines

// Assertion helpers fail the test by panicking
#![allow(clippy::panic)]

use eschertile::math::smoothing::smooth_curve;
use eschertile::math::vector::Vec2;
use eschertile::spatial::combination::Combination;
use eschertile::spatial::shape::build_shape;

#[test]
fn test_sample_count_scales_with_subdivisions() {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.5),
        Vec2::new(2.0, -0.25),
        Vec2::new(3.0, 0.0),
    ];
    for subdivisions in [1, 2, 5, 8] {
        let open = smooth_curve(&points, subdivisions, false).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(open.len(), subdivisions * points.len());
        let closed = smooth_curve(&points, subdivisions, true).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(closed.len(), subdivisions * points.len());
    }
}

#[test]
fn test_open_curve_interpolates_its_endpoints() {
    let points = [
        Vec2::new(-1.0, 2.0),
        Vec2::new(0.5, 0.3),
        Vec2::new(1.5, 1.1),
        Vec2::new(2.0, -0.4),
    ];
    let samples = smooth_curve(&points, 4, false).unwrap_or_else(|e| panic!("{e}"));

    let first = samples.first().unwrap_or_else(|| panic!("empty samples"));
    let last = samples.last().unwrap_or_else(|| panic!("empty samples"));
    let p_first = points.first().copied().unwrap_or(Vec2::ZERO);
    let p_last = points.last().copied().unwrap_or(Vec2::ZERO);
    assert!((*first - p_first).norm() < 1e-9, "curve starts at p0");
    assert!(
        (*last - p_last).norm() < 1e-9,
        "curve ends at the final input point"
    );
}

#[test]
fn test_collinear_points_stay_on_their_line() {
    // A natural spline through evenly spaced collinear points is the line
    let points: Vec<Vec2> = (0..5)
        .map(|i| Vec2::new(f64::from(i), 2.0 * f64::from(i) + 1.0))
        .collect();
    let samples = smooth_curve(&points, 6, false).unwrap_or_else(|e| panic!("{e}"));
    for sample in &samples {
        assert!(
            (sample.y - (2.0 * sample.x + 1.0)).abs() < 1e-9,
            "sample {sample:?} left the line"
        );
    }
}

#[test]
fn test_collinear_points_stay_on_their_line_when_closed() {
    // Spline fitting is linear in the input values, so the wrap-around
    // padding cannot push samples off the line either
    let points: Vec<Vec2> = (0..6)
        .map(|i| Vec2::new(f64::from(i), 2.0 * f64::from(i) + 1.0))
        .collect();
    let samples = smooth_curve(&points, 6, true).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(samples.len(), 36);
    for sample in &samples {
        assert!(
            (sample.y - (2.0 * sample.x + 1.0)).abs() < 1e-9,
            "sample {sample:?} left the line"
        );
    }
}

#[test]
fn test_closed_curve_passes_through_the_first_point() {
    let points = [
        Vec2::new(1.0, 0.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(-1.0, 0.0),
        Vec2::new(0.0, -1.0),
    ];
    let samples = smooth_curve(&points, 3, true).unwrap_or_else(|e| panic!("{e}"));
    let first = samples.first().unwrap_or_else(|| panic!("empty samples"));
    let seam = points.first().copied().unwrap_or(Vec2::ZERO);
    assert!(
        (*first - seam).norm() < 1e-9,
        "closed resampling starts on the seam point"
    );
}

#[test]
fn test_closed_square_samples_stay_bounded() {
    // Spline overshoot on a convex loop is mild: everything stays well
    // inside twice the circumradius
    let points = [
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
    ];
    let samples = smooth_curve(&points, 8, true).unwrap_or_else(|e| panic!("{e}"));
    for sample in &samples {
        assert!(sample.norm() < 2.0 * 2.0_f64.sqrt());
    }
}

#[test]
fn test_degenerate_inputs_are_rejected() {
    let pair = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
    assert!(smooth_curve(&pair, 0, false).is_err(), "zero subdivisions");
    assert!(
        smooth_curve(&pair, 3, true).is_err(),
        "closed loops need three points"
    );
    assert!(smooth_curve(&[Vec2::ZERO], 3, false).is_err());
    assert!(smooth_curve(&[], 3, false).is_err());
}

#[test]
fn test_smoothed_shape_outline_sample_count() {
    let nodes_per_segment = 3;
    let combination =
        Combination::new(vec![1, 0, 2]).unwrap_or_else(|e| panic!("valid combination: {e}"));
    let shape =
        build_shape(&combination, 1.0, nodes_per_segment).unwrap_or_else(|e| panic!("{e}"));
    let outline = shape.coordinates(true).unwrap_or_else(|e| panic!("{e}"));

    // Each side splices its two segments into 2 * nodes_per_segment - 1
    // points, resampled five-fold
    let per_side = 5 * (2 * nodes_per_segment - 1);
    assert_eq!(outline.len(), shape.sides() * per_side);
}
