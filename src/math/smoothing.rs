//! Polyline resampling through cubic splines
//!
//! Fits one natural spline per axis over the node-index parameter and
//! resamples at evenly spaced parameters, producing the smooth side
//! outlines used at draw time. Pure functions over point sequences.

use crate::math::interpolation::{Cubic, InterpolationError};
use crate::math::vector::Vec2;

/// Resample `points` into `subdivisions * points.len()` smooth samples
///
/// With `close_loop` set, the sequence is padded with two wrap-around
/// points from each end before fitting so the seam between the last and
/// first point looks periodic, and sampling covers exactly one lap of the
/// loop.
///
/// # Errors
///
/// Returns an error if `subdivisions` is zero, or if there are fewer than
/// 2 points (3 when `close_loop` is set, since the padding wraps two
/// points deep).
pub fn smooth_curve(
    points: &[Vec2],
    subdivisions: usize,
    close_loop: bool,
) -> Result<Vec<Vec2>, InterpolationError> {
    let count = points.len();
    if subdivisions == 0 {
        return Err(InterpolationError::new("subdivisions must be at least 1"));
    }
    let minimum = if close_loop { 3 } else { 2 };
    if count < minimum {
        return Err(InterpolationError::new(format!(
            "Need at least {minimum} points, got {count}"
        )));
    }

    let (padded, t_start, t_end) = if close_loop {
        let mut padded = Vec::with_capacity(count + 4);
        padded.extend(points.iter().skip(count - 3).take(2));
        padded.extend(points.iter());
        padded.extend(points.iter().skip(1).take(2));
        // Original points sit at parameters 2 .. count+1 inside the padding
        (padded, 2.0, (count + 1) as f64)
    } else {
        (points.to_vec(), 0.0, (count - 1) as f64)
    };

    let spline_x = Cubic::fit(padded.iter().map(|p| p.x).collect())?;
    let spline_y = Cubic::fit(padded.iter().map(|p| p.y).collect())?;

    let samples = subdivisions * count;
    let step = if samples > 1 {
        (t_end - t_start) / (samples - 1) as f64
    } else {
        0.0
    };

    Ok((0..samples)
        .map(|i| {
            let t = (i as f64).mul_add(step, t_start);
            Vec2::new(spline_x.evaluate(t), spline_y.evaluate(t))
        })
        .collect())
}
