//! Cubic spline interpolation for smooth curve fitting
//!
//! Implements natural spline boundary conditions where second derivatives
//! are zero at the endpoints. Knots are placed on the uniform parameter grid
//! `0, 1, .., n-1`, which is the only parameterization side smoothing needs
//! and lets the tridiagonal solve assume unit spacing.

use std::error::Error;
use std::fmt;

/// Error type for interpolation operations
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Natural cubic spline through values sampled at `t = 0, 1, .., n-1`
///
/// Provides C2 continuous interpolation using piecewise cubic polynomials.
/// Parameters outside the knot range evaluate to the nearest endpoint value.
#[derive(Debug, Clone)]
pub struct Cubic {
    values: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl Cubic {
    /// Fit a spline through `values` at unit parameter spacing
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 values are provided.
    pub fn fit(values: Vec<f64>) -> Result<Self, InterpolationError> {
        let n = values.len();
        if n < 2 {
            return Err(InterpolationError::new(
                "Need at least 2 values for interpolation",
            ));
        }

        // Thomas algorithm for m[i-1] + 4*m[i] + m[i+1] = rhs[i], with the
        // natural conditions m[0] = m[n-1] = 0 folded in.
        let mut second_derivatives = vec![0.0; n];
        let mut diagonal = vec![0.0; n];
        let mut rhs = vec![0.0; n];

        for i in 1..n - 1 {
            let y_prev = values.get(i - 1).copied().unwrap_or(0.0);
            let y_here = values.get(i).copied().unwrap_or(0.0);
            let y_next = values.get(i + 1).copied().unwrap_or(0.0);
            let r = 6.0 * 2.0f64.mul_add(-y_here, y_next + y_prev);

            if i == 1 {
                if let Some(d) = diagonal.get_mut(i) {
                    *d = 4.0;
                }
                if let Some(slot) = rhs.get_mut(i) {
                    *slot = r;
                }
            } else {
                let prev_diag = diagonal.get(i - 1).copied().unwrap_or(1.0);
                let prev_rhs = rhs.get(i - 1).copied().unwrap_or(0.0);
                if let Some(d) = diagonal.get_mut(i) {
                    *d = 4.0 - 1.0 / prev_diag;
                }
                if let Some(slot) = rhs.get_mut(i) {
                    *slot = r - prev_rhs / prev_diag;
                }
            }
        }

        for i in (1..n - 1).rev() {
            let next_m = second_derivatives.get(i + 1).copied().unwrap_or(0.0);
            let diag = diagonal.get(i).copied().unwrap_or(1.0);
            let r = rhs.get(i).copied().unwrap_or(0.0);
            if let Some(m) = second_derivatives.get_mut(i) {
                *m = (r - next_m) / diag;
            }
        }

        Ok(Self {
            values,
            second_derivatives,
        })
    }

    /// Evaluate the spline at parameter `t`
    ///
    /// Parameters below 0 or above `n - 1` clamp to the endpoint values.
    pub fn evaluate(&self, t: f64) -> f64 {
        let n = self.values.len();
        let first = self.values.first().copied().unwrap_or(0.0);
        let last = self.values.last().copied().unwrap_or(0.0);

        if t <= 0.0 {
            return first;
        }
        if t >= (n - 1) as f64 {
            return last;
        }

        let k = (t.floor() as usize).min(n - 2);
        let y_lo = self.values.get(k).copied().unwrap_or(first);
        let y_hi = self.values.get(k + 1).copied().unwrap_or(last);
        let m_lo = self.second_derivatives.get(k).copied().unwrap_or(0.0);
        let m_hi = self.second_derivatives.get(k + 1).copied().unwrap_or(0.0);

        let b = t - k as f64;
        let a = 1.0 - b;

        a * y_lo + b * y_hi + ((a.powi(3) - a) * m_lo + (b.powi(3) - b) * m_hi) / 6.0
    }
}
