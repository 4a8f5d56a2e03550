//! Mathematical utilities for the tile editor

/// Cubic spline interpolation over a uniform parameter grid
pub mod interpolation;
/// Polyline resampling for smooth side outlines
pub mod smoothing;
/// Tagged transform operations applied in sequence
pub mod transform;
/// Two-dimensional vector arithmetic and rotation
pub mod vector;
