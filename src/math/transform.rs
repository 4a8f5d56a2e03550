//! Point-set transform pipeline
//!
//! A small tagged-variant replacement for run-time dispatched action lists:
//! each operation is an enum variant and pipelines are plain slices applied
//! in order.

use crate::math::vector::Vec2;

/// One transform step applied to every point in a sequence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Shift every point by an offset
    Translate(Vec2),
    /// Rotate every point around the origin, heading convention
    Rotate(f64),
    /// Multiply components, e.g. `Scale(Vec2::new(-1.0, 1.0))` mirrors in X
    Scale(Vec2),
}

/// Apply a pipeline of operations to a point sequence, left to right
pub fn apply_pipeline(points: &[Vec2], pipeline: &[TransformOp]) -> Vec<Vec2> {
    points
        .iter()
        .map(|&point| {
            pipeline.iter().fold(point, |p, op| match *op {
                TransformOp::Translate(offset) => p + offset,
                TransformOp::Rotate(angle) => p.rotate(angle),
                TransformOp::Scale(factor) => p.scale(factor),
            })
        })
        .collect()
}
