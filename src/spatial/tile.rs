//! Tile placements and complete patterns

use crate::math::transform::{TransformOp, apply_pipeline};
use crate::math::vector::Vec2;
use crate::spatial::combination::Combination;
use crate::spatial::shape::Shape;
use serde::{Deserialize, Serialize};

/// One placed copy of the base polygon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Center position in the plane
    pub pos: Vec2,
    /// Rotation of the copy, radians
    pub rot: f64,
    /// Handedness: `1` for a direct copy, `-1` for a mirrored one
    pub mirror: i8,
}

impl Tile {
    /// The seed tile at the origin
    pub const fn seed() -> Self {
        Self {
            pos: Vec2::ZERO,
            rot: 0.0,
            mirror: 1,
        }
    }

    /// Create a placement
    pub const fn new(pos: Vec2, rot: f64, mirror: i8) -> Self {
        Self { pos, rot, mirror }
    }

    /// Handedness as a sign factor
    pub const fn mirror_sign(self) -> f64 {
        self.mirror as f64
    }

    /// Stamp a tile-local outline into the plane at this placement
    ///
    /// Applies mirror, rotation, and translation in that order.
    pub fn place_outline(self, outline: &[Vec2]) -> Vec<Vec2> {
        apply_pipeline(
            outline,
            &[
                TransformOp::Scale(Vec2::new(self.mirror_sign(), 1.0)),
                TransformOp::Rotate(self.rot),
                TransformOp::Translate(self.pos),
            ],
        )
    }
}

/// A side pairing realized as a bounded tiling, plus the editable shape
/// used to stamp geometry onto every placed tile
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The pairing that generated this tiling
    pub combination: Combination,
    /// Every placed tile, seed first, in placement order
    pub tiles: Vec<Tile>,
    /// Editable geometry shared by all tiles
    pub shape: Shape,
}
