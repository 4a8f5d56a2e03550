//! Two-dimensional vector arithmetic
//!
//! Rotation follows the tile editor's heading convention: angle zero points
//! along +Y and positive angles turn clockwise, so a side at angle `a` has
//! outward normal `Vec2::new(0.0, 1.0).rotate(a)`.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// A 2D point or displacement with `f64` components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f64,
    /// Vertical component
    pub y: f64,
}

impl Vec2 {
    /// Origin vector
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from components
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate by `angle` radians in the heading convention
    ///
    /// Equivalent to multiplying by the matrix `((c, s), (-s, c))` with
    /// `c = cos(angle)`, `s = sin(angle)`.
    pub fn rotate(self, angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            x: c.mul_add(self.x, s * self.y),
            y: (-s).mul_add(self.x, c * self.y),
        }
    }

    /// Component-wise multiplication, used for axis mirrors and scaling
    pub const fn scale(self, factor: Self) -> Self {
        Self {
            x: self.x * factor.x,
            y: self.y * factor.y,
        }
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Midpoint between two points
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: f64::midpoint(self.x, other.x),
            y: f64::midpoint(self.y, other.y),
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
