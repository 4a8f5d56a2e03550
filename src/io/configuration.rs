//! Editor constants and runtime configuration defaults

use crate::math::vector::Vec2;

/// Default circumradius of the base polygon
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default number of nodes per half-side segment (endpoints included)
pub const DEFAULT_NODES_PER_SEGMENT: usize = 3;

/// Default tiling walk cutoff, in multiples of the tile side height
pub const DEFAULT_MAX_DISTANCE: f64 = 4.5;

// Involutions grow combinatorially (4, 10, 26, 76, .. for n = 3, 4, 5, ..)
// and mirror variants multiply each by up to 2^(n/2)
/// Largest side count accepted by combination enumeration
pub const MAX_COMBINATION_SIDES: usize = 8;

/// Duplicate-tile tolerance, relative to the tile side height
pub const TILE_MATCH_TOLERANCE: f64 = 1e-5;

/// Spline samples per outline node when smoothing side curves
pub const SMOOTH_SUBDIVISIONS: usize = 5;

// Output settings
/// Default edge length of exported pattern images, pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 800;

/// Fixed seed for reproducible tile palettes
pub const DEFAULT_SEED: u64 = 42;

/// Suffix-free stem used for exported pattern files
pub const OUTPUT_STEM: &str = "pattern";

/// Drawing options for pattern rendering
///
/// An explicit record of every draw-time choice, with one field per option.
#[derive(Debug, Clone)]
pub struct DrawConfig {
    /// Edge length of the square output image in pixels
    pub image_size: u32,
    /// Resample side outlines through cubic splines before stamping
    pub smooth_curves: bool,
    /// Stroke tile borders on top of the fills
    pub draw_border: bool,
    /// Project the plane onto a bounded disc before rendering
    pub spherical: bool,
    /// Seed for the per-tile color palette
    pub seed: u64,
    /// Background color
    pub background: [u8; 3],
    /// Border color, used when `draw_border` is set
    pub border_color: [u8; 3],
    /// World-space center of the rendered viewport
    pub view_center: Vec2,
    /// World-space half-width of the rendered viewport
    pub view_extent: f64,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            image_size: DEFAULT_IMAGE_SIZE,
            smooth_curves: false,
            draw_border: true,
            spherical: false,
            seed: DEFAULT_SEED,
            background: [245, 245, 240],
            border_color: [30, 30, 30],
            view_center: Vec2::ZERO,
            view_extent: DEFAULT_MAX_DISTANCE + 1.0,
        }
    }
}
