//! PNG rendering of patterns
//!
//! Stamps the (optionally smoothed) shape outline onto every placed tile,
//! optionally projects the plane onto a bounded disc, scanline-fills each
//! tile polygon with a color from a seeded palette, and optionally strokes
//! the borders. Plain rasterization, no anti-aliasing; this is a preview
//! export, not a drawing engine.

use crate::io::configuration::DrawConfig;
use crate::io::error::{EscherError, Result};
use crate::math::vector::Vec2;
use crate::spatial::tile::Pattern;
use image::{Rgb, RgbImage};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::Path;

/// World radius of the disc the spherical projection maps the plane into
const PROJECTION_RADIUS: f64 = 3.0;

/// Project a point of the infinite plane into the projection disc
///
/// Radial distance `r` maps to `R * (1 - c^-r)` with `c = R / (R - 1)`,
/// which keeps the scale near the origin and crowds far tiles toward the
/// disc rim for a sphere-like overview.
fn spherical_projection(point: Vec2) -> Vec2 {
    let r = point.norm();
    if r <= 0.0 {
        return point;
    }
    let c = PROJECTION_RADIUS / (PROJECTION_RADIUS - 1.0);
    let scaling = PROJECTION_RADIUS * (1.0 - c.powf(-r)) / r;
    point * scaling
}

/// Maps world coordinates onto image pixels
struct Viewport {
    center: Vec2,
    scale: f64,
    size: f64,
}

impl Viewport {
    fn new(config: &DrawConfig) -> Self {
        Self {
            center: config.view_center,
            scale: f64::from(config.image_size) / (2.0 * config.view_extent),
            size: f64::from(config.image_size),
        }
    }

    fn to_pixel(&self, point: Vec2) -> (f64, f64) {
        let x = (point.x - self.center.x).mul_add(self.scale, self.size / 2.0);
        let y = (self.center.y - point.y).mul_add(self.scale, self.size / 2.0);
        (x, y)
    }
}

/// Fill a polygon with even-odd scanline coverage
fn fill_polygon(image: &mut RgbImage, polygon: &[(f64, f64)], color: Rgb<u8>) {
    if polygon.len() < 3 {
        return;
    }
    let height = image.height() as i64;
    let width = image.width() as i64;
    let min_y = polygon.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let max_y = polygon
        .iter()
        .map(|p| p.1)
        .fold(f64::NEG_INFINITY, f64::max);
    let row_start = (min_y.floor() as i64).max(0);
    let row_end = (max_y.ceil() as i64).min(height - 1);

    for row in row_start..=row_end {
        let scan_y = row as f64 + 0.5;
        let mut crossings = Vec::new();
        for (index, &(x1, y1)) in polygon.iter().enumerate() {
            let &(x2, y2) = polygon
                .get((index + 1) % polygon.len())
                .unwrap_or(&(x1, y1));
            if (y1 <= scan_y) == (y2 <= scan_y) {
                continue;
            }
            crossings.push((scan_y - y1) / (y2 - y1) * (x2 - x1) + x1);
        }
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            let (Some(&left), Some(&right)) = (pair.first(), pair.get(1)) else {
                continue;
            };
            let col_start = (left.ceil() as i64).max(0);
            let col_end = (right.floor() as i64).min(width - 1);
            for col in col_start..=col_end {
                image.put_pixel(col as u32, row as u32, color);
            }
        }
    }
}

/// Stroke the closed polygon outline with 1px lines
fn stroke_polygon(image: &mut RgbImage, polygon: &[(f64, f64)], color: Rgb<u8>) {
    let width = image.width() as i64;
    let height = image.height() as i64;
    for (index, &(x1, y1)) in polygon.iter().enumerate() {
        let &(x2, y2) = polygon
            .get((index + 1) % polygon.len())
            .unwrap_or(&(x1, y1));
        let steps = (x2 - x1).abs().max((y2 - y1).abs()).ceil().max(1.0) as usize;
        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            let x = (x2 - x1).mul_add(t, x1).round() as i64;
            let y = (y2 - y1).mul_add(t, y1).round() as i64;
            if (0..width).contains(&x) && (0..height).contains(&y) {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Render a pattern and save it as a PNG
///
/// Tile colors come from a palette drawn from the seeded generator, so the
/// same seed always produces the same coloring.
///
/// # Errors
///
/// Returns a computation error when outline smoothing fails and an
/// image-export error when saving fails.
pub fn export_pattern_png(pattern: &Pattern, config: &DrawConfig, path: &Path) -> Result<()> {
    let outline = pattern.shape.coordinates(config.smooth_curves)?;
    let viewport = Viewport::new(config);
    let mut image = RgbImage::from_pixel(
        config.image_size,
        config.image_size,
        Rgb(config.background),
    );

    let mut rng = StdRng::seed_from_u64(config.seed);
    for tile in &pattern.tiles {
        let color = Rgb([
            rng.random_range(60..=220),
            rng.random_range(60..=220),
            rng.random_range(60..=220),
        ]);
        let polygon: Vec<(f64, f64)> = tile
            .place_outline(&outline)
            .into_iter()
            .map(|point| {
                if config.spherical {
                    viewport.to_pixel(spherical_projection(point))
                } else {
                    viewport.to_pixel(point)
                }
            })
            .collect();
        fill_polygon(&mut image, &polygon, color);
        if config.draw_border {
            stroke_polygon(&mut image, &polygon, Rgb(config.border_color));
        }
    }

    image.save(path).map_err(|source| EscherError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
