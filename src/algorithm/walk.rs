//! Breadth-first tiling walk
//!
//! Starting from one seed tile, copies of the base polygon are placed
//! edge-to-edge following the side pairing: each side of every placed tile
//! proposes a neighbor one side-height away, rotated so the paired sides
//! meet and mirrored when the pairing crosses handedness. Placement stops
//! at a distance cutoff from the origin; a proposal landing on an existing
//! tile must agree with it in rotation and handedness, otherwise the
//! pairing cannot tile the plane at all.

use crate::io::configuration::{DEFAULT_NODES_PER_SEGMENT, TILE_MATCH_TOLERANCE};
use crate::io::error::{EscherError, Result};
use crate::math::vector::Vec2;
use crate::spatial::combination::Combination;
use crate::spatial::shape::build_shape;
use crate::spatial::tile::{Pattern, Tile};
use std::f64::consts::{PI, TAU};

/// Rotation of side `index` on an `nr_sides`-gon
pub fn side_rotation(index: usize, nr_sides: usize) -> f64 {
    TAU / nr_sides as f64 * index as f64
}

/// How a proposed tile relates to the already placed set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TileMatch {
    /// Nothing occupies the proposed position
    Vacant,
    /// A tile is already there with agreeing rotation and handedness
    Duplicate,
    /// A tile is already there but disagrees: the tiling contradicts itself
    Conflict,
}

/// Compare a proposal against the placed set within `eps` tolerance
///
/// Rotation distance is wrapped onto `[0, pi]` before comparing, so
/// rotations on either side of the `2*pi` seam still count as equal.
fn match_against(tiles: &[Tile], candidate: Tile, eps: f64) -> TileMatch {
    for tile in tiles {
        let offset = tile.pos - candidate.pos;
        if offset.x.abs() >= eps || offset.y.abs() >= eps {
            continue;
        }
        let mut rot_diff = (tile.rot - candidate.rot).abs();
        if rot_diff > PI {
            rot_diff = TAU - rot_diff;
        }
        return if rot_diff < eps && tile.mirror == candidate.mirror {
            TileMatch::Duplicate
        } else {
            TileMatch::Conflict
        };
    }
    TileMatch::Vacant
}

/// Realize a side pairing as a bounded tiling
///
/// Walks a worklist of placed tiles, expanding each tile's sides in order.
/// A neighbor beyond `max_distance` side-heights from the origin is not
/// placed (which also bounds the walk for pairings that never close).
/// Duplicate placements are the expected closure case and are skipped.
///
/// # Errors
///
/// Returns [`EscherError::InvalidCombination`] when a proposal lands on an
/// existing tile with a different rotation or handedness, and propagates
/// shape construction failures for malformed parameters.
pub fn make_pattern(combination: &Combination, radius: f64, max_distance: f64) -> Result<Pattern> {
    let nr_sides = combination.sides();
    let shape = build_shape(combination, radius, DEFAULT_NODES_PER_SEGMENT)?;
    let height = radius * (PI / nr_sides as f64).cos();
    let eps = height * TILE_MATCH_TOLERANCE;

    let mut tiles = vec![Tile::seed()];
    let mut index = 0;
    while index < tiles.len() {
        let tile = tiles.get(index).copied().unwrap_or(Tile::seed());
        for (side, &entry) in combination.entries().iter().enumerate() {
            let direction = tile
                .mirror_sign()
                .mul_add(side_rotation(side, nr_sides), tile.rot);
            let matched = crate::spatial::combination::SideMatch::from_entry(entry);
            let mirror = if matched.mirrored {
                -tile.mirror
            } else {
                tile.mirror
            };

            let step = Vec2::new(direction.sin(), direction.cos()) * height;
            let rot = (direction - side_rotation(matched.side, nr_sides) * mirror as f64 + PI)
                .rem_euclid(TAU);
            let candidate = Tile::new(tile.pos + step, rot, mirror);

            if candidate.pos.norm() >= max_distance * height {
                continue;
            }
            match match_against(&tiles, candidate, eps) {
                TileMatch::Vacant => tiles.push(candidate),
                TileMatch::Duplicate => {}
                TileMatch::Conflict => {
                    return Err(EscherError::InvalidCombination {
                        combination: combination.entries().to_vec(),
                    });
                }
            }
        }
        index += 1;
    }

    Ok(Pattern {
        combination: combination.clone(),
        tiles,
        shape,
    })
}

/// Build every valid pattern for a side count
///
/// Enumerates all pairings (optionally extended with mirror variants) and
/// keeps the ones that tile without contradiction; contradictory pairings
/// are silently skipped, any other failure is surfaced.
///
/// # Errors
///
/// Propagates enumeration and shape construction failures.
pub fn all_patterns(
    nr_sides: usize,
    with_mirror: bool,
    radius: f64,
    max_distance: f64,
) -> Result<Vec<Pattern>> {
    let mut combinations = crate::algorithm::combinations::find_combinations(nr_sides)?;
    if with_mirror {
        combinations = crate::algorithm::combinations::add_mirror_combinations(combinations);
    }

    let mut patterns = Vec::new();
    for combination in &combinations {
        match make_pattern(combination, radius, max_distance) {
            Ok(pattern) => patterns.push(pattern),
            Err(EscherError::InvalidCombination { .. }) => {}
            Err(other) => return Err(other),
        }
    }
    Ok(patterns)
}
