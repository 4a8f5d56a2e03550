//! Validates the breadth-first tiling walk: tile counts, handedness, the
//! distance cutoff, and rejection of contradictory pairings

// Assertion helpers fail the test by panicking
#![allow(clippy::panic)]

use eschertile::EscherError;
use eschertile::algorithm::walk::{all_patterns, make_pattern, side_rotation};
use eschertile::spatial::combination::Combination;
use std::f64::consts::{PI, TAU};

fn combo(entries: Vec<i32>) -> Combination {
    Combination::new(entries).unwrap_or_else(|e| panic!("valid combination: {e}"))
}

#[test]
fn test_side_rotation_divides_the_full_turn() {
    assert!((side_rotation(0, 4)).abs() < 1e-12);
    assert!((side_rotation(1, 4) - TAU / 4.0).abs() < 1e-12);
    assert!((side_rotation(3, 6) - PI).abs() < 1e-12);
}

#[test]
fn test_tight_cutoff_leaves_only_the_seed() {
    let pattern =
        make_pattern(&combo(vec![0, 1, 2]), 1.0, 1.0).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(pattern.tiles.len(), 1);

    let seed = pattern
        .tiles
        .first()
        .unwrap_or_else(|| panic!("missing seed"));
    assert!(seed.pos.norm() < 1e-12, "seed sits at the origin");
    assert!(seed.rot.abs() < 1e-12);
    assert_eq!(seed.mirror, 1);
}

#[test]
fn test_triangle_tilings_fill_two_rings() {
    for entries in [vec![0, 1, 2], vec![1, 0, 2]] {
        let pattern =
            make_pattern(&combo(entries.clone()), 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            pattern.tiles.len(),
            13,
            "{entries:?} should place 13 tiles within 2.5 side heights"
        );
    }
}

#[test]
fn test_square_tilings_fill_two_rings() {
    for entries in [vec![2, 3, 0, 1], vec![1, 0, 3, 2], vec![0, 1, 2, 3]] {
        let pattern =
            make_pattern(&combo(entries.clone()), 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(
            pattern.tiles.len(),
            21,
            "{entries:?} should place 21 tiles within 2.5 side heights"
        );
    }
}

#[test]
fn test_all_tiles_respect_the_distance_cutoff() {
    let radius = 1.0;
    let max_distance = 2.5;
    let pattern =
        make_pattern(&combo(vec![2, 3, 0, 1]), radius, max_distance).unwrap_or_else(|e| panic!("{e}"));
    let height = radius * (PI / 4.0).cos();
    for tile in &pattern.tiles {
        assert!(
            tile.pos.norm() < max_distance * height,
            "tile at {:?} beyond the cutoff",
            tile.pos
        );
    }
}

#[test]
fn test_mirror_pairings_place_mirrored_tiles() {
    let pattern =
        make_pattern(&combo(vec![0, -3, -2]), 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(pattern.tiles.len(), 13);
    let mirrored = pattern.tiles.iter().filter(|t| t.mirror == -1).count();
    assert_eq!(mirrored, 6, "alternating handedness across the pairing axis");
}

#[test]
fn test_contradictory_pairings_are_rejected() {
    for entries in [
        vec![1, 0, 2, 3],
        vec![0, 1, 3, 2],
        vec![-2, -1, 3, 2],
        vec![1, 0, -4, -3],
    ] {
        let result = make_pattern(&combo(entries.clone()), 1.0, 2.5);
        assert!(
            matches!(result, Err(EscherError::InvalidCombination { .. })),
            "{entries:?} cannot tile the plane and must be rejected"
        );
    }
}

#[test]
fn test_all_patterns_keeps_only_tileable_pairings() {
    let triangles = all_patterns(3, true, 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(triangles.len(), 7, "every triangle pairing tiles");

    let squares_plain = all_patterns(4, false, 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(squares_plain.len(), 6);

    let squares = all_patterns(4, true, 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(squares.len(), 17);
}

#[test]
fn test_patterns_carry_their_shape_and_pairing() {
    let combination = combo(vec![2, 3, 0, 1]);
    let pattern = make_pattern(&combination, 1.0, 2.5).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(pattern.combination, combination);
    assert_eq!(pattern.shape.sides(), 4);
}

#[test]
fn test_walk_propagates_parameter_errors() {
    assert!(matches!(
        make_pattern(&combo(vec![0, 1, 2]), -1.0, 2.5),
        Err(EscherError::InvalidParameter { .. })
    ));
    assert!(matches!(
        all_patterns(11, false, 1.0, 2.5),
        Err(EscherError::InvalidParameter { .. })
    ));
}
