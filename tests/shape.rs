//! Validates shape construction: node layout, movable flags, and closure

// Assertion helpers fail the test by panicking
#![allow(clippy::panic)]

use eschertile::EscherError;
use eschertile::spatial::combination::Combination;
use eschertile::spatial::shape::build_shape;
use std::f64::consts::PI;

fn combo(entries: Vec<i32>) -> Combination {
    Combination::new(entries).unwrap_or_else(|e| panic!("valid combination: {e}"))
}

#[test]
fn test_triangle_node_and_segment_layout() {
    let shape = build_shape(&combo(vec![1, 0, 2]), 1.0, 3).unwrap_or_else(|e| panic!("{e}"));

    assert_eq!(shape.sides(), 3);
    assert_eq!(shape.segments().len(), 6, "two segments per side");
    for segment in shape.segments() {
        assert_eq!(segment.nodes.len(), 3);
    }
    // (nodes_per_segment - 1) * 2 unique nodes per side
    assert_eq!(shape.nodes().len(), 12);
}

#[test]
fn test_segment_endpoints_are_shared_with_neighbors() {
    let shape = build_shape(&combo(vec![2, 3, 0, 1]), 1.0, 4).unwrap_or_else(|e| panic!("{e}"));
    let segments = shape.segments();
    for (index, segment) in segments.iter().enumerate() {
        let next = segments
            .get((index + 1) % segments.len())
            .unwrap_or_else(|| panic!("missing segment"));
        assert_eq!(
            segment.nodes.last(),
            next.nodes.first(),
            "segment {index} must share its last node with the next segment"
        );
    }
}

#[test]
fn test_corner_positions_follow_polygon_geometry() {
    let radius = 1.0;
    let shape = build_shape(&combo(vec![0, 1, 2]), radius, 3).unwrap_or_else(|e| panic!("{e}"));
    let height = radius * (PI / 3.0).cos();

    let nodes = shape.nodes();
    let first_corner = nodes
        .first()
        .and_then(|&id| shape.node(id))
        .unwrap_or_else(|| panic!("missing corner node"));
    assert!((first_corner.pos.x - (-(PI / 3.0).tan() * height / 2.0)).abs() < 1e-12);
    assert!((first_corner.pos.y - height / 2.0).abs() < 1e-12);
    assert!(!first_corner.movable, "corners are fixed");
}

#[test]
fn test_self_paired_side_midpoint_is_fixed() {
    // Sides 0 and 1 paired, side 2 folded onto itself
    let shape = build_shape(&combo(vec![1, 0, 2]), 1.0, 3).unwrap_or_else(|e| panic!("{e}"));
    let segments = shape.segments();

    // Midpoint of side s is the first node of segment 2s + 1
    let side2_midpoint = segments
        .get(5)
        .and_then(|s| s.nodes.first())
        .and_then(|&id| shape.node(id))
        .unwrap_or_else(|| panic!("missing midpoint"));
    assert!(
        !side2_midpoint.movable,
        "self-paired side midpoint must be fixed"
    );

    for side in [0_usize, 1] {
        let midpoint = segments
            .get(2 * side + 1)
            .and_then(|s| s.nodes.first())
            .and_then(|&id| shape.node(id))
            .unwrap_or_else(|| panic!("missing midpoint"));
        assert!(
            midpoint.movable,
            "midpoint of directly paired side {side} stays movable"
        );
    }

    // Every non-corner, non-fixed-midpoint node is movable
    assert_eq!(shape.movable_nodes().len(), 8);
}

#[test]
fn test_link_flags_per_pairing_kind() {
    let shape =
        build_shape(&combo(vec![1, 0, 2, -5, -4]), 1.0, 3).unwrap_or_else(|e| panic!("{e}"));
    let links = shape.links();
    assert_eq!(links.len(), 10, "two links per side");

    // Direct pair 0 <-> 1: both flips
    let direct = links
        .iter()
        .find(|l| l.source == 0)
        .unwrap_or_else(|| panic!("missing link"));
    assert_eq!(direct.linked, 3);
    assert!(direct.flip_length && direct.flip_width);

    // Self pair on side 2: halves linked to each other, both flips
    let folded = links
        .iter()
        .find(|l| l.source == 4)
        .unwrap_or_else(|| panic!("missing link"));
    assert_eq!(folded.linked, 5);
    assert!(folded.flip_length && folded.flip_width);

    // Mirror pair 3 <-> 4: width flip only, same-index halves
    let mirrored = links
        .iter()
        .find(|l| l.source == 6)
        .unwrap_or_else(|| panic!("missing link"));
    assert_eq!(mirrored.linked, 8);
    assert!(!mirrored.flip_length && mirrored.flip_width);
}

#[test]
fn test_next_movable_node_cycles_through_selection() {
    let shape = build_shape(&combo(vec![0, 1, 2]), 1.0, 3).unwrap_or_else(|e| panic!("{e}"));
    let movable = shape.movable_nodes();
    assert!(!movable.is_empty());

    let first = shape
        .next_movable_node(None)
        .unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(Some(&first), movable.first());

    let mut current = first;
    for _ in 0..movable.len() {
        current = shape
            .next_movable_node(Some(current))
            .unwrap_or_else(|e| panic!("{e}"));
    }
    assert_eq!(current, first, "selection wraps around");
}

#[test]
fn test_no_movable_nodes_is_a_distinct_error() {
    // All sides self-paired with only endpoint nodes: corners and fixed
    // midpoints, nothing selectable
    let shape = build_shape(&combo(vec![0, 1, 2]), 1.0, 2).unwrap_or_else(|e| panic!("{e}"));
    assert!(shape.movable_nodes().is_empty());
    assert!(matches!(
        shape.next_movable_node(None),
        Err(EscherError::NoMovableNodes)
    ));
}

#[test]
fn test_build_rejects_malformed_parameters() {
    let c = combo(vec![0, 1, 2]);
    assert!(matches!(
        build_shape(&c, 0.0, 3),
        Err(EscherError::InvalidParameter { .. })
    ));
    assert!(matches!(
        build_shape(&c, -1.0, 3),
        Err(EscherError::InvalidParameter { .. })
    ));
    assert!(matches!(
        build_shape(&c, 1.0, 1),
        Err(EscherError::InvalidParameter { .. })
    ));
}

#[test]
fn test_plain_coordinates_trace_the_outline_ring() {
    let shape = build_shape(&combo(vec![2, 3, 0, 1]), 1.0, 3).unwrap_or_else(|e| panic!("{e}"));
    let coordinates = shape.coordinates(false).unwrap_or_else(|e| panic!("{e}"));
    assert_eq!(coordinates.len(), shape.nodes().len());

    // All outline points sit within the circumradius
    for point in &coordinates {
        assert!(point.norm() <= 1.0 + 1e-9);
    }
}
