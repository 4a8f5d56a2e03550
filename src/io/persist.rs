//! Pattern persistence
//!
//! Serializes a pattern as its combination, placed tiles, and the shape's
//! node positions and movable flags, grouped by segment so the node/
//! segment/link graph can be rebuilt exactly without re-running the tiling
//! walk or any propagation.

use crate::io::error::{EscherError, Result, invalid_parameter};
use crate::spatial::combination::Combination;
use crate::spatial::node::{Node, NodeArena, NodeId};
use crate::spatial::shape::{Segment, Shape, wire_links};
use crate::spatial::tile::{Pattern, Tile};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

/// On-disk form of a pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Raw side pairing entries
    pub combination: Vec<i32>,
    /// Circumradius the shape was built with; fixes the link transform's
    /// center distances on restore
    pub radius: f64,
    /// Every placed tile, seed first
    pub tiles: Vec<Tile>,
    /// Non-final node count of each segment, in ring order
    pub segment_counts: Vec<usize>,
    /// Every outline node in ring order (segment final nodes excluded,
    /// they are the next segment's first)
    pub nodes: Vec<Node>,
}

/// Capture a pattern into its persistable record
pub fn pattern_record(pattern: &Pattern, radius: f64) -> PatternRecord {
    let shape = &pattern.shape;
    let segment_counts = shape
        .segments()
        .iter()
        .map(|segment| segment.nodes.len().saturating_sub(1))
        .collect();
    let nodes = shape
        .nodes()
        .into_iter()
        .filter_map(|id| shape.node(id).copied())
        .collect();

    PatternRecord {
        combination: pattern.combination.entries().to_vec(),
        radius,
        tiles: pattern.tiles.clone(),
        segment_counts,
        nodes,
    }
}

/// Rebuild a pattern from its record without recomputation
///
/// The arena is refilled in ring order, segments take consecutive runs
/// plus the next segment's first node as their shared endpoint, and links
/// are rewired from the combination.
///
/// # Errors
///
/// Returns an invalid-parameter error when the combination is not a valid
/// involution or the node counts are inconsistent.
pub fn restore_pattern(record: &PatternRecord) -> Result<Pattern> {
    let combination = Combination::new(record.combination.clone())
        .map_err(|reason| invalid_parameter("combination", &"<record>", &reason))?;
    let n = combination.sides();

    if record.segment_counts.len() != 2 * n {
        return Err(invalid_parameter(
            "segment_counts",
            &record.segment_counts.len(),
            &format!("expected {} segments for {n} sides", 2 * n),
        ));
    }
    let total: usize = record.segment_counts.iter().sum();
    if total != record.nodes.len() || record.segment_counts.iter().any(|&c| c == 0) {
        return Err(invalid_parameter(
            "nodes",
            &record.nodes.len(),
            &format!("segment counts sum to {total}"),
        ));
    }

    let mut arena = NodeArena::new();
    let ids: Vec<NodeId> = record.nodes.iter().map(|&node| arena.alloc(node)).collect();

    let height = record.radius * (PI / n as f64).cos();
    let mut segments = Vec::with_capacity(2 * n);
    let mut offset = 0;
    for (index, &count) in record.segment_counts.iter().enumerate() {
        let mut nodes: Vec<NodeId> = ids.iter().skip(offset).take(count).copied().collect();
        // Shared endpoint: the next segment's first node, wrapping around
        let next_first = ids.get((offset + count) % total).copied();
        if let Some(shared) = next_first {
            nodes.push(shared);
        }
        let side = index / 2;
        segments.push(Segment {
            nodes,
            angle: 2.0 * PI / n as f64 * side as f64,
            center_distance: height / 2.0,
        });
        offset += count;
    }

    let links = wire_links(&combination);
    let shape = Shape {
        arena,
        segments,
        links,
    };

    Ok(Pattern {
        combination,
        tiles: record.tiles.clone(),
        shape,
    })
}

/// Save a pattern as pretty-printed JSON
///
/// # Errors
///
/// Returns a pattern-format error when encoding fails and a file-system
/// error when writing fails.
pub fn save_pattern(pattern: &Pattern, radius: f64, path: &Path) -> Result<()> {
    let record = pattern_record(pattern, radius);
    let json = serde_json::to_string_pretty(&record).map_err(|source| {
        EscherError::PatternFormat {
            path: path.to_path_buf(),
            source,
        }
    })?;
    fs::write(path, json).map_err(|source| EscherError::FileSystem {
        path: path.to_path_buf(),
        operation: "write pattern",
        source,
    })
}

/// Load a pattern from a JSON file
///
/// # Errors
///
/// Returns a file-system error when reading fails, a pattern-format error
/// when the JSON is malformed, and an invalid-parameter error when the
/// record is inconsistent.
pub fn load_pattern(path: &Path) -> Result<Pattern> {
    let json = fs::read_to_string(path).map_err(|source| EscherError::FileSystem {
        path: path.to_path_buf(),
        operation: "read pattern",
        source,
    })?;
    let record: PatternRecord =
        serde_json::from_str(&json).map_err(|source| EscherError::PatternFormat {
            path: path.to_path_buf(),
            source,
        })?;
    restore_pattern(&record)
}
