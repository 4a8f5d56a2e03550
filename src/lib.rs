//! Escher-style tessellation tile editor core
//!
//! A polygon's sides are paired with each other (directly, mirrored, or
//! folded onto themselves), edits to one side's geometry propagate to its
//! partner through a fixed rotate/flip/rotate transform, and the resulting
//! tile is stamped across the plane by a breadth-first walk over side
//! adjacencies.

#![forbid(unsafe_code)]

/// Edge-pairing enumeration, link propagation, and the tiling walk
pub mod algorithm;
/// Input/output operations, rendering, persistence, and error handling
pub mod io;
/// Mathematical utilities for 2D geometry, splines, and transforms
pub mod math;
/// Node/segment/link graph, combinations, tiles, and patterns
pub mod spatial;

pub use io::error::{EscherError, Result};
