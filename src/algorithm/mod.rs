//! Core engines: pairing enumeration, link propagation, and the tiling walk

/// Enumeration of involutive side pairings and their mirror variants
pub mod combinations;
/// Transform-and-copy propagation across linked segments
pub mod propagation;
/// Breadth-first edge-to-edge tile placement
pub mod walk;
