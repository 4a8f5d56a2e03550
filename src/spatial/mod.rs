//! Spatial data model: nodes, segments, links, shapes, tiles, and patterns

/// Involutive side-pairing sequences
pub mod combination;
/// Node arena with identity-based equality
pub mod node;
/// Segment/link graph of one editable tile and its builder
pub mod shape;
/// Placed tile instances and complete patterns
pub mod tile;
