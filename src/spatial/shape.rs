//! Editable tile shapes
//!
//! A shape is the node/segment/link graph of one polygon: every side is
//! split into two segments meeting at the side's midpoint, and links
//! declare how one segment's geometry is derived from another's. Boundary
//! nodes are shared by id between neighboring segments, which keeps the
//! outline closed through every edit.

use crate::algorithm::propagation;
use crate::io::configuration::SMOOTH_SUBDIVISIONS;
use crate::io::error::{EscherError, Result, computation_error, invalid_parameter};
use crate::math::smoothing::smooth_curve;
use crate::math::vector::Vec2;
use crate::spatial::combination::Combination;
use crate::spatial::node::{Node, NodeArena, NodeId};
use std::f64::consts::PI;

/// Index of a segment within a shape
pub type SegmentId = usize;

/// Half of one polygon side
///
/// Holds an ordered run of node ids; the first and last id are shared with
/// the neighboring segments. `angle` is the side's orientation and
/// `center_distance` the perpendicular distance from the tile center, both
/// used to recenter the link transform.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Ordered node ids, at least 2, endpoints shared with neighbors
    pub nodes: Vec<NodeId>,
    /// Orientation angle of the owning side, radians
    pub angle: f64,
    /// Distance of the side from the tile center
    pub center_distance: f64,
}

/// A rule deriving one segment's geometry from another's
///
/// Links come in pairs (A to B and B to A) so an edit on either side
/// updates the other; a self-paired side links its own two halves.
#[derive(Debug, Clone, Copy)]
pub struct Link {
    /// Segment whose current geometry drives the update
    pub source: SegmentId,
    /// Segment rewritten from the source
    pub linked: SegmentId,
    /// Mirror along the segment's length (X axis in side-local frame);
    /// also reverses the copied node order
    pub flip_length: bool,
    /// Mirror across the segment's width (Y axis in side-local frame)
    pub flip_width: bool,
}

/// The full editable geometry of one tile
#[derive(Debug, Clone)]
pub struct Shape {
    pub(crate) arena: NodeArena,
    pub(crate) segments: Vec<Segment>,
    pub(crate) links: Vec<Link>,
}

/// Build the editable shape implied by a side pairing
///
/// Constructs a regular polygon with `combination.sides()` sides whose side
/// height is `radius * cos(pi / n)`, subdivides every side into two
/// segments of `nodes_per_segment` nodes sharing the side midpoint, and
/// wires links according to the pairing: self-paired and directly paired
/// sides get both flips, mirror-paired sides only the width flip. The
/// midpoint of a self-paired side is fixed in place.
///
/// # Errors
///
/// Returns an invalid-parameter error when `radius` is not a positive
/// finite number or `nodes_per_segment` is less than 2.
pub fn build_shape(
    combination: &Combination,
    radius: f64,
    nodes_per_segment: usize,
) -> Result<Shape> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(invalid_parameter(
            "radius",
            &radius,
            &"must be a positive finite number",
        ));
    }
    if nodes_per_segment < 2 {
        return Err(invalid_parameter(
            "nodes_per_segment",
            &nodes_per_segment,
            &"a segment needs at least its two endpoint nodes",
        ));
    }

    let n = combination.sides();
    let height = radius * (PI / n as f64).cos();
    let nodes_per_side = (nodes_per_segment - 1) * 2;

    // Evenly spaced positions along the top side, left corner included and
    // right corner dropped (it is the next side's left corner).
    let left_corner = Vec2::new(-(PI / n as f64).tan() * height / 2.0, height / 2.0);
    let right_corner = left_corner.scale(Vec2::new(-1.0, 1.0));
    let span = right_corner - left_corner;
    let side_positions: Vec<Vec2> = (0..nodes_per_side)
        .map(|k| left_corner + span * (k as f64 / nodes_per_side as f64))
        .collect();

    let mut arena = NodeArena::new();
    let mut node_ids = Vec::with_capacity(n * nodes_per_side);
    for side in 0..n {
        let angle = 2.0 * PI / n as f64 * side as f64;
        for (k, &pos) in side_positions.iter().enumerate() {
            node_ids.push(arena.alloc(Node::new(pos.rotate(angle), k != 0)));
        }
    }

    let total = node_ids.len();
    let mut segments = Vec::with_capacity(n * 2);
    for side in 0..n {
        let angle = 2.0 * PI / n as f64 * side as f64;
        for half in 0..2 {
            let segment_index = side * 2 + half;
            let nodes = (0..nodes_per_segment)
                .map(|i| {
                    let global = (segment_index * (nodes_per_segment - 1) + i) % total;
                    node_ids.get(global).copied().unwrap_or(NodeId(0))
                })
                .collect();
            segments.push(Segment {
                nodes,
                angle,
                center_distance: height / 2.0,
            });
        }
    }

    let links = wire_links(combination);

    // The midpoint of a self-paired side must stay put: both halves fold
    // onto it
    for side in 0..n {
        if !combination.is_self_paired(side) {
            continue;
        }
        let midpoint = segments
            .get(2 * side + 1)
            .and_then(|segment| segment.nodes.first().copied());
        if let Some(node) = midpoint.and_then(|id| arena.get_mut(id)) {
            node.movable = false;
        }
    }

    Ok(Shape {
        arena,
        segments,
        links,
    })
}

/// Link wiring implied by a side pairing
///
/// Self-paired and directly paired sides link with both flips set; mirror
/// pairings flip only across the width. Every relation is created in both
/// directions.
pub(crate) fn wire_links(combination: &Combination) -> Vec<Link> {
    let n = combination.sides();
    let mut links = Vec::with_capacity(n * 2);
    for side in 0..n {
        let Some(matched) = combination.partner(side) else {
            continue;
        };
        if matched.mirrored {
            // Both halves map to the same-index halves of the mirrored side
            links.push(Link {
                source: 2 * side,
                linked: 2 * matched.side,
                flip_length: false,
                flip_width: true,
            });
            links.push(Link {
                source: 2 * side + 1,
                linked: 2 * matched.side + 1,
                flip_length: false,
                flip_width: true,
            });
        } else if matched.side == side {
            // Side folded onto itself around its midpoint
            links.push(Link {
                source: 2 * side,
                linked: 2 * side + 1,
                flip_length: true,
                flip_width: true,
            });
            links.push(Link {
                source: 2 * side + 1,
                linked: 2 * side,
                flip_length: true,
                flip_width: true,
            });
        } else {
            links.push(Link {
                source: 2 * side,
                linked: 2 * matched.side + 1,
                flip_length: true,
                flip_width: true,
            });
            links.push(Link {
                source: 2 * side + 1,
                linked: 2 * matched.side,
                flip_length: true,
                flip_width: true,
            });
        }
    }
    links
}

impl Shape {
    /// All outline node ids in ring order
    ///
    /// Every segment contributes its nodes except the last one, which is
    /// the next segment's first node.
    pub fn nodes(&self) -> Vec<NodeId> {
        self.segments
            .iter()
            .flat_map(|segment| {
                segment
                    .nodes
                    .get(..segment.nodes.len().saturating_sub(1))
                    .unwrap_or_default()
            })
            .copied()
            .collect()
    }

    /// Outline node ids the editor may move
    pub fn movable_nodes(&self) -> Vec<NodeId> {
        self.nodes()
            .into_iter()
            .filter(|&id| self.arena.get(id).is_some_and(|node| node.movable))
            .collect()
    }

    /// Look up a node by id
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    /// Position of a node
    ///
    /// # Errors
    ///
    /// Returns a node-not-found error for ids from another shape.
    pub fn position(&self, id: NodeId) -> Result<Vec2> {
        self.arena
            .get(id)
            .map(|node| node.pos)
            .ok_or(EscherError::NodeNotFound { index: id.index() })
    }

    /// Segments of the shape, two per polygon side
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Links of the shape
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Number of polygon sides
    pub const fn sides(&self) -> usize {
        self.segments.len() / 2
    }

    /// The movable node after `current` in ring order, wrapping around
    ///
    /// With no current selection (or a fixed/foreign id) the first movable
    /// node is returned.
    ///
    /// # Errors
    ///
    /// Returns [`EscherError::NoMovableNodes`] when nothing is selectable,
    /// so a front end can show a message instead of crashing.
    pub fn next_movable_node(&self, current: Option<NodeId>) -> Result<NodeId> {
        let movable = self.movable_nodes();
        if movable.is_empty() {
            return Err(EscherError::NoMovableNodes);
        }
        let next = current
            .and_then(|id| movable.iter().position(|&m| m == id))
            .map_or(0, |i| (i + 1) % movable.len());
        movable
            .get(next)
            .copied()
            .ok_or(EscherError::NoMovableNodes)
    }

    /// Nodes whose geometry is derived from `id` through a link
    ///
    /// For every link whose source segment contains the node, the
    /// counterpart at the same index in the linked segment (reversed when
    /// the link flips along the length) is returned.
    pub fn linked_nodes(&self, id: NodeId) -> Vec<NodeId> {
        let mut linked = Vec::new();
        for link in &self.links {
            let Some(source) = self.segments.get(link.source) else {
                continue;
            };
            let Some(index) = source.nodes.iter().position(|&node| node == id) else {
                continue;
            };
            let mapped = if link.flip_length {
                source.nodes.len() - 1 - index
            } else {
                index
            };
            if let Some(counterpart) = self
                .segments
                .get(link.linked)
                .and_then(|segment| segment.nodes.get(mapped))
            {
                linked.push(*counterpart);
            }
        }
        linked
    }

    /// Closed outline of the tile, in drawing order
    ///
    /// With `smoothed` set, each side's two segments are spliced into one
    /// polyline and resampled through a cubic spline.
    ///
    /// # Errors
    ///
    /// Returns a computation error if spline fitting fails, which cannot
    /// happen for shapes produced by [`build_shape`].
    pub fn coordinates(&self, smoothed: bool) -> Result<Vec<Vec2>> {
        if !smoothed {
            return self
                .nodes()
                .into_iter()
                .map(|id| self.position(id))
                .collect();
        }

        let mut outline = Vec::new();
        for side in 0..self.sides() {
            let first = self.segments.get(2 * side);
            let second = self.segments.get(2 * side + 1);
            let (Some(first), Some(second)) = (first, second) else {
                continue;
            };
            let mut ids: Vec<NodeId> = first.nodes.clone();
            ids.extend(second.nodes.iter().skip(1));
            let points = ids
                .into_iter()
                .map(|id| self.position(id))
                .collect::<Result<Vec<Vec2>>>()?;
            let smooth = smooth_curve(&points, SMOOTH_SUBDIVISIONS, false)
                .map_err(|e| computation_error("smooth_coordinates", &e))?;
            outline.extend(smooth);
        }
        Ok(outline)
    }

    /// Shift a movable node by `movement` and propagate to linked segments
    ///
    /// Fixed nodes are left untouched without error, matching the editor
    /// contract that only movable nodes respond to dragging.
    ///
    /// # Errors
    ///
    /// Returns a node-not-found error for ids from another shape.
    pub fn move_node_by(&mut self, id: NodeId, movement: Vec2) -> Result<()> {
        let node = self
            .arena
            .get(id)
            .ok_or(EscherError::NodeNotFound { index: id.index() })?;
        if !node.movable {
            return Ok(());
        }
        let target = node.pos + movement;
        self.set_and_propagate(id, target)
    }

    /// Place a movable node at `position` and propagate to linked segments
    ///
    /// # Errors
    ///
    /// Returns a node-not-found error for ids from another shape.
    pub fn move_node_to(&mut self, id: NodeId, position: Vec2) -> Result<()> {
        let node = self
            .arena
            .get(id)
            .ok_or(EscherError::NodeNotFound { index: id.index() })?;
        if !node.movable {
            return Ok(());
        }
        self.set_and_propagate(id, position)
    }

    fn set_and_propagate(&mut self, id: NodeId, position: Vec2) -> Result<()> {
        if let Some(node) = self.arena.get_mut(id) {
            node.pos = position;
        }
        propagation::propagate_from(self, id)
    }

    /// Insert a new node right after `id` and propagate to linked segments
    ///
    /// The new node sits at the midpoint between the reference node and its
    /// successor within the segment that owns the reference node (its role
    /// as a segment's final, shared node never matches, so the insertion
    /// happens exactly once). The new node copies the reference node's
    /// movable flag.
    ///
    /// # Errors
    ///
    /// Returns a node-not-found error for ids from another shape.
    pub fn add_node(&mut self, id: NodeId) -> Result<NodeId> {
        propagation::insert_node_after(self, id)
    }
}
