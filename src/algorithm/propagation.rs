//! Link propagation across paired segments
//!
//! Whenever a node moves or a node is inserted, every link whose source
//! segment contains that node refires: the source segment's current node
//! positions are carried into the linked segment through the link's
//! rotate/flip/rotate transform. Propagation reads only current positions,
//! so refiring a link twice without an intervening edit is a no-op.

use crate::io::error::{EscherError, Result};
use crate::math::vector::Vec2;
use crate::spatial::node::{Node, NodeId};
use crate::spatial::shape::Shape;

/// Recompute a linked segment's geometry from its source segment
///
/// The transform chain: un-rotate by the source angle, drop by the source
/// center distance, mirror along length and/or across width per the link
/// flags, raise by the linked center distance, rotate by the linked angle.
/// A length flip also reverses the node order, so the copied run still
/// starts at the linked segment's first node.
///
/// Endpoint ids of the linked segment are preserved (they are shared with
/// the neighboring segments, which keeps the outline closed); interior ids
/// are rebuilt only when an insertion changed the source's node count.
///
/// # Errors
///
/// Returns a node-not-found error if a segment references an id missing
/// from the arena, which indicates a corrupted shape.
pub fn refresh_link(shape: &mut Shape, link_index: usize) -> Result<()> {
    let Some(link) = shape.links.get(link_index).copied() else {
        return Ok(());
    };
    let (Some(source), Some(linked)) = (
        shape.segments.get(link.source),
        shape.segments.get(link.linked),
    ) else {
        return Ok(());
    };

    let source_nodes = source.nodes.clone();
    let source_angle = source.angle;
    let source_distance = source.center_distance;
    let linked_angle = linked.angle;
    let linked_distance = linked.center_distance;
    let linked_index = link.linked;

    let mut carried: Vec<(Vec2, bool)> = Vec::with_capacity(source_nodes.len());
    for &id in &source_nodes {
        let node = shape
            .arena
            .get(id)
            .ok_or(EscherError::NodeNotFound { index: id.index() })?;
        let mut pos = node.pos.rotate(-source_angle);
        pos += Vec2::new(0.0, -source_distance);
        if link.flip_length {
            pos = pos.scale(Vec2::new(-1.0, 1.0));
        }
        if link.flip_width {
            pos = pos.scale(Vec2::new(1.0, -1.0));
        }
        pos += Vec2::new(0.0, linked_distance);
        pos = pos.rotate(linked_angle);
        carried.push((pos, node.movable));
    }
    if link.flip_length {
        carried.reverse();
    }

    let target_ids = resize_linked_nodes(shape, linked_index, &carried)?;
    for (&id, &(pos, _)) in target_ids.iter().zip(carried.iter()) {
        if let Some(node) = shape.arena.get_mut(id) {
            node.pos = pos;
        }
    }
    Ok(())
}

/// Match the linked segment's node count to the carried geometry
///
/// When counts already agree the existing ids are kept (stable identity
/// for selections held by a front end). Otherwise the interior is rebuilt
/// with fresh arena nodes taking the carried movable flags, while the
/// shared endpoint ids stay in place.
fn resize_linked_nodes(
    shape: &mut Shape,
    linked_index: usize,
    carried: &[(Vec2, bool)],
) -> Result<Vec<NodeId>> {
    let Some(linked) = shape.segments.get(linked_index) else {
        return Ok(Vec::new());
    };
    if linked.nodes.len() == carried.len() {
        return Ok(linked.nodes.clone());
    }

    let first = linked.nodes.first().copied();
    let last = linked.nodes.last().copied();
    let (Some(first), Some(last)) = (first, last) else {
        return Ok(Vec::new());
    };

    let mut rebuilt = Vec::with_capacity(carried.len());
    rebuilt.push(first);
    for &(pos, movable) in carried
        .get(1..carried.len().saturating_sub(1))
        .unwrap_or_default()
    {
        rebuilt.push(shape.arena.alloc(Node::new(pos, movable)));
    }
    rebuilt.push(last);

    if let Some(linked) = shape.segments.get_mut(linked_index) {
        linked.nodes = rebuilt.clone();
    }
    Ok(rebuilt)
}

/// Refire every link whose source segment contains `node`
///
/// A node shared between two segments (a side midpoint or a corner)
/// belongs to both, so links sourced from either segment fire. Membership
/// is re-checked against the current segment lists for every link, in
/// declaration order.
///
/// # Errors
///
/// Propagates node-not-found errors from [`refresh_link`].
pub fn propagate_from(shape: &mut Shape, node: NodeId) -> Result<()> {
    for link_index in 0..shape.links.len() {
        let contains = shape
            .links
            .get(link_index)
            .and_then(|link| shape.segments.get(link.source))
            .is_some_and(|segment| segment.nodes.contains(&node));
        if contains {
            refresh_link(shape, link_index)?;
        }
    }
    Ok(())
}

/// Insert a node immediately after `reference` and propagate
///
/// The owning segment is the one holding `reference` at any position but
/// its last (the last node belongs to the next segment's run, and matching
/// it would insert twice). The new node sits at the midpoint between the
/// reference node and its successor and copies the reference's movable
/// flag.
///
/// # Errors
///
/// Returns a node-not-found error when `reference` is not in the arena.
pub fn insert_node_after(shape: &mut Shape, reference: NodeId) -> Result<NodeId> {
    let reference_node = shape
        .arena
        .get(reference)
        .copied()
        .ok_or(EscherError::NodeNotFound {
            index: reference.index(),
        })?;

    let mut insertion = None;
    'segments: for (segment_index, segment) in shape.segments.iter().enumerate() {
        for (position, &id) in segment.nodes.iter().enumerate() {
            if id != reference || position + 1 >= segment.nodes.len() {
                continue;
            }
            let Some(&successor) = segment.nodes.get(position + 1) else {
                continue;
            };
            let successor_pos = shape
                .arena
                .get(successor)
                .ok_or(EscherError::NodeNotFound {
                    index: successor.index(),
                })?
                .pos;
            insertion = Some((segment_index, position + 1, successor_pos));
            break 'segments;
        }
    }

    let Some((segment_index, position, successor_pos)) = insertion else {
        // Reference only appears as final shared nodes, nothing to split
        return Ok(reference);
    };

    let midpoint = reference_node.pos.midpoint(successor_pos);
    let new_id = shape
        .arena
        .alloc(Node::new(midpoint, reference_node.movable));
    if let Some(segment) = shape.segments.get_mut(segment_index) {
        segment.nodes.insert(position, new_id);
    }

    propagate_from(shape, reference)?;
    Ok(new_id)
}
