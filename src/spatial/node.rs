//! Node storage for tile shapes
//!
//! Nodes live in an arena and are addressed by stable integer ids. Two
//! nodes with identical coordinates stay distinct entities; equality is id
//! equality, never position equality. Segment boundary sharing works by
//! both neighboring segments holding the same id.

use crate::math::vector::Vec2;
use serde::{Deserialize, Serialize};

/// Stable handle to a node in a shape's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index, useful for display and stable ordering
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A control point of the editable tile outline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Position in tile-local coordinates
    pub pos: Vec2,
    /// Whether the editor may move this node; corners and the midpoint of a
    /// self-paired side are fixed
    pub movable: bool,
}

impl Node {
    /// Create a node at a position
    pub const fn new(pos: Vec2, movable: bool) -> Self {
        Self { pos, movable }
    }
}

/// Append-only arena owning every node of one shape
///
/// Ids handed out are never invalidated; nodes replaced during link
/// propagation simply become unreachable from the segment lists.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    entries: Vec<Node>,
}

impl NodeArena {
    /// Create an empty arena
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store a node and return its id
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.entries.len());
        self.entries.push(node);
        id
    }

    /// Look up a node
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.entries.get(id.0)
    }

    /// Look up a node mutably
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.entries.get_mut(id.0)
    }

    /// Number of nodes ever allocated
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the arena holds no nodes
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
