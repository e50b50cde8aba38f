//! Ordered variable store.
//!
//! A height-balanced (AVL) binary search tree mapping variable names to
//! values, ordered lexicographically by name. Nodes live in an arena
//! `Vec` and link to each other by index, with no owning pointers, no
//! recursive destruction. Entries are never removed, so every arena slot
//! stays live for the store's lifetime and the arena length is the entry
//! count.

use crate::errors::{local_space_full, undefined_variable, KindResult};
use mica_ir::Value;

/// Index of a node in the store's arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(transparent)]
struct NodeId(u32);

impl NodeId {
    /// The arena slot this id addresses.
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// One tree node: an entry plus its links and cached subtree height.
#[derive(Debug)]
struct Node {
    name: String,
    value: Value,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Height of the subtree rooted here; a leaf has height 1.
    height: i32,
}

/// Bounded associative store mapping variable names to values.
#[derive(Debug)]
pub struct VarStore {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    bound: usize,
}

impl VarStore {
    /// Create an empty store holding at most `bound` distinct names.
    pub fn with_bound(bound: usize) -> Self {
        VarStore {
            nodes: Vec::with_capacity(bound),
            root: None,
            bound,
        }
    }

    /// Number of distinct names stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the store holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a name, or update it in place if already present.
    ///
    /// Updates leave the tree structure untouched and never fail. A new
    /// name fails with `LocalSpaceFull` when the store is at its bound;
    /// otherwise it is inserted and the tree rebalanced on the way back
    /// up the insertion path.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "the arena is bounded far below u32::MAX entries"
    )]
    pub fn insert(&mut self, name: &str, value: Value) -> KindResult<()> {
        if let Some(id) = self.find_node(name) {
            self.nodes[id.index()].value = value;
            return Ok(());
        }
        if self.nodes.len() == self.bound {
            return Err(local_space_full());
        }
        let new = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            name: name.to_string(),
            value,
            left: None,
            right: None,
            height: 1,
        });
        self.root = Some(self.insert_at(self.root, new));
        Ok(())
    }

    /// The value stored under `name`.
    pub fn find(&self, name: &str) -> KindResult<Value> {
        self.find_node(name)
            .map(|id| self.nodes[id.index()].value)
            .ok_or_else(|| undefined_variable(name))
    }

    /// The name of the node immediately above `name` on its search path,
    /// or `"null"` when `name` is the root.
    pub fn parent_name(&self, name: &str) -> KindResult<&str> {
        let mut parent: Option<NodeId> = None;
        let mut node = self.root;
        while let Some(id) = node {
            let entry = &self.nodes[id.index()];
            if entry.name == name {
                return Ok(parent.map_or("null", |p| self.nodes[p.index()].name.as_str()));
            }
            parent = Some(id);
            node = if name < entry.name.as_str() {
                entry.left
            } else {
                entry.right
            };
        }
        Err(undefined_variable(name))
    }

    /// Standard BST descent by name.
    fn find_node(&self, name: &str) -> Option<NodeId> {
        let mut node = self.root;
        while let Some(id) = node {
            let entry = &self.nodes[id.index()];
            if entry.name == name {
                return Some(id);
            }
            node = if name < entry.name.as_str() {
                entry.left
            } else {
                entry.right
            };
        }
        None
    }

    /// BST insertion of an already-allocated node, rebalancing each
    /// subtree on the way back up. Returns the subtree's new root.
    fn insert_at(&mut self, node: Option<NodeId>, new: NodeId) -> NodeId {
        let Some(id) = node else {
            return new;
        };
        // Names reaching this path are unique; the update case was
        // handled before allocation.
        if self.name_lt(new, id) {
            let left = self.insert_at(self.nodes[id.index()].left, new);
            self.nodes[id.index()].left = Some(left);
        } else {
            let right = self.insert_at(self.nodes[id.index()].right, new);
            self.nodes[id.index()].right = Some(right);
        }
        self.update_height(id);
        self.rebalance(id, new)
    }

    /// Restore the AVL invariant at `id` after inserting `new` below it.
    ///
    /// The four textbook cases, selected by the balance factor and by
    /// where the new name sits relative to the taller child.
    fn rebalance(&mut self, id: NodeId, new: NodeId) -> NodeId {
        let balance = self.balance_factor(id);
        if balance > 1 {
            if let Some(left) = self.nodes[id.index()].left {
                if self.name_lt(new, left) {
                    // Left-left: single right rotation.
                    return self.rotate_right(id);
                }
                if self.name_lt(left, new) {
                    // Left-right: rotate the left child left, then right.
                    let rotated = self.rotate_left(left);
                    self.nodes[id.index()].left = Some(rotated);
                    return self.rotate_right(id);
                }
            }
        } else if balance < -1 {
            if let Some(right) = self.nodes[id.index()].right {
                if self.name_lt(right, new) {
                    // Right-right: single left rotation.
                    return self.rotate_left(id);
                }
                if self.name_lt(new, right) {
                    // Right-left: rotate the right child right, then left.
                    let rotated = self.rotate_right(right);
                    self.nodes[id.index()].right = Some(rotated);
                    return self.rotate_left(id);
                }
            }
        }
        id
    }

    /// Right rotation around `y`; returns the new subtree root.
    ///
    /// Only requested when `y` has a left child; if it somehow does not,
    /// the subtree is returned unchanged.
    fn rotate_right(&mut self, y: NodeId) -> NodeId {
        let Some(x) = self.nodes[y.index()].left else {
            return y;
        };
        let carried = self.nodes[x.index()].right;
        self.nodes[x.index()].right = Some(y);
        self.nodes[y.index()].left = carried;
        self.update_height(y);
        self.update_height(x);
        x
    }

    /// Left rotation around `x`; returns the new subtree root.
    fn rotate_left(&mut self, x: NodeId) -> NodeId {
        let Some(y) = self.nodes[x.index()].right else {
            return x;
        };
        let carried = self.nodes[y.index()].left;
        self.nodes[y.index()].left = Some(x);
        self.nodes[x.index()].right = carried;
        self.update_height(x);
        self.update_height(y);
        y
    }

    /// Whether node `a`'s name orders before node `b`'s.
    #[inline]
    fn name_lt(&self, a: NodeId, b: NodeId) -> bool {
        self.nodes[a.index()].name < self.nodes[b.index()].name
    }

    /// Height of an optional subtree; an empty subtree has height 0.
    #[inline]
    fn height(&self, node: Option<NodeId>) -> i32 {
        node.map_or(0, |id| self.nodes[id.index()].height)
    }

    /// Recompute a node's cached height from its children.
    fn update_height(&mut self, id: NodeId) {
        let left = self.height(self.nodes[id.index()].left);
        let right = self.height(self.nodes[id.index()].right);
        self.nodes[id.index()].height = 1 + left.max(right);
    }

    /// height(left) − height(right).
    #[inline]
    fn balance_factor(&self, id: NodeId) -> i32 {
        self.height(self.nodes[id.index()].left) - self.height(self.nodes[id.index()].right)
    }
}
