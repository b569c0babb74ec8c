//! Read-only node views and detached deep copies of a tree.
//!
//! [`NodeView`] borrows the live tree, so it can be handed out freely: the
//! borrow checker rules out any mutation of the tree while a view exists.
//! [`Snapshot`] owns a full copy of the values and shape, and is unaffected
//! by anything done to the tree afterwards.

use serde::{Deserialize, Serialize};

use crate::arena::Arena;

use super::types::AvlNodeLike;
use super::util::balance_factor;

/// Borrowed, read-only handle on one node of a tree.
pub struct NodeView<'a, N> {
    arena: &'a Arena<N>,
    idx: u32,
}

impl<N> Clone for NodeView<'_, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for NodeView<'_, N> {}

impl<'a, N: AvlNodeLike> NodeView<'a, N> {
    pub(crate) fn new(arena: &'a Arena<N>, idx: u32) -> Self {
        Self { arena, idx }
    }

    pub fn value(&self) -> &'a N::Value {
        self.arena[self.idx].value()
    }

    pub fn height(&self) -> i32 {
        self.arena[self.idx].height()
    }

    pub fn balance_factor(&self) -> i32 {
        balance_factor(self.arena, Some(self.idx))
    }

    pub fn left(&self) -> Option<NodeView<'a, N>> {
        self.arena[self.idx].l().map(|i| NodeView::new(self.arena, i))
    }

    pub fn right(&self) -> Option<NodeView<'a, N>> {
        self.arena[self.idx].r().map(|i| NodeView::new(self.arena, i))
    }

    /// Deep, independent copy of the subtree rooted here.
    pub fn to_snapshot(&self) -> Snapshot<N::Value>
    where
        N::Value: Clone,
    {
        Snapshot {
            value: self.value().clone(),
            height: self.height(),
            left: self.left().map(|l| Box::new(l.to_snapshot())),
            right: self.right().map(|r| Box::new(r.to_snapshot())),
        }
    }
}

impl<N> std::fmt::Debug for NodeView<'_, N>
where
    N: AvlNodeLike,
    N::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeView")
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}

/// Owned copy of a subtree: values, shape and cached heights.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<V> {
    pub value: V,
    pub height: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Box<Snapshot<V>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Box<Snapshot<V>>>,
}

impl<V> Snapshot<V> {
    /// Number of values in the snapshot.
    pub fn size(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |l| l.size()) + self.right.as_ref().map_or(0, |r| r.size())
    }

    /// Values in ascending order.
    pub fn in_order(&self) -> Vec<&V> {
        let mut out = Vec::with_capacity(self.size());
        let mut stack: Vec<&Snapshot<V>> = Vec::new();
        let mut curr = Some(self);
        while curr.is_some() || !stack.is_empty() {
            while let Some(node) = curr {
                stack.push(node);
                curr = node.left.as_deref();
            }
            if let Some(node) = stack.pop() {
                out.push(&node.value);
                curr = node.right.as_deref();
            }
        }
        out
    }
}
