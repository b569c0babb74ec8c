//! Read-only depth-first walks.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::arena::Arena;

use super::types::AvlNodeLike;

/// Order in which [`Traverse`] yields node values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Left, self, right: ascending order.
    #[default]
    InOrder,
    /// Self, left, right.
    PreOrder,
    /// Left, right, self.
    PostOrder,
}

impl TraversalOrder {
    pub const ALL: [TraversalOrder; 3] = [
        TraversalOrder::InOrder,
        TraversalOrder::PreOrder,
        TraversalOrder::PostOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraversalOrder::InOrder => "in-order",
            TraversalOrder::PreOrder => "pre-order",
            TraversalOrder::PostOrder => "post-order",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown traversal order: {0:?}")]
pub struct ParseOrderError(pub String);

impl FromStr for TraversalOrder {
    type Err = ParseOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" | "inorder" | "in-order" | "in_order" => Ok(TraversalOrder::InOrder),
            "pre" | "preorder" | "pre-order" | "pre_order" => Ok(TraversalOrder::PreOrder),
            "post" | "postorder" | "post-order" | "post_order" => Ok(TraversalOrder::PostOrder),
            _ => Err(ParseOrderError(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Stage {
    Enter,
    LeftDone,
    RightDone,
}

#[derive(Clone, Copy, Debug)]
struct Frame {
    node: u32,
    stage: Stage,
}

/// Depth-first iterator over the values of a subtree.
///
/// Keeps an explicit stack of at most `height` frames, so deep trees do not
/// consume call stack.
#[derive(Clone, Debug)]
pub struct Traverse<'a, N> {
    arena: &'a Arena<N>,
    order: TraversalOrder,
    stack: Vec<Frame>,
}

impl<'a, N: AvlNodeLike> Traverse<'a, N> {
    pub fn new(arena: &'a Arena<N>, root: Option<u32>, order: TraversalOrder) -> Self {
        let mut stack = Vec::new();
        if let Some(node) = root {
            stack.push(Frame {
                node,
                stage: Stage::Enter,
            });
        }
        Self {
            arena,
            order,
            stack,
        }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl<'a, N: AvlNodeLike> Iterator for Traverse<'a, N> {
    type Item = &'a N::Value;

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            let frame = self.stack.last_mut()?;
            let node = frame.node;
            let (child, emit) = match frame.stage {
                Stage::Enter => {
                    frame.stage = Stage::LeftDone;
                    (arena[node].l(), self.order == TraversalOrder::PreOrder)
                }
                Stage::LeftDone => {
                    frame.stage = Stage::RightDone;
                    (arena[node].r(), self.order == TraversalOrder::InOrder)
                }
                Stage::RightDone => {
                    self.stack.pop();
                    (None, self.order == TraversalOrder::PostOrder)
                }
            };
            if let Some(child) = child {
                self.stack.push(Frame {
                    node: child,
                    stage: Stage::Enter,
                });
            }
            if emit {
                return Some(arena[node].value());
            }
        }
    }
}

impl<N: AvlNodeLike> FusedIterator for Traverse<'_, N> {}

/// Walks the subtree at `root` in the given order.
pub fn traverse<N: AvlNodeLike>(
    arena: &Arena<N>,
    root: Option<u32>,
    order: TraversalOrder,
) -> Traverse<'_, N> {
    Traverse::new(arena, root, order)
}
