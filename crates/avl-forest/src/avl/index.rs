pub use super::snapshot::{NodeView, Snapshot};
pub use super::traverse::{traverse, ParseOrderError, TraversalOrder, Traverse};
pub use super::types::{AvlNode, AvlNodeLike};
pub use super::util::{
    assert_avl_tree, balance_factor, find, height, insert, is_balanced, print, rebalance,
    refresh_height, remove, rotate_left, rotate_right,
};
