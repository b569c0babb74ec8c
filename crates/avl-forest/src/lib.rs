//! Arena-based AVL tree.
//!
//! A self-balancing ordered set over any strictly totally ordered element
//! type. Nodes are stored in an [`Arena`] and linked by `Option<u32>` slot
//! indices; each node caches its height, and every insertion or deletion
//! refreshes and rebalances the nodes on its path before returning, so the
//! tree height stays within `1.44 * log2(n + 2)`.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] child-link trait |
//! [`arena`] | [`Arena`] slot storage with a free list |
//! [`avl::types`] | [`AvlNode`] and the [`AvlNodeLike`] trait |
//! [`avl::util`] | heights, rotations, rebalance, `insert`, `remove`, checks |
//! [`avl::traverse`] | in-, pre- and post-order [`Traverse`] iterator |
//! [`avl::snapshot`] | read-only [`NodeView`] and detached [`Snapshot`] |
//! [`avl::avl_set`] | the [`AvlSet`] container |
//! [`print`] | box-drawing branch helper |
//! [`demo`] | argument parsing and runs behind the `avl-demo` binary |
//!
//! # Example
//!
//! ```
//! use avl_forest::{AvlError, AvlSet, TraversalOrder};
//!
//! let mut set = AvlSet::new();
//! for v in [10, 20, 25, 30, 40, 50] {
//!     set.add(v).unwrap();
//! }
//! assert_eq!(set.add(25), Err(AvlError::DuplicateKey));
//! assert_eq!(set.remove(&7), Err(AvlError::NotFound));
//!
//! let sorted: Vec<i32> = set.traverse(TraversalOrder::InOrder).copied().collect();
//! assert_eq!(sorted, vec![10, 20, 25, 30, 40, 50]);
//! assert!(set.is_balanced());
//! ```

pub mod arena;
pub mod avl;
pub mod demo;
pub mod error;
pub mod print;
pub mod types;

pub use arena::Arena;
pub use avl::{AvlNode, AvlNodeLike, AvlSet, NodeView, ParseOrderError, Snapshot, TraversalOrder, Traverse};
pub use error::AvlError;
pub use types::Node;
