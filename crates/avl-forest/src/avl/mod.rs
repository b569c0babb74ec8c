//! AVL tree family: node model, balancing engine, traversal and the
//! [`AvlSet`] container built on them.

#[path = "AvlSet.rs"]
pub mod avl_set;
pub mod index;
pub mod snapshot;
pub mod traverse;
pub mod types;
pub mod util;

pub use avl_set::AvlSet;
pub use index::*;
