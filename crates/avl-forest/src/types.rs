//! Node trait definitions.
//!
//! Nodes live in an [`Arena`](crate::arena::Arena) and refer to their
//! children by `Option<u32>` slot index rather than by pointer. A node is
//! owned by exactly one parent slot (or the tree root), so the link graph is
//! always a tree: no shared children, no cycles, no parent back-links.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

