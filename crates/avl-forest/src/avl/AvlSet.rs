use std::cmp::Ordering;
use std::fmt;

use log::debug;

use crate::arena::Arena;
use crate::error::AvlError;

use super::snapshot::{NodeView, Snapshot};
use super::traverse::{traverse, TraversalOrder, Traverse};
use super::types::AvlNode;
use super::util::{assert_avl_tree, find, height, insert, is_balanced, print, remove};

fn default_comparator<V: Ord>(a: &V, b: &V) -> Ordering {
    a.cmp(b)
}

/// Ordered set kept height-balanced by AVL rotations.
///
/// Nodes live in an internal arena; the set exclusively owns all of them and
/// releases each exactly once when it is dropped or cleared.
#[derive(Clone)]
pub struct AvlSet<V, C = fn(&V, &V) -> Ordering>
where
    C: Fn(&V, &V) -> Ordering,
{
    root: Option<u32>,
    size: usize,
    comparator: C,
    arena: Arena<AvlNode<V>>,
}

impl<V> AvlSet<V, fn(&V, &V) -> Ordering>
where
    V: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<V>)
    }
}

impl<V> Default for AvlSet<V, fn(&V, &V) -> Ordering>
where
    V: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, C> AvlSet<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    /// Set ordered by `comparator`, which must be a strict total order.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: None,
            size: 0,
            comparator,
            arena: Arena::new(),
        }
    }

    /// Inserts `value`; fails with [`AvlError::DuplicateKey`] if an equal
    /// value is already present, leaving the set untouched.
    pub fn add(&mut self, value: V) -> Result<(), AvlError> {
        match insert(&mut self.arena, self.root, value, &self.comparator) {
            Ok(root) => {
                self.root = Some(root);
                self.size += 1;
                debug!("add: size={} height={}", self.size, self.height());
                Ok(())
            }
            Err(err) => {
                debug!("add rejected: {err}");
                Err(err)
            }
        }
    }

    /// Removes `value`; fails with [`AvlError::NotFound`] if it is absent,
    /// leaving the set untouched.
    pub fn remove(&mut self, value: &V) -> Result<(), AvlError> {
        match remove(&mut self.arena, self.root, value, &self.comparator) {
            Ok(root) => {
                self.root = root;
                self.size -= 1;
                debug!("remove: size={} height={}", self.size, self.height());
                Ok(())
            }
            Err(err) => {
                debug!("remove rejected: {err}");
                Err(err)
            }
        }
    }

    pub fn has(&self, value: &V) -> bool {
        find(&self.arena, self.root, value, &self.comparator).is_some()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root, 0 for an empty set.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.root)
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.size = 0;
    }

    pub fn traverse(&self, order: TraversalOrder) -> Traverse<'_, AvlNode<V>> {
        traverse(&self.arena, self.root, order)
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Traverse<'_, AvlNode<V>> {
        self.traverse(TraversalOrder::InOrder)
    }

    /// Whether every node's balance factor lies in `-1..=1`.
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.arena, self.root)
    }

    /// Checks heights, balance, ordering and node accounting.
    pub fn assert_valid(&self) -> Result<(), String> {
        assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = self.iter().count();
        if reachable != self.size || self.arena.len() != self.size {
            return Err(format!(
                "Size mismatch: size={}, reachable={reachable}, allocated={}",
                self.size,
                self.arena.len()
            ));
        }
        Ok(())
    }

    pub fn root(&self) -> Option<NodeView<'_, AvlNode<V>>> {
        self.root.map(|i| NodeView::new(&self.arena, i))
    }

    pub fn snapshot(&self) -> Option<Snapshot<V>>
    where
        V: Clone,
    {
        self.root().map(|root| root.to_snapshot())
    }

    pub fn print(&self) -> String
    where
        V: fmt::Debug,
    {
        format!("AvlSet {}", print(&self.arena, self.root, ""))
    }
}

impl<V, C> Extend<V> for AvlSet<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    /// Duplicates are skipped.
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            match self.add(value) {
                Ok(()) | Err(AvlError::DuplicateKey) => {}
                Err(AvlError::NotFound) => unreachable!("add never reports NotFound"),
            }
        }
    }
}

impl<V: Ord> FromIterator<V> for AvlSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, V, C> IntoIterator for &'a AvlSet<V, C>
where
    C: Fn(&V, &V) -> Ordering,
{
    type Item = &'a V;
    type IntoIter = Traverse<'a, AvlNode<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V, C> fmt::Debug for AvlSet<V, C>
where
    V: fmt::Debug,
    C: Fn(&V, &V) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
