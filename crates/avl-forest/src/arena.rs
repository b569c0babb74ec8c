//! Slot arena backing the tree nodes.
//!
//! Every node is stored in a `Vec` slot and addressed by its `u32` index.
//! Released slots are threaded onto an intrusive free list and handed out
//! again (most recently freed first) before the `Vec` grows. Dropping the
//! arena drops every live node exactly once, without recursion.

use std::ops::{Index, IndexMut};

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<u32> },
}

#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<u32>,
    len: usize,
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `node` and returns its slot index.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        let Some(idx) = self.free_head else {
            self.slots.push(Slot::Occupied(node));
            return (self.slots.len() - 1) as u32;
        };

        let slot = &mut self.slots[idx as usize];
        self.free_head = match slot {
            Slot::Vacant { next_free } => *next_free,
            Slot::Occupied(_) => unreachable!("free list points at occupied slot {idx}"),
        };
        *slot = Slot::Occupied(node);
        idx
    }

    /// Moves the node out of slot `idx` and recycles the slot.
    ///
    /// Panics if the slot is already vacant.
    pub fn free(&mut self, idx: u32) -> N {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[idx as usize], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(idx);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => panic!("double free of arena slot {idx}"),
        }
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        match self.slots.get(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        match self.slots.get_mut(idx as usize)? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots ever allocated, live or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        match self.get(idx) {
            Some(node) => node,
            None => panic!("arena slot {idx} is vacant"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        match self.get_mut(idx) {
            Some(node) => node,
            None => panic!("arena slot {idx} is vacant"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_appends_until_a_slot_is_freed() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let c = arena.alloc("c");
        assert_eq!((a, b, c), (0, 1, 2));
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[b], "b");

        assert_eq!(arena.free(b), "b");
        assert_eq!(arena.len(), 2);
        assert!(arena.get(b).is_none());

        let d = arena.alloc("d");
        assert_eq!(d, b);
        assert_eq!(arena[d], "d");
        assert_eq!(arena.slot_count(), 3);
    }

    #[test]
    fn free_list_is_last_in_first_out() {
        let mut arena = Arena::new();
        for i in 0..5 {
            arena.alloc(i);
        }
        arena.free(1);
        arena.free(3);
        arena.free(0);
        assert_eq!(arena.alloc(10), 0);
        assert_eq!(arena.alloc(11), 3);
        assert_eq!(arena.alloc(12), 1);
        assert_eq!(arena.alloc(13), 5);
        assert_eq!(arena.len(), 6);
    }

    #[test]
    fn clear_drops_everything() {
        let mut arena = Arena::new();
        arena.alloc(String::from("x"));
        arena.alloc(String::from("y"));
        arena.free(0);
        arena.clear();
        assert!(arena.is_empty());
        assert_eq!(arena.slot_count(), 0);
        assert_eq!(arena.alloc(String::from("z")), 0);
    }

    #[test]
    #[should_panic(expected = "double free")]
    fn double_free_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.free(a);
        arena.free(a);
    }

    #[test]
    #[should_panic(expected = "vacant")]
    fn indexing_vacant_slot_panics() {
        let mut arena = Arena::new();
        let a = arena.alloc(1);
        arena.alloc(2);
        arena.free(a);
        let _value: i32 = arena[a];
    }
}
