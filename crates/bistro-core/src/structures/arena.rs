//! Slot arena backing the linked lists.
//!
//! Nodes live in a flat `Vec` and link to their neighbours by slot index, so
//! the circular list's self-referencing ring and the doubly-linked back
//! pointers need no shared ownership. Freed slots go on an intrusive free
//! list and are reused by the next insert.
//!
//! Every slot carries a generation counter that is bumped when the slot is
//! freed. A [`NodeHandle`] remembers the generation it was issued with, so a
//! handle to a removed node stops resolving even after its slot is reused.

use std::iter::FusedIterator;

/// Stable handle to a node inside one list.
///
/// Only meaningful for the list that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    index: u32,
    generation: u32,
}

/// A located node: its handle and a borrow of its value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeRef<'a, T> {
    /// Handle for O(1) follow-up access
    pub handle: NodeHandle,
    /// The payload
    pub value: &'a T,
}

/// A list node: one value plus forward and backward links.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Option<usize>,
    pub(crate) prev: Option<usize>,
}

#[derive(Debug)]
enum Slot<T> {
    Occupied { generation: u32, node: Node<T> },
    Vacant { generation: u32, next_free: Option<usize> },
}

/// Flat node storage with slot reuse.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> NodeArena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new(), free_head: None, len: 0 }
    }

    /// Number of live nodes.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Store an unlinked node, returning its slot index.
    pub(crate) fn insert(&mut self, value: T) -> usize {
        let node = Node { value, next: None, prev: None };
        self.len += 1;
        match self.free_head {
            Some(index) => {
                let generation = match self.slots[index] {
                    Slot::Vacant { generation, next_free } => {
                        self.free_head = next_free;
                        generation
                    }
                    Slot::Occupied { .. } => unreachable!("free list points at an occupied slot"),
                };
                self.slots[index] = Slot::Occupied { generation, node };
                index
            }
            None => {
                self.slots.push(Slot::Occupied { generation: 0, node });
                self.slots.len() - 1
            }
        }
    }

    /// Free a slot and return its node. Links are not touched; the caller
    /// must have unlinked it first.
    pub(crate) fn remove(&mut self, index: usize) -> Option<Node<T>> {
        let generation = match self.slots.get(index)? {
            Slot::Occupied { generation, .. } => *generation,
            Slot::Vacant { .. } => return None,
        };
        let vacant = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[index], vacant) {
            Slot::Occupied { node, .. } => {
                self.free_head = Some(index);
                self.len -= 1;
                Some(node)
            }
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<&Node<T>> {
        match self.slots.get(index)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        match self.slots.get_mut(index)? {
            Slot::Occupied { node, .. } => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Node at an index that a list invariant guarantees is live.
    #[inline]
    pub(crate) fn node(&self, index: usize) -> &Node<T> {
        match &self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match &mut self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link points at a vacant slot"),
        }
    }

    /// Handle for a live slot.
    pub(crate) fn handle(&self, index: usize) -> NodeHandle {
        let generation = match &self.slots[index] {
            Slot::Occupied { generation, .. } => *generation,
            Slot::Vacant { generation, .. } => *generation,
        };
        NodeHandle { index: index as u32, generation }
    }

    /// Slot index for a handle, if the node it names is still live.
    pub(crate) fn resolve(&self, handle: NodeHandle) -> Option<usize> {
        let index = handle.index as usize;
        match self.slots.get(index)? {
            Slot::Occupied { generation, .. } if *generation == handle.generation => Some(index),
            _ => None,
        }
    }

    /// Drop every node. Outstanding handles stop resolving.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

/// Iterator following links from a start node for a fixed number of steps.
///
/// The step bound lets the same iterator walk the circular list exactly once.
pub struct Iter<'a, T> {
    arena: &'a NodeArena<T>,
    cursor: Option<usize>,
    remaining: usize,
    backward: bool,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn forward(arena: &'a NodeArena<T>, start: Option<usize>) -> Self {
        Self { arena, cursor: start, remaining: arena.len(), backward: false }
    }

    pub(crate) fn backward(arena: &'a NodeArena<T>, start: Option<usize>) -> Self {
        Self { arena, cursor: start, remaining: arena.len(), backward: true }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.arena.get(self.cursor?)?;
        self.remaining -= 1;
        self.cursor = if self.backward { node.prev } else { node.next };
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor.is_none() {
            (0, Some(0))
        } else {
            (0, Some(self.remaining))
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
