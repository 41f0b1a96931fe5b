//! Circular doubly-linked list with a rotation cursor.
//!
//! The waiter round-robin. The first node links to itself in both
//! directions; later nodes are inserted just before the head, i.e. at the
//! end of the ring. A persistent `current` cursor starts on the first node
//! ever added and moves one step per `rotate`.

use super::arena::{Iter, NodeArena, NodeHandle, NodeRef};

/// Circular doubly-linked list
#[derive(Debug)]
pub struct CircularList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    current: Option<usize>,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> CircularList<T> {
    /// Create an empty ring
    pub const fn new() -> Self {
        Self { arena: NodeArena::new(), head: None, current: None }
    }

    /// Number of nodes in the ring
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the ring is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Insert at the end of the ring (just before the head)
    pub fn add(&mut self, value: T) -> NodeHandle {
        let index = self.arena.insert(value);
        match self.head {
            None => {
                let node = self.arena.node_mut(index);
                node.next = Some(index);
                node.prev = Some(index);
                self.head = Some(index);
                self.current = Some(index);
            }
            Some(head) => {
                let last = self.arena.node(head).prev.unwrap_or(head);
                {
                    let node = self.arena.node_mut(index);
                    node.next = Some(head);
                    node.prev = Some(last);
                }
                self.arena.node_mut(last).next = Some(index);
                self.arena.node_mut(head).prev = Some(index);
            }
        }
        self.arena.handle(index)
    }

    /// Advance the cursor one step and return the new current value
    pub fn rotate(&mut self) -> Option<&T> {
        let current = self.current?;
        let next = self.arena.node(current).next?;
        self.current = Some(next);
        Some(&self.arena.node(next).value)
    }

    /// Value under the cursor, without moving it
    pub fn current(&self) -> Option<&T> {
        self.current.map(|index| &self.arena.node(index).value)
    }

    /// Mutable value under the cursor
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let index = self.current?;
        Some(&mut self.arena.node_mut(index).value)
    }

    fn position<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head?;
        for _ in 0..self.len() {
            let node = self.arena.node(cursor);
            if pred(&node.value) {
                return Some(cursor);
            }
            cursor = node.next?;
        }
        None
    }

    /// Remove the first node (walking from head) whose value satisfies `pred`.
    ///
    /// Head and cursor move to the successor if they pointed at the removed
    /// node; removing the last node empties the ring and clears the cursor.
    pub fn remove_by<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.position(pred)?;
        self.unlink(index)
    }

    /// Remove the node behind `handle`, with the same head and cursor
    /// repair as [`remove_by`](Self::remove_by). Stale handles give `None`.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<T> {
        let index = self.arena.resolve(handle)?;
        self.unlink(index)
    }

    /// Value behind `handle`, if the node is still in the ring
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let index = self.arena.resolve(handle)?;
        self.arena.get(index).map(|node| &node.value)
    }

    fn unlink(&mut self, index: usize) -> Option<T> {
        if self.len() == 1 {
            self.head = None;
            self.current = None;
        } else {
            let (prev, next) = {
                let node = self.arena.node(index);
                (node.prev.unwrap_or(index), node.next.unwrap_or(index))
            };
            self.arena.node_mut(prev).next = Some(next);
            self.arena.node_mut(next).prev = Some(prev);
            if self.head == Some(index) {
                self.head = Some(next);
            }
            if self.current == Some(index) {
                self.current = Some(next);
            }
        }
        self.arena.remove(index).map(|node| node.value)
    }

    /// First node (walking from head) whose value satisfies `pred`
    pub fn find_by<F>(&self, pred: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.position(pred)?;
        Some(NodeRef { handle: self.arena.handle(index), value: &self.arena.node(index).value })
    }

    /// One lap around the ring, starting at head
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::forward(&self.arena, self.head)
    }

    /// Drop every node and clear the cursor
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.current = None;
    }
}

impl<T: PartialEq> CircularList<T> {
    /// Remove the first node equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_by(|v| v == value).is_some()
    }
}

impl<T: Clone> CircularList<T> {
    /// Snapshot of one lap, starting at head
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}
