//! Singly-linked list over the slot arena.
//!
//! Holds orders while they are in the kitchen. Head and tail are both
//! tracked, so `append` and `prepend` are O(1); removal by value is a linear
//! scan that relinks the predecessor to the successor.

use super::arena::{Iter, NodeArena, NodeHandle, NodeRef};

/// Singly-linked list
#[derive(Debug)]
pub struct LinkedList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedList<T> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self { arena: NodeArena::new(), head: None, tail: None }
    }

    /// Number of nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns true if the list has no nodes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Add at the tail
    pub fn append(&mut self, value: T) -> NodeHandle {
        let index = self.arena.insert(value);
        match self.tail {
            Some(tail) => self.arena.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.arena.handle(index)
    }

    /// Add at the head
    pub fn prepend(&mut self, value: T) -> NodeHandle {
        let index = self.arena.insert(value);
        self.arena.node_mut(index).next = self.head;
        if self.tail.is_none() {
            self.tail = Some(index);
        }
        self.head = Some(index);
        self.arena.handle(index)
    }

    /// Remove the first node whose value satisfies `pred`, returning the value
    pub fn remove_by<F>(&mut self, mut pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.arena.node(index);
            if pred(&node.value) {
                break;
            }
            prev = Some(index);
            cursor = node.next;
        }
        let index = cursor?;

        let next = self.arena.node(index).next;
        match prev {
            Some(p) => self.arena.node_mut(p).next = next,
            None => self.head = next,
        }
        if self.tail == Some(index) {
            self.tail = prev;
        }
        self.arena.remove(index).map(|node| node.value)
    }

    /// First node whose value satisfies `pred`
    pub fn find_by<F>(&self, mut pred: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.arena.node(index);
            if pred(&node.value) {
                return Some(NodeRef { handle: self.arena.handle(index), value: &node.value });
            }
            cursor = node.next;
        }
        None
    }

    /// Value behind a handle issued by this list, if still present
    pub fn get(&self, handle: NodeHandle) -> Option<&T> {
        let index = self.arena.resolve(handle)?;
        self.arena.get(index).map(|node| &node.value)
    }

    /// First value, if any
    pub fn front(&self) -> Option<&T> {
        self.head.map(|index| &self.arena.node(index).value)
    }

    /// Last value, if any
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|index| &self.arena.node(index).value)
    }

    /// Head-to-tail iterator
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::forward(&self.arena, self.head)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Remove the first node equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_by(|v| v == value).is_some()
    }

    /// First node equal to `value`
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find_by(|v| v == value)
    }
}

impl<T: Clone> LinkedList<T> {
    /// Snapshot, head to tail
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
