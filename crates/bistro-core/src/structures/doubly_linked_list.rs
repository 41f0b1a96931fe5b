//! Doubly-linked list over the slot arena.
//!
//! Holds served orders. Both link directions are maintained on every
//! mutation; a handle returned by `append`/`prepend` allows O(1) removal.

use super::arena::{Iter, NodeArena, NodeHandle, NodeRef};

/// Doubly-linked list
#[derive(Debug)]
pub struct DoublyLinkedList<T> {
    arena: NodeArena<T>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
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
            Some(tail) => {
                self.arena.node_mut(index).prev = Some(tail);
                self.arena.node_mut(tail).next = Some(index);
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.arena.handle(index)
    }

    /// Add at the head
    pub fn prepend(&mut self, value: T) -> NodeHandle {
        let index = self.arena.insert(value);
        match self.head {
            Some(head) => {
                self.arena.node_mut(index).next = Some(head);
                self.arena.node_mut(head).prev = Some(index);
            }
            None => self.tail = Some(index),
        }
        self.head = Some(index);
        self.arena.handle(index)
    }

    /// Remove the node behind `handle` in O(1).
    ///
    /// Returns `None` if the handle's node was already removed.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<T> {
        let index = self.arena.resolve(handle)?;
        self.unlink(index);
        self.arena.remove(index).map(|node| node.value)
    }

    fn unlink(&mut self, index: usize) {
        let (prev, next) = {
            let node = self.arena.node(index);
            (node.prev, node.next)
        };

        if self.head == Some(index) {
            self.head = next;
            match next {
                Some(n) => self.arena.node_mut(n).prev = None,
                None => self.tail = None,
            }
        } else if self.tail == Some(index) {
            self.tail = prev;
            if let Some(p) = prev {
                self.arena.node_mut(p).next = None;
            }
        } else {
            if let Some(p) = prev {
                self.arena.node_mut(p).next = next;
            }
            if let Some(n) = next {
                self.arena.node_mut(n).prev = prev;
            }
        }
    }

    fn position<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = self.arena.node(index);
            if pred(&node.value) {
                return Some(index);
            }
            cursor = node.next;
        }
        None
    }

    /// Remove the first node whose value satisfies `pred`, returning the value
    pub fn remove_by<F>(&mut self, pred: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.position(pred)?;
        self.unlink(index);
        self.arena.remove(index).map(|node| node.value)
    }

    /// First node whose value satisfies `pred`
    pub fn find_by<F>(&self, pred: F) -> Option<NodeRef<'_, T>>
    where
        F: FnMut(&T) -> bool,
    {
        let index = self.position(pred)?;
        Some(NodeRef { handle: self.arena.handle(index), value: &self.arena.node(index).value })
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

    /// Tail-to-head iterator following the back links
    pub fn iter_rev(&self) -> Iter<'_, T> {
        Iter::backward(&self.arena, self.tail)
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Remove the first node equal to `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool {
        self.remove_by(|v| v == value).is_some()
    }

    /// First node equal to `value`
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.find_by(|v| v == value)
    }
}

impl<T: Clone> DoublyLinkedList<T> {
    /// Snapshot, head to tail
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Snapshot, tail to head
    pub fn to_array_rev(&self) -> Vec<T> {
        self.iter_rev().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Both directions must agree after every mutation.
    fn assert_symmetric<T: Clone + PartialEq + std::fmt::Debug>(list: &DoublyLinkedList<T>) {
        let forward = list.to_array();
        let mut backward = list.to_array_rev();
        backward.reverse();
        assert_eq!(forward, backward, "forward and backward walks disagree");
        assert_eq!(forward.len(), list.len());

        if let Some(head) = list.head {
            assert_eq!(list.arena.node(head).prev, None);
        }
        if let Some(tail) = list.tail {
            assert_eq!(list.arena.node(tail).next, None);
        }
        let mut cursor = list.head;
        while let Some(index) = cursor {
            let next = list.arena.node(index).next;
            if let Some(n) = next {
                assert_eq!(list.arena.node(n).prev, Some(index));
            }
            cursor = next;
        }
    }

    #[test]
    fn append_prepend_both_directions() {
        let mut list = DoublyLinkedList::new();
        list.append(2);
        list.append(3);
        list.prepend(1);
        assert_eq!(list.to_array(), vec![1, 2, 3]);
        assert_eq!(list.to_array_rev(), vec![3, 2, 1]);
        assert_symmetric(&list);
    }

    #[test]
    fn remove_head() {
        let mut list = DoublyLinkedList::new();
        (1..=3).for_each(|i| {
            list.append(i);
        });
        assert!(list.remove(&1));
        assert_eq!(list.front(), Some(&2));
        assert_symmetric(&list);
    }

    #[test]
    fn remove_tail() {
        let mut list = DoublyLinkedList::new();
        (1..=3).for_each(|i| {
            list.append(i);
        });
        assert!(list.remove(&3));
        assert_eq!(list.back(), Some(&2));
        assert_eq!(list.to_array_rev(), vec![2, 1]);
        assert_symmetric(&list);
        list.append(4);
        assert_eq!(list.to_array_rev(), vec![4, 2, 1]);
        assert_symmetric(&list);
    }

    #[test]
    fn remove_middle() {
        let mut list = DoublyLinkedList::new();
        (1..=5).for_each(|i| {
            list.append(i);
        });
        assert!(list.remove(&3));
        assert_eq!(list.to_array(), vec![1, 2, 4, 5]);
        assert_eq!(list.to_array_rev(), vec![5, 4, 2, 1]);
        assert_symmetric(&list);
    }

    #[test]
    fn remove_only_node() {
        let mut list = DoublyLinkedList::new();
        list.append("solo");
        assert!(list.remove(&"solo"));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.iter_rev().next().is_none());
        assert_symmetric(&list);
    }

    #[test]
    fn remove_node_by_handle() {
        let mut list = DoublyLinkedList::new();
        let a = list.append('a');
        let b = list.append('b');
        let c = list.append('c');

        assert_eq!(list.remove_node(b), Some('b'));
        assert_symmetric(&list);
        assert_eq!(list.remove_node(b), None, "stale handle");

        assert_eq!(list.remove_node(a), Some('a'));
        assert_eq!(list.remove_node(c), Some('c'));
        assert!(list.is_empty());

        let d = list.append('d');
        assert_eq!(list.get(a), None);
        assert_eq!(list.get(d), Some(&'d'));
    }

    #[test]
    fn find_and_remove_missing() {
        let mut list = DoublyLinkedList::new();
        list.append(10);
        assert!(list.find(&10).is_some());
        assert!(list.find(&11).is_none());
        assert!(!list.remove(&11));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn mixed_churn_keeps_links_symmetric() {
        let mut list = DoublyLinkedList::new();
        let mut handles = Vec::new();
        for i in 0..20 {
            if i % 3 == 0 {
                handles.push(list.prepend(i));
            } else {
                handles.push(list.append(i));
            }
        }
        for h in handles.iter().step_by(2) {
            assert!(list.remove_node(*h).is_some());
            assert_symmetric(&list);
        }
        assert_eq!(list.len(), 10);
        list.clear();
        assert!(list.is_empty());
        assert_symmetric(&list);
    }
}
