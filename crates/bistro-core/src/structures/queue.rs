//! FIFO queue
//! - Array-backed ring (`VecDeque`), O(1) amortized at both ends
//! - Empty is reported as `None`, never as an error

use std::collections::VecDeque;

/// First-in first-out queue
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { items: VecDeque::new() }
    }

    /// Append at the back
    #[inline]
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the front item
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Front item without removing it
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of queued items
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing is queued
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Front-to-back borrowing iterator
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Queue<T> {
    /// Snapshot of the queue, front first
    pub fn get_all(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
