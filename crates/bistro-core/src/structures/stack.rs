//! LIFO stack, array-backed

/// Last-in first-out stack
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push on top
    #[inline]
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Top item without removing it
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Bottom-to-top borrowing iterator
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + '_ {
        self.items.iter()
    }

    /// Drop everything
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Clone> Stack<T> {
    /// Snapshot of the stack, bottom first
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_stack_reports_none() {
        let mut s: Stack<u8> = Stack::new();
        assert_eq!(s.pop(), None);
        assert_eq!(s.peek(), None);
        assert!(s.is_empty());
    }

    #[test]
    fn peek_sees_top_and_snapshot_is_bottom_first() {
        let mut s = Stack::new();
        s.push(1);
        s.push(2);
        s.push(3);
        assert_eq!(s.peek(), Some(&3));
        assert_eq!(s.get_all(), vec![1, 2, 3]);
        assert_eq!(s.pop(), Some(3));
        assert_eq!(s.size(), 2);
        s.clear();
        assert!(s.is_empty());
    }

    proptest! {
        #[test]
        fn lifo_law(items in proptest::collection::vec(any::<u64>(), 0..64)) {
            let mut s = Stack::new();
            for &i in &items {
                s.push(i);
            }
            let mut out = Vec::new();
            while let Some(i) = s.pop() {
                out.push(i);
            }
            let mut expected = items;
            expected.reverse();
            prop_assert_eq!(out, expected);
        }
    }
}
