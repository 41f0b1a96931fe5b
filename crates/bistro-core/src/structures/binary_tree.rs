//! Unbalanced binary search tree.
//!
//! Nodes live in a `Vec` and point at children by index. Values comparing
//! less than a node go left; equal or greater go right, so duplicates are
//! kept and appear in insertion order during an in-order walk. There is no
//! rebalancing and no delete.
//!
//! Every walk is iterative: sorted input degrades the tree into a list and
//! recursion would then be as deep as the tree is large.

use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    value: T,
    left: Option<usize>,
    right: Option<usize>,
}

/// Binary search tree ordered by a comparator supplied per call
#[derive(Debug, Clone)]
pub struct BinaryTree<T> {
    nodes: Vec<TreeNode<T>>,
    root: Option<usize>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BinaryTree<T> {
    /// Create an empty tree
    pub const fn new() -> Self {
        Self { nodes: Vec::new(), root: None }
    }

    /// Tree that remembers its comparator
    pub fn with_comparator<C>(compare: C) -> SortedTree<T, C>
    where
        C: Fn(&T, &T) -> Ordering,
    {
        SortedTree { tree: Self::new(), compare }
    }

    /// Number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert at the first empty child on the comparator's descent path
    pub fn insert_by<F>(&mut self, value: T, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let index = self.nodes.len();
        let Some(mut cursor) = self.root else {
            self.nodes.push(TreeNode { value, left: None, right: None });
            self.root = Some(index);
            return;
        };

        loop {
            let node = &self.nodes[cursor];
            let go_left = compare(&value, &node.value) == Ordering::Less;
            let child = if go_left { node.left } else { node.right };
            match child {
                Some(next) => cursor = next,
                None => {
                    let parent = &mut self.nodes[cursor];
                    if go_left {
                        parent.left = Some(index);
                    } else {
                        parent.right = Some(index);
                    }
                    break;
                }
            }
        }
        self.nodes.push(TreeNode { value, left: None, right: None });
    }

    /// First value on the descent path that compares equal to `probe`
    pub fn search_by<F>(&self, probe: &T, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut cursor = self.root;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            cursor = match compare(probe, &node.value) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Visit every value left, self, right
    pub fn in_order_traversal<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for value in self.iter() {
            visit(value);
        }
    }

    /// In-order iterator
    pub fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { nodes: &self.nodes, stack: Vec::new() };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty)
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(usize, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((index, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = &self.nodes[index];
            pending.extend(node.left.map(|c| (c, depth + 1)));
            pending.extend(node.right.map(|c| (c, depth + 1)));
        }
        deepest
    }

    /// Drop every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<T: Clone> BinaryTree<T> {
    /// Values in order
    pub fn to_array(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterative in-order walk with an explicit stack
pub struct InOrder<'a, T> {
    nodes: &'a [TreeNode<T>],
    stack: Vec<usize>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut cursor: Option<usize>) {
        while let Some(index) = cursor {
            self.stack.push(index);
            cursor = self.nodes[index].left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let index = self.stack.pop()?;
        let nodes = self.nodes;
        self.push_left_spine(nodes[index].right);
        Some(&nodes[index].value)
    }
}

/// Binary search tree bound to one comparator
pub struct SortedTree<T, C> {
    tree: BinaryTree<T>,
    compare: C,
}

impl<T, C> SortedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Insert using the bound comparator
    pub fn insert(&mut self, value: T) {
        self.tree.insert_by(value, &self.compare);
    }

    /// First value comparing equal to `probe`
    pub fn search(&self, probe: &T) -> Option<&T> {
        self.tree.search_by(probe, &self.compare)
    }

    /// Visit every value in comparator order
    pub fn in_order_traversal<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.tree.in_order_traversal(visit);
    }

    /// In-order iterator
    pub fn iter(&self) -> InOrder<'_, T> {
        self.tree.iter()
    }

    /// Number of stored values
    #[inline]
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the tree is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Longest root-to-leaf path
    pub fn height(&self) -> usize {
        self.tree.height()
    }
}

impl<T: Clone, C> SortedTree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Values in comparator order
    pub fn to_array(&self) -> Vec<T> {
        self.tree.to_array()
    }
}

impl<T: std::fmt::Debug, C> std::fmt::Debug for SortedTree<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortedTree").field("tree", &self.tree).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn by_value(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn empty_tree() {
        let tree: BinaryTree<i32> = BinaryTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.search_by(&1, by_value), None);
        assert!(tree.to_array().is_empty());
    }

    #[test]
    fn insert_places_less_left_and_ties_right() {
        let mut tree = BinaryTree::new();
        for v in [5, 3, 8, 5] {
            tree.insert_by(v, by_value);
        }
        let root = &tree.nodes[tree.root.unwrap()];
        assert_eq!(root.value, 5);
        assert_eq!(tree.nodes[root.left.unwrap()].value, 3);
        let right = &tree.nodes[root.right.unwrap()];
        assert_eq!(right.value, 8);
        // duplicate 5 is >= root, < 8: right then left
        assert_eq!(tree.nodes[right.left.unwrap()].value, 5);
        assert_eq!(tree.to_array(), vec![3, 5, 5, 8]);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn search_finds_first_equal_on_path() {
        let mut tree = BinaryTree::new();
        tree.insert_by(("mains", "Burger", 1), |a, b| a.0.cmp(b.0));
        tree.insert_by(("mains", "Pizza", 2), |a, b| a.0.cmp(b.0));
        let hit = tree.search_by(&("mains", "", 0), |a, b| a.0.cmp(b.0));
        assert_eq!(hit.map(|v| v.2), Some(1));
        assert!(tree.search_by(&("drinks", "", 0), |a, b| a.0.cmp(b.0)).is_none());
    }

    #[test]
    fn traversal_callback_sees_sorted_order() {
        let mut tree = BinaryTree::new();
        for v in [4, 2, 6, 1, 3, 5, 7] {
            tree.insert_by(v, by_value);
        }
        let mut seen = Vec::new();
        tree.in_order_traversal(|v| seen.push(*v));
        assert_eq!(seen, (1..=7).collect::<Vec<_>>());
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn sorted_input_does_not_overflow() {
        let mut tree = BinaryTree::new();
        for v in 0..5_000 {
            tree.insert_by(v, by_value);
        }
        assert_eq!(tree.height(), 5_000);
        assert_eq!(tree.iter().count(), 5_000);
        assert_eq!(tree.search_by(&4_999, by_value), Some(&4_999));
        drop(tree);
    }

    #[test]
    fn sorted_tree_binds_comparator() {
        let mut tree = BinaryTree::with_comparator(|a: &String, b: &String| b.cmp(a));
        for s in ["b", "a", "c"] {
            tree.insert(s.to_string());
        }
        assert_eq!(tree.to_array(), vec!["c", "b", "a"]);
        assert_eq!(tree.search(&"a".to_string()).map(String::as_str), Some("a"));
        assert_eq!(tree.len(), 3);
    }

    proptest! {
        #[test]
        fn in_order_is_non_decreasing(values in proptest::collection::vec(-50i32..50, 0..200)) {
            let mut tree = BinaryTree::new();
            for &v in &values {
                tree.insert_by(v, by_value);
            }
            let out = tree.to_array();
            prop_assert_eq!(out.len(), values.len());
            prop_assert!(out.windows(2).all(|w| w[0] <= w[1]));
            let mut expected = values;
            expected.sort();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn every_inserted_value_is_found(values in proptest::collection::vec(any::<u16>(), 1..100)) {
            let mut tree = BinaryTree::new();
            for &v in &values {
                tree.insert_by(v, |a: &u16, b: &u16| a.cmp(b));
            }
            for v in &values {
                prop_assert_eq!(tree.search_by(v, |a: &u16, b: &u16| a.cmp(b)), Some(v));
            }
        }
    }
}
