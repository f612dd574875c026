//! Balanced binary search tree over unique ordered values.
//!
//! Mutations follow a write-back scheme: the recursive helpers take the owning
//! [`Link`] of a subtree and return the (possibly replaced) link, which the
//! caller stores back into its child slot.

use std::cmp::Ordering;

use itertools::Itertools;
use tracing::{debug, instrument, trace};

use crate::domain::node::{Link, Node};

/// Binary search tree holding each value at most once.
///
/// Built balanced from any collection; `insert` and `delete` keep the ordering
/// invariant but not the balance, `rebalance` restores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OrderedTree<T> {
    /// Empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        drop_iteratively(self.root.take());
        self.len = 0;
    }

    pub fn min(&self) -> Option<&T> {
        self.root().map(Node::min_value)
    }

    pub fn max(&self) -> Option<&T> {
        self.root().map(Node::max_value)
    }

    /// Edges on the longest root-to-leaf path; `-1` for an empty tree.
    pub fn height(&self) -> isize {
        Self::height_of(self.root())
    }

    /// Height of an arbitrary subtree. An absent node has height `-1`,
    /// a leaf has height `0`.
    pub fn height_of(node: Option<&Node<T>>) -> isize {
        match node {
            None => -1,
            Some(node) => 1 + Self::height_of(node.left()).max(Self::height_of(node.right())),
        }
    }

    /// True if left and right heights differ by at most one at every node.
    pub fn is_balanced(&self) -> bool {
        Self::is_balanced_at(self.root())
    }

    pub fn is_balanced_at(node: Option<&Node<T>>) -> bool {
        balanced_height(node).is_some()
    }

    /// Consume the tree, yielding its values in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.len = 0;
        into_inorder(self.root.take())
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Build a minimal-height tree from an unordered collection.
    ///
    /// Duplicates are dropped, the rest is sorted and bisected: the midpoint
    /// of each range (lower middle for even lengths) becomes the subtree root.
    #[instrument(level = "debug", skip_all)]
    pub fn build<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let sorted: Vec<T> = values.into_iter().sorted().dedup().collect();
        let len = sorted.len();
        let root = build_balanced(&mut sorted.into_iter(), len);
        debug!(len, "built balanced tree");
        Self { root, len }
    }

    /// Insert `value` as a new leaf. Returns `false` if it was already present.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) -> bool {
        let mut inserted = false;
        self.root = insert_at(self.root.take(), value, &mut inserted);
        if inserted {
            self.len += 1;
        }
        trace!(inserted, len = self.len, "insert");
        inserted
    }

    /// Remove `key`. Returns `false` (tree unchanged) if it was not present.
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, key: &T) -> bool {
        let mut removed = false;
        self.root = delete_at(self.root.take(), key, &mut removed);
        if removed {
            self.len -= 1;
        }
        trace!(removed, len = self.len, "delete");
        removed
    }

    /// Locate the node holding `key`.
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        let mut current = self.root();
        while let Some(node) = current {
            current = match key.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }

    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }

    /// Edges from the root to the node whose value equals `node.value`.
    pub fn depth(&self, node: Option<&Node<T>>) -> Option<usize> {
        Self::depth_from(node, self.root())
    }

    /// Edges from `from` down to the node whose value equals `node.value`.
    ///
    /// `None` if `node` is absent or its value is not below `from`.
    pub fn depth_from(node: Option<&Node<T>>, from: Option<&Node<T>>) -> Option<usize> {
        let target = &node?.value;
        let mut current = from;
        let mut level = 0;
        while let Some(node) = current {
            current = match target.cmp(&node.value) {
                Ordering::Equal => return Some(level),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            level += 1;
        }
        None
    }

    /// Rebuild the tree at minimal height from its current contents.
    #[instrument(level = "debug", skip(self), fields(len = self.len))]
    pub fn rebalance(&mut self) {
        let before = self.height();
        let sorted: Vec<T> = into_inorder(self.root.take()).into_iter().dedup().collect();
        self.len = sorted.len();
        self.root = build_balanced(&mut sorted.into_iter(), self.len);
        debug!(before, after = self.height(), "rebalanced");
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        drop_iteratively(self.root.take());
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<T: Ord> From<Vec<T>> for OrderedTree<T> {
    fn from(values: Vec<T>) -> Self {
        Self::build(values)
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Take `count` values from an ascending iterator and arrange them with the
/// range midpoint, `floor((start + end) / 2)`, as root.
fn build_balanced<T>(values: &mut impl Iterator<Item = T>, count: usize) -> Link<T> {
    if count == 0 {
        return None;
    }
    let mid = (count - 1) / 2;
    let left = build_balanced(values, mid);
    let value = values.next()?;
    let right = build_balanced(values, count - mid - 1);
    Some(Box::new(Node { value, left, right }))
}

fn insert_at<T: Ord>(link: Link<T>, value: T, inserted: &mut bool) -> Link<T> {
    let Some(mut node) = link else {
        *inserted = true;
        return Node::leaf(value);
    };
    match value.cmp(&node.value) {
        Ordering::Less => node.left = insert_at(node.left.take(), value, inserted),
        Ordering::Greater => node.right = insert_at(node.right.take(), value, inserted),
        Ordering::Equal => {}
    }
    Some(node)
}

fn delete_at<T: Ord>(link: Link<T>, key: &T, removed: &mut bool) -> Link<T> {
    let mut node = link?;
    match key.cmp(&node.value) {
        Ordering::Less => node.left = delete_at(node.left.take(), key, removed),
        Ordering::Greater => node.right = delete_at(node.right.take(), key, removed),
        Ordering::Equal => {
            *removed = true;
            match (node.left.take(), node.right.take()) {
                (None, right) => return right,
                (left, None) => return left,
                (left, Some(right)) => {
                    // in-order successor replaces the deleted value
                    let (successor, rest) = take_min(right);
                    node.value = successor;
                    node.left = left;
                    node.right = rest;
                }
            }
        }
    }
    Some(node)
}

/// Detach the minimum of a subtree, returning it and the remaining subtree.
/// The minimum never has a left child, so its right child takes its place.
fn take_min<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match node.left.take() {
        None => {
            let Node { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, rest) = take_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

/// Height of a balanced subtree, `None` as soon as any node is unbalanced.
fn balanced_height<T>(node: Option<&Node<T>>) -> Option<isize> {
    let Some(node) = node else {
        return Some(-1);
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    ((left - right).abs() <= 1).then_some(1 + left.max(right))
}

fn into_inorder<T>(root: Link<T>) -> Vec<T> {
    let mut values = Vec::new();
    let mut stack: Vec<Box<Node<T>>> = Vec::new();
    let mut current = root;
    loop {
        while let Some(mut node) = current {
            current = node.left.take();
            stack.push(node);
        }
        let Some(node) = stack.pop() else {
            break;
        };
        let Node { value, right, .. } = *node;
        values.push(value);
        current = right;
    }
    values
}

/// Unlink nodes one by one so degenerate trees do not recurse on drop.
fn drop_iteratively<T>(root: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
