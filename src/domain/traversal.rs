//! Depth-first and breadth-first traversals.
//!
//! Every order has a borrowing iterator over nodes; the `*_visit` methods feed
//! a callback from that iterator and the collecting methods gather values from
//! it, so both modes always see the same sequence.

use std::collections::VecDeque;

use crate::domain::node::Node;
use crate::domain::tree::OrderedTree;

impl<T> OrderedTree<T> {
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root())
    }

    pub fn iter_inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.root())
    }

    pub fn iter_preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root())
    }

    pub fn iter_postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root())
    }

    /// Values in ascending order.
    pub fn iter<'a>(&'a self) -> Values<'a, T> {
        self.iter_inorder()
            .map(node_value as fn(&'a Node<T>) -> &'a T)
    }

    pub fn level_order_visit<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.iter_level_order().for_each(visit);
    }

    pub fn inorder_visit<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.iter_inorder().for_each(visit);
    }

    pub fn preorder_visit<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.iter_preorder().for_each(visit);
    }

    pub fn postorder_visit<F: FnMut(&Node<T>)>(&self, visit: F) {
        self.iter_postorder().for_each(visit);
    }
}

impl<T: Clone> OrderedTree<T> {
    /// Values grouped by depth, root level first, each level left to right.
    pub fn level_order(&self) -> Vec<Vec<T>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();

        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                level.push(node.value.clone());
                queue.extend(node.left());
                queue.extend(node.right());
            }
            levels.push(level);
        }

        levels
    }

    /// Left, node, right: ascending for a valid tree.
    pub fn inorder(&self) -> Vec<T> {
        collect_values(self.iter_inorder())
    }

    /// Node, left, right.
    pub fn preorder(&self) -> Vec<T> {
        collect_values(self.iter_preorder())
    }

    /// Left, right, node.
    pub fn postorder(&self) -> Vec<T> {
        collect_values(self.iter_postorder())
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Values<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending value iterator returned by [`OrderedTree::iter`].
pub type Values<'a, T> = std::iter::Map<InOrder<'a, T>, fn(&'a Node<T>) -> &'a T>;

fn node_value<T>(node: &Node<T>) -> &T {
    &node.value
}

fn collect_values<'a, T: Clone + 'a>(nodes: impl Iterator<Item = &'a Node<T>>) -> Vec<T> {
    nodes.map(|node| node.value.clone()).collect()
}

/// Breadth-first, children enqueued left then right.
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// Left subtree, node, right subtree, driven by an explicit stack.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }
        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node)
    }
}

/// Node, left subtree, right subtree.
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right first so that left is popped first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Left subtree, right subtree, node.
///
/// Each node is pushed twice: unmarked to expand its children, then marked
/// once both children are on the stack above it.
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|node| (node, false)).into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, visited)) = self.stack.pop() {
            if visited {
                return Some(node);
            }
            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    //        4
    //      /   \
    //     2     6
    //    / \   / \
    //   1   3 5   7
    fn perfect() -> OrderedTree<i32> {
        OrderedTree::build(1..=7)
    }

    #[test]
    fn given_perfect_tree_when_level_order_then_groups_by_depth() {
        assert_eq!(
            perfect().level_order(),
            vec![vec![4], vec![2, 6], vec![1, 3, 5, 7]]
        );
    }

    #[test]
    fn given_perfect_tree_when_traversing_depth_first_then_orders_match() {
        let tree = perfect();
        assert_eq!(tree.inorder(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(tree.preorder(), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(tree.postorder(), vec![1, 3, 2, 5, 7, 6, 4]);
    }

    #[test]
    fn given_empty_tree_when_traversing_then_all_empty() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert!(tree.level_order().is_empty());
        assert!(tree.inorder().is_empty());
        assert!(tree.preorder().is_empty());
        assert!(tree.postorder().is_empty());
        assert_eq!(tree.iter().count(), 0);
    }

    #[test]
    fn given_right_spine_when_postorder_then_children_before_parent() {
        let mut tree = OrderedTree::new();
        tree.extend([1, 2, 3]);
        assert_eq!(tree.postorder(), vec![3, 2, 1]);
        assert_eq!(tree.preorder(), vec![1, 2, 3]);
        assert_eq!(tree.level_order(), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn given_visitor_when_postorder_visit_then_same_order_as_collect() {
        let mut tree = perfect();
        tree.insert(8);
        tree.delete(&2);

        let mut visited = Vec::new();
        tree.postorder_visit(|node| visited.push(node.value));
        assert_eq!(visited, tree.postorder());
    }

    #[test]
    fn given_visitor_when_level_order_visit_then_flattened_levels() {
        let tree = perfect();
        let mut visited = Vec::new();
        tree.level_order_visit(|node| visited.push(node.value));
        let flat: Vec<i32> = tree.level_order().into_iter().flatten().collect();
        assert_eq!(visited, flat);
    }

    #[test]
    fn given_visitor_when_inorder_and_preorder_visit_then_nodes_seen() {
        let tree = perfect();
        let mut inorder = Vec::new();
        let mut preorder = Vec::new();
        tree.inorder_visit(|node| inorder.push(node.value));
        tree.preorder_visit(|node| preorder.push(node.value));
        assert_eq!(inorder, tree.inorder());
        assert_eq!(preorder, tree.preorder());
    }

    #[test]
    fn given_tree_ref_when_iterating_then_values_ascend() {
        let tree = OrderedTree::build([30, 10, 20]);
        let values: Vec<&i32> = (&tree).into_iter().collect();
        assert_eq!(values, vec![&10, &20, &30]);
        let sum: i32 = tree.iter().sum();
        assert_eq!(sum, 60);
    }
}
