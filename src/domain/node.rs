use std::fmt;

/// Owning, possibly absent child slot.
pub type Link<T> = Option<Box<Node<T>>>;

/// One entry of an [`OrderedTree`](crate::domain::OrderedTree).
///
/// A node exclusively owns both children; there are no parent pointers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    /// Stored value, unique within the tree
    pub value: T,
    /// Subtree holding strictly smaller values
    pub left: Link<T>,
    /// Subtree holding strictly greater values
    pub right: Link<T>,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Wrap a fresh leaf into a [`Link`].
    pub fn leaf(value: T) -> Link<T> {
        Some(Box::new(Self::new(value)))
    }

    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Leftmost value of the subtree rooted here (the in-order minimum).
    pub fn min_value(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.value
    }

    /// Rightmost value of the subtree rooted here.
    pub fn max_value(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.value
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node<i32> {
        //     4
        //    / \
        //   2   6
        //  /     \
        // 1       9
        let mut root = Node::new(4);
        let mut two = Node::new(2);
        two.left = Node::leaf(1);
        let mut six = Node::new(6);
        six.right = Node::leaf(9);
        root.left = Some(Box::new(two));
        root.right = Some(Box::new(six));
        root
    }

    #[test]
    fn given_new_node_when_created_then_is_leaf() {
        let node = Node::new(7);
        assert!(node.is_leaf());
        assert_eq!(node.value, 7);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }

    #[test]
    fn given_subtree_when_min_value_then_returns_leftmost() {
        let root = sample();
        assert_eq!(*root.min_value(), 1);
        assert_eq!(*root.right().unwrap().min_value(), 6);
    }

    #[test]
    fn given_subtree_when_max_value_then_returns_rightmost() {
        let root = sample();
        assert_eq!(*root.max_value(), 9);
        assert_eq!(*root.left().unwrap().max_value(), 2);
    }

    #[test]
    fn given_node_when_displayed_then_shows_value() {
        assert_eq!(Node::new(42).to_string(), "42");
    }
}
