//! Text renderings of a tree's shape for visual inspection.

use std::fmt;

use termtree::Tree;

use crate::domain::node::Node;
use crate::domain::tree::OrderedTree;

const BRANCH: &str = "│   ";
const GAP: &str = "    ";
const LOWER: &str = "└── ";
const UPPER: &str = "┌── ";

/// Sideways layout: right subtree above its parent, left subtree below.
///
/// ```text
/// │       ┌── 8
/// │   ┌── 5
/// └── 3
///     └── 1
/// ```
#[derive(Debug)]
pub struct Sideways<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<T> OrderedTree<T> {
    pub fn pretty(&self) -> Sideways<'_, T> {
        Sideways { root: self.root() }
    }
}

impl<T: fmt::Display> fmt::Display for Sideways<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_sideways(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_sideways<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<T>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result {
    if let Some(right) = node.right() {
        let below = if is_left { BRANCH } else { GAP };
        write_sideways(f, right, &format!("{prefix}{below}"), false)?;
    }
    let connector = if is_left { LOWER } else { UPPER };
    writeln!(f, "{prefix}{connector}{}", node.value)?;
    if let Some(left) = node.left() {
        let below = if is_left { GAP } else { BRANCH };
        write_sideways(f, left, &format!("{prefix}{below}"), true)?;
    }
    Ok(())
}

/// Conversion into a top-down [`termtree`] rendering.
pub trait TreeDisplay {
    fn to_termtree(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeDisplay for Node<T> {
    fn to_termtree(&self) -> Tree<String> {
        let leaves: Vec<_> = self
            .left()
            .into_iter()
            .chain(self.right())
            .map(|child| child.to_termtree())
            .collect();

        Tree::new(self.value.to_string()).with_leaves(leaves)
    }
}

impl<T: fmt::Display> TreeDisplay for OrderedTree<T> {
    fn to_termtree(&self) -> Tree<String> {
        match self.root() {
            Some(root) => root.to_termtree(),
            None => Tree::new("(empty)".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_small_tree_when_pretty_printed_then_right_above_left_below() {
        let tree = OrderedTree::build([5, 3, 8, 3, 1]);
        let expected = "│       ┌── 8\n\
                        │   ┌── 5\n\
                        └── 3\n    \
                        └── 1\n";
        assert_eq!(tree.pretty().to_string(), expected);
    }

    #[test]
    fn given_perfect_tree_when_pretty_printed_then_connectors_nest() {
        let tree = OrderedTree::build(1..=7);
        let lines: Vec<String> = tree.pretty().to_string().lines().map(String::from).collect();
        assert_eq!(
            lines,
            vec![
                "│       ┌── 7",
                "│   ┌── 6",
                "│   │   └── 5",
                "└── 4",
                "    │   ┌── 3",
                "    └── 2",
                "        └── 1",
            ]
        );
    }

    #[test]
    fn given_empty_tree_when_pretty_printed_then_nothing() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(tree.pretty().to_string(), "");
    }

    #[test]
    fn given_tree_when_converted_to_termtree_then_children_left_to_right() {
        let tree = OrderedTree::build(1..=3);
        let rendered = tree.to_termtree();
        assert_eq!(rendered.root, "2");
        let leaves: Vec<&str> = rendered.leaves.iter().map(|l| l.root.as_str()).collect();
        assert_eq!(leaves, vec!["1", "3"]);
    }

    #[test]
    fn given_single_child_when_converted_to_termtree_then_absent_side_omitted() {
        let tree = OrderedTree::build([1, 2]);
        let rendered = tree.to_termtree();
        assert_eq!(rendered.root, "1");
        assert_eq!(rendered.leaves.len(), 1);
        assert_eq!(rendered.leaves[0].root, "2");
    }

    #[test]
    fn given_empty_tree_when_converted_to_termtree_then_placeholder() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(tree.to_termtree().root, "(empty)");
    }
}
