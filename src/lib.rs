//! # baltree
//!
//! A binary search tree over unique ordered values that is built balanced,
//! edited in place, and rebalanced on demand.
//!
//! ```
//! use baltree::OrderedTree;
//!
//! let mut tree = OrderedTree::build([5, 3, 8, 3, 1]);
//! assert_eq!(tree.inorder(), vec![1, 3, 5, 8]);
//! assert_eq!(tree.root().map(|n| n.value), Some(3));
//!
//! tree.extend([9, 10, 11]);
//! assert!(!tree.is_balanced());
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DomainError, Link, Node, OrderedTree, TreeDisplay};
