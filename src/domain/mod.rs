//! Domain layer: the tree and its algorithms
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod display;
pub mod error;
pub mod node;
pub mod traversal;
pub mod tree;
pub mod values;

pub use display::{Sideways, TreeDisplay};
pub use error::DomainError;
pub use node::{Link, Node};
pub use traversal::{InOrder, LevelOrder, PostOrder, PreOrder, Values};
pub use tree::OrderedTree;
pub use values::{parse_values, random_values};
