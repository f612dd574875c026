//! Tree inspection and batch edits

use tracing::{debug, instrument};

use crate::domain::OrderedTree;

/// All four traversal orders of one tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversals<T> {
    pub level_order: Vec<Vec<T>>,
    pub preorder: Vec<T>,
    pub inorder: Vec<T>,
    pub postorder: Vec<T>,
}

impl<T: Clone> Traversals<T> {
    pub fn of(tree: &OrderedTree<T>) -> Self {
        Self {
            level_order: tree.level_order(),
            preorder: tree.preorder(),
            inorder: tree.inorder(),
            postorder: tree.postorder(),
        }
    }
}

/// Shape summary of a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeStats<T> {
    pub len: usize,
    pub height: isize,
    pub min: Option<T>,
    pub max: Option<T>,
    pub balanced: bool,
}

impl<T: Clone> TreeStats<T> {
    pub fn of(tree: &OrderedTree<T>) -> Self {
        Self {
            len: tree.len(),
            height: tree.height(),
            min: tree.min().cloned(),
            max: tree.max().cloned(),
            balanced: tree.is_balanced(),
        }
    }
}

/// A tree captured at one point of a run, with its traversals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<T> {
    pub tree: OrderedTree<T>,
    pub balanced: bool,
    pub traversals: Traversals<T>,
}

impl<T: Clone> Snapshot<T> {
    pub fn of(tree: &OrderedTree<T>) -> Self {
        Self {
            tree: tree.clone(),
            balanced: tree.is_balanced(),
            traversals: Traversals::of(tree),
        }
    }
}

/// Inserts, then deletes, then an optional rebalance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPlan<T> {
    pub inserts: Vec<T>,
    pub deletes: Vec<T>,
    pub rebalance: bool,
}

/// What an [`EditPlan`] actually changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditOutcome<T> {
    pub inserted: Vec<T>,
    /// Inserts skipped because the value was already present
    pub duplicates: Vec<T>,
    pub deleted: Vec<T>,
    /// Deletes skipped because the value was absent
    pub missing: Vec<T>,
    pub rebalanced: bool,
}

impl<T: Ord + Clone + std::fmt::Debug> EditPlan<T> {
    #[instrument(level = "debug", skip(tree))]
    pub fn apply(&self, tree: &mut OrderedTree<T>) -> EditOutcome<T> {
        let mut outcome = EditOutcome {
            inserted: Vec::new(),
            duplicates: Vec::new(),
            deleted: Vec::new(),
            missing: Vec::new(),
            rebalanced: false,
        };

        for value in &self.inserts {
            if tree.insert(value.clone()) {
                outcome.inserted.push(value.clone());
            } else {
                outcome.duplicates.push(value.clone());
            }
        }
        for value in &self.deletes {
            if tree.delete(value) {
                outcome.deleted.push(value.clone());
            } else {
                outcome.missing.push(value.clone());
            }
        }
        if self.rebalance {
            tree.rebalance();
            outcome.rebalanced = true;
        }

        debug!(?outcome, "edits applied");
        outcome
    }
}
