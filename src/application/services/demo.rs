//! Demonstration run: random build, random inserts, rebalance
//!
//! Mirrors the classic exercise driver: a balanced tree is built from random
//! values, unbalanced by a few random inserts, then rebalanced.

use rand::Rng;
use tracing::{info, instrument};

use crate::application::services::inspect::Snapshot;
use crate::application::ApplicationResult;
use crate::config::DemoConfig;
use crate::domain::{random_values, OrderedTree};

/// Everything the demonstration observed.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// Raw random input, duplicates included
    pub values: Vec<i64>,
    /// Tree right after the build
    pub initial: Snapshot<i64>,
    /// Random values handed to `insert`, duplicates included
    pub inserted: Vec<i64>,
    /// Balance check after the inserts, before rebalancing
    pub balanced_after_inserts: bool,
    /// Tree after the inserts, before rebalancing
    pub unbalanced: OrderedTree<i64>,
    /// Tree after `rebalance`
    pub rebalanced: Snapshot<i64>,
}

/// Service running the demonstration scenario.
#[derive(Debug, Clone)]
pub struct DemoService {
    config: DemoConfig,
}

impl DemoService {
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }

    #[instrument(level = "debug", skip(self, rng), fields(size = self.config.size))]
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> ApplicationResult<DemoReport> {
        let values = random_values(rng, self.config.size, self.config.max)?;
        let mut tree = OrderedTree::build(values.iter().copied());
        let initial = Snapshot::of(&tree);
        info!(len = tree.len(), height = tree.height(), "initial tree built");

        let inserted = random_values(rng, self.config.inserts, self.config.insert_max)?;
        tree.extend(inserted.iter().copied());
        let balanced_after_inserts = tree.is_balanced();
        let unbalanced = tree.clone();
        info!(
            len = tree.len(),
            height = tree.height(),
            balanced = balanced_after_inserts,
            "random values inserted"
        );

        tree.rebalance();
        let rebalanced = Snapshot::of(&tree);
        info!(height = tree.height(), "tree rebalanced");

        Ok(DemoReport {
            values,
            initial,
            inserted,
            balanced_after_inserts,
            unbalanced,
            rebalanced,
        })
    }
}
