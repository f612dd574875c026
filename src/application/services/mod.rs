//! Application services

pub mod demo;
pub mod inspect;

pub use demo::{DemoReport, DemoService};
pub use inspect::{EditOutcome, EditPlan, Snapshot, Traversals, TreeStats};
