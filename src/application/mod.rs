//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic for the command line.

pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::{DemoReport, DemoService, EditPlan, EditOutcome, Snapshot, TreeStats, Traversals};
