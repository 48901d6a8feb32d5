//! The toy catalog engine: queries, mutations, messages and statistics.

pub mod service;
pub mod stats;

pub use service::{PAGE_SIZE, ToyPage, ToyService};
pub use stats::{LabelCount, ToyStats, TrendPoint};
