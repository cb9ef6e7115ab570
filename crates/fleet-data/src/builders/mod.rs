//! Fluent builder for producing complete fleet datasets.

mod dataset;

pub use dataset::{DatasetBuilder, FleetDataset};
