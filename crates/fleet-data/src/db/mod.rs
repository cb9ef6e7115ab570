//! Database integration for seeding generated fleet data.
//!
//! The [`Seeder`] recreates the destination schema and inserts generated
//! rows in dependency order, with batched progress reporting.

mod seeder;

pub use seeder::{SeedError, Seeder};
