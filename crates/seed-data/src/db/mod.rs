//! Database integration for seeding.
//!
//! The [`Seeder`] writes the seed restaurants with one bulk insert and reports
//! the ids the server assigned.

mod seeder;

pub use seeder::{InsertSummary, SeedError, Seeder, run};
