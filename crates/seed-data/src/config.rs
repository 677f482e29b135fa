//! Seeding target configuration.

use serde::{Deserialize, Serialize};

/// Database seeded by default.
pub const DATABASE_NAME: &str = "restaurants";
/// Collection seeded by default.
pub const COLLECTION_NAME: &str = "restaurants";

/// Where the seed records are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Database to select (created implicitly on first write).
    pub database: String,
    /// Collection receiving the records.
    pub collection: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database: DATABASE_NAME.to_string(),
            collection: COLLECTION_NAME.to_string(),
        }
    }
}

impl SeedConfig {
    /// Targets the default collection inside another database.
    pub fn for_database(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::default()
        }
    }
}
