//! Database seeding.

use mongodb::{
    Client,
    bson::{Bson, oid::ObjectId},
};
use thiserror::Error;
use tracing::info;

use crate::config::SeedConfig;
use crate::fixtures::seed_restaurants;
use restaurants::models::NewRestaurant;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Inserted document {0} was assigned a non-ObjectId id: {1}")]
    UnexpectedId(usize, Bson),
}

/// Outcome of a successful seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertSummary {
    /// Number of documents inserted.
    pub inserted: usize,
    /// Server-assigned ids, in insertion order.
    pub ids: Vec<ObjectId>,
}

/// Writes the seed restaurants into a MongoDB collection.
pub struct Seeder {
    client: Client,
    config: SeedConfig,
}

impl Seeder {
    /// Creates a seeder targeting the `restaurants` database and collection.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            config: SeedConfig::default(),
        }
    }

    /// Overrides the target database and collection.
    pub fn with_config(mut self, config: SeedConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Inserts the seed restaurants with a single bulk write.
    ///
    /// Nothing is retried; re-running against a populated collection appends
    /// another copy of every record.
    pub async fn run(&self) -> Result<InsertSummary, SeedError> {
        self.seed(&seed_restaurants()).await
    }

    /// Inserts `restaurants` with a single bulk write.
    pub async fn seed(&self, restaurants: &[NewRestaurant]) -> Result<InsertSummary, SeedError> {
        info!(
            "Seeding {} restaurants into {}.{}...",
            restaurants.len(),
            self.config.database,
            self.config.collection
        );

        let collection = self
            .client
            .database(&self.config.database)
            .collection::<NewRestaurant>(&self.config.collection);

        let result = collection.insert_many(restaurants).await?;

        let mut inserted: Vec<(usize, Bson)> = result.inserted_ids.into_iter().collect();
        inserted.sort_by_key(|(index, _)| *index);

        let ids = inserted
            .into_iter()
            .map(|(index, id)| match id {
                Bson::ObjectId(oid) => Ok(oid),
                other => Err(SeedError::UnexpectedId(index, other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Seeded {} restaurants", ids.len());
        Ok(InsertSummary {
            inserted: ids.len(),
            ids,
        })
    }
}

/// Seeds the default `restaurants.restaurants` collection through `client`.
pub async fn run(client: &Client) -> Result<InsertSummary, SeedError> {
    Seeder::new(client.clone()).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::options::ClientOptions;

    async fn unreachable_client() -> Client {
        let options = ClientOptions::parse("mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200")
            .await
            .unwrap();
        Client::with_options(options).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_to_restaurants_collection() {
        let seeder = Seeder::new(unreachable_client().await);
        assert_eq!(seeder.config(), &SeedConfig::default());

        let seeder = seeder.with_config(SeedConfig::for_database("other"));
        assert_eq!(seeder.config().database, "other");
    }

    #[tokio::test]
    async fn test_unreachable_server_fails() {
        let client = unreachable_client().await;
        let result = run(&client).await;
        assert!(matches!(result, Err(SeedError::Database(_))));
    }
}
