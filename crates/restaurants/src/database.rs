use futures::TryStreamExt;
use mongodb::{
    Client, Collection,
    bson::{self, Bson, Document, doc, oid::ObjectId},
    options::ClientOptions,
};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{NewRestaurant, Restaurant, YesNo};
use crate::recommendation::RecommendationFilter;

pub const DATABASE_NAME: &str = "restaurants";
pub const COLLECTION_NAME: &str = "restaurants";

/// Record inserted by [`Database::ensure_default_restaurant`] into an empty collection.
pub fn default_restaurant() -> NewRestaurant {
    NewRestaurant {
        name: "The Golden Duck".to_string(),
        address: None,
        style: "chinese".to_string(),
        vegetarian: YesNo::No,
        open_hour: "11:00".to_string(),
        close_hour: "22:00".to_string(),
        deliveries: None,
    }
}

#[derive(Clone)]
pub struct Database {
    collection: Collection<Restaurant>,
}

impl Database {
    /// Connects to the server at `uri` and checks it answers a ping.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        let options = ClientOptions::parse(uri).await?;
        let client = Client::with_options(options)?;

        client.database("admin").run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB");

        Ok(Self::from_client(&client))
    }

    pub fn from_client(client: &Client) -> Self {
        Self::with_database(&client.database(DATABASE_NAME))
    }

    pub fn with_database(database: &mongodb::Database) -> Self {
        Self {
            collection: database.collection(COLLECTION_NAME),
        }
    }

    fn inserts(&self) -> Collection<NewRestaurant> {
        self.collection.clone_with_type()
    }

    /// Runs `filter` against the raw documents, dropping any that do not decode.
    async fn find_restaurants(&self, filter: Document) -> Result<Vec<Restaurant>, AppError> {
        let documents: Vec<Document> = self
            .collection
            .clone_with_type::<Document>()
            .find(filter)
            .await?
            .try_collect()
            .await?;
        Ok(decode_restaurants(documents))
    }

    pub async fn list_restaurants(&self) -> Result<Vec<Restaurant>, AppError> {
        self.find_restaurants(doc! {}).await
    }

    /// A stored document that does not decode is reported as missing.
    pub async fn get_restaurant(&self, id: ObjectId) -> Result<Option<Restaurant>, AppError> {
        let document = self
            .collection
            .clone_with_type::<Document>()
            .find_one(doc! { "_id": id })
            .await?;
        Ok(document.and_then(|d| decode_restaurants(vec![d]).pop()))
    }

    pub async fn create_restaurant(&self, restaurant: &NewRestaurant) -> Result<ObjectId, AppError> {
        let result = self.inserts().insert_one(restaurant).await?;
        object_id(&result.inserted_id)
    }

    /// Inserts all restaurants in one bulk write. Ids come back in input order.
    pub async fn create_restaurants(
        &self,
        restaurants: &[NewRestaurant],
    ) -> Result<Vec<ObjectId>, AppError> {
        if restaurants.is_empty() {
            return Ok(Vec::new());
        }

        let result = self.inserts().insert_many(restaurants).await?;

        let mut ids: Vec<(usize, &Bson)> =
            result.inserted_ids.iter().map(|(i, id)| (*i, id)).collect();
        ids.sort_by_key(|(i, _)| *i);
        ids.into_iter().map(|(_, id)| object_id(id)).collect()
    }

    /// Returns true when a document was removed.
    pub async fn delete_restaurant(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    /// Finds restaurants matching `filter`, evaluating `open_now` against `now` (`HH:MM`).
    pub async fn recommend(
        &self,
        filter: &RecommendationFilter,
        now: &str,
    ) -> Result<Vec<Restaurant>, AppError> {
        self.find_restaurants(filter.to_document(now)).await
    }

    pub async fn count_restaurants(&self) -> Result<u64, AppError> {
        let count = self.collection.count_documents(doc! {}).await?;
        Ok(count)
    }

    /// Inserts [`default_restaurant`] if the collection holds no documents.
    pub async fn ensure_default_restaurant(&self) -> Result<Option<ObjectId>, AppError> {
        if self.count_restaurants().await? > 0 {
            return Ok(None);
        }

        let id = self.create_restaurant(&default_restaurant()).await?;
        info!("Collection was empty, inserted default restaurant {id}");
        Ok(Some(id))
    }
}

/// Decodes stored documents, skipping (and logging) any that lack a field or
/// carry a value outside the restaurant schema.
pub fn decode_restaurants(documents: Vec<Document>) -> Vec<Restaurant> {
    documents
        .into_iter()
        .filter_map(|document| {
            let id = document.get("_id").cloned();
            match bson::from_document::<Restaurant>(document) {
                Ok(restaurant) => Some(restaurant),
                Err(e) => {
                    warn!(?id, "Skipping malformed restaurant document: {e}");
                    None
                }
            }
        })
        .collect()
}

fn object_id(id: &Bson) -> Result<ObjectId, AppError> {
    id.as_object_id().ok_or(AppError::Internal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_skips_malformed_documents() {
        let good = ObjectId::new();
        let documents = vec![
            doc! {
                "_id": good,
                "name": "Seoul Food",
                "style": "Korean",
                "vegetarian": "yes",
                "open_hour": "11:00",
                "close_hour": "23:00",
            },
            doc! { "_id": ObjectId::new(), "name": "No Style", "vegetarian": "maybe" },
            doc! { "_id": 7, "anything": "goes" },
        ];

        let restaurants = decode_restaurants(documents);
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].id, good);
        assert_eq!(restaurants[0].vegetarian, YesNo::Yes);
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_restaurants(Vec::new()).is_empty());
    }
}
