//! Integration tests for the MongoDB access layer.
//!
//! To run these tests you need a reachable MongoDB server and the
//! DB_CONNECTION_STRING environment variable set.
//!
//! Run with: `DB_CONNECTION_STRING=mongodb://... cargo nextest run -p restaurants database`
//!
//! Each test works in its own uniquely named database and drops it afterwards.

use mongodb::Client;
use restaurants::database::{Database, default_restaurant};
use restaurants::models::{NewRestaurant, YesNo};
use restaurants::recommendation::RecommendationFilter;
use std::env;
use uuid::Uuid;

/// Connect to the test server, skipping tests if DB_CONNECTION_STRING is not set.
async fn get_test_database() -> Option<(mongodb::Database, Database)> {
    let uri = match env::var("DB_CONNECTION_STRING") {
        Ok(uri) => uri,
        Err(_) => {
            eprintln!("Skipping test: DB_CONNECTION_STRING not set");
            return None;
        }
    };

    let client = match Client::with_uri_str(&uri).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to MongoDB: {e}");
            return None;
        }
    };

    if let Err(e) = client
        .database("admin")
        .run_command(mongodb::bson::doc! { "ping": 1 })
        .await
    {
        eprintln!("Skipping test: MongoDB not reachable: {e}");
        return None;
    }

    let raw = client.database(&format!("restaurants_test_{}", Uuid::new_v4().simple()));
    let db = Database::with_database(&raw);
    Some((raw, db))
}

fn restaurant(
    name: &str,
    style: &str,
    vegetarian: YesNo,
    open: &str,
    close: &str,
) -> NewRestaurant {
    NewRestaurant {
        name: name.to_string(),
        address: None,
        style: style.to_string(),
        vegetarian,
        open_hour: open.to_string(),
        close_hour: close.to_string(),
        deliveries: Some(YesNo::Yes),
    }
}

#[tokio::test]
async fn test_create_get_delete() {
    let Some((raw, db)) = get_test_database().await else {
        return;
    };

    let new = restaurant("Seoul Food", "Korean", YesNo::Yes, "11:00", "23:00");
    let id = db.create_restaurant(&new).await.unwrap();

    let fetched = db.get_restaurant(id).await.unwrap().expect("restaurant stored");
    assert_eq!(fetched, new.clone().with_id(id));

    assert!(db.delete_restaurant(id).await.unwrap());
    assert!(db.get_restaurant(id).await.unwrap().is_none());
    assert!(!db.delete_restaurant(id).await.unwrap());

    raw.drop().await.unwrap();
}

#[tokio::test]
async fn test_bulk_insert_preserves_order() {
    let Some((raw, db)) = get_test_database().await else {
        return;
    };

    let batch = vec![
        restaurant("First", "Polish", YesNo::No, "09:00", "20:00"),
        restaurant("Second", "Polish", YesNo::No, "09:00", "20:00"),
        restaurant("Third", "Polish", YesNo::No, "09:00", "20:00"),
    ];
    let ids = db.create_restaurants(&batch).await.unwrap();
    assert_eq!(ids.len(), 3);

    for (id, expected) in ids.iter().zip(&batch) {
        let stored = db.get_restaurant(*id).await.unwrap().unwrap();
        assert_eq!(stored.name, expected.name);
    }
    assert_eq!(db.count_restaurants().await.unwrap(), 3);
    assert!(db.create_restaurants(&[]).await.unwrap().is_empty());

    raw.drop().await.unwrap();
}

#[tokio::test]
async fn test_recommendation_filters() {
    let Some((raw, db)) = get_test_database().await else {
        return;
    };

    db.create_restaurants(&[
        restaurant("Pasta Paradise", "Italian", YesNo::No, "10:00", "22:00"),
        restaurant("Seoul Food", "Korean", YesNo::Yes, "11:00", "23:00"),
        restaurant("Early Bird", "Korean", YesNo::No, "06:00", "10:30"),
    ])
    .await
    .unwrap();

    let korean = RecommendationFilter {
        style: Some("korean".to_string()),
        ..Default::default()
    };
    assert_eq!(db.recommend(&korean, "12:00").await.unwrap().len(), 2);

    let vegetarian_korean = RecommendationFilter {
        vegetarian: Some("YES".to_string()),
        ..korean.clone()
    };
    let found = db.recommend(&vegetarian_korean, "12:00").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Seoul Food");

    let open_now = RecommendationFilter {
        open_now: Some("1".to_string()),
        ..Default::default()
    };
    let names: Vec<String> = db
        .recommend(&open_now, "22:30")
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Seoul Food".to_string()]);

    raw.drop().await.unwrap();
}

#[tokio::test]
async fn test_malformed_documents_are_skipped() {
    let Some((raw, db)) = get_test_database().await else {
        return;
    };

    let id = db
        .create_restaurant(&restaurant("Seoul Food", "Korean", YesNo::Yes, "11:00", "23:00"))
        .await
        .unwrap();
    let stray = raw
        .collection::<mongodb::bson::Document>("restaurants")
        .insert_one(mongodb::bson::doc! { "name": "Legacy", "vegetarian": true })
        .await
        .unwrap()
        .inserted_id
        .as_object_id()
        .unwrap();

    let listed = db.list_restaurants().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);

    let everything = db
        .recommend(&RecommendationFilter::default(), "12:00")
        .await
        .unwrap();
    assert_eq!(everything.len(), 1);

    assert!(db.get_restaurant(stray).await.unwrap().is_none());
    assert_eq!(db.count_restaurants().await.unwrap(), 2);

    raw.drop().await.unwrap();
}

#[tokio::test]
async fn test_default_restaurant_only_when_empty() {
    let Some((raw, db)) = get_test_database().await else {
        return;
    };

    let id = db
        .ensure_default_restaurant()
        .await
        .unwrap()
        .expect("inserted into empty collection");
    let stored = db.get_restaurant(id).await.unwrap().unwrap();
    assert_eq!(stored.into_details(), default_restaurant());

    assert!(db.ensure_default_restaurant().await.unwrap().is_none());
    assert_eq!(db.count_restaurants().await.unwrap(), 1);

    raw.drop().await.unwrap();
}
