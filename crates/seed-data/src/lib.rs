//! Initial data for the restaurants database.
//!
//! The [`Seeder`](db::Seeder) writes the fixed set of restaurants returned by
//! [`fixtures::seed_restaurants`] into the `restaurants` collection of the
//! `restaurants` database with a single bulk insert.
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let client = mongodb::Client::with_uri_str(uri).await?;
//! let summary = Seeder::new(client).run().await?;
//! assert_eq!(summary.inserted, 3);
//! ```

pub mod config;
pub mod db;
pub mod fixtures;

pub use restaurants::models::{NewRestaurant, YesNo};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{InsertSummary, SeedError, Seeder, run};
    pub use crate::fixtures::seed_restaurants;
    pub use crate::{NewRestaurant, YesNo};
}
