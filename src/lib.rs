// ABOUTME: Main library entry point for the LightBnB data access layer
// ABOUTME: Property search query building plus user, property and reservation storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `LightBnB`
//!
//! Data access for a vacation-rental listing service: users, properties,
//! reservations and property reviews stored in `SQLite` or `PostgreSQL`.
//!
//! The centre of the crate is
//! [`PropertySearchQueryBuilder`](database::search::PropertySearchQueryBuilder),
//! which composes optional city, owner, price and rating filters into a
//! single parameterized statement. Everything else is a thin, typed layer
//! around one query each.
//!
//! ## Architecture
//!
//! - **`database::search`**: pure query construction
//! - **`database_plugins`**: the `DatabaseProvider` trait and its backends
//! - **`database::repositories`**: validated, logged access for callers
//! - **`config`**: environment-driven database configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use lightbnb::config::DatabaseConfig;
//! use lightbnb::database::{PropertyRepository, PropertyRepositoryImpl, SearchLimit, SearchOptions};
//! use lightbnb::database_plugins::factory::Database;
//! use lightbnb::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = DatabaseConfig::from_env()?;
//!     let db = Database::from_config(&config).await?;
//!     let properties = PropertyRepositoryImpl::new(db);
//!
//!     let options = SearchOptions::default().with_city("Vancouver");
//!     for listing in properties.search(&options, SearchLimit::default()).await? {
//!         println!("{} ({:?})", listing.property.title, listing.average_rating);
//!     }
//!     Ok(())
//! }
//! ```

/// Database and connection pool configuration
pub mod config;

/// Property search and repositories
pub mod database;

/// Database backends behind the `DatabaseProvider` trait
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

pub use lightbnb_core::{constants, currency, models};
