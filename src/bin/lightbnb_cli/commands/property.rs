// ABOUTME: Property commands for lightbnb-cli
// ABOUTME: Handles search, listing from a JSON file, and reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lightbnb::{
    database::{PropertyRepository, PropertyRepositoryImpl, SearchLimit, SearchOptions},
    database_plugins::factory::Database,
    errors::{AppError, AppResult},
    models::{NewProperty, NewPropertyReview},
};
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::helpers::display::Output;

type Result<T> = AppResult<T>;

/// Search filters as given on the command line
pub struct SearchFilters {
    /// `--city`
    pub city: Option<String>,
    /// `--owner-id`
    pub owner_id: Option<i64>,
    /// `--min-price`
    pub min_price: Option<Decimal>,
    /// `--max-price`
    pub max_price: Option<Decimal>,
    /// `--min-rating`
    pub min_rating: Option<f64>,
}

impl From<SearchFilters> for SearchOptions {
    fn from(filters: SearchFilters) -> Self {
        Self {
            city: filters.city,
            owner_id: filters.owner_id,
            minimum_price_per_night: filters.min_price,
            maximum_price_per_night: filters.max_price,
            minimum_rating: filters.min_rating,
        }
    }
}

/// Search properties and print the matches
pub async fn search(
    database: Database,
    filters: SearchFilters,
    limit: i64,
    output: Output,
) -> Result<()> {
    let limit = SearchLimit::new(limit)?;
    let options = SearchOptions::from(filters);

    let listings = PropertyRepositoryImpl::new(database)
        .search(&options, limit)
        .await?;
    info!("Found {} matching properties", listings.len());

    output.listings(&listings)
}

/// List a property described by the JSON file at `path`
pub async fn add(database: Database, path: &Path, output: Output) -> Result<()> {
    let raw = fs::read_to_string(path).map_err(|e| {
        AppError::invalid_input(format!("Cannot read {}: {e}", path.display())).with_source(e)
    })?;
    let property: NewProperty = serde_json::from_str(&raw)?;

    let stored = PropertyRepositoryImpl::new(database)
        .create(&property)
        .await?;
    info!("Listed property {} for owner {}", stored.id, stored.owner_id);

    output.property(&stored)
}

/// Record a guest review
pub async fn review(database: Database, review: &NewPropertyReview, output: Output) -> Result<()> {
    let stored = PropertyRepositoryImpl::new(database)
        .add_review(review)
        .await?;
    output.review(&stored)
}
