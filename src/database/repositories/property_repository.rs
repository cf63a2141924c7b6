// ABOUTME: Property listing repository implementation
// ABOUTME: Handles filtered property search, new listings and guest reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{observe, rejected, PropertyRepository};
use crate::database::search::{SearchLimit, SearchOptions};
use crate::database_plugins::factory::Database;
use crate::database_plugins::shared::validation::{
    validate_cost, validate_minimum_rating, validate_rating, validate_required,
};
use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use lightbnb_core::constants::tables;
use lightbnb_core::models::{
    NewProperty, NewPropertyReview, Property, PropertyListing, PropertyReview,
};

/// SQLite/PostgreSQL implementation of `PropertyRepository`
pub struct PropertyRepositoryImpl {
    db: Database,
}

impl PropertyRepositoryImpl {
    /// Create a new `PropertyRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

fn validate_new_property(property: &NewProperty) -> AppResult<()> {
    validate_required("title", &property.title)?;
    validate_required("street", &property.street)?;
    validate_required("city", &property.city)?;
    validate_required("province", &property.province)?;
    validate_required("post_code", &property.post_code)?;
    validate_required("country", &property.country)?;
    validate_cost(property.cost_per_night)?;

    let counts = [
        ("parking_spaces", property.parking_spaces),
        ("number_of_bathrooms", property.number_of_bathrooms),
        ("number_of_bedrooms", property.number_of_bedrooms),
    ];
    for (field, value) in counts {
        if value < 0 {
            return Err(AppError::out_of_range(format!(
                "{field} cannot be negative, got {value}"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl PropertyRepository for PropertyRepositoryImpl {
    async fn search(
        &self,
        options: &SearchOptions,
        limit: SearchLimit,
    ) -> AppResult<Vec<PropertyListing>> {
        if let Some(rating) = options.minimum_rating {
            validate_minimum_rating(rating).map_err(|e| rejected("get_all_properties", e))?;
        }

        observe(
            "get_all_properties",
            tables::PROPERTIES,
            self.db.get_all_properties(options, limit),
        )
        .await
    }

    async fn create(&self, property: &NewProperty) -> AppResult<Property> {
        validate_new_property(property).map_err(|e| rejected("add_property", e))?;
        observe("add_property", tables::PROPERTIES, self.db.add_property(property)).await
    }

    async fn add_review(&self, review: &NewPropertyReview) -> AppResult<PropertyReview> {
        validate_rating(review.rating).map_err(|e| rejected("add_property_review", e))?;
        observe(
            "add_property_review",
            tables::PROPERTY_REVIEWS,
            self.db.add_property_review(review),
        )
        .await
    }
}
