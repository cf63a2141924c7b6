// ABOUTME: SQLite database implementation for local development and tests
// ABOUTME: Owns a sqlx SqlitePool and implements DatabaseProvider on top of the shared SQL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `SQLite` database implementation
//!
//! In-memory databases are per connection in `SQLite`, so the pool is pinned
//! to a single long-lived connection whenever the URL names `:memory:`.

use super::shared::{builders, mappers, queries, validation};
use super::DatabaseProvider;
use crate::config::PoolConfig;
use crate::database::search::{PropertySearchQueryBuilder, SearchLimit, SearchOptions};
use crate::errors::DatabaseError;
use async_trait::async_trait;
use lightbnb_core::models::{
    NewProperty, NewPropertyReview, NewReservation, NewUser, Property, PropertyListing,
    PropertyReview, Reservation, ReservationSummary, User,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

/// `SQLite` database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: Pool<Sqlite>,
}

impl SqliteDatabase {
    /// Get a reference to the underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str, pool_config: &PoolConfig) -> Result<Self, DatabaseError> {
        let is_memory = database_url.contains(":memory:");
        let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(pool_config.acquire_timeout());
        pool_options = if is_memory {
            pool_options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options
                .max_connections(pool_config.max_connections)
                .min_connections(pool_config.min_connections)
        };

        let pool = pool_options.connect_with(connect_options).await?;
        info!(in_memory = is_memory, "SQLite connection pool ready");
        Ok(Self { pool })
    }

    async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS properties (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                owner_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                title TEXT NOT NULL,
                description TEXT,
                thumbnail_photo_url TEXT,
                cover_photo_url TEXT,
                cost_per_night INTEGER NOT NULL DEFAULT 0,
                parking_spaces INTEGER NOT NULL DEFAULT 0,
                number_of_bathrooms INTEGER NOT NULL DEFAULT 0,
                number_of_bedrooms INTEGER NOT NULL DEFAULT 0,
                country TEXT NOT NULL,
                street TEXT NOT NULL,
                city TEXT NOT NULL,
                province TEXT NOT NULL,
                post_code TEXT NOT NULL,
                active BOOLEAN NOT NULL DEFAULT 1
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS reservations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                start_date DATE NOT NULL,
                end_date DATE NOT NULL,
                property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS property_reviews (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                guest_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                property_id INTEGER NOT NULL REFERENCES properties(id) ON DELETE CASCADE,
                reservation_id INTEGER NOT NULL REFERENCES reservations(id) ON DELETE CASCADE,
                rating SMALLINT NOT NULL CHECK (rating BETWEEN 1 AND 5),
                message TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_properties_owner ON properties(owner_id)")
            .execute(&self.pool)
            .await?;
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_reviews_property ON property_reviews(property_id)",
        )
        .execute(&self.pool)
        .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reservations_guest ON reservations(guest_id)")
            .execute(&self.pool)
            .await?;

        debug!("SQLite schema is up to date");
        Ok(())
    }

    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let row = sqlx::query(queries::SELECT_USER_BY_EMAIL)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| mappers::parse_user_from_row(&r)).transpose()
    }

    async fn get_user_with_id(&self, user_id: i32) -> Result<Option<User>, DatabaseError> {
        let row = sqlx::query(queries::SELECT_USER_BY_ID)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| mappers::parse_user_from_row(&r)).transpose()
    }

    async fn add_user(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let row = sqlx::query(queries::INSERT_USER)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password)
            .fetch_one(&self.pool)
            .await?;
        mappers::parse_user_from_row(&row)
    }

    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: SearchLimit,
    ) -> Result<Vec<ReservationSummary>, DatabaseError> {
        let rows = sqlx::query(queries::SELECT_RESERVATIONS_FOR_GUEST)
            .bind(guest_id)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(mappers::parse_reservation_summary_from_row)
            .collect()
    }

    async fn add_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, DatabaseError> {
        let row = sqlx::query(queries::INSERT_RESERVATION)
            .bind(reservation.start_date)
            .bind(reservation.end_date)
            .bind(reservation.property_id)
            .bind(reservation.guest_id)
            .fetch_one(&self.pool)
            .await?;
        mappers::parse_reservation_from_row(&row)
    }

    async fn get_all_properties(
        &self,
        options: &SearchOptions,
        limit: SearchLimit,
    ) -> Result<Vec<PropertyListing>, DatabaseError> {
        let (sql, params) = PropertySearchQueryBuilder::build(options, limit).into_parts();
        debug!(
            sql = %sql,
            param_count = params.len(),
            limit = %limit,
            "Executing property search"
        );

        let rows = builders::bind_params(sqlx::query(&sql), &params)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(mappers::parse_property_listing_from_row)
            .collect()
    }

    async fn add_property(&self, property: &NewProperty) -> Result<Property, DatabaseError> {
        let cost_per_night = validation::cost_to_minor_units(property.cost_per_night)?;
        let row = sqlx::query(queries::INSERT_PROPERTY)
            .bind(property.owner_id)
            .bind(&property.title)
            .bind(&property.description)
            .bind(&property.thumbnail_photo_url)
            .bind(&property.cover_photo_url)
            .bind(cost_per_night)
            .bind(&property.street)
            .bind(&property.city)
            .bind(&property.province)
            .bind(&property.post_code)
            .bind(&property.country)
            .bind(property.parking_spaces)
            .bind(property.number_of_bathrooms)
            .bind(property.number_of_bedrooms)
            .fetch_one(&self.pool)
            .await?;
        mappers::parse_property_from_row(&row)
    }

    async fn add_property_review(
        &self,
        review: &NewPropertyReview,
    ) -> Result<PropertyReview, DatabaseError> {
        let row = sqlx::query(queries::INSERT_PROPERTY_REVIEW)
            .bind(review.guest_id)
            .bind(review.property_id)
            .bind(review.reservation_id)
            .bind(review.rating)
            .bind(&review.message)
            .fetch_one(&self.pool)
            .await?;
        mappers::parse_review_from_row(&row)
    }
}
