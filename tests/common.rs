// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides an in-memory database and seed helpers for users, properties and reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `lightbnb`

use anyhow::Result;
use chrono::NaiveDate;
use lightbnb::{
    config::PoolConfig,
    database_plugins::{factory::Database, DatabaseProvider},
    models::{
        NewProperty, NewPropertyReview, NewReservation, NewUser, Property, Reservation, User,
    },
};
use rust_decimal::Decimal;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Standard test database setup: a fresh, migrated in-memory `SQLite` database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new("sqlite::memory:", &PoolConfig::default()).await?;
    database.migrate().await?;
    Ok(database)
}

/// Register a user with a derived email address
pub async fn create_user(db: &Database, name: &str) -> Result<User> {
    let user = db
        .add_user(&NewUser {
            name: name.to_owned(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            password: "$2a$10$FB/BOAVhpuLvpOREQVmvmezD4ED/.JBIDRh70tGevYzYzQgFId2u.".to_owned(),
        })
        .await?;
    Ok(user)
}

/// A listing in `city` costing `cost` major units per night
pub fn new_property(owner_id: i32, title: &str, city: &str, cost: Decimal) -> NewProperty {
    NewProperty {
        owner_id,
        title: title.to_owned(),
        description: Some("description".to_owned()),
        thumbnail_photo_url: Some(
            "https://images.pexels.com/photos/2086676/pexels-photo-2086676.jpeg".to_owned(),
        ),
        cover_photo_url: None,
        cost_per_night: cost,
        street: "536 Namsub Highway".to_owned(),
        city: city.to_owned(),
        province: "Quebec".to_owned(),
        post_code: "28142".to_owned(),
        country: "Canada".to_owned(),
        parking_spaces: 2,
        number_of_bathrooms: 1,
        number_of_bedrooms: 3,
    }
}

/// Store a property
pub async fn create_property(
    db: &Database,
    owner_id: i32,
    title: &str,
    city: &str,
    cost: Decimal,
) -> Result<Property> {
    Ok(db
        .add_property(&new_property(owner_id, title, city, cost))
        .await?)
}

/// Midsummer stay used by seed reservations, shifted by `offset_days`
pub fn stay(offset_days: u64) -> (NaiveDate, NaiveDate) {
    let start = NaiveDate::from_ymd_opt(2026, 7, 1)
        .and_then(|d| d.checked_add_days(chrono::Days::new(offset_days)))
        .unwrap_or_default();
    let end = start
        .checked_add_days(chrono::Days::new(3))
        .unwrap_or_default();
    (start, end)
}

/// Book a stay for `guest_id` and review it with `rating`
pub async fn review_property(
    db: &Database,
    guest_id: i32,
    property_id: i32,
    rating: i16,
) -> Result<Reservation> {
    let (start_date, end_date) = stay(u64::from(rating.unsigned_abs()));
    let reservation = db
        .add_reservation(&NewReservation {
            start_date,
            end_date,
            property_id,
            guest_id,
        })
        .await?;
    db.add_property_review(&NewPropertyReview {
        guest_id,
        property_id,
        reservation_id: reservation.id,
        rating,
        message: Some("messages".to_owned()),
    })
    .await?;
    Ok(reservation)
}
