// ABOUTME: Repository traits for users, properties and reservations
// ABOUTME: Validated, logged, AppResult-returning access over an injected Database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Repository layer
//!
//! Each trait groups the operations of one aggregate. Implementations hold a
//! cloned [`Database`](crate::database_plugins::factory::Database) handle,
//! validate input before any SQL runs, and convert storage failures into
//! [`AppError`].

mod property_repository;
mod reservation_repository;
mod user_repository;

pub use property_repository::PropertyRepositoryImpl;
pub use reservation_repository::ReservationRepositoryImpl;
pub use user_repository::UserRepositoryImpl;

use crate::database::search::{SearchLimit, SearchOptions};
use crate::errors::{AppError, AppResult, DatabaseError};
use crate::logging::AppLogger;
use async_trait::async_trait;
use lightbnb_core::models::{
    NewProperty, NewPropertyReview, NewReservation, NewUser, Property, PropertyListing,
    PropertyReview, Reservation, ReservationSummary, User,
};
use std::future::Future;
use std::time::Instant;
use tracing::error;

/// User account access
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look a user up by email; `Ok(None)` when no account matches
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Look a user up by id; `Ok(None)` when no account matches
    async fn get_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Register a new user
    async fn create(&self, user: &NewUser) -> AppResult<User>;
}

/// Property listing access
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search properties, cheapest first
    async fn search(
        &self,
        options: &SearchOptions,
        limit: SearchLimit,
    ) -> AppResult<Vec<PropertyListing>>;

    /// List a new property
    async fn create(&self, property: &NewProperty) -> AppResult<Property>;

    /// Record a guest review of a property
    async fn add_review(&self, review: &NewPropertyReview) -> AppResult<PropertyReview>;
}

/// Reservation access
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// A guest's reservations, earliest start date first
    async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: SearchLimit,
    ) -> AppResult<Vec<ReservationSummary>>;

    /// Book a stay
    async fn create(&self, reservation: &NewReservation) -> AppResult<Reservation>;
}

/// Run one database call, logging its timing and any failure
async fn observe<T, F>(operation: &'static str, table: &'static str, call: F) -> AppResult<T>
where
    F: Future<Output = Result<T, DatabaseError>> + Send,
{
    let start = Instant::now();
    let result = call.await;
    let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation(operation, table, result.is_ok(), duration_ms);

    result.map_err(|e| {
        error!(
            db.operation = operation,
            db.table = table,
            error = %e,
            "Database operation failed"
        );
        AppError::from(e)
    })
}

/// Log a rejected input before returning it to the caller
fn rejected(operation: &'static str, err: AppError) -> AppError {
    error!(db.operation = operation, error = %err, "Input validation failed");
    err
}
