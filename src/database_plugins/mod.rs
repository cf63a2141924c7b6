// ABOUTME: Database abstraction layer for the LightBnB data access layer
// ABOUTME: Plugin architecture with SQLite and PostgreSQL backends behind one trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PoolConfig;
use crate::database::search::{SearchLimit, SearchOptions};
use crate::errors::DatabaseError;
use async_trait::async_trait;
use lightbnb_core::models::{
    NewProperty, NewPropertyReview, NewReservation, NewUser, Property, PropertyListing,
    PropertyReview, Reservation, ReservationSummary, User,
};

pub mod factory;
/// Helpers shared by every backend (row mapping, binding, SQL text, validation)
pub mod shared;
pub mod sqlite;

#[cfg(feature = "postgresql")]
pub mod postgres;

/// Core database abstraction trait
///
/// Every backend implements this trait so the repositories never see which
/// database they talk to. Reads that find nothing return `Ok(None)` or an
/// empty `Vec`; only genuine failures return `Err`.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Connect to the database and build the connection pool
    async fn new(database_url: &str, pool_config: &PoolConfig) -> Result<Self, DatabaseError>
    where
        Self: Sized;

    /// Create any missing tables
    async fn migrate(&self) -> Result<(), DatabaseError>;

    // ================================
    // Users
    // ================================

    /// Get a single user by email address
    async fn get_user_with_email(&self, email: &str) -> Result<Option<User>, DatabaseError>;

    /// Get a single user by id
    async fn get_user_with_id(&self, user_id: i32) -> Result<Option<User>, DatabaseError>;

    /// Insert a user and return the stored row
    async fn add_user(&self, user: &NewUser) -> Result<User, DatabaseError>;

    // ================================
    // Reservations
    // ================================

    /// Reservations made by a guest, earliest start date first
    async fn get_all_reservations(
        &self,
        guest_id: i32,
        limit: SearchLimit,
    ) -> Result<Vec<ReservationSummary>, DatabaseError>;

    /// Insert a reservation and return the stored row
    async fn add_reservation(
        &self,
        reservation: &NewReservation,
    ) -> Result<Reservation, DatabaseError>;

    // ================================
    // Properties
    // ================================

    /// Properties matching `options`, cheapest first
    async fn get_all_properties(
        &self,
        options: &SearchOptions,
        limit: SearchLimit,
    ) -> Result<Vec<PropertyListing>, DatabaseError>;

    /// Insert a property and return the stored row
    async fn add_property(&self, property: &NewProperty) -> Result<Property, DatabaseError>;

    /// Insert a review and return the stored row
    async fn add_property_review(
        &self,
        review: &NewPropertyReview,
    ) -> Result<PropertyReview, DatabaseError>;
}
