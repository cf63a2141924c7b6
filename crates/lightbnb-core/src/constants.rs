// ABOUTME: Application constants for the LightBnB data access layer
// ABOUTME: Query defaults, currency scale, table names and service identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain so that call sites read as
//! `limits::DEFAULT_QUERY_LIMIT` rather than a bare number.

/// Result limits applied to list queries
pub mod limits {
    /// Row limit used when the caller does not supply one
    pub const DEFAULT_QUERY_LIMIT: u32 = 10;
}

/// Connection pool defaults
pub mod database {
    /// Connection pool maximum size
    pub const POOL_MAX_SIZE: u32 = 10;
    /// Connection pool minimum size
    pub const POOL_MIN_SIZE: u32 = 1;
    /// Seconds to wait for a free connection before failing
    pub const ACQUIRE_TIMEOUT_SECS: u64 = 30;
    /// Connection string used when `DATABASE_URL` is unset
    pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
}

/// Currency representation
pub mod currency {
    /// Number of minor units (cents) in one major unit
    pub const MINOR_UNITS_PER_MAJOR: i64 = 100;
}

/// Review constraints
pub mod reviews {
    /// Lowest accepted star rating
    pub const MIN_RATING: i16 = 1;
    /// Highest accepted star rating
    pub const MAX_RATING: i16 = 5;
}

/// Table names of the persisted schema
pub mod tables {
    /// Registered users (guests and owners)
    pub const USERS: &str = "users";
    /// Rentable properties
    pub const PROPERTIES: &str = "properties";
    /// Guest reviews of properties
    pub const PROPERTY_REVIEWS: &str = "property_reviews";
    /// Guest bookings
    pub const RESERVATIONS: &str = "reservations";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the logging setup
    pub const LIGHTBNB: &str = "lightbnb";
}
