// ABOUTME: Data access layer entry point: property search and repositories
// ABOUTME: Re-exports the search builder types and repository traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! Query construction lives in [`search`]; validated, logged access to the
//! stored records lives in [`repositories`]. Both sit on top of the backend
//! chosen by [`crate::database_plugins::factory::Database`].

/// Property search query builder
pub mod search;

/// Repository traits and their implementations
pub mod repositories;

pub use repositories::{
    PropertyRepository, PropertyRepositoryImpl, ReservationRepository,
    ReservationRepositoryImpl, UserRepository, UserRepositoryImpl,
};
pub use search::{PropertySearchQueryBuilder, QueryPlan, SearchLimit, SearchOptions, SqlParam};
