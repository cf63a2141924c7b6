// ABOUTME: Core types and constants for the LightBnB data access layer
// ABOUTME: Foundation crate with error handling, domain records, currency conversion and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LightBnB Core
//!
//! Foundation crate providing shared types and constants for the LightBnB
//! data access layer. It holds nothing that talks to a database, so it
//! changes rarely and keeps incremental builds of the main crate cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **constants**: Query defaults, service names and table names
//! - **currency**: Major/minor currency unit conversion
//! - **models**: Users, properties, reservations and reviews

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Conversion between major currency units and integer minor units
pub mod currency;

/// Domain records persisted by the data access layer
pub mod models;
