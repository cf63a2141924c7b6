// ABOUTME: Configuration module for the LightBnB data access layer
// ABOUTME: Environment-driven settings for the database connection and pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! All settings come from environment variables with sensible defaults; there
//! is no configuration file. Logging settings live with the logging setup in
//! [`crate::logging::LoggingConfig`].

/// Database URL, migration flag and pool configuration
pub mod database;

pub use database::{DatabaseConfig, DatabaseUrl, PoolConfig};
