// ABOUTME: Shared database logic for PostgreSQL and SQLite implementations
// ABOUTME: Row mapping, parameter binding, SQL text and validation used by both backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Input validation logic (email, required text, ratings, dates, prices)
pub mod validation;

/// Model ↔ SQL row conversion helpers (row parsing, struct construction)
pub mod mappers;

/// Query parameter binding helpers for `SqlParam` lists
pub mod builders;

/// SQL statements that are identical on every backend
pub mod queries;
