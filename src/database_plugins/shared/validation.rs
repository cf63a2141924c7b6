// ABOUTME: Input validation logic shared across database implementations.
// ABOUTME: Checks emails, required text, ratings, stay dates and nightly costs before SQL runs.

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Input validation logic shared across database implementations
//!
//! Repositories call these before handing records to a backend, and the
//! backends use [`cost_to_minor_units`] to turn a decimal nightly price into
//! the integer column value.

use crate::errors::{AppError, AppResult, DatabaseError};
use chrono::NaiveDate;
use lightbnb_core::constants::reviews::{MAX_RATING, MIN_RATING};
use lightbnb_core::currency::to_minor_units;
use rust_decimal::Decimal;

/// Validate email format
///
/// Performs basic shape validation: a non-empty local part, an `@`, and a
/// domain part containing a dot.
///
/// # Errors
/// * Returns `AppError::InvalidInput` if invalid
///
/// # Examples
/// ```
/// # use lightbnb::database_plugins::shared::validation::validate_email;
/// assert!(validate_email("user@example.com").is_ok());
/// assert!(validate_email("invalid").is_err());
/// assert!(validate_email("@example.com").is_err());
/// ```
pub fn validate_email(email: &str) -> AppResult<()> {
    let Some((local, domain)) = email.trim().split_once('@') else {
        return Err(AppError::invalid_input("Invalid email format"));
    };
    if local.is_empty() || domain.starts_with('.') || !domain.contains('.') {
        return Err(AppError::invalid_input("Invalid email format"));
    }
    Ok(())
}

/// Validate that a required text field is present
///
/// # Errors
/// * Returns `AppError::MissingRequiredField` if the value is blank
pub fn validate_required(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::missing_field(field));
    }
    Ok(())
}

/// Validate a review rating
///
/// # Errors
/// * Returns `AppError::ValueOutOfRange` outside `1..=5`
pub fn validate_rating(rating: i16) -> AppResult<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::out_of_range(format!(
            "Rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
        )));
    }
    Ok(())
}

/// Validate a search's minimum average rating
///
/// # Errors
/// * Returns `AppError::InvalidInput` for NaN or infinite values
pub fn validate_minimum_rating(rating: f64) -> AppResult<()> {
    if !rating.is_finite() {
        return Err(AppError::invalid_input(format!(
            "Minimum rating must be a finite number, got {rating}"
        )));
    }
    Ok(())
}

/// Validate that a stay does not end before it starts
///
/// # Errors
/// * Returns `AppError::InvalidInput` when `end_date` precedes `start_date`
pub fn validate_date_range(start_date: NaiveDate, end_date: NaiveDate) -> AppResult<()> {
    if end_date < start_date {
        return Err(AppError::invalid_input(format!(
            "Reservation ends ({end_date}) before it starts ({start_date})"
        )));
    }
    Ok(())
}

/// Validate a nightly price before storage
///
/// # Errors
/// * Returns `AppError::ValueOutOfRange` for negative prices
pub fn validate_cost(cost_per_night: Decimal) -> AppResult<()> {
    if cost_per_night.is_sign_negative() && !cost_per_night.is_zero() {
        return Err(AppError::out_of_range(format!(
            "Nightly cost cannot be negative, got {cost_per_night}"
        )));
    }
    Ok(())
}

/// Convert a decimal nightly price to the integer minor-unit column value
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if the amount does not fit the column
pub fn cost_to_minor_units(cost_per_night: Decimal) -> Result<i32, DatabaseError> {
    i32::try_from(to_minor_units(cost_per_night)).map_err(|_| DatabaseError::InvalidData {
        field: "cost_per_night".to_owned(),
        reason: format!("{cost_per_night} exceeds the storable range"),
    })
}
