// ABOUTME: Model to SQL row conversion helpers for database operations.
// ABOUTME: Provides generic row parsing functions for PostgreSQL and SQLite backends.

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! SQL row to model conversion helpers
//!
//! Every parser is generic over `sqlx::Row`, so the `PostgreSQL` and `SQLite`
//! backends decode rows through the same code. Columns are read by name,
//! which keeps `SELECT properties.*` independent of column order.

use crate::errors::DatabaseError;
use chrono::NaiveDate;
use lightbnb_core::models::{
    Property, PropertyListing, PropertyReview, Reservation, ReservationSummary, User,
};
use sqlx::{ColumnIndex, Decode, Row, Type};

/// Read one named column, reporting the column name on failure
fn column<'r, R, T>(row: &'r R, name: &str) -> Result<T, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    T: Decode<'r, R::Database> + Type<R::Database>,
{
    row.try_get(name).map_err(|e| DatabaseError::InvalidData {
        field: name.to_owned(),
        reason: e.to_string(),
    })
}

/// Parse User from database row (database-agnostic)
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if a column is missing or has an unexpected type
pub fn parse_user_from_row<R>(row: &R) -> Result<User, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    i32: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    String: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
{
    Ok(User {
        id: column(row, "id")?,
        name: column(row, "name")?,
        email: column(row, "email")?,
        password: column(row, "password")?,
    })
}

/// Parse Property from database row (database-agnostic)
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if a column is missing or has an unexpected type
pub fn parse_property_from_row<R>(row: &R) -> Result<Property, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    i32: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    bool: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    String: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    Option<String>: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
{
    Ok(Property {
        id: column(row, "id")?,
        owner_id: column(row, "owner_id")?,
        title: column(row, "title")?,
        description: column(row, "description")?,
        thumbnail_photo_url: column(row, "thumbnail_photo_url")?,
        cover_photo_url: column(row, "cover_photo_url")?,
        cost_per_night: column(row, "cost_per_night")?,
        parking_spaces: column(row, "parking_spaces")?,
        number_of_bathrooms: column(row, "number_of_bathrooms")?,
        number_of_bedrooms: column(row, "number_of_bedrooms")?,
        country: column(row, "country")?,
        street: column(row, "street")?,
        city: column(row, "city")?,
        province: column(row, "province")?,
        post_code: column(row, "post_code")?,
        active: column(row, "active")?,
    })
}

/// Parse a search result row: every property column plus `average_rating`
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if a column is missing or has an unexpected type
pub fn parse_property_listing_from_row<R>(row: &R) -> Result<PropertyListing, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    i32: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    bool: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    String: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    Option<String>: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    Option<f64>: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
{
    Ok(PropertyListing {
        property: parse_property_from_row(row)?,
        average_rating: column(row, "average_rating")?,
    })
}

/// Parse Reservation from database row (database-agnostic)
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if a column is missing or has an unexpected type
pub fn parse_reservation_from_row<R>(row: &R) -> Result<Reservation, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    i32: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    NaiveDate: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
{
    Ok(Reservation {
        id: column(row, "id")?,
        start_date: column(row, "start_date")?,
        end_date: column(row, "end_date")?,
        property_id: column(row, "property_id")?,
        guest_id: column(row, "guest_id")?,
    })
}

/// Parse a guest reservation joined with its property
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if a column is missing or has an unexpected type
pub fn parse_reservation_summary_from_row<R>(row: &R) -> Result<ReservationSummary, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    i32: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    String: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    Option<String>: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    Option<f64>: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    NaiveDate: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
{
    Ok(ReservationSummary {
        id: column(row, "id")?,
        title: column(row, "title")?,
        thumbnail_photo_url: column(row, "thumbnail_photo_url")?,
        cover_photo_url: column(row, "cover_photo_url")?,
        number_of_bedrooms: column(row, "number_of_bedrooms")?,
        number_of_bathrooms: column(row, "number_of_bathrooms")?,
        parking_spaces: column(row, "parking_spaces")?,
        cost_per_night: column(row, "cost_per_night")?,
        start_date: column(row, "start_date")?,
        end_date: column(row, "end_date")?,
        average_rating: column(row, "average_rating")?,
    })
}

/// Parse PropertyReview from database row (database-agnostic)
///
/// # Errors
/// * Returns `DatabaseError::InvalidData` if a column is missing or has an unexpected type
pub fn parse_review_from_row<R>(row: &R) -> Result<PropertyReview, DatabaseError>
where
    R: Row,
    for<'a> &'a str: ColumnIndex<R>,
    i16: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    i32: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
    Option<String>: for<'a> Type<R::Database> + for<'a> Decode<'a, R::Database>,
{
    Ok(PropertyReview {
        id: column(row, "id")?,
        guest_id: column(row, "guest_id")?,
        property_id: column(row, "property_id")?,
        reservation_id: column(row, "reservation_id")?,
        rating: column(row, "rating")?,
        message: column(row, "message")?,
    })
}
