// ABOUTME: Reservation records and the per-guest reservation summary
// ABOUTME: Summaries join the reserved property and its average rating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A booking as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Primary key
    pub id: i32,
    /// First night
    pub start_date: NaiveDate,
    /// Departure day
    pub end_date: NaiveDate,
    /// Reserved property
    pub property_id: i32,
    /// Booking guest
    pub guest_id: i32,
}

/// Fields required to book a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    /// First night
    pub start_date: NaiveDate,
    /// Departure day
    pub end_date: NaiveDate,
    /// Reserved property
    pub property_id: i32,
    /// Booking guest
    pub guest_id: i32,
}

/// One row of a guest's reservation history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationSummary {
    /// Reservation primary key
    pub id: i32,
    /// Title of the reserved property
    pub title: String,
    /// Small photo URL
    pub thumbnail_photo_url: Option<String>,
    /// Large photo URL
    pub cover_photo_url: Option<String>,
    /// Bedroom count
    pub number_of_bedrooms: i32,
    /// Bathroom count
    pub number_of_bathrooms: i32,
    /// Parking spots included
    pub parking_spaces: i32,
    /// Nightly cost in minor currency units
    pub cost_per_night: i32,
    /// First night
    pub start_date: NaiveDate,
    /// Departure day
    pub end_date: NaiveDate,
    /// Mean rating of the property
    pub average_rating: Option<f64>,
}
