// ABOUTME: Property review records
// ABOUTME: Ratings feed the average shown in property search and reservation listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A guest's review of a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyReview {
    /// Primary key
    pub id: i32,
    /// Reviewing guest
    pub guest_id: i32,
    /// Reviewed property
    pub property_id: i32,
    /// Reservation the review is about
    pub reservation_id: i32,
    /// Star rating, 1 to 5
    pub rating: i16,
    /// Free-text comment
    pub message: Option<String>,
}

/// Fields required to record a review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPropertyReview {
    /// Reviewing guest
    pub guest_id: i32,
    /// Reviewed property
    pub property_id: i32,
    /// Reservation the review is about
    pub reservation_id: i32,
    /// Star rating, 1 to 5
    pub rating: i16,
    /// Free-text comment
    #[serde(default)]
    pub message: Option<String>,
}
