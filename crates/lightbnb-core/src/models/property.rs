// ABOUTME: Property records and search listings
// ABOUTME: Nightly cost is stored in minor units; NewProperty accepts major units
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A rentable property as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Primary key
    pub id: i32,
    /// Owning user
    pub owner_id: i32,
    /// Listing title
    pub title: String,
    /// Listing description
    pub description: Option<String>,
    /// Small photo URL
    pub thumbnail_photo_url: Option<String>,
    /// Large photo URL
    pub cover_photo_url: Option<String>,
    /// Nightly cost in minor currency units (cents)
    pub cost_per_night: i32,
    /// Parking spots included
    pub parking_spaces: i32,
    /// Bathroom count
    pub number_of_bathrooms: i32,
    /// Bedroom count
    pub number_of_bedrooms: i32,
    /// Country
    pub country: String,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// Province or state
    pub province: String,
    /// Postal code
    pub post_code: String,
    /// Whether the listing is bookable
    pub active: bool,
}

/// A property row returned by search, with the average of its review ratings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    /// The property itself
    #[serde(flatten)]
    pub property: Property,
    /// Mean rating over all reviews of the property
    pub average_rating: Option<f64>,
}

/// Fields required to list a new property
///
/// `cost_per_night` is in major units (dollars) as entered by an owner and is
/// converted to minor units before it is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    /// Owning user
    pub owner_id: i32,
    /// Listing title
    pub title: String,
    /// Listing description
    #[serde(default)]
    pub description: Option<String>,
    /// Small photo URL
    #[serde(default)]
    pub thumbnail_photo_url: Option<String>,
    /// Large photo URL
    #[serde(default)]
    pub cover_photo_url: Option<String>,
    /// Nightly cost in major currency units
    pub cost_per_night: Decimal,
    /// Street address
    pub street: String,
    /// City
    pub city: String,
    /// Province or state
    pub province: String,
    /// Postal code
    pub post_code: String,
    /// Country
    pub country: String,
    /// Parking spots included
    #[serde(default)]
    pub parking_spaces: i32,
    /// Bathroom count
    #[serde(default)]
    pub number_of_bathrooms: i32,
    /// Bedroom count
    #[serde(default)]
    pub number_of_bedrooms: i32,
}
