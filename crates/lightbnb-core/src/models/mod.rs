// ABOUTME: Domain records for the LightBnB data access layer
// ABOUTME: Re-exports users, properties, reservations and reviews
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Each persisted table has a record type returned by reads and a `New*`
//! type accepted by inserts. Identifiers are the database's `SERIAL` keys.
//!
//! - `User`: a guest or property owner
//! - `Property` / `PropertyListing`: a rentable property, optionally with its average rating
//! - `Reservation` / `ReservationSummary`: a booking, optionally joined with property details
//! - `PropertyReview`: a guest's rating of a stay

mod property;
mod reservation;
mod review;
mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{NewReservation, Reservation, ReservationSummary};
pub use review::{NewPropertyReview, PropertyReview};
pub use user::{NewUser, User};
