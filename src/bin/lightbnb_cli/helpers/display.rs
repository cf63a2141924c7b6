// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for lightbnb-cli
// ABOUTME: Prints records as aligned text or pretty JSON

use lightbnb::currency::from_minor_units;
use lightbnb::errors::AppResult;
use lightbnb::models::{
    Property, PropertyListing, PropertyReview, Reservation, ReservationSummary, User,
};
use serde::Serialize;

/// Where command results go and in which shape
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    /// Text output unless `json` is set
    pub const fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as JSON, or hand it to `text` for the human format
    fn emit<T: Serialize + ?Sized>(self, value: &T, text: impl FnOnce(&T)) -> AppResult<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            text(value);
        }
        Ok(())
    }

    /// Search results, one line per property
    pub fn listings(self, listings: &[PropertyListing]) -> AppResult<()> {
        self.emit(listings, |listings| {
            if listings.is_empty() {
                println!("No properties matched.");
                return;
            }
            println!(
                "{:>5}  {:<32} {:<18} {:>10}  {:>6}",
                "ID", "TITLE", "CITY", "PER NIGHT", "RATING"
            );
            println!("{}", "-".repeat(78));
            for listing in listings {
                let property = &listing.property;
                println!(
                    "{:>5}  {:<32} {:<18} {:>10}  {:>6}",
                    property.id,
                    truncate(&property.title, 32),
                    truncate(&property.city, 18),
                    format!("${}", from_minor_units(i64::from(property.cost_per_night))),
                    listing
                        .average_rating
                        .map_or_else(|| "-".to_owned(), |r| format!("{r:.2}")),
                );
            }
        })
    }

    /// A single stored property
    pub fn property(self, property: &Property) -> AppResult<()> {
        self.emit(property, |property| {
            println!("\nProperty #{} listed", property.id);
            println!("{}", "=".repeat(50));
            println!("   Title: {}", property.title);
            println!(
                "   Address: {}, {}, {} {}, {}",
                property.street, property.city, property.province, property.post_code, property.country
            );
            println!(
                "   Per night: ${}",
                from_minor_units(i64::from(property.cost_per_night))
            );
            println!(
                "   Bedrooms: {}  Bathrooms: {}  Parking: {}",
                property.number_of_bedrooms, property.number_of_bathrooms, property.parking_spaces
            );
        })
    }

    /// A single user; the password never leaves the database layer
    pub fn user(self, user: &User) -> AppResult<()> {
        self.emit(user, |user| {
            println!("User #{}", user.id);
            println!("   Name: {}", user.name);
            println!("   Email: {}", user.email);
        })
    }

    /// A guest's reservations
    pub fn reservations(self, reservations: &[ReservationSummary]) -> AppResult<()> {
        self.emit(reservations, |reservations| {
            if reservations.is_empty() {
                println!("No reservations found.");
                return;
            }
            println!(
                "{:>5}  {:<32} {:<10} {:<10} {:>10}",
                "ID", "PROPERTY", "FROM", "TO", "PER NIGHT"
            );
            println!("{}", "-".repeat(74));
            for reservation in reservations {
                println!(
                    "{:>5}  {:<32} {:<10} {:<10} {:>10}",
                    reservation.id,
                    truncate(&reservation.title, 32),
                    reservation.start_date,
                    reservation.end_date,
                    format!(
                        "${}",
                        from_minor_units(i64::from(reservation.cost_per_night))
                    ),
                );
            }
        })
    }

    /// A newly booked stay
    pub fn reservation(self, reservation: &Reservation) -> AppResult<()> {
        self.emit(reservation, |reservation| {
            println!(
                "Reservation #{} booked: property {} from {} to {}",
                reservation.id, reservation.property_id, reservation.start_date, reservation.end_date
            );
        })
    }

    /// A newly recorded review
    pub fn review(self, review: &PropertyReview) -> AppResult<()> {
        self.emit(review, |review| {
            println!(
                "Review #{} recorded: {} star(s) for property {}",
                review.id, review.rating, review.property_id
            );
        })
    }
}

/// Cut `text` to at most `width` characters, marking the cut with `~`
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}
