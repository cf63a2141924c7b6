// ABOUTME: SQL statements shared by the PostgreSQL and SQLite backends
// ABOUTME: Both dialects accept $N placeholders and RETURNING, so the text is identical
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Single user by email
pub const SELECT_USER_BY_EMAIL: &str =
    "SELECT id, name, email, password FROM users WHERE email = $1";

/// Single user by id
pub const SELECT_USER_BY_ID: &str = "SELECT id, name, email, password FROM users WHERE id = $1";

/// Register a user
pub const INSERT_USER: &str = r"
    INSERT INTO users (name, email, password)
    VALUES ($1, $2, $3)
    RETURNING id, name, email, password
";

/// A guest's reservations with property details and average rating
///
/// LEFT JOIN keeps reservations of properties that have no reviews yet.
pub const SELECT_RESERVATIONS_FOR_GUEST: &str = r"
    SELECT reservations.id, properties.title, properties.thumbnail_photo_url,
           properties.cover_photo_url, properties.number_of_bedrooms,
           properties.number_of_bathrooms, properties.parking_spaces,
           properties.cost_per_night, reservations.start_date, reservations.end_date,
           CAST(AVG(property_reviews.rating) AS DOUBLE PRECISION) AS average_rating
    FROM reservations
    JOIN properties ON reservations.property_id = properties.id
    LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
    WHERE reservations.guest_id = $1
    GROUP BY properties.id, reservations.id
    ORDER BY reservations.start_date
    LIMIT $2
";

/// Book a stay
pub const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (start_date, end_date, property_id, guest_id)
    VALUES ($1, $2, $3, $4)
    RETURNING id, start_date, end_date, property_id, guest_id
";

/// List a property; `$6` is the nightly cost in minor units
pub const INSERT_PROPERTY: &str = r"
    INSERT INTO properties (
        owner_id, title, description, thumbnail_photo_url, cover_photo_url, cost_per_night,
        street, city, province, post_code, country,
        parking_spaces, number_of_bathrooms, number_of_bedrooms
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
    RETURNING id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
              cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
              country, street, city, province, post_code, active
";

/// Record a review
pub const INSERT_PROPERTY_REVIEW: &str = r"
    INSERT INTO property_reviews (guest_id, property_id, reservation_id, rating, message)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, guest_id, property_id, reservation_id, rating, message
";
