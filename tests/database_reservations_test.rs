// ABOUTME: Integration tests for reservation storage and guest reservation listings
// ABOUTME: Covers ordering, default and explicit limits, unreviewed properties and date checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use lightbnb::database::{ReservationRepository, ReservationRepositoryImpl, SearchLimit};
use lightbnb::database_plugins::DatabaseProvider;
use lightbnb::errors::ErrorCode;
use lightbnb::models::NewReservation;
use rust_decimal::Decimal;

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

#[tokio::test]
async fn test_add_reservation_round_trips_dates() {
    let db = common::create_test_database().await.unwrap();
    let guest = common::create_user(&db, "Guest").await.unwrap();
    let property = common::create_property(&db, guest.id, "Loft", "Calgary", Decimal::new(120, 0))
        .await
        .unwrap();

    let reservation = db
        .add_reservation(&NewReservation {
            start_date: date(9, 1),
            end_date: date(9, 4),
            property_id: property.id,
            guest_id: guest.id,
        })
        .await
        .unwrap();

    assert!(reservation.id > 0);
    assert_eq!(reservation.start_date, date(9, 1));
    assert_eq!(reservation.end_date, date(9, 4));
    assert_eq!(reservation.property_id, property.id);
}

#[tokio::test]
async fn test_guest_reservations_ordered_by_start_date() {
    let db = common::create_test_database().await.unwrap();
    let guest = common::create_user(&db, "Guest").await.unwrap();
    let other_guest = common::create_user(&db, "Someone Else").await.unwrap();
    let owner = common::create_user(&db, "Owner").await.unwrap();
    let lake = common::create_property(&db, owner.id, "Lake house", "Kelowna", Decimal::new(180, 0))
        .await
        .unwrap();
    let city = common::create_property(&db, owner.id, "City flat", "Ottawa", Decimal::new(95, 0))
        .await
        .unwrap();

    for (start, end, property_id, guest_id) in [
        (date(8, 10), date(8, 12), lake.id, guest.id),
        (date(3, 1), date(3, 5), city.id, guest.id),
        (date(5, 20), date(5, 22), lake.id, other_guest.id),
    ] {
        db.add_reservation(&NewReservation {
            start_date: start,
            end_date: end,
            property_id,
            guest_id,
        })
        .await
        .unwrap();
    }

    let reservations = db
        .get_all_reservations(guest.id, SearchLimit::default())
        .await
        .unwrap();

    let starts: Vec<_> = reservations.iter().map(|r| r.start_date).collect();
    assert_eq!(starts, [date(3, 1), date(8, 10)]);
    assert_eq!(reservations[0].title, "City flat");
    assert_eq!(reservations[0].cost_per_night, 9_500);
    assert_eq!(reservations[0].number_of_bedrooms, 3);
}

#[tokio::test]
async fn test_unreviewed_property_still_listed() {
    let db = common::create_test_database().await.unwrap();
    let guest = common::create_user(&db, "Guest").await.unwrap();
    let property = common::create_property(&db, guest.id, "New build", "Regina", Decimal::new(60, 0))
        .await
        .unwrap();

    db.add_reservation(&NewReservation {
        start_date: date(2, 1),
        end_date: date(2, 2),
        property_id: property.id,
        guest_id: guest.id,
    })
    .await
    .unwrap();

    let reservations = db
        .get_all_reservations(guest.id, SearchLimit::default())
        .await
        .unwrap();
    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].average_rating, None);
}

#[tokio::test]
async fn test_summary_carries_property_average_rating() {
    let db = common::create_test_database().await.unwrap();
    let guest = common::create_user(&db, "Guest").await.unwrap();
    let property = common::create_property(&db, guest.id, "Chalet", "Banff", Decimal::new(240, 0))
        .await
        .unwrap();

    common::review_property(&db, guest.id, property.id, 3).await.unwrap();
    common::review_property(&db, guest.id, property.id, 4).await.unwrap();

    let reservations = db
        .get_all_reservations(guest.id, SearchLimit::default())
        .await
        .unwrap();
    assert_eq!(reservations.len(), 2);
    for reservation in &reservations {
        assert_eq!(reservation.average_rating, Some(3.5));
    }
}

#[tokio::test]
async fn test_default_limit_is_ten() {
    let db = common::create_test_database().await.unwrap();
    let guest = common::create_user(&db, "Frequent Guest").await.unwrap();
    let property = common::create_property(&db, guest.id, "Studio", "Quebec", Decimal::new(70, 0))
        .await
        .unwrap();

    for offset in 0..12 {
        let (start_date, end_date) = common::stay(offset * 7);
        db.add_reservation(&NewReservation {
            start_date,
            end_date,
            property_id: property.id,
            guest_id: guest.id,
        })
        .await
        .unwrap();
    }

    let repository = ReservationRepositoryImpl::new(db);
    let all = repository
        .list_for_guest(guest.id, SearchLimit::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 10);

    let few = repository
        .list_for_guest(guest.id, SearchLimit::new(3).unwrap())
        .await
        .unwrap();
    assert_eq!(few.len(), 3);
    assert_eq!(few[0].start_date, common::stay(0).0);
}

#[tokio::test]
async fn test_repository_rejects_inverted_dates() {
    let db = common::create_test_database().await.unwrap();
    let guest = common::create_user(&db, "Guest").await.unwrap();
    let property = common::create_property(&db, guest.id, "Hut", "Yukon", Decimal::new(40, 0))
        .await
        .unwrap();

    let err = ReservationRepositoryImpl::new(db)
        .create(&NewReservation {
            start_date: date(6, 10),
            end_date: date(6, 1),
            property_id: property.id,
            guest_id: guest.id,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_guest_without_reservations_gets_empty_list() {
    let db = common::create_test_database().await.unwrap();
    let reservations = db
        .get_all_reservations(7, SearchLimit::default())
        .await
        .unwrap();
    assert!(reservations.is_empty());
}
