// ABOUTME: Reservation commands for lightbnb-cli
// ABOUTME: Lists a guest's stays and books new ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lightbnb::{
    database::{ReservationRepository, ReservationRepositoryImpl, SearchLimit},
    database_plugins::factory::Database,
    errors::AppResult,
    models::NewReservation,
};
use tracing::info;

use crate::helpers::display::Output;

type Result<T> = AppResult<T>;

/// Print a guest's reservations, earliest first
pub async fn list(database: Database, guest_id: i32, limit: i64, output: Output) -> Result<()> {
    let limit = SearchLimit::new(limit)?;
    let reservations = ReservationRepositoryImpl::new(database)
        .list_for_guest(guest_id, limit)
        .await?;
    info!(
        "Guest {} has {} reservation(s) in range",
        guest_id,
        reservations.len()
    );

    output.reservations(&reservations)
}

/// Book a stay
pub async fn add(database: Database, reservation: &NewReservation, output: Output) -> Result<()> {
    let stored = ReservationRepositoryImpl::new(database)
        .create(reservation)
        .await?;
    output.reservation(&stored)
}
