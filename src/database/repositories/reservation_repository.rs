// ABOUTME: Reservation repository implementation
// ABOUTME: Handles booking stays and listing a guest's reservations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{observe, rejected, ReservationRepository};
use crate::database::search::SearchLimit;
use crate::database_plugins::factory::Database;
use crate::database_plugins::shared::validation::validate_date_range;
use crate::database_plugins::DatabaseProvider;
use crate::errors::AppResult;
use async_trait::async_trait;
use lightbnb_core::constants::tables;
use lightbnb_core::models::{NewReservation, Reservation, ReservationSummary};

/// SQLite/PostgreSQL implementation of `ReservationRepository`
pub struct ReservationRepositoryImpl {
    db: Database,
}

impl ReservationRepositoryImpl {
    /// Create a new `ReservationRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn list_for_guest(
        &self,
        guest_id: i32,
        limit: SearchLimit,
    ) -> AppResult<Vec<ReservationSummary>> {
        observe(
            "get_all_reservations",
            tables::RESERVATIONS,
            self.db.get_all_reservations(guest_id, limit),
        )
        .await
    }

    async fn create(&self, reservation: &NewReservation) -> AppResult<Reservation> {
        validate_date_range(reservation.start_date, reservation.end_date)
            .map_err(|e| rejected("add_reservation", e))?;
        observe(
            "add_reservation",
            tables::RESERVATIONS,
            self.db.add_reservation(reservation),
        )
        .await
    }
}
