// ABOUTME: LightBnB CLI - command-line access to users, properties and reservations
// ABOUTME: Parses arguments, connects to the configured database and dispatches commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Cheapest well-rated places in Vancouver
//! lightbnb-cli property search --city Van --min-rating 4 --limit 5
//!
//! # List a property from a JSON description
//! lightbnb-cli property add --file listing.json
//!
//! # Look up a user
//! lightbnb-cli user show --email sarah@example.com
//!
//! # A guest's upcoming stays, as JSON
//! lightbnb-cli --json reservation list --guest-id 1
//! ```

mod commands;
mod helpers;

use chrono::NaiveDate;
use clap::{ArgGroup, Parser, Subcommand};
use lightbnb::{
    config::DatabaseConfig,
    database_plugins::factory::Database,
    errors::{AppError, AppResult},
    logging::{AppLogger, LoggingConfig},
};
use rust_decimal::Decimal;
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "lightbnb-cli",
    about = "LightBnB data access CLI",
    long_about = "Search properties, register users and inspect reservations in a LightBnB database."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override (defaults to `DATABASE_URL`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging, including generated SQL
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Print results as JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Property search and listing
    Property {
        #[command(subcommand)]
        action: PropertyCommand,
    },

    /// User accounts
    User {
        #[command(subcommand)]
        action: UserCommand,
    },

    /// Guest reservations
    Reservation {
        #[command(subcommand)]
        action: ReservationCommand,
    },
}

#[derive(Subcommand)]
enum PropertyCommand {
    /// Search properties, cheapest first
    Search {
        /// Case-insensitive partial city match
        #[arg(long)]
        city: Option<String>,

        /// Only properties owned by this user id
        #[arg(long)]
        owner_id: Option<i64>,

        /// Minimum nightly price in major units
        #[arg(long)]
        min_price: Option<Decimal>,

        /// Maximum nightly price in major units
        #[arg(long)]
        max_price: Option<Decimal>,

        /// Minimum average review rating
        #[arg(long)]
        min_rating: Option<f64>,

        /// Maximum number of results
        #[arg(long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,
    },

    /// List a new property described by a JSON file
    Add {
        /// Path to the property JSON
        #[arg(long)]
        file: PathBuf,
    },

    /// Review a property after a stay
    Review {
        /// Reviewing guest
        #[arg(long)]
        guest_id: i32,

        /// Reviewed property
        #[arg(long)]
        property_id: i32,

        /// Reservation the review belongs to
        #[arg(long)]
        reservation_id: i32,

        /// Star rating from 1 to 5
        #[arg(long)]
        rating: i16,

        /// Free-form review text
        #[arg(long)]
        message: Option<String>,
    },
}

#[derive(Subcommand)]
enum UserCommand {
    /// Show a user by email or id
    #[command(group(ArgGroup::new("lookup").required(true).args(["email", "id"])))]
    Show {
        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// User id
        #[arg(long)]
        id: Option<i32>,
    },

    /// Register a new user
    Add {
        /// Display name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum ReservationCommand {
    /// List a guest's reservations
    List {
        /// Guest user id
        #[arg(long)]
        guest_id: i32,

        /// Maximum number of results
        #[arg(long, default_value = "10", allow_negative_numbers = true)]
        limit: i64,
    },

    /// Book a stay
    Add {
        /// Guest user id
        #[arg(long)]
        guest_id: i32,

        /// Property id
        #[arg(long)]
        property_id: i32,

        /// First night (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Departure day (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let mut config = DatabaseConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config = config.with_url(url)?;
    }

    let database = Database::from_config(&config).await?;
    AppLogger::log_backend_ready(database.backend_info(), &config.url.to_string());

    let output = helpers::display::Output::new(cli.json);

    match cli.command {
        Command::Property { action } => match action {
            PropertyCommand::Search {
                city,
                owner_id,
                min_price,
                max_price,
                min_rating,
                limit,
            } => {
                let filters = commands::property::SearchFilters {
                    city,
                    owner_id,
                    min_price,
                    max_price,
                    min_rating,
                };
                commands::property::search(database, filters, limit, output).await?;
            }
            PropertyCommand::Add { file } => {
                commands::property::add(database, &file, output).await?;
            }
            PropertyCommand::Review {
                guest_id,
                property_id,
                reservation_id,
                rating,
                message,
            } => {
                let review = lightbnb::models::NewPropertyReview {
                    guest_id,
                    property_id,
                    reservation_id,
                    rating,
                    message,
                };
                commands::property::review(database, &review, output).await?;
            }
        },
        Command::User { action } => match action {
            UserCommand::Show { email, id } => {
                commands::user::show(database, email, id, output).await?;
            }
            UserCommand::Add {
                name,
                email,
                password,
            } => {
                commands::user::add(database, name, email, password, output).await?;
            }
        },
        Command::Reservation { action } => match action {
            ReservationCommand::List { guest_id, limit } => {
                commands::reservation::list(database, guest_id, limit, output).await?;
            }
            ReservationCommand::Add {
                guest_id,
                property_id,
                start,
                end,
            } => {
                let reservation = lightbnb::models::NewReservation {
                    start_date: start,
                    end_date: end,
                    property_id,
                    guest_id,
                };
                commands::reservation::add(database, &reservation, output).await?;
            }
        },
    }

    Ok(())
}
