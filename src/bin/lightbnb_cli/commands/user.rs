// ABOUTME: User management commands for lightbnb-cli
// ABOUTME: Handles user lookup by email or id and registration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use lightbnb::{
    database::{UserRepository, UserRepositoryImpl},
    database_plugins::factory::Database,
    errors::{AppError, AppResult},
    models::NewUser,
};
use tracing::{info, warn};

use crate::helpers::display::Output;

type Result<T> = AppResult<T>;

/// Show a user found by email or id
pub async fn show(
    database: Database,
    email: Option<String>,
    id: Option<i32>,
    output: Output,
) -> Result<()> {
    let users = UserRepositoryImpl::new(database);

    let (user, lookup) = match (email, id) {
        (Some(email), _) => (users.get_by_email(&email).await?, email),
        (None, Some(id)) => (users.get_by_id(id).await?, format!("#{id}")),
        (None, None) => return Err(AppError::missing_field("email or id")),
    };

    let Some(user) = user else {
        warn!("No user matches {}", lookup);
        return Err(AppError::not_found(format!("User {lookup}")));
    };
    output.user(&user)
}

/// Register a new user
pub async fn add(
    database: Database,
    name: String,
    email: String,
    password: String,
    output: Output,
) -> Result<()> {
    let user = UserRepositoryImpl::new(database)
        .create(&NewUser {
            name,
            email,
            password,
        })
        .await?;
    info!("Registered user {} <{}>", user.id, user.email);

    output.user(&user)
}
