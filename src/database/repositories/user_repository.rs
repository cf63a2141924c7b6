// ABOUTME: User account repository implementation
// ABOUTME: Handles user registration and lookup by email or id
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{observe, rejected, UserRepository};
use crate::database_plugins::factory::Database;
use crate::database_plugins::shared::validation::{validate_email, validate_required};
use crate::database_plugins::DatabaseProvider;
use crate::errors::AppResult;
use async_trait::async_trait;
use lightbnb_core::constants::tables;
use lightbnb_core::models::{NewUser, User};

/// SQLite/PostgreSQL implementation of `UserRepository`
pub struct UserRepositoryImpl {
    db: Database,
}

impl UserRepositoryImpl {
    /// Create a new `UserRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn get_by_email(&self, email: &str) -> AppResult<Option<User>> {
        observe(
            "get_user_with_email",
            tables::USERS,
            self.db.get_user_with_email(email.trim()),
        )
        .await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Option<User>> {
        observe("get_user_with_id", tables::USERS, self.db.get_user_with_id(id)).await
    }

    async fn create(&self, user: &NewUser) -> AppResult<User> {
        validate_required("name", &user.name)
            .and_then(|()| validate_email(&user.email))
            .and_then(|()| validate_required("password", &user.password))
            .map_err(|e| rejected("add_user", e))?;

        let user = NewUser {
            name: user.name.trim().to_owned(),
            email: user.email.trim().to_owned(),
            password: user.password.clone(),
        };
        observe("add_user", tables::USERS, self.db.add_user(&user)).await
    }
}
