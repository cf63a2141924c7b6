// ABOUTME: User account records
// ABOUTME: Guests and property owners share the users table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Primary key
    pub id: i32,
    /// Display name
    pub name: String,
    /// Login email, unique across users
    pub email: String,
    /// Stored password; never written to serialized output
    #[serde(skip_serializing, default)]
    pub password: String,
}

/// Fields required to register a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Password as received from the caller
    pub password: String,
}
