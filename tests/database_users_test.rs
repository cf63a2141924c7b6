// ABOUTME: Integration tests for user storage through the provider and repository
// ABOUTME: Covers lookup by email and id, registration, duplicates and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use lightbnb::database::{UserRepository, UserRepositoryImpl};
use lightbnb::database_plugins::DatabaseProvider;
use lightbnb::errors::ErrorCode;
use lightbnb::models::NewUser;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Devin Sanders".to_owned(),
        email: email.to_owned(),
        password: "password".to_owned(),
    }
}

#[tokio::test]
async fn test_add_and_get_user() {
    let db = common::create_test_database()
        .await
        .expect("Failed to create test database");

    let user = db
        .add_user(&new_user("tristanjacobs@gmail.com"))
        .await
        .expect("Failed to add user");
    assert!(user.id > 0);
    assert_eq!(user.name, "Devin Sanders");

    let by_email = db
        .get_user_with_email("tristanjacobs@gmail.com")
        .await
        .expect("Failed to get user by email")
        .expect("User not found");
    assert_eq!(by_email, user);

    let by_id = db
        .get_user_with_id(user.id)
        .await
        .expect("Failed to get user by id")
        .expect("User not found");
    assert_eq!(by_id.email, "tristanjacobs@gmail.com");
}

#[tokio::test]
async fn test_missing_user_is_none() {
    let db = common::create_test_database()
        .await
        .expect("Failed to create test database");

    assert!(db
        .get_user_with_email("nobody@example.com")
        .await
        .unwrap()
        .is_none());
    assert!(db.get_user_with_id(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_constraint_violation() {
    let db = common::create_test_database()
        .await
        .expect("Failed to create test database");
    let users = UserRepositoryImpl::new(db);

    users.create(&new_user("dup@example.com")).await.unwrap();
    let err = users
        .create(&new_user("dup@example.com"))
        .await
        .expect_err("Duplicate email must be rejected");
    assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
}

#[tokio::test]
async fn test_repository_validates_input() {
    let db = common::create_test_database()
        .await
        .expect("Failed to create test database");
    let users = UserRepositoryImpl::new(db);

    let err = users.create(&new_user("not-an-email")).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let blank_name = NewUser {
        name: "  ".to_owned(),
        ..new_user("blank@example.com")
    };
    let err = users.create(&blank_name).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_repository_trims_email() {
    let db = common::create_test_database()
        .await
        .expect("Failed to create test database");
    let users = UserRepositoryImpl::new(db);

    let user = users
        .create(&new_user("  spaced@example.com "))
        .await
        .unwrap();
    assert_eq!(user.email, "spaced@example.com");

    let found = users.get_by_email(" spaced@example.com").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_password_not_serialized() {
    let db = common::create_test_database()
        .await
        .expect("Failed to create test database");
    let user = common::create_user(&db, "Sarah").await.unwrap();

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password").is_none());
    assert_eq!(json["email"], "sarah@example.com");
}
