// ABOUTME: Structured error types for database operations
// ABOUTME: Classifies sqlx failures into connection, query, constraint and decode errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors produced by the database backends
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The pool could not hand out a connection or the connection dropped
    #[error("Database connection error: {0}")]
    ConnectionError(String),

    /// The statement failed to execute
    #[error("Query failed: {context}")]
    QueryError {
        /// Driver message or operation context
        context: String,
    },

    /// A uniqueness constraint rejected the write
    #[error("Constraint violation on {constraint}: {details}")]
    ConstraintViolation {
        /// Name of the violated constraint, when the driver reports it
        constraint: String,
        /// Driver message
        details: String,
    },

    /// The write referenced a row that does not exist
    #[error("Foreign key violation on {constraint}: {details}")]
    ForeignKeyViolation {
        /// Name of the violated constraint, when the driver reports it
        constraint: String,
        /// Driver message
        details: String,
    },

    /// A stored or supplied value could not be used
    #[error("Invalid data in '{field}': {reason}")]
    InvalidData {
        /// Column or field name
        field: String,
        /// What was wrong with it
        reason: String,
    },

    /// The connection string names a backend that is not compiled in
    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),

    /// Pool or connection options were rejected
    #[error("Database configuration error: {0}")]
    ConfigError(String),
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db_err) => {
                let constraint = db_err.constraint().unwrap_or("unknown").to_owned();
                let details = db_err.message().to_owned();
                if db_err.is_unique_violation() {
                    Self::ConstraintViolation {
                        constraint,
                        details,
                    }
                } else if db_err.is_foreign_key_violation() {
                    Self::ForeignKeyViolation {
                        constraint,
                        details,
                    }
                } else if db_err.is_check_violation() {
                    Self::InvalidData {
                        field: constraint,
                        reason: details,
                    }
                } else {
                    Self::QueryError { context: details }
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_) => Self::ConnectionError(error.to_string()),
            sqlx::Error::Configuration(_) => Self::ConfigError(error.to_string()),
            sqlx::Error::ColumnDecode { index, source } => Self::InvalidData {
                field: index,
                reason: source.to_string(),
            },
            sqlx::Error::ColumnNotFound(column) => Self::InvalidData {
                field: column,
                reason: "column missing from result set".to_owned(),
            },
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
