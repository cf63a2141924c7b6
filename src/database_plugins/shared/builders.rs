// ABOUTME: Query parameter binding helpers
// ABOUTME: Binds an ordered SqlParam list onto a sqlx query for any backend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::database::search::SqlParam;
use sqlx::query::Query;
use sqlx::{Database, Encode, Type};

/// Bind `params` in order, so `params[i]` fills placeholder `$(i + 1)`
///
/// Works with both `PostgreSQL` and `SQLite` queries through generic trait bounds.
pub fn bind_params<'q, DB>(
    mut query: Query<'q, DB, <DB as Database>::Arguments<'q>>,
    params: &'q [SqlParam],
) -> Query<'q, DB, <DB as Database>::Arguments<'q>>
where
    DB: Database,
    &'q str: Encode<'q, DB> + Type<DB>,
    i64: Encode<'q, DB> + Type<DB>,
    f64: Encode<'q, DB> + Type<DB>,
{
    for param in params {
        query = match param {
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Integer(value) => query.bind(*value),
            SqlParam::Float(value) => query.bind(*value),
        };
    }
    query
}
