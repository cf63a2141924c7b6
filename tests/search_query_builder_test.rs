// ABOUTME: Public API tests for the property search query builder
// ABOUTME: Checks the documented parameter order and limit handling from a caller's view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use lightbnb::database::{PropertySearchQueryBuilder, SearchLimit, SearchOptions, SqlParam};
use lightbnb::errors::ErrorCode;
use rust_decimal::Decimal;

#[test]
fn test_montreal_example_parameter_order() {
    let options = SearchOptions::default()
        .with_city("Montreal")
        .with_minimum_price(Decimal::new(60, 0))
        .with_maximum_price(Decimal::new(120, 0))
        .with_minimum_rating(4.0);

    let (sql, params) =
        PropertySearchQueryBuilder::build(&options, SearchLimit::new(5).unwrap()).into_parts();

    assert_eq!(
        params,
        vec![
            SqlParam::Text("%Montreal%".to_owned()),
            SqlParam::Integer(6_000),
            SqlParam::Integer(12_000),
            SqlParam::Float(4.0),
            SqlParam::Integer(5),
        ]
    );
    assert!(sql.contains("LOWER(properties.city) LIKE LOWER($1)"));
    assert!(sql.contains("properties.cost_per_night >= $2"));
    assert!(sql.contains("properties.cost_per_night <= $3"));
    assert!(sql.contains("HAVING AVG(property_reviews.rating) >= $4"));
    assert!(sql.ends_with("ORDER BY properties.cost_per_night LIMIT $5"));
}

#[test]
fn test_options_from_json_request() {
    let options: SearchOptions = serde_json::from_str(
        r#"{"city": "Van", "minimum_price_per_night": 50, "minimum_rating": 3}"#,
    )
    .unwrap();

    let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());
    assert_eq!(
        plan.params,
        vec![
            SqlParam::Text("%Van%".to_owned()),
            SqlParam::Integer(5_000),
            SqlParam::Float(3.0),
            SqlParam::Integer(10),
        ]
    );
}

#[test]
fn test_limit_parsing_from_user_input() {
    assert_eq!("25".parse::<SearchLimit>().unwrap().get(), 25);
    assert_eq!(
        "0".parse::<SearchLimit>().unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        "-3".parse::<SearchLimit>().unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        "ten".parse::<SearchLimit>().unwrap_err().code,
        ErrorCode::InvalidInput
    );
    assert_eq!(
        SearchLimit::new(i64::MAX).unwrap_err().code,
        ErrorCode::ValueOutOfRange
    );
}

#[test]
fn test_builder_is_deterministic() {
    let options = SearchOptions::default().with_city("Toronto").with_owner_id(3);
    let first = PropertySearchQueryBuilder::build(&options, SearchLimit::default());
    let second = PropertySearchQueryBuilder::build(&options, SearchLimit::default());
    assert_eq!(first, second);
}
