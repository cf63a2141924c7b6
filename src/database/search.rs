// ABOUTME: Property search query builder producing parameterized SQL and ordered bind values
// ABOUTME: Optional city, owner, price and rating filters compose into one statement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Property Search
//!
//! [`PropertySearchQueryBuilder::build`] turns a [`SearchOptions`] and a
//! [`SearchLimit`] into a [`QueryPlan`]: one SQL statement with `$N`
//! placeholders and the values to bind, in placeholder order.
//!
//! Every placeholder number is taken from the parameter list length right
//! after the value is pushed, so skipped filters never leave gaps and the Nth
//! parameter always fills `$N`.
//!
//! The statement runs unchanged on `PostgreSQL` and `SQLite`: both accept `$N`
//! placeholders, matching is done with `LOWER(..) LIKE LOWER(..)`, and the
//! average rating is cast to `DOUBLE PRECISION` so both drivers decode a float.

use crate::errors::{AppError, AppResult};
use lightbnb_core::constants::limits::DEFAULT_QUERY_LIMIT;
use lightbnb_core::currency::to_minor_units;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Everything before the WHERE clause
const SELECT_PROPERTIES_WITH_RATING: &str = "SELECT properties.*, \
     CAST(AVG(property_reviews.rating) AS DOUBLE PRECISION) AS average_rating \
     FROM properties \
     JOIN property_reviews ON properties.id = property_reviews.property_id";

const GROUP_BY_PROPERTY: &str = " GROUP BY properties.id";

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    /// Text parameter
    Text(String),
    /// Integer parameter
    Integer(i64),
    /// Floating point parameter
    Float(f64),
}

/// Optional property search filters; absent fields impose no constraint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Case-insensitive partial match on the city name
    #[serde(default)]
    pub city: Option<String>,
    /// Only properties owned by this user
    #[serde(default)]
    pub owner_id: Option<i64>,
    /// Lowest nightly cost, in major currency units
    #[serde(default)]
    pub minimum_price_per_night: Option<Decimal>,
    /// Highest nightly cost, in major currency units
    #[serde(default)]
    pub maximum_price_per_night: Option<Decimal>,
    /// Lowest acceptable average review rating
    #[serde(default)]
    pub minimum_rating: Option<f64>,
}

impl SearchOptions {
    /// Filter on city (partial, case-insensitive)
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Filter on owner
    #[must_use]
    pub fn with_owner_id(mut self, owner_id: i64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Lower bound on nightly cost, in major units
    #[must_use]
    pub fn with_minimum_price(mut self, price: Decimal) -> Self {
        self.minimum_price_per_night = Some(price);
        self
    }

    /// Upper bound on nightly cost, in major units
    #[must_use]
    pub fn with_maximum_price(mut self, price: Decimal) -> Self {
        self.maximum_price_per_night = Some(price);
        self
    }

    /// Lower bound on the average rating
    #[must_use]
    pub fn with_minimum_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City filter value, if one applies
    ///
    /// Blank strings count as "no city", like an empty form field.
    #[must_use]
    pub fn city_filter(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}

/// Maximum number of rows a list query returns; always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct SearchLimit(u32);

impl SearchLimit {
    /// Validate a caller-supplied limit
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for zero or negative values and
    /// `ValueOutOfRange` for values that do not fit in 32 bits
    pub fn new(limit: i64) -> AppResult<Self> {
        if limit <= 0 {
            return Err(AppError::invalid_input(format!(
                "limit must be a positive integer, got {limit}"
            )));
        }
        u32::try_from(limit)
            .map(Self)
            .map_err(|_| AppError::out_of_range(format!("limit {limit} is too large")))
    }

    /// The limit as a row count
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The limit as a bind value
    #[must_use]
    pub fn as_param(self) -> SqlParam {
        SqlParam::Integer(i64::from(self.0))
    }
}

impl Default for SearchLimit {
    fn default() -> Self {
        Self(DEFAULT_QUERY_LIMIT)
    }
}

impl TryFrom<i64> for SearchLimit {
    type Error = AppError;

    fn try_from(value: i64) -> AppResult<Self> {
        Self::new(value)
    }
}

impl From<SearchLimit> for i64 {
    fn from(limit: SearchLimit) -> Self {
        Self::from(limit.0)
    }
}

impl FromStr for SearchLimit {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input(format!("limit must be an integer, got '{s}'")))?;
        Self::new(value)
    }
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A SQL statement with its bind values in placeholder order
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    /// SQL text with `$1..$N` placeholders
    pub sql: String,
    /// `params[i]` fills placeholder `$(i + 1)`
    pub params: Vec<SqlParam>,
}

impl QueryPlan {
    /// Split into statement and parameters for execution
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }
}

/// Builds the property search statement
pub struct PropertySearchQueryBuilder;

impl PropertySearchQueryBuilder {
    /// Build the search statement for `options`, returning at most `limit` rows
    ///
    /// Filters are applied in a fixed order (city, owner, minimum price,
    /// maximum price) as WHERE conditions. The rating bound filters an
    /// aggregate, so it becomes a HAVING clause after GROUP BY. The limit is
    /// always the last parameter.
    #[must_use]
    pub fn build(options: &SearchOptions, limit: SearchLimit) -> QueryPlan {
        let mut params = Vec::new();
        let mut conditions = Vec::new();

        if let Some(city) = options.city_filter() {
            let placeholder = push_param(&mut params, SqlParam::Text(format!("%{city}%")));
            conditions.push(format!("LOWER(properties.city) LIKE LOWER({placeholder})"));
        }

        if let Some(owner_id) = options.owner_id {
            let placeholder = push_param(&mut params, SqlParam::Integer(owner_id));
            conditions.push(format!("properties.owner_id = {placeholder}"));
        }

        if let Some(minimum) = options.minimum_price_per_night {
            let placeholder = push_param(&mut params, SqlParam::Integer(to_minor_units(minimum)));
            conditions.push(format!("properties.cost_per_night >= {placeholder}"));
        }

        if let Some(maximum) = options.maximum_price_per_night {
            let placeholder = push_param(&mut params, SqlParam::Integer(to_minor_units(maximum)));
            conditions.push(format!("properties.cost_per_night <= {placeholder}"));
        }

        let mut sql = String::from(SELECT_PROPERTIES_WITH_RATING);

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        sql.push_str(GROUP_BY_PROPERTY);

        if let Some(rating) = options.minimum_rating {
            let placeholder = push_param(&mut params, SqlParam::Float(rating));
            sql.push_str(&format!(
                " HAVING AVG(property_reviews.rating) >= {placeholder}"
            ));
        }

        let placeholder = push_param(&mut params, limit.as_param());
        sql.push_str(&format!(
            " ORDER BY properties.cost_per_night LIMIT {placeholder}"
        ));

        QueryPlan { sql, params }
    }
}

/// Append `value` and return the placeholder that refers to it
fn push_param(params: &mut Vec<SqlParam>, value: SqlParam) -> String {
    params.push(value);
    format!("${}", params.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Placeholder numbers in order of appearance
    fn placeholders(sql: &str) -> Vec<usize> {
        let mut found = Vec::new();
        let mut chars = sql.char_indices().peekable();
        while let Some((_, c)) = chars.next() {
            if c != '$' {
                continue;
            }
            let mut digits = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            if let Ok(n) = digits.parse() {
                found.push(n);
            }
        }
        found
    }

    fn where_clause(sql: &str) -> Option<&str> {
        let start = sql.find(" WHERE ")?;
        let end = sql.find(GROUP_BY_PROPERTY)?;
        Some(&sql[start..end])
    }

    #[test]
    fn test_unfiltered_search_binds_only_the_limit() {
        let plan = PropertySearchQueryBuilder::build(&SearchOptions::default(), SearchLimit::default());

        assert!(!plan.sql.contains("WHERE"));
        assert!(!plan.sql.contains("HAVING"));
        assert_eq!(plan.params, vec![SqlParam::Integer(10)]);
        assert!(plan.sql.ends_with("ORDER BY properties.cost_per_night LIMIT $1"));
    }

    #[test]
    fn test_city_is_wrapped_in_wildcards() {
        let options = SearchOptions::default().with_city("Van");
        let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());

        assert_eq!(plan.params[0], SqlParam::Text("%Van%".into()));
        assert!(plan
            .sql
            .contains("WHERE LOWER(properties.city) LIKE LOWER($1)"));
    }

    #[test]
    fn test_blank_city_is_ignored() {
        let options = SearchOptions::default().with_city("   ");
        let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());

        assert_eq!(options.city_filter(), None);
        assert!(!plan.sql.contains("WHERE"));
        assert_eq!(plan.params.len(), 1);
    }

    #[test]
    fn test_price_bounds_are_converted_to_cents() {
        let options = SearchOptions::default()
            .with_minimum_price(Decimal::from(50))
            .with_maximum_price(Decimal::new(9999, 2));
        let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());

        assert_eq!(
            plan.params,
            vec![
                SqlParam::Integer(5000),
                SqlParam::Integer(9999),
                SqlParam::Integer(10)
            ]
        );
        assert!(plan.sql.contains("properties.cost_per_night >= $1"));
        assert!(plan.sql.contains("properties.cost_per_night <= $2"));
    }

    #[test]
    fn test_owner_id_is_bound_as_integer() {
        let options = SearchOptions::default().with_owner_id(42);
        let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());

        assert_eq!(plan.params[0], SqlParam::Integer(42));
        assert!(plan.sql.contains("properties.owner_id = $1"));
    }

    #[test]
    fn test_minimum_rating_is_a_having_clause_after_group_by() {
        let options = SearchOptions::default()
            .with_city("Montreal")
            .with_minimum_rating(4.0);
        let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());

        let group_by = plan.sql.find("GROUP BY").unwrap();
        let having = plan.sql.find("HAVING AVG(property_reviews.rating) >= $2").unwrap();
        assert!(having > group_by);
        assert!(!where_clause(&plan.sql).unwrap().contains("rating"));
    }

    #[test]
    fn test_full_filter_set_binds_in_documented_order() {
        let options = SearchOptions::default()
            .with_city("Montreal")
            .with_minimum_price(Decimal::from(60))
            .with_maximum_price(Decimal::from(120))
            .with_minimum_rating(4.0);
        let limit = SearchLimit::new(5).unwrap();
        let plan = PropertySearchQueryBuilder::build(&options, limit);

        assert_eq!(
            plan.params,
            vec![
                SqlParam::Text("%Montreal%".into()),
                SqlParam::Integer(6000),
                SqlParam::Integer(12000),
                SqlParam::Float(4.0),
                SqlParam::Integer(5),
            ]
        );
        assert_eq!(placeholders(&plan.sql), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_every_filter_combination_keeps_placeholders_in_sync() {
        for mask in 0u8..32 {
            let mut options = SearchOptions::default();
            if mask & 1 != 0 {
                options = options.with_city("Toronto");
            }
            if mask & 2 != 0 {
                options = options.with_owner_id(3);
            }
            if mask & 4 != 0 {
                options = options.with_minimum_price(Decimal::from(40));
            }
            if mask & 8 != 0 {
                options = options.with_maximum_price(Decimal::from(400));
            }
            if mask & 16 != 0 {
                options = options.with_minimum_rating(3.5);
            }

            let plan = PropertySearchQueryBuilder::build(&options, SearchLimit::default());
            let where_filters = (mask & 0b1111).count_ones() as usize;
            let having_filters = usize::from(mask & 16 != 0);

            let expected: Vec<usize> = (1..=plan.params.len()).collect();
            assert_eq!(placeholders(&plan.sql), expected, "mask {mask:#07b}");
            assert_eq!(plan.params.len(), where_filters + having_filters + 1);

            let in_where = where_clause(&plan.sql).map_or(0, |clause| placeholders(clause).len());
            assert_eq!(in_where, where_filters, "mask {mask:#07b}");
            assert_eq!(plan.params.last(), Some(&SqlParam::Integer(10)));
        }
    }

    #[test]
    fn test_search_limit_validation() {
        assert_eq!(SearchLimit::default().get(), 10);
        assert_eq!(SearchLimit::new(1).unwrap().get(), 1);
        assert!(SearchLimit::new(0).is_err());
        assert!(SearchLimit::new(-5).is_err());
        assert!(SearchLimit::new(i64::from(u32::MAX) + 1).is_err());
        assert_eq!("25".parse::<SearchLimit>().unwrap().get(), 25);
        assert!("ten".parse::<SearchLimit>().is_err());
        assert!("2.5".parse::<SearchLimit>().is_err());
    }

    #[test]
    fn test_search_options_deserialize_from_partial_json() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"city": "Vancouver", "minimum_price_per_night": 75}"#)
                .unwrap();
        assert_eq!(options.city_filter(), Some("Vancouver"));
        assert_eq!(options.minimum_price_per_night, Some(Decimal::from(75)));
        assert!(options.owner_id.is_none());
    }
}
