//! Query building for the listing endpoint.
//!
//! Filters are accumulated as (predicate, value) pairs in a fixed order:
//! city, then minimum price, then maximum price. Placeholders are numbered
//! from that order, and LIMIT / OFFSET take the two numbers after them.

use crate::errors::ServerError;
use postgres::types::{ToSql, Type};
use std::collections::HashMap;

/// Fixed page size of the listing endpoint.
pub const PAGE_SIZE: i64 = 20;

pub const LISTING_COLUMNS: &str = include_str!("../../sql/listing_columns.sql");

/// A typed bind value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Float(f64),
    Int(i32),
    BigInt(i64),
}

impl SqlParam {
    pub fn as_sql(&self) -> &(dyn ToSql + Sync) {
        match self {
            SqlParam::Text(s) => s,
            SqlParam::Float(f) => f,
            SqlParam::Int(i) => i,
            SqlParam::BigInt(i) => i,
        }
    }
}

/// Bind value for a listing id compared against a column of `column_type`.
///
/// The id is converted instead of casting the column, so lookups stay on the
/// column's index. `None` means the id cannot be a value of that type and
/// matches nothing.
pub fn id_param(column_type: &Type, id: &str) -> Result<Option<SqlParam>, ServerError> {
    if *column_type == Type::INT8 {
        Ok(id.parse::<i64>().ok().map(SqlParam::BigInt))
    } else if *column_type == Type::INT4 {
        Ok(id.parse::<i32>().ok().map(SqlParam::Int))
    } else if [Type::TEXT, Type::VARCHAR, Type::BPCHAR, Type::NAME].contains(column_type) {
        Ok(Some(SqlParam::Text(id.to_string())))
    } else {
        Err(ServerError::DbError(format!(
            "listing id column has unsupported type {column_type}"
        )))
    }
}

/// SQL text with the bind values for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl BuiltQuery {
    /// Highest `$n` referenced in the SQL text.
    pub fn placeholder_count(&self) -> usize {
        let bytes = self.sql.as_bytes();
        let mut max = 0;
        let mut i = 0;
        while i < bytes.len() {
            if bytes[i] == b'$' {
                let start = i + 1;
                let mut end = start;
                while end < bytes.len() && bytes[end].is_ascii_digit() {
                    end += 1;
                }
                if let Ok(n) = self.sql[start..end].parse::<usize>() {
                    max = max.max(n);
                }
                i = end;
            } else {
                i += 1;
            }
        }
        max
    }
}

/// Query-string driven filter for `GET /api/property`.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub city: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: u32,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            city: None,
            min_price: None,
            max_price: None,
            page: 1,
        }
    }
}

impl ListingFilter {
    /// Reads `city`, `minPrice`, `maxPrice` and `page`. Empty values are ignored.
    pub fn from_query(params: &HashMap<String, String>) -> Result<Self, ServerError> {
        let value = |key: &str| {
            params
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
        };

        let price = |key: &str| -> Result<Option<f64>, ServerError> {
            match value(key) {
                None => Ok(None),
                Some(raw) => raw
                    .parse::<f64>()
                    .ok()
                    .filter(|p| p.is_finite())
                    .map(Some)
                    .ok_or_else(|| ServerError::BadRequest(format!("{key} must be a number"))),
            }
        };

        let page = match value("page") {
            None => 1,
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| {
                    ServerError::BadRequest("page must be a whole number of at least 1".into())
                })?,
        };

        Ok(Self {
            city: value("city").map(str::to_string),
            min_price: price("minPrice")?,
            max_price: price("maxPrice")?,
            page,
        })
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page.max(1)) - 1) * PAGE_SIZE
    }

    /// Active predicates in binding order.
    fn predicates(&self) -> Vec<(&'static str, SqlParam)> {
        let mut out = Vec::with_capacity(3);
        if let Some(city) = &self.city {
            out.push(("situs_city =", SqlParam::Text(city.clone())));
        }
        if let Some(min) = self.min_price {
            out.push(("predicted_lot_price::float8 >=", SqlParam::Float(min)));
        }
        if let Some(max) = self.max_price {
            out.push(("predicted_lot_price::float8 <=", SqlParam::Float(max)));
        }
        out
    }

    /// `WHERE ...` (or empty) and its bind values.
    pub fn where_clause(&self) -> (String, Vec<SqlParam>) {
        let predicates = self.predicates();
        if predicates.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut conditions = Vec::with_capacity(predicates.len());
        let mut params = Vec::with_capacity(predicates.len());
        for (n, (predicate, value)) in predicates.into_iter().enumerate() {
            conditions.push(format!("{predicate} ${}", n + 1));
            params.push(value);
        }

        (format!("WHERE {}", conditions.join(" AND ")), params)
    }

    /// One page of listings, newest first.
    pub fn rows_query(&self) -> BuiltQuery {
        let (where_clause, mut params) = self.where_clause();
        let limit_at = params.len() + 1;

        let sql = format!(
            "SELECT {columns}\nFROM public.v_offmarket_lots\n{where_clause}\nORDER BY published_at DESC\nLIMIT ${limit_at} OFFSET ${offset_at}",
            columns = LISTING_COLUMNS.trim(),
            offset_at = limit_at + 1,
        );

        params.push(SqlParam::BigInt(PAGE_SIZE));
        params.push(SqlParam::BigInt(self.offset()));

        BuiltQuery { sql, params }
    }

    /// Total matches for the same predicate, without paging.
    pub fn count_query(&self) -> BuiltQuery {
        let (where_clause, params) = self.where_clause();
        let sql = format!("SELECT COUNT(*) AS total FROM public.v_offmarket_lots {where_clause}")
            .trim_end()
            .to_string();
        BuiltQuery { sql, params }
    }
}
