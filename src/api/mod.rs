//! JSON endpoints under `/api/`.
//!
//! Each handler turns its own failures into a JSON response with a fixed,
//! endpoint-specific message, so callers never see raw database text.

pub mod cities;
pub mod diagnostics;
pub mod properties;
pub mod statistics;
