// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, bad input) or downstream layers (DB, API).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("API Error: {0}")]
    ApiError(String),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    /// HTTP status this error is surfaced as.
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::DbError(_)
            | ServerError::ApiError(_)
            | ServerError::Config(_)
            | ServerError::InternalError => 500,
        }
    }
}

impl From<postgres::Error> for ServerError {
    fn from(e: postgres::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<r2d2::Error> for ServerError {
    fn from(e: r2d2::Error) -> Self {
        ServerError::DbError(format!("Connection pool error: {e}"))
    }
}
