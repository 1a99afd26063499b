//! Error types for the weather-api application.
//!
//! This module defines the error enum that covers every failure the service
//! can hit, from startup configuration to per-request database access.

use axum::http::StatusCode;
use thiserror::Error;

/// The main error type for weather-api operations.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// SQLite query errors
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database could not be opened for a session
    #[error("Database unavailable: {message}")]
    DatabaseUnavailable { message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A query needed the most recent measurement but there are none
    #[error("Empty dataset: {message}")]
    EmptyDataset { message: String },

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Stored data that cannot be interpreted
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Data not found errors
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

impl WeatherError {
    /// HTTP status reported when this error ends a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            WeatherError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
            WeatherError::DatabaseUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convenience type alias for Results with WeatherError
pub type Result<T> = std::result::Result<T, WeatherError>;
