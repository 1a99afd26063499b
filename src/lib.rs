//! # weather-api
//!
//! A read-only JSON API over a SQLite weather-observation dataset.
//!
//! The dataset holds daily precipitation and temperature readings per
//! station. The API answers a fixed set of questions about it: daily
//! precipitation over the last year of data, the list of stations, daily
//! temperatures at the busiest station, and min/avg/max temperature over a
//! date range.
//!
//! ## Architecture
//!
//! - **Data Layer**: [`Database`] handles and per-request [`db::Session`]s own all SQL
//! - **Reports**: [`reports`] turns query rows into the records the API returns
//! - **API Layer**: [`handlers`] exposes the reports through axum routes

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod models;
pub mod reports;
pub mod state;

pub use config::Config;
pub use db::{Database, Session};
pub use error::{Result, WeatherError};
pub use handlers::create_router;
pub use logging::{
    create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats, log_error,
    log_request_error, log_timed_operation,
};
pub use models::{ActiveStation, DateRecord, Measurement, Station, TemperatureSummary};
pub use state::AppState;
