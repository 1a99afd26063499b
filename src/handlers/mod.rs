//! HTTP request handlers for the weather API.
//!
//! This module contains all the endpoint handlers for the web server and the
//! router that wires them to their paths.

pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{start_end_handler, start_handler};
pub use tobs::tobs_handler;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::error::WeatherError;
use crate::logging::{create_http_trace_layer, log_request_error};
use crate::state::AppState;

/// Build the router serving every endpoint over `state`
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/start/:start", get(start_handler))
        .route("/api/v1.0/start/:start/end/:end", get(start_end_handler))
        .layer(create_http_trace_layer())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log a failed request and render it as a JSON error body
pub(crate) fn error_response(
    error: WeatherError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    (
        error.status_code(),
        Json(serde_json::json!({
            "error": error.to_string(),
            "request_id": request_id
        })),
    )
        .into_response()
}
