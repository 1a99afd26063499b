//! Precipitation endpoint handler.
//!
//! Returns the average precipitation for every day in the reporting window
//! that ends at the latest measurement.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::logging::generate_request_id;
use crate::reports;
use crate::state::AppState;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let window_days = state.config.query.window_days;

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        window_days = window_days,
        "Processing precipitation request"
    );

    match state
        .with_session(move |session| reports::precipitation(session, window_days))
        .await
    {
        Ok(records) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                day_count = records.len(),
                "Precipitation request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
