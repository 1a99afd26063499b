//! Temperature observation endpoint handler.
//!
//! Returns daily average temperatures at the station with the most
//! measurements, over the same window as the precipitation endpoint.

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

const ENDPOINT: &str = "/api/v1.0/tobs";

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let window_days = state.config.query.window_days;

    debug!(
        endpoint = ENDPOINT,
        request_id = %request_id,
        window_days = window_days,
        "Processing tobs request"
    );

    match state
        .with_session(move |session| reports::tobs(session, window_days))
        .await
    {
        Ok(records) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                day_count = records.len(),
                "Tobs request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}

#[cfg(test)]
mod tests {
    use crate::db::fixtures::*;
    use crate::handlers::test_util::{get_json, router};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_tobs() {
        let (status, json) = get_json(router(sample_database()), "/api/v1.0/tobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!([
                {"date": ["2016-08-23", 77.0]},
                {"date": ["2017-01-01", 62.0]},
                {"date": ["2017-08-18", 79.0]},
                {"date": ["2017-08-19", 76.0]},
            ])
        );
    }

    #[tokio::test]
    async fn test_tobs_empty_dataset() {
        let (status, json) = get_json(router(database(&[], &[])), "/api/v1.0/tobs").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].is_string());
    }
}
