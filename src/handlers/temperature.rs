//! Temperature summary endpoint handlers.
//!
//! Return `[{"date": [min, avg, max]}]` over every measurement from a start
//! date, optionally bounded by an end date. Dates are compared as strings
//! unless strict dates are enabled, in which case anything that is not a
//! `YYYY-MM-DD` date is rejected with 400.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::reports::{self, SummaryRecords};
use crate::state::AppState;

/// Handle GET /api/v1.0/start/{start} requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    summarize(state, "/api/v1.0/start", start, None).await
}

/// Handle GET /api/v1.0/start/{start}/end/{end} requests
pub async fn start_end_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    summarize(state, "/api/v1.0/start/end", start, Some(end)).await
}

async fn summarize(
    state: Arc<AppState>,
    endpoint: &str,
    start: String,
    end: Option<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = match &end {
        Some(end) => format!("start={}, end={}", start, end),
        None => format!("start={}", start),
    };

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        params = %params,
        "Processing temperature summary request"
    );

    match run_summary(&state, start, end).await {
        Ok(records) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                params = %params,
                duration_us = start_time.elapsed().as_micros() as u64,
                "Temperature summary request successful"
            );
            Json(records).into_response()
        }
        Err(error) => error_response(error, endpoint, &request_id, Some(&params)),
    }
}

async fn run_summary(
    state: &AppState,
    start: String,
    end: Option<String>,
) -> Result<SummaryRecords> {
    if state.config.query.strict_dates {
        reports::validate_date("start", &start)?;
        if let Some(end) = &end {
            reports::validate_date("end", end)?;
        }
    }

    state
        .with_session(move |session| {
            reports::temperature_range(session, &start, end.as_deref())
        })
        .await
}
