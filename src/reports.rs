//! Report assembly on top of [`Session`] queries.
//!
//! Each function runs the queries for one endpoint and reshapes the rows into
//! the records the API returns. The reporting window always ends at the
//! latest measurement in the dataset, not at today's date, and starts the day
//! after the cutoff.

use chrono::{Duration, NaiveDate};

use crate::db::Session;
use crate::error::{Result, WeatherError};
use crate::models::{DailyAverage, DateRecord, TemperatureSummary};

/// Date format used by the dataset and the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Records of the `[date, average]` daily series
pub type DailySeries = Vec<DateRecord<DailyAverage>>;

/// Records of the `[min, avg, max]` temperature summary
pub type SummaryRecords = Vec<DateRecord<(Option<f64>, Option<f64>, Option<f64>)>>;

/// Subtract `window_days` calendar days from a `YYYY-MM-DD` date
pub fn cutoff_date(last_date: &str, window_days: i64) -> Result<String> {
    let last = NaiveDate::parse_from_str(last_date, DATE_FORMAT).map_err(|e| {
        WeatherError::InvalidData {
            message: format!("Latest measurement date '{}' is not a date: {}", last_date, e),
        }
    })?;

    let cutoff = Duration::try_days(window_days)
        .and_then(|window| last.checked_sub_signed(window))
        .ok_or_else(|| WeatherError::InvalidData {
            message: format!("Cannot subtract {} days from {}", window_days, last_date),
        })?;

    Ok(cutoff.format(DATE_FORMAT).to_string())
}

/// Cutoff of the reporting window ending at the latest measurement
pub fn window_cutoff(session: &Session, window_days: i64) -> Result<String> {
    let last_date = session
        .latest_date()?
        .ok_or_else(|| WeatherError::EmptyDataset {
            message: "no measurements to find the latest date from".to_string(),
        })?;
    cutoff_date(&last_date, window_days)
}

/// Average precipitation per day over the reporting window
pub fn precipitation(session: &Session, window_days: i64) -> Result<DailySeries> {
    let cutoff = window_cutoff(session, window_days)?;
    let rows = session.average_precipitation_after(&cutoff)?;
    Ok(rows.into_iter().map(DateRecord::new).collect())
}

/// Every station identifier
pub fn stations(session: &Session) -> Result<Vec<String>> {
    session.station_ids()
}

/// Average temperature per day at the most active station over the window
pub fn tobs(session: &Session, window_days: i64) -> Result<DailySeries> {
    let cutoff = window_cutoff(session, window_days)?;
    let active = session
        .most_active_station()?
        .ok_or_else(|| WeatherError::EmptyDataset {
            message: "no measurements to rank stations by".to_string(),
        })?;

    tracing::debug!(
        station = %active.station,
        observations = active.observations,
        cutoff = %cutoff,
        "Selected most active station"
    );

    let rows = session.average_temperature_after(&active.station, &cutoff)?;
    Ok(rows.into_iter().map(DateRecord::new).collect())
}

/// Min/avg/max temperature from `start`, optionally up to `end`
pub fn temperature_range(session: &Session, start: &str, end: Option<&str>) -> Result<SummaryRecords> {
    let summary: TemperatureSummary = session.temperature_summary(start, end)?;
    Ok(vec![DateRecord::new(summary.as_tuple())])
}

/// Check that a path parameter is a `YYYY-MM-DD` date
pub fn validate_date(param: &str, value: &str) -> Result<()> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map(|_| ())
        .map_err(|_| WeatherError::InvalidParameter {
            param: param.to_string(),
            message: format!("'{}' is not a date in YYYY-MM-DD format", value),
        })
}
