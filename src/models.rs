//! Row and response types for the weather dataset.
//!
//! `Measurement` and `Station` mirror the two tables of the dataset. The
//! response types keep the established wire shape: every record is a
//! single-key object whose `date` value is a JSON array.

use serde::Serialize;

/// One station+date weather reading (table `measurement`)
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// Station identifier
    pub station: String,
    /// Observation date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation, missing on some days
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: f64,
}

/// A weather-recording site (table `station`)
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub station: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

/// A single-key record serialized as `{"date": <value>}`.
///
/// The value is whatever tuple the query produced, e.g. `[date, avg]` for the
/// daily series and `[min, avg, max]` for temperature summaries. Consumers
/// already depend on this shape, so it is kept as is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateRecord<T> {
    pub date: T,
}

impl<T> DateRecord<T> {
    pub fn new(date: T) -> Self {
        Self { date }
    }
}

/// A daily average, `(date, value)`
pub type DailyAverage = (String, Option<f64>);

/// Min/avg/max temperature over a date range.
///
/// All three are `None` when no measurement falls in the range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSummary {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl TemperatureSummary {
    /// The `[min, avg, max]` tuple used on the wire
    pub fn as_tuple(&self) -> (Option<f64>, Option<f64>, Option<f64>) {
        (self.min, self.avg, self.max)
    }
}

/// The station with the most measurement rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveStation {
    pub station: String,
    pub observations: i64,
}
