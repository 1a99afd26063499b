//! Test data generation utilities.
//!
//! This module writes SQLite weather databases with known contents for
//! testing the weather-api server. The schema matches the production
//! dataset: a `measurement` table of daily readings and a `station` table.

#![allow(dead_code)]

use rusqlite::{params, Connection, Result};
use std::path::Path;

use weather_api::{Measurement, Station};

const SCHEMA: &str = "
    CREATE TABLE measurement (
        id      INTEGER PRIMARY KEY,
        station TEXT,
        date    TEXT,
        prcp    FLOAT,
        tobs    FLOAT
    );
    CREATE TABLE station (
        id        INTEGER PRIMARY KEY,
        station   TEXT,
        name      TEXT,
        latitude  FLOAT,
        longitude FLOAT,
        elevation FLOAT
    );";

/// Station id with the most measurements in [`create_weather_db`]
pub const BUSIEST_STATION: &str = "USC00519281";

/// Latest measurement date in [`create_weather_db`]
pub const LAST_DATE: &str = "2017-08-23";

/// Cutoff of the default 365-day window for [`LAST_DATE`].
///
/// The window starts the day after this date.
pub const CUTOFF_DATE: &str = "2016-08-23";

pub fn station(id: &str, name: &str, latitude: f64, longitude: f64, elevation: f64) -> Station {
    Station {
        station: id.to_string(),
        name: name.to_string(),
        latitude,
        longitude,
        elevation,
    }
}

pub fn measurement(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Measurement {
    Measurement {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs,
    }
}

/// Writes a database holding exactly the given rows.
pub fn create_db(path: &Path, stations: &[Station], measurements: &[Measurement]) -> Result<()> {
    let mut conn = Connection::open(path)?;
    conn.execute_batch(SCHEMA)?;

    let tx = conn.transaction()?;
    for s in stations {
        tx.execute(
            "INSERT INTO station (station, name, latitude, longitude, elevation) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![s.station, s.name, s.latitude, s.longitude, s.elevation],
        )?;
    }
    for m in measurements {
        tx.execute(
            "INSERT INTO measurement (station, date, prcp, tobs) VALUES (?1, ?2, ?3, ?4)",
            params![m.station, m.date, m.prcp, m.tobs],
        )?;
    }
    tx.commit()
}

/// Writes a small Hawaii-like dataset.
///
/// Three stations; `USC00519281` reports every day of the last two weeks
/// and a few older days, the others report sporadically. Inside the window
/// there are readings on 2017-01-01 and 2017-08-10 through [`LAST_DATE`].
pub fn create_weather_db(path: &Path) -> Result<()> {
    let stations = vec![
        station("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
        station("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
        station("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
    ];

    let mut measurements = vec![
        // Before the window
        measurement("USC00519397", "2016-08-01", Some(0.5), 75.0),
        measurement(BUSIEST_STATION, "2016-08-22", Some(2.0), 65.0),
        // The cutoff day itself is outside the window
        measurement("USC00519397", CUTOFF_DATE, Some(0.0), 81.0),
        measurement("USC00513117", CUTOFF_DATE, Some(0.15), 76.0),
        measurement(BUSIEST_STATION, CUTOFF_DATE, Some(1.79), 77.0),
        measurement("USC00519397", "2017-01-01", None, 62.0),
        measurement("USC00513117", "2017-01-01", Some(0.29), 66.0),
        measurement("USC00519397", LAST_DATE, Some(0.0), 82.0),
    ];
    for day in 10..=23 {
        let tobs = 70.0 + (day % 7) as f64;
        let prcp = if day % 3 == 0 { None } else { Some(day as f64 / 100.0) };
        measurements.push(measurement(
            BUSIEST_STATION,
            &format!("2017-08-{:02}", day),
            prcp,
            tobs,
        ));
    }

    create_db(path, &stations, &measurements)
}

/// Writes a database with both tables but no rows.
pub fn create_empty_db(path: &Path) -> Result<()> {
    create_db(path, &[], &[])
}
