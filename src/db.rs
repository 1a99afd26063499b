//! Database access for the weather dataset.
//!
//! [`Database`] is a cheap, cloneable handle describing where the dataset
//! lives. Every request opens its own [`Session`] from it; the session owns a
//! SQLite connection, so dropping it (on success, on error, or on panic
//! unwinding) closes the connection. All SQL the service runs lives on
//! `Session`.

use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, trace};

use crate::error::{Result, WeatherError};
use crate::models::{ActiveStation, DailyAverage, TemperatureSummary};

/// Tables the service reads from
pub const REQUIRED_TABLES: [&str; 2] = ["measurement", "station"];

enum Source {
    /// A SQLite file, opened read-only per session
    File(PathBuf),
    /// A named shared-cache in-memory database.
    ///
    /// The anchor connection is never queried; SQLite frees the database
    /// once its last connection closes.
    SharedMemory {
        uri: String,
        _anchor: Mutex<Connection>,
    },
}

/// Handle to the weather dataset, shared by all handlers
#[derive(Clone)]
pub struct Database {
    source: Arc<Source>,
}

impl fmt::Debug for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source.as_ref() {
            Source::File(path) => f.debug_tuple("Database::File").field(path).finish(),
            Source::SharedMemory { uri, .. } => {
                f.debug_tuple("Database::SharedMemory").field(uri).finish()
            }
        }
    }
}

impl Database {
    /// Open a SQLite file and check that it holds the expected tables.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WeatherError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database file not found: {}", path.display()),
            )));
        }

        let database = Self {
            source: Arc::new(Source::File(path.to_path_buf())),
        };
        database.validate()?;

        debug!("Opened weather database: {}", path.display());
        Ok(database)
    }

    /// Create a named in-memory database populated by `setup`.
    ///
    /// Sessions opened from the returned handle see whatever `setup` wrote.
    /// Names must be unique per process unless sharing is intended.
    pub fn in_memory<F>(name: &str, setup: F) -> Result<Self>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<()>,
    {
        let uri = format!("file:{}?mode=memory&cache=shared", name);
        let anchor = Connection::open_with_flags(&uri, Self::memory_flags())?;
        setup(&anchor)?;

        let database = Self {
            source: Arc::new(Source::SharedMemory {
                uri,
                _anchor: Mutex::new(anchor),
            }),
        };
        database.validate()?;

        Ok(database)
    }

    /// Open a new session against the dataset.
    pub fn session(&self) -> Result<Session> {
        let conn = match self.source.as_ref() {
            Source::File(path) => Connection::open_with_flags(
                path,
                OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            ),
            Source::SharedMemory { uri, .. } => {
                Connection::open_with_flags(uri, Self::memory_flags())
            }
        }
        .map_err(|e| WeatherError::DatabaseUnavailable {
            message: e.to_string(),
        })?;

        trace!("Database session opened");
        Ok(Session { conn })
    }

    /// Check that every table the queries need is present
    pub fn validate(&self) -> Result<()> {
        let session = self.session()?;
        for table in REQUIRED_TABLES {
            if !session.table_exists(table)? {
                return Err(WeatherError::DataNotFound {
                    message: format!("Table '{}' not found in weather database", table),
                });
            }
        }
        Ok(())
    }

    fn memory_flags() -> OpenFlags {
        OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX
    }
}

/// A per-request connection to the dataset
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Whether a table with this name exists
    pub fn table_exists(&self, name: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            params![name],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// The most recent measurement date, `None` for an empty dataset
    pub fn latest_date(&self) -> Result<Option<String>> {
        let date = self
            .conn
            .query_row(
                "SELECT date FROM measurement ORDER BY date DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?;
        Ok(date)
    }

    /// Average precipitation per day for every date after `cutoff`.
    ///
    /// The cutoff day itself is not part of the window.
    pub fn average_precipitation_after(&self, cutoff: &str) -> Result<Vec<DailyAverage>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, AVG(prcp) FROM measurement \
             WHERE date > ?1 \
             GROUP BY date \
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![cutoff], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<rusqlite::Result<Vec<DailyAverage>>>()?;
        Ok(rows)
    }

    /// Identifiers of every row in the station table
    pub fn station_ids(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT station FROM station")?;
        let rows = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
    }

    /// The station with the most measurement rows.
    ///
    /// Equal counts resolve to the lexically smallest station id.
    pub fn most_active_station(&self) -> Result<Option<ActiveStation>> {
        let station = self
            .conn
            .query_row(
                "SELECT station, COUNT(station) AS observations FROM measurement \
                 GROUP BY station \
                 ORDER BY observations DESC, station ASC \
                 LIMIT 1",
                [],
                |row| {
                    Ok(ActiveStation {
                        station: row.get(0)?,
                        observations: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(station)
    }

    /// Average observed temperature per day at one station, after `cutoff`
    pub fn average_temperature_after(
        &self,
        station: &str,
        cutoff: &str,
    ) -> Result<Vec<DailyAverage>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, AVG(tobs) FROM measurement \
             WHERE station = ?1 AND date > ?2 \
             GROUP BY date \
             ORDER BY date",
        )?;
        let rows = stmt
            .query_map(params![station, cutoff], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })?
            .collect::<rusqlite::Result<Vec<DailyAverage>>>()?;
        Ok(rows)
    }

    /// Min/avg/max temperature for `start <= date [<= end]`.
    ///
    /// Bounds are compared as strings, exactly as stored.
    pub fn temperature_summary(&self, start: &str, end: Option<&str>) -> Result<TemperatureSummary> {
        let map_row = |row: &rusqlite::Row<'_>| {
            Ok(TemperatureSummary {
                min: row.get(0)?,
                avg: row.get(1)?,
                max: row.get(2)?,
            })
        };

        let summary = match end {
            Some(end) => self.conn.query_row(
                "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
                 WHERE date >= ?1 AND date <= ?2",
                params![start, end],
                map_row,
            )?,
            None => self.conn.query_row(
                "SELECT MIN(tobs), AVG(tobs), MAX(tobs) FROM measurement \
                 WHERE date >= ?1",
                params![start],
                map_row,
            )?,
        };
        Ok(summary)
    }

    /// Number of measurement rows
    pub fn measurement_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM measurement", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of station rows
    pub fn station_count(&self) -> Result<i64> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM station", [], |row| row.get(0))?;
        Ok(count)
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        trace!("Database session closed");
    }
}
