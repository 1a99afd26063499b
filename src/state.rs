//! Application state management for weather-api.
//!
//! This module defines the shared state that is passed to all handlers: the
//! configuration and the handle to the weather dataset. Handlers never reach
//! for a global connection; whatever `Database` the state carries is the one
//! they query, which is how tests swap in an in-memory dataset.

use std::sync::Arc;

use crate::config::Config;
use crate::db::{Database, Session};
use crate::error::{Result, WeatherError};

/// The main application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Weather dataset
    pub database: Database,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, database: Database) -> Self {
        Self { config, database }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, database: Database) -> Arc<Self> {
        Arc::new(Self::new(config, database))
    }

    /// Run `f` against a fresh session on the blocking thread pool.
    ///
    /// The session lives only inside the blocking closure and is closed
    /// before the result is handed back, whether `f` succeeds or fails.
    pub async fn with_session<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Session) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let database = self.database.clone();
        tokio::task::spawn_blocking(move || {
            let session = database.session()?;
            f(&session)
        })
        .await
        .map_err(|e| WeatherError::Server {
            message: format!("Query task failed: {}", e),
        })?
    }
}
