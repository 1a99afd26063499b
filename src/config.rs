//! Configuration management for weather-api.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, WeatherError};

/// Command-line arguments for weather-api
#[derive(Parser, Debug)]
#[command(name = "weather-api")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the SQLite weather database to serve [default: hawaii.sqlite]
    #[arg(env = "WEATHER_API_DATABASE")]
    pub database: Option<PathBuf>,

    /// Host address to bind to
    #[arg(short = 'H', long, env = "WEATHER_API_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "WEATHER_API_PORT")]
    pub port: Option<u16>,

    /// Reporting window in days, counted back from the latest measurement
    #[arg(long, env = "WEATHER_API_WINDOW_DAYS")]
    pub window_days: Option<i64>,

    /// Reject start/end path parameters that are not YYYY-MM-DD dates
    #[arg(long, env = "WEATHER_API_STRICT_DATES")]
    pub strict_dates: bool,

    /// Path to JSON configuration file
    #[arg(short, long, env = "WEATHER_API_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "WEATHER_API_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Query behaviour configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Days subtracted from the latest measurement date to get the cutoff
    #[serde(default = "default_window_days")]
    pub window_days: i64,

    /// Validate start/end dates instead of comparing them as opaque strings
    #[serde(default)]
    pub strict_dates: bool,

    /// Path to the SQLite database
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

/// Complete configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Query configuration
    #[serde(default)]
    pub query: QueryConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Build the configuration from already parsed arguments
    pub fn from_args(args: Args) -> Result<Self> {
        // Start with defaults
        let mut config = Config::default();

        // Load from JSON file if provided
        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        // Override with command-line arguments
        if let Some(host) = args.host {
            config.server.host = host;
        }
        if let Some(port) = args.port {
            config.server.port = port;
        }
        if let Some(window_days) = args.window_days {
            config.query.window_days = window_days;
        }
        if args.strict_dates {
            config.query.strict_dates = true;
        }
        if let Some(log_level) = args.log_level {
            config.log_level = log_level;
        }
        if let Some(database) = args.database {
            config.query.database_path = database;
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    fn load_from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        self.server = other.server;
        self.query = other.query;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.host.is_empty() {
            return Err(WeatherError::Config {
                message: "Server host cannot be empty".to_string(),
            });
        }

        // Validate port (0 is not a valid port for users)
        if self.server.port == 0 {
            return Err(WeatherError::Config {
                message: "Server port cannot be 0".to_string(),
            });
        }

        if self.query.database_path.as_os_str().is_empty() {
            return Err(WeatherError::Config {
                message: "Database path cannot be empty".to_string(),
            });
        }

        if self.query.window_days <= 0 {
            return Err(WeatherError::Config {
                message: format!(
                    "Invalid window: {} days. Must be a positive number of days",
                    self.query.window_days
                ),
            });
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(WeatherError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            query: QueryConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            strict_dates: false,
            database_path: default_database_path(),
        }
    }
}

// Default value functions for serde
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_window_days() -> i64 {
    365
}

fn default_database_path() -> PathBuf {
    PathBuf::from("hawaii.sqlite")
}

fn default_log_level() -> String {
    "info".to_string()
}
