//! Common test utilities for weather-api.
//!
//! This module provides shared utilities for testing the weather-api server.

pub mod assertions;
pub mod http_client;
pub mod test_data;
