//! weather-api - A read-only JSON API over a SQLite weather dataset
//!
//! This is the main entry point for the weather-api application.

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use weather_api::{
    create_router, init_tracing, log_dataset_stats, log_error, log_timed_operation, AppState,
    Config, Database, Result, WeatherError,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = Config::load()?;

    init_tracing(&config.log_level);

    info!("Starting weather-api v{}", env!("CARGO_PKG_VERSION"));

    config.validate().map_err(|e| {
        log_error(&e, "configuration");
        e
    })?;

    let database_path = config.query.database_path.clone();
    info!("Opening weather database: {:?}", database_path);

    let database = log_timed_operation("dataset_open", || Database::open(&database_path))
        .map_err(|e| {
            log_error(&e, "opening weather database");
            e
        })?;

    {
        let session = database.session()?;
        log_dataset_stats(
            &database_path.display().to_string(),
            session.measurement_count()?,
            session.station_count()?,
            session.latest_date()?.as_deref(),
        );
    }

    let state = AppState::new_shared(config.clone(), database);
    let app = create_router(state);

    // Create the server address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| WeatherError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| WeatherError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {}", e);
            WeatherError::Server {
                message: format!("Server error: {}", e),
            }
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
