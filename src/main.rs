//! Status relay binary

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use status_relay::{controllers, AppState, Config, RelayError, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
async fn main() -> Result<()> {
    dotenv().ok();
    initialize_tracing()?;

    info!("Starting status relay v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        return Err(RelayError::Config(e));
    }

    info!(
        "Relay configuration - Service: {}, Storage: {}, Peer: {}, Timeout: {}s",
        config.service_name,
        config.storage_base(),
        config.peer_base().as_deref().unwrap_or("disabled"),
        config.http_timeout_seconds
    );

    if let Some(path) = &config.local_log_path {
        info!("Appending status lines to {}", path.display());
    }

    let state = web::Data::new(AppState::from_config(&config)?);

    info!("Listening on {}:{}", config.bind_addr, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(controllers::configure)
    })
    .bind((config.bind_addr.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}

/// Initialize structured logging
fn initialize_tracing() -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .json();

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&log_level))
        .map_err(|e| RelayError::Config(format!("invalid RUST_LOG filter: {}", e)))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    Ok(())
}
