//! Entry point for the mock posts backend.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use mock_server::config::AppConfig;
use mock_server::observability::RequestIdMiddleware;
use mock_server::telemetry::{TelemetryConfig, init_telemetry};
use mock_server::{AppState, configure_routes};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    let seed = config.load_seed()?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        seeded = seed.len(),
        "Starting mock posts server"
    );

    let state = AppState::seeded(seed);

    HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
