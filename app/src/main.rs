// grubdash/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use grubdash::config::AppConfig;
use grubdash::state::AppState;
use grubdash::telemetry::init_tracing;
use grubdash::web::routes::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      // No subscriber yet; fall back to stderr.
      eprintln!("Failed to load application configuration: {}", e);
      std::process::exit(1);
    }
  };
  init_tracing(app_config.log_format);

  tracing::info!("Starting GrubDash server...");

  let app_state = match AppState::from_config(app_config) {
    Ok(state) => state,
    Err(e) => {
      tracing::error!(error = %e, "Failed to initialise application state.");
      std::process::exit(1);
    }
  };

  let server_address = app_state.config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
