// app/src/main.rs

mod config;
mod errors;
mod seed;
mod state;
mod web;

use crate::config::AppConfig;
use crate::state::AppState;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use storefront::Database;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting storefront server...");

  let app_config = AppConfig::from_env().map_err(|e| {
    tracing::error!(error = %e, "Failed to load application configuration.");
    e
  })?;

  // Opened once; every worker shares this handle.
  let db = Database::connect_with(&app_config.database_url, app_config.database_max_connections)
    .await
    .context("connecting to the document store")?;
  db.migrate().await.context("creating collections")?;

  let app_state = AppState::new(db.clone());

  if app_config.seed_db {
    let imported = seed::import_products(&app_state.products, &app_config.products_fixture).await?;
    tracing::info!("Database seeded with {} products.", imported);
  }

  let server_address = app_config.server_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(web::cors_headers())
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("binding {}", server_address))?
  .run()
  .await?;

  db.close().await;
  tracing::info!("Server stopped.");
  Ok(())
}
