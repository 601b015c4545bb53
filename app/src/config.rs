// app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use storefront::db::{DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS};

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,

  // Import the product fixture on startup
  pub seed_db: bool,
  pub products_fixture: PathBuf,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      server_host: "127.0.0.1".to_string(),
      server_port: 3000,
      database_url: DEFAULT_DATABASE_URL.to_string(),
      database_max_connections: DEFAULT_MAX_CONNECTIONS,
      seed_db: false,
      products_fixture: PathBuf::from("data/full-products.json"),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the config from any variable source; unset variables fall back to the defaults.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let defaults = Self::default();

    let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
    let server_port = match lookup("SERVER_PORT") {
      Some(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      None => defaults.server_port,
    };
    let database_url = lookup("DATABASE_URL")
      .filter(|url| !url.trim().is_empty())
      .unwrap_or(defaults.database_url);
    let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
      Some(raw) => raw
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", raw)))?,
      None => defaults.database_max_connections,
    };
    let seed_db = match lookup("SEED_DB") {
      Some(raw) => raw
        .parse::<bool>()
        .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?,
      None => defaults.seed_db,
    };
    let products_fixture = lookup("PRODUCTS_FIXTURE")
      .map(PathBuf::from)
      .unwrap_or(defaults.products_fixture);

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
      seed_db,
      products_fixture,
    })
  }

  pub fn server_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
