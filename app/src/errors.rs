// app/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Service Unavailable: {0}")]
  Unavailable(String),

  #[error("Store Error: {0}")]
  Store(StoreError),
}

impl From<StoreError> for AppError {
  fn from(err: StoreError) -> Self {
    match err {
      StoreError::Validation(m) => AppError::Validation(m),
      StoreError::NotFound { .. } => AppError::NotFound(err.to_string()),
      StoreError::Connection(m) => AppError::Unavailable(m),
      other => AppError::Store(other),
    }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) => {
        tracing::warn!(application_error = %self, "Rejecting request");
        HttpResponse::BadRequest().json(json!({"error": m}))
      }
      AppError::NotFound(m) => {
        tracing::warn!(application_error = %self, "Rejecting request");
        HttpResponse::NotFound().json(json!({"error": m}))
      }
      AppError::Config(m) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
      AppError::Unavailable(_) => {
        tracing::error!(application_error = %self, "Responding with error");
        HttpResponse::ServiceUnavailable().json(json!({"error": "Database unavailable"}))
      }
      AppError::Store(source) => {
        tracing::error!(store_error = ?source, "Responding with error");
        HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"}))
      }
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;

  #[test]
  fn store_errors_map_to_status_codes() {
    let cases = [
      (StoreError::Validation("bad".into()), StatusCode::BAD_REQUEST),
      (StoreError::not_found("Order", "x"), StatusCode::NOT_FOUND),
      (StoreError::Connection("down".into()), StatusCode::SERVICE_UNAVAILABLE),
      (StoreError::Corrupt("bad row".into()), StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (store_err, status) in cases {
      assert_eq!(AppError::from(store_err).error_response().status(), status);
    }
  }
}
