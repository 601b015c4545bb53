// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Validation failed: {0}")]
  Validation(String),

  #[error("{entity} with id {id} not found")]
  NotFound { entity: &'static str, id: String },

  #[error("Document store unreachable: {0}")]
  Connection(String),

  #[error("Database error: {0}")]
  Database(#[source] sqlx::Error),

  // A stored document that no longer decodes into its model.
  #[error("Stored document is corrupt: {0}")]
  Corrupt(String),
}

impl StoreError {
  pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
    StoreError::NotFound { entity, id: id.into() }
  }

  pub fn is_not_found(&self) -> bool {
    matches!(self, StoreError::NotFound { .. })
  }
}

// Pool-level failures mean the backend itself is gone; everything else is an operation failure.
impl From<sqlx::Error> for StoreError {
  fn from(err: sqlx::Error) -> Self {
    match err {
      sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) | sqlx::Error::Tls(_) => {
        StoreError::Connection(err.to_string())
      }
      sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => StoreError::Corrupt(err.to_string()),
      other => StoreError::Database(other),
    }
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pool_errors_map_to_connection() {
    assert!(matches!(StoreError::from(sqlx::Error::PoolTimedOut), StoreError::Connection(_)));
    assert!(matches!(StoreError::from(sqlx::Error::RowNotFound), StoreError::Database(_)));
  }

  #[test]
  fn undecodable_documents_map_to_corrupt() {
    let err = StoreError::from(sqlx::Error::ColumnDecode {
      index: "\"doc\"".to_string(),
      source: "missing field `urls`".into(),
    });
    assert!(matches!(err, StoreError::Corrupt(ref m) if m.contains("urls")), "{err}");
    assert!(matches!(StoreError::from(sqlx::Error::Decode("bad".into())), StoreError::Corrupt(_)));
  }

  #[test]
  fn not_found_message_names_entity_and_id() {
    let err = StoreError::not_found("Order", "abc");
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Order with id abc not found");
  }
}
