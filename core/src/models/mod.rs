// core/src/models/mod.rs

//! Document shapes stored in the `products` and `orders` collections,
//! plus the create/edit payloads accepted by the stores.

pub mod order;
pub mod product;

pub use order::{NewOrder, Order, OrderChanges, OrderStatus, PopulatedOrder};
pub use product::{Links, NewProduct, Product, ProductChanges, ProductUser, Tag, Urls};

use crate::error::StoreError;

/// Generates a fresh document id.
pub(crate) fn new_id() -> String {
  uuid::Uuid::new_v4().to_string()
}

/// Collects "is required" violations so a caller sees every missing field at once.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
  pub(crate) fn require(&mut self, path: &str, value: &str) {
    if value.trim().is_empty() {
      self.0.push(format!("{} is required", path));
    }
  }

  pub(crate) fn into_result(self, entity: &str) -> Result<(), StoreError> {
    if self.0.is_empty() {
      Ok(())
    } else {
      Err(StoreError::Validation(format!("{} validation failed: {}", entity, self.0.join("; "))))
    }
  }
}

/// Sparse edits may not null out a required key; only optional keys can be cleared.
pub(crate) fn reject_null_keys(entity: &str, value: &serde_json::Value, required: &[&str]) -> Result<(), StoreError> {
  let Some(fields) = value.as_object() else {
    return Ok(());
  };
  let mut violations = Violations::default();
  for key in required {
    if fields.get(*key).is_some_and(serde_json::Value::is_null) {
      violations.0.push(format!("{} may not be null", key));
    }
  }
  violations.into_result(entity)
}

/// Three-state field: absent is `None`, `null` is `Some(None)`, a value is `Some(Some(v))`.
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  D: serde::Deserializer<'de>,
  T: serde::Deserialize<'de>,
{
  <Option<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(entity: &str, value: serde_json::Value) -> Result<T, StoreError> {
  serde_json::from_value(value).map_err(|e| StoreError::Validation(format!("{} validation failed: {}", entity, e)))
}
