// core/src/models/order.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::{decode, reject_null_keys, Product, Violations};
use crate::error::{StoreError, StoreResult};

/// Progress of an order. CREATED → PENDING → COMPLETED is the intended flow,
/// but any value may be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
  #[default]
  Created,
  Pending,
  Completed,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 3] = [OrderStatus::Created, OrderStatus::Pending, OrderStatus::Completed];

  pub const fn as_str(&self) -> &'static str {
    match self {
      Self::Created => "CREATED",
      Self::Pending => "PENDING",
      Self::Completed => "COMPLETED",
    }
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for OrderStatus {
  type Err = StoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|status| status.as_str() == s)
      .ok_or_else(|| StoreError::Validation(format!("`{}` is not a valid order status", s)))
  }
}

/// An order as stored: product references are bare ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: String,
  pub buyer_email: String,
  pub products: Vec<String>,
  pub status: OrderStatus,
}

impl Order {
  pub fn references(&self, product_id: &str) -> bool {
    self.products.iter().any(|id| id == product_id)
  }

  pub fn validate(&self) -> StoreResult<()> {
    let mut violations = Violations::default();
    violations.require("buyerEmail", &self.buyer_email);
    for (idx, product_id) in self.products.iter().enumerate() {
      violations.require(&format!("products.{}", idx), product_id);
    }
    violations.into_result("Order")
  }

  /// Resolves product ids against `resolved`. Ids with no matching product are
  /// dropped; order and duplicates of the remaining references are kept.
  pub fn populate(self, resolved: &HashMap<String, Product>) -> PopulatedOrder {
    let missing = self.products.iter().filter(|id| !resolved.contains_key(*id)).count();
    if missing > 0 {
      tracing::debug!(order_id = %self.id, missing, "Order references products that no longer exist.");
    }
    PopulatedOrder {
      products: self.products.iter().filter_map(|id| resolved.get(id).cloned()).collect(),
      id: self.id,
      buyer_email: self.buyer_email,
      status: self.status,
    }
  }
}

/// An order with its product references replaced by the product documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulatedOrder {
  pub id: String,
  pub buyer_email: String,
  pub products: Vec<Product>,
  pub status: OrderStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
  pub buyer_email: String,
  pub products: Vec<String>,
  #[serde(default)]
  pub status: Option<OrderStatus>,
}

impl NewOrder {
  pub fn new(buyer_email: impl Into<String>, products: Vec<String>) -> Self {
    Self { buyer_email: buyer_email.into(), products, status: None }
  }

  pub fn from_json(value: serde_json::Value) -> StoreResult<Self> {
    decode("Order", value)
  }

  pub(crate) fn into_order(self, id: String) -> Order {
    Order {
      id,
      buyer_email: self.buyer_email,
      products: self.products,
      status: self.status.unwrap_or_default(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderChanges {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub buyer_email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub products: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<OrderStatus>,
}

impl OrderChanges {
  pub fn status(status: OrderStatus) -> Self {
    Self { status: Some(status), ..Self::default() }
  }

  /// Every order key is required, so `null` is rejected for all of them.
  pub fn from_json(value: serde_json::Value) -> StoreResult<Self> {
    reject_null_keys("Order", &value, &["buyerEmail", "products", "status"])?;
    decode("Order", value)
  }

  pub fn apply_to(self, order: &mut Order) {
    if let Some(buyer_email) = self.buyer_email {
      order.buyer_email = buyer_email;
    }
    if let Some(products) = self.products {
      order.products = products;
    }
    if let Some(status) = self.status {
      order.status = status;
    }
  }
}
