// core/src/query.rs

//! List filters and the offset/limit window applied after filtering and id ordering.

use crate::models::{Order, OrderStatus, Product};

pub const DEFAULT_OFFSET: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
  pub offset: u64,
  pub limit: u64,
}

impl Default for ListWindow {
  fn default() -> Self {
    Self { offset: DEFAULT_OFFSET, limit: DEFAULT_LIMIT }
  }
}

impl ListWindow {
  pub fn new(offset: Option<u64>, limit: Option<u64>) -> Self {
    Self {
      offset: offset.unwrap_or(DEFAULT_OFFSET),
      limit: limit.unwrap_or(DEFAULT_LIMIT),
    }
  }

  /// Skips `offset` items of an already filtered, id-ordered sequence and keeps at most `limit`.
  pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
    items
      .into_iter()
      .skip(usize::try_from(self.offset).unwrap_or(usize::MAX))
      .take(usize::try_from(self.limit).unwrap_or(usize::MAX))
      .collect()
  }

  // Postgres OFFSET/LIMIT are BIGINT.
  pub(crate) fn sql_offset(&self) -> i64 {
    i64::try_from(self.offset).unwrap_or(i64::MAX)
  }

  pub(crate) fn sql_limit(&self) -> i64 {
    i64::try_from(self.limit).unwrap_or(i64::MAX)
  }
}

// An empty filter value means "no filter", same as an absent one.
fn non_empty(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
  pub window: ListWindow,
  pub tag: Option<String>,
}

impl ProductQuery {
  pub fn new(window: ListWindow, tag: Option<String>) -> Self {
    Self { window, tag: non_empty(tag) }
  }

  pub fn tagged(tag: impl Into<String>) -> Self {
    Self::new(ListWindow::default(), Some(tag.into()))
  }

  pub fn matches(&self, product: &Product) -> bool {
    self.tag.as_deref().map_or(true, |tag| product.has_tag(tag))
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderQuery {
  pub window: ListWindow,
  pub product_id: Option<String>,
  pub status: Option<OrderStatus>,
}

impl OrderQuery {
  pub fn new(window: ListWindow, product_id: Option<String>, status: Option<OrderStatus>) -> Self {
    Self { window, product_id: non_empty(product_id), status }
  }

  pub fn matches(&self, order: &Order) -> bool {
    let product_ok = self.product_id.as_deref().map_or(true, |id| order.references(id));
    let status_ok = self.status.map_or(true, |status| order.status == status);
    product_ok && status_ok
  }
}
