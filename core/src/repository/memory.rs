// core/src/repository/memory.rs

//! In-process backend. `BTreeMap` keeps both collections in id order, so
//! listing is a filtered scan followed by the window.
//!
//! Lock guards are taken and dropped inside each call and never live across an `.await`.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::{event, Level};

use super::{OrderRepository, ProductRepository};
use crate::error::{StoreError, StoreResult};
use crate::models::{Order, Product};
use crate::query::{OrderQuery, ProductQuery};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
  products: RwLock<BTreeMap<String, Product>>,
  orders: RwLock<BTreeMap<String, Order>>,
}

impl MemoryDocumentStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn product_count(&self) -> usize {
    self.products.read().len()
  }

  pub fn order_count(&self) -> usize {
    self.orders.read().len()
  }
}

fn insert_unique<T>(collection: &RwLock<BTreeMap<String, T>>, id: &str, doc: &T) -> StoreResult<()>
where
  T: Clone,
{
  let mut guard = collection.write();
  if guard.contains_key(id) {
    return Err(StoreError::Validation(format!("duplicate id {}", id)));
  }
  guard.insert(id.to_string(), doc.clone());
  Ok(())
}

fn replace_existing<T>(collection: &RwLock<BTreeMap<String, T>>, id: &str, doc: &T) -> bool
where
  T: Clone,
{
  match collection.write().get_mut(id) {
    Some(slot) => {
      *slot = doc.clone();
      true
    }
    None => false,
  }
}

#[async_trait]
impl ProductRepository for MemoryDocumentStore {
  async fn list_products(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
    let guard = self.products.read();
    let products = query.window.slice(guard.values().filter(|p| query.matches(p)).cloned());
    event!(Level::TRACE, returned = products.len(), "memory: listed products");
    Ok(products)
  }

  async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
    Ok(self.products.read().get(id).cloned())
  }

  async fn get_products_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
    let guard = self.products.read();
    Ok(ids.iter().filter_map(|id| guard.get(id).cloned()).collect())
  }

  async fn insert_product(&self, product: &Product) -> StoreResult<()> {
    insert_unique(&self.products, &product.id, product)
  }

  async fn replace_product(&self, product: &Product) -> StoreResult<bool> {
    Ok(replace_existing(&self.products, &product.id, product))
  }

  async fn delete_product(&self, id: &str) -> StoreResult<u64> {
    Ok(u64::from(self.products.write().remove(id).is_some()))
  }
}

#[async_trait]
impl OrderRepository for MemoryDocumentStore {
  async fn list_orders(&self, query: &OrderQuery) -> StoreResult<Vec<Order>> {
    let guard = self.orders.read();
    Ok(query.window.slice(guard.values().filter(|o| query.matches(o)).cloned()))
  }

  async fn get_order(&self, id: &str) -> StoreResult<Option<Order>> {
    Ok(self.orders.read().get(id).cloned())
  }

  async fn insert_order(&self, order: &Order) -> StoreResult<()> {
    insert_unique(&self.orders, &order.id, order)
  }

  async fn replace_order(&self, order: &Order) -> StoreResult<bool> {
    Ok(replace_existing(&self.orders, &order.id, order))
  }

  async fn delete_order(&self, id: &str) -> StoreResult<u64> {
    Ok(u64::from(self.orders.write().remove(id).is_some()))
  }
}
