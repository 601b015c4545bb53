// core/src/repository/mod.rs

//! The document-access contract the stores are written against.
//!
//! Repositories do plain reads and writes: filtering, id ordering and the
//! offset/limit window are theirs, validation and reference resolution are
//! left to the stores.

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::{Order, Product};
use crate::query::{OrderQuery, ProductQuery};

#[async_trait]
pub trait ProductRepository: Send + Sync {
  /// Products matching `query`, sorted by id ascending, windowed.
  async fn list_products(&self, query: &ProductQuery) -> StoreResult<Vec<Product>>;

  async fn get_product(&self, id: &str) -> StoreResult<Option<Product>>;

  /// Every stored product whose id is in `ids`, in no particular order.
  async fn get_products_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Product>>;

  async fn insert_product(&self, product: &Product) -> StoreResult<()>;

  /// Overwrites the stored document. Returns `false` if no document has that id.
  async fn replace_product(&self, product: &Product) -> StoreResult<bool>;

  /// Returns the number of documents removed.
  async fn delete_product(&self, id: &str) -> StoreResult<u64>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
  async fn list_orders(&self, query: &OrderQuery) -> StoreResult<Vec<Order>>;

  async fn get_order(&self, id: &str) -> StoreResult<Option<Order>>;

  async fn insert_order(&self, order: &Order) -> StoreResult<()>;

  async fn replace_order(&self, order: &Order) -> StoreResult<bool>;

  async fn delete_order(&self, id: &str) -> StoreResult<u64>;
}
