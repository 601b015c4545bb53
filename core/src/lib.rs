// core/src/lib.rs

//! Storefront: product and order stores for a small e-commerce backend.
//!
//! The crate is organised leaf first:
//!  - `models`: the product and order documents, their create payloads and sparse edits.
//!  - `query`: list filters and the offset/limit window.
//!  - `repository`: the document-access contract, with PostgreSQL and in-memory backends.
//!  - `db`: the shared persistence handle opened once at startup.
//!  - `stores`: `ProductStore` and `OrderStore`, the operations the HTTP layer calls.

pub mod db;
pub mod error;
pub mod models;
pub mod query;
pub mod repository;
pub mod stores;

pub use crate::db::{Database, DEFAULT_DATABASE_URL};
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{
  Links, NewOrder, NewProduct, Order, OrderChanges, OrderStatus, PopulatedOrder, Product, ProductChanges, ProductUser,
  Tag, Urls,
};
pub use crate::query::{ListWindow, OrderQuery, ProductQuery};
pub use crate::repository::{MemoryDocumentStore, OrderRepository, PgDocumentStore, ProductRepository};
pub use crate::stores::{OrderStore, ProductStore};
