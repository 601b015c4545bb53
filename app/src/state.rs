// app/src/state.rs
use storefront::{Database, OrderStore, ProductStore};

/// Shared with every handler through `web::Data`. Cloning is cheap: the stores
/// and the handle all point at the same backend.
#[derive(Clone)]
pub struct AppState {
  pub db: Database,
  pub products: ProductStore,
  pub orders: OrderStore,
}

impl AppState {
  pub fn new(db: Database) -> Self {
    Self {
      products: db.products(),
      orders: db.orders(),
      db,
    }
  }
}
