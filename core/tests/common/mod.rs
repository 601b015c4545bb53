// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use once_cell::sync::Lazy;
use std::sync::Arc;
use storefront::{
  Links, MemoryDocumentStore, NewOrder, NewProduct, OrderStore, ProductStore, ProductUser, Tag, Urls,
};
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Stores over a fresh in-memory backend ---
pub struct Harness {
  pub backend: Arc<MemoryDocumentStore>,
  pub products: ProductStore,
  pub orders: OrderStore,
}

pub fn harness() -> Harness {
  setup_tracing();
  let backend = Arc::new(MemoryDocumentStore::new());
  Harness {
    products: ProductStore::new(backend.clone()),
    orders: OrderStore::new(backend.clone(), backend.clone()),
    backend,
  }
}

// --- Fixture builders ---
pub fn new_product(likes: i64, tags: &[&str]) -> NewProduct {
  NewProduct {
    description: Some(format!("Photo with {} likes", likes)),
    alt_description: None,
    likes,
    urls: Urls {
      regular: "https://images.example.com/regular.jpg".to_string(),
      small: "https://images.example.com/small.jpg".to_string(),
      thumb: "https://images.example.com/thumb.jpg".to_string(),
    },
    links: Links {
      self_link: "https://api.example.com/photos/1".to_string(),
      html: "https://example.com/photos/1".to_string(),
    },
    user: ProductUser {
      id: "user-1".to_string(),
      first_name: "Ansel".to_string(),
      last_name: Some("Adams".to_string()),
      portfolio_url: None,
      username: "ansel".to_string(),
    },
    tags: tags.iter().map(|t| Tag::new(*t)).collect(),
  }
}

pub fn new_order(email: &str, products: &[&str]) -> NewOrder {
  NewOrder::new(email, products.iter().map(|p| p.to_string()).collect())
}
