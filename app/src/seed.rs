// app/src/seed.rs

//! Imports the static product fixture through the product store.

use anyhow::Context;
use std::path::Path;
use storefront::{NewProduct, ProductStore};
use tracing::{info, instrument};

#[instrument(name = "seed::import_products", skip(store, path), fields(path = %path.display()))]
pub async fn import_products(store: &ProductStore, path: &Path) -> anyhow::Result<usize> {
  let raw = tokio::fs::read_to_string(path)
    .await
    .with_context(|| format!("reading product fixture {}", path.display()))?;
  let entries: Vec<serde_json::Value> =
    serde_json::from_str(&raw).with_context(|| format!("parsing product fixture {}", path.display()))?;

  let total = entries.len();
  for (idx, entry) in entries.into_iter().enumerate() {
    let fields = NewProduct::from_json(entry).with_context(|| format!("fixture entry {}", idx))?;
    let product = store
      .create(fields)
      .await
      .with_context(|| format!("creating product from fixture entry {}", idx))?;
    info!(product_id = %product.id, "Seeded product {}/{}.", idx + 1, total);
  }
  Ok(total)
}
