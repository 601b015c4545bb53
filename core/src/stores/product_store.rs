// core/src/stores/product_store.rs

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{new_id, NewProduct, Product, ProductChanges};
use crate::query::ProductQuery;
use crate::repository::ProductRepository;

/// CRUD and tag-filtered listing over the `products` collection.
#[derive(Clone)]
pub struct ProductStore {
  repo: Arc<dyn ProductRepository>,
}

impl ProductStore {
  pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
    Self { repo }
  }

  #[instrument(
    name = "product_store::list",
    skip(self),
    fields(offset = query.window.offset, limit = query.window.limit, tag = ?query.tag),
    err(Display)
  )]
  pub async fn list(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
    let products = self.repo.list_products(query).await?;
    debug!("Listed {} products.", products.len());
    Ok(products)
  }

  #[instrument(name = "product_store::get", skip(self), err(level = "warn", Display))]
  pub async fn get(&self, id: &str) -> StoreResult<Product> {
    self.repo.get_product(id).await?.ok_or_else(|| {
      warn!("Product with ID {} not found.", id);
      StoreError::not_found("Product", id)
    })
  }

  #[instrument(name = "product_store::create", skip(self, fields), err(level = "warn", Display))]
  pub async fn create(&self, fields: NewProduct) -> StoreResult<Product> {
    let product = fields.into_product(new_id());
    product.validate()?;
    self.repo.insert_product(&product).await?;
    info!(product_id = %product.id, "Product created.");
    Ok(product)
  }

  /// Overwrites the keys present in `changes`, then re-validates the whole document.
  #[instrument(name = "product_store::edit", skip(self, changes), err(level = "warn", Display))]
  pub async fn edit(&self, id: &str, changes: ProductChanges) -> StoreResult<Product> {
    let mut product = self.get(id).await?;
    if changes.is_empty() {
      debug!(product_id = %id, "Empty edit; nothing to write.");
      return Ok(product);
    }
    changes.apply_to(&mut product);
    product.validate()?;

    // Deleted between the read and the write.
    if !self.repo.replace_product(&product).await? {
      return Err(StoreError::not_found("Product", id));
    }
    info!(product_id = %id, "Product updated.");
    Ok(product)
  }

  /// Deleting a product that does not exist is not an error; the count is 0.
  #[instrument(name = "product_store::destroy", skip(self), err(level = "warn", Display))]
  pub async fn destroy(&self, id: &str) -> StoreResult<u64> {
    let deleted = self.repo.delete_product(id).await?;
    info!(product_id = %id, deleted, "Product delete processed.");
    Ok(deleted)
  }
}
