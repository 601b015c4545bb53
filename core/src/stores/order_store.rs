// core/src/stores/order_store.rs

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{new_id, NewOrder, Order, OrderChanges, PopulatedOrder};
use crate::query::OrderQuery;
use crate::repository::{OrderRepository, ProductRepository};

/// CRUD and filtered listing over the `orders` collection. Single-order reads
/// resolve product references through the product repository.
#[derive(Clone)]
pub struct OrderStore {
  orders: Arc<dyn OrderRepository>,
  products: Arc<dyn ProductRepository>,
}

impl OrderStore {
  pub fn new(orders: Arc<dyn OrderRepository>, products: Arc<dyn ProductRepository>) -> Self {
    Self { orders, products }
  }

  /// Listed orders carry bare product ids.
  #[instrument(
    name = "order_store::list",
    skip(self),
    fields(offset = query.window.offset, limit = query.window.limit, product_id = ?query.product_id, status = ?query.status),
    err(Display)
  )]
  pub async fn list(&self, query: &OrderQuery) -> StoreResult<Vec<Order>> {
    self.orders.list_orders(query).await
  }

  #[instrument(name = "order_store::get", skip(self), err(level = "warn", Display))]
  pub async fn get(&self, id: &str) -> StoreResult<PopulatedOrder> {
    let order = self.find(id).await?;
    self.populate(order).await
  }

  #[instrument(name = "order_store::create", skip(self, fields), err(level = "warn", Display))]
  pub async fn create(&self, fields: NewOrder) -> StoreResult<PopulatedOrder> {
    let order = fields.into_order(new_id());
    order.validate()?;
    self.orders.insert_order(&order).await?;
    info!(order_id = %order.id, status = %order.status, "Order created.");
    self.populate(order).await
  }

  /// Status is not checked against the current one; any listed value is accepted.
  #[instrument(name = "order_store::edit", skip(self, changes), err(level = "warn", Display))]
  pub async fn edit(&self, id: &str, changes: OrderChanges) -> StoreResult<PopulatedOrder> {
    let mut order = self.find(id).await?;
    changes.apply_to(&mut order);
    order.validate()?;

    if !self.orders.replace_order(&order).await? {
      return Err(StoreError::not_found("Order", id));
    }
    info!(order_id = %id, status = %order.status, "Order updated.");
    self.populate(order).await
  }

  #[instrument(name = "order_store::destroy", skip(self), err(level = "warn", Display))]
  pub async fn destroy(&self, id: &str) -> StoreResult<()> {
    if self.orders.delete_order(id).await? == 0 {
      warn!("Order with ID {} not found for delete.", id);
      return Err(StoreError::not_found("Order", id));
    }
    info!(order_id = %id, "Order deleted.");
    Ok(())
  }

  async fn find(&self, id: &str) -> StoreResult<Order> {
    self.orders.get_order(id).await?.ok_or_else(|| {
      warn!("Order with ID {} not found.", id);
      StoreError::not_found("Order", id)
    })
  }

  async fn populate(&self, order: Order) -> StoreResult<PopulatedOrder> {
    let mut ids = order.products.clone();
    ids.sort();
    ids.dedup();
    let resolved: HashMap<_, _> = self
      .products
      .get_products_by_ids(&ids)
      .await?
      .into_iter()
      .map(|product| (product.id.clone(), product))
      .collect();
    Ok(order.populate(&resolved))
  }
}
