// core/src/repository/postgres.rs

//! PostgreSQL backend. Products live as JSONB documents keyed by id; orders
//! are rows whose `products` column is a `TEXT[]` of product ids.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::{error, instrument};

use super::{OrderRepository, ProductRepository};
use crate::error::{StoreError, StoreResult};
use crate::models::{Order, Product};
use crate::query::{OrderQuery, ProductQuery};

/// Idempotent DDL run by `Database::migrate`, one statement per entry.
pub const SCHEMA: &[&str] = &[
  "CREATE TABLE IF NOT EXISTS products (
     id TEXT PRIMARY KEY,
     doc JSONB NOT NULL
   )",
  "CREATE INDEX IF NOT EXISTS products_tags_idx ON products USING GIN ((doc -> 'tags') jsonb_path_ops)",
  "CREATE TABLE IF NOT EXISTS orders (
     id TEXT PRIMARY KEY,
     buyer_email TEXT NOT NULL,
     products TEXT[] NOT NULL DEFAULT '{}',
     status TEXT NOT NULL DEFAULT 'CREATED' CHECK (status IN ('CREATED', 'PENDING', 'COMPLETED'))
   )",
  "CREATE INDEX IF NOT EXISTS orders_products_idx ON orders USING GIN (products)",
  "CREATE INDEX IF NOT EXISTS orders_status_idx ON orders (status)",
];

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
  pool: PgPool,
}

impl PgDocumentStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub fn pool(&self) -> &PgPool {
    &self.pool
  }

  #[instrument(name = "pg::migrate", skip(self), err(Display))]
  pub async fn migrate(&self) -> StoreResult<()> {
    for statement in SCHEMA {
      sqlx::query(*statement).execute(&self.pool).await.map_err(|e| {
        error!("Failed to apply schema statement: {}", e);
        StoreError::from(e)
      })?;
    }
    Ok(())
  }
}

#[derive(Debug, FromRow)]
struct ProductRow {
  doc: Json<Product>,
}

#[derive(Debug, FromRow)]
struct OrderRow {
  id: String,
  buyer_email: String,
  products: Vec<String>,
  status: String,
}

impl TryFrom<OrderRow> for Order {
  type Error = StoreError;

  fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
    let status = row
      .status
      .parse()
      .map_err(|_| StoreError::Corrupt(format!("order {} has status `{}`", row.id, row.status)))?;
    Ok(Order {
      id: row.id,
      buyer_email: row.buyer_email,
      products: row.products,
      status,
    })
  }
}

#[async_trait]
impl ProductRepository for PgDocumentStore {
  async fn list_products(&self, query: &ProductQuery) -> StoreResult<Vec<Product>> {
    let rows: Vec<ProductRow> = sqlx::query_as(
      "SELECT doc FROM products
       WHERE ($1::text IS NULL OR doc -> 'tags' @> jsonb_build_array(jsonb_build_object('title', $1::text)))
       ORDER BY id ASC
       OFFSET $2 LIMIT $3",
    )
    .bind(query.tag.as_deref())
    .bind(query.window.sql_offset())
    .bind(query.window.sql_limit())
    .fetch_all(&self.pool)
    .await?;
    Ok(rows.into_iter().map(|row| row.doc.0).collect())
  }

  async fn get_product(&self, id: &str) -> StoreResult<Option<Product>> {
    let row: Option<ProductRow> = sqlx::query_as("SELECT doc FROM products WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    Ok(row.map(|row| row.doc.0))
  }

  async fn get_products_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
    if ids.is_empty() {
      return Ok(Vec::new());
    }
    let rows: Vec<ProductRow> = sqlx::query_as("SELECT doc FROM products WHERE id = ANY($1)")
      .bind(ids)
      .fetch_all(&self.pool)
      .await?;
    Ok(rows.into_iter().map(|row| row.doc.0).collect())
  }

  async fn insert_product(&self, product: &Product) -> StoreResult<()> {
    sqlx::query("INSERT INTO products (id, doc) VALUES ($1, $2)")
      .bind(&product.id)
      .bind(Json(product))
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn replace_product(&self, product: &Product) -> StoreResult<bool> {
    let result = sqlx::query("UPDATE products SET doc = $2 WHERE id = $1")
      .bind(&product.id)
      .bind(Json(product))
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_product(&self, id: &str) -> StoreResult<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }
}

#[async_trait]
impl OrderRepository for PgDocumentStore {
  async fn list_orders(&self, query: &OrderQuery) -> StoreResult<Vec<Order>> {
    let rows: Vec<OrderRow> = sqlx::query_as(
      "SELECT id, buyer_email, products, status FROM orders
       WHERE ($1::text IS NULL OR $1::text = ANY(products))
         AND ($2::text IS NULL OR status = $2::text)
       ORDER BY id ASC
       OFFSET $3 LIMIT $4",
    )
    .bind(query.product_id.as_deref())
    .bind(query.status.map(|s| s.as_str()))
    .bind(query.window.sql_offset())
    .bind(query.window.sql_limit())
    .fetch_all(&self.pool)
    .await?;
    rows.into_iter().map(Order::try_from).collect()
  }

  async fn get_order(&self, id: &str) -> StoreResult<Option<Order>> {
    let row: Option<OrderRow> = sqlx::query_as("SELECT id, buyer_email, products, status FROM orders WHERE id = $1")
      .bind(id)
      .fetch_optional(&self.pool)
      .await?;
    row.map(Order::try_from).transpose()
  }

  async fn insert_order(&self, order: &Order) -> StoreResult<()> {
    sqlx::query("INSERT INTO orders (id, buyer_email, products, status) VALUES ($1, $2, $3, $4)")
      .bind(&order.id)
      .bind(&order.buyer_email)
      .bind(&order.products)
      .bind(order.status.as_str())
      .execute(&self.pool)
      .await?;
    Ok(())
  }

  async fn replace_order(&self, order: &Order) -> StoreResult<bool> {
    let result = sqlx::query("UPDATE orders SET buyer_email = $2, products = $3, status = $4 WHERE id = $1")
      .bind(&order.id)
      .bind(&order.buyer_email)
      .bind(&order.products)
      .bind(order.status.as_str())
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected() > 0)
  }

  async fn delete_order(&self, id: &str) -> StoreResult<u64> {
    let result = sqlx::query("DELETE FROM orders WHERE id = $1")
      .bind(id)
      .execute(&self.pool)
      .await?;
    Ok(result.rows_affected())
  }
}
