// app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use storefront::{ListWindow, NewProduct, ProductChanges, ProductQuery};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct ListProductsQuery {
  pub offset: Option<u64>,
  pub limit: Option<u64>,
  pub tag: Option<String>,
}

impl From<ListProductsQuery> for ProductQuery {
  fn from(q: ListProductsQuery) -> Self {
    ProductQuery::new(ListWindow::new(q.offset, q.limit), q.tag)
  }
}

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
  let query = ProductQuery::from(query_params.into_inner());
  let products = app_state.products.list(&query).await?;
  info!("Successfully fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.products.get(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  let fields = NewProduct::from_json(body.into_inner())?;
  let product = app_state.products.create(fields).await?;
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::edit_product", skip(app_state, path, body), fields(product_id = %path))]
pub async fn edit_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  let changes = ProductChanges::from_json(body.into_inner())?;
  let product = app_state.products.edit(&path.into_inner(), changes).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let deleted = app_state.products.destroy(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(json!({ "deleted": deleted })))
}
