// app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use storefront::{ListWindow, NewOrder, OrderChanges, OrderQuery, OrderStatus};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ListOrdersQuery {
  pub offset: Option<u64>,
  pub limit: Option<u64>,
  pub product_id: Option<String>,
  // Parsed by hand so a bad value gets the JSON validation error body.
  pub status: Option<String>,
}

impl TryFrom<ListOrdersQuery> for OrderQuery {
  type Error = AppError;

  fn try_from(q: ListOrdersQuery) -> Result<Self, Self::Error> {
    let status = match q.status.as_deref() {
      None | Some("") => None,
      Some(raw) => Some(raw.parse::<OrderStatus>()?),
    };
    Ok(OrderQuery::new(ListWindow::new(q.offset, q.limit), q.product_id, status))
  }
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  query_params: web::Query<ListOrdersQuery>,
) -> Result<HttpResponse, AppError> {
  let query = OrderQuery::try_from(query_params.into_inner())?;
  let orders = app_state.orders.list(&query).await?;
  info!("Successfully fetched {} orders.", orders.len());
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let order = app_state.orders.get(&path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::create_order", skip(app_state, body))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  let fields = NewOrder::from_json(body.into_inner())?;
  let order = app_state.orders.create(fields).await?;
  Ok(HttpResponse::Created().json(order))
}

#[instrument(name = "handler::edit_order", skip(app_state, path, body), fields(order_id = %path))]
pub async fn edit_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: web::Json<serde_json::Value>,
) -> Result<HttpResponse, AppError> {
  let changes = OrderChanges::from_json(body.into_inner())?;
  let order = app_state.orders.edit(&path.into_inner(), changes).await?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::delete_order", skip(app_state, path), fields(order_id = %path))]
pub async fn delete_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  app_state.orders.destroy(&path.into_inner()).await?;
  Ok(HttpResponse::NoContent().finish())
}
