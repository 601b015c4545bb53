// app/src/web/routes.rs

use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::state::AppState;
use crate::web::handlers::{order_handlers, product_handlers};

async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({
    "service": "storefront",
    "resources": ["/products", "/orders"],
  }))
}

async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({ "status": "ok", "backend": app_state.db.backend_name() }))
}

/// Permissive CORS headers added to every response.
pub fn cors_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add(("Access-Control-Allow-Origin", "*"))
    .add(("Access-Control-Allow-Methods", "GET, POST, PUT, DELETE, OPTIONS"))
    .add(("Access-Control-Allow-Headers", "Content-Type, Accept, X-Requested-With"))
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(root_handler))
    .route("/health", web::get().to(health_check_handler))
    .service(
      web::scope("/products")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        .route("/{product_id}", web::get().to(product_handlers::get_product_handler))
        .route("/{product_id}", web::put().to(product_handlers::edit_product_handler))
        .route("/{product_id}", web::delete().to(product_handlers::delete_product_handler)),
    )
    .service(
      web::scope("/orders")
        .route("", web::get().to(order_handlers::list_orders_handler))
        .route("", web::post().to(order_handlers::create_order_handler))
        .route("/{order_id}", web::get().to(order_handlers::get_order_handler))
        .route("/{order_id}", web::put().to(order_handlers::edit_order_handler))
        .route("/{order_id}", web::delete().to(order_handlers::delete_order_handler)),
    );
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::http::StatusCode;
  use actix_web::{test, App};
  use serde_json::Value;
  use storefront::Database;

  fn product_body(likes: i64, tag: &str) -> Value {
    json!({
      "likes": likes,
      "urls": { "regular": "r.jpg", "small": "s.jpg", "thumb": "t.jpg" },
      "links": { "self": "https://api/p", "html": "https://p" },
      "user": { "id": "u1", "first_name": "Dora", "username": "dora" },
      "tags": [{ "title": tag }]
    })
  }

  macro_rules! test_app {
    () => {
      test::init_service(
        App::new()
          .app_data(web::Data::new(AppState::new(Database::in_memory())))
          .wrap(cors_headers())
          .configure(configure_app_routes),
      )
      .await
    };
  }

  #[actix_web::test]
  async fn product_crud_round_trip() {
    let app = test_app!();

    let req = test::TestRequest::post().uri("/products").set_json(product_body(5, "nature")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get().uri("/products?tag=nature").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/products?tag=urban").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert!(listed.as_array().unwrap().is_empty());

    let req = test::TestRequest::put()
      .uri(&format!("/products/{}", id))
      .set_json(json!({ "likes": 11 }))
      .to_request();
    let edited: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(edited["likes"], 11);
    assert_eq!(edited["user"]["username"], "dora");

    let req = test::TestRequest::delete().uri(&format!("/products/{}", id)).to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["deleted"], 1);

    let req = test::TestRequest::get().uri(&format!("/products/{}", id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::delete().uri(&format!("/products/{}", id)).to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["deleted"], 0);
  }

  #[actix_web::test]
  async fn invalid_product_is_bad_request() {
    let app = test_app!();
    let req = test::TestRequest::post().uri("/products").set_json(json!({ "likes": 1 })).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Product validation failed"));
  }

  #[actix_web::test]
  async fn order_lifecycle() {
    let app = test_app!();

    let req = test::TestRequest::post().uri("/products").set_json(product_body(3, "city")).to_request();
    let product: Value = test::call_and_read_body_json(&app, req).await;
    let product_id = product["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
      .uri("/orders")
      .set_json(json!({ "buyerEmail": "a@b.com", "products": [product_id] }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let order: Value = test::read_body_json(resp).await;
    assert_eq!(order["status"], "CREATED");
    assert_eq!(order["products"][0]["id"], product_id.as_str());
    let order_id = order["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
      .uri(&format!("/orders?productId={}&status=CREATED", product_id))
      .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed[0]["products"][0], product_id.as_str());

    let req = test::TestRequest::get().uri("/orders?status=SHIPPED").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
      .uri(&format!("/orders/{}", order_id))
      .set_json(json!({ "status": "PENDING" }))
      .to_request();
    let edited: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(edited["status"], "PENDING");

    let req = test::TestRequest::delete().uri(&format!("/orders/{}", order_id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete().uri(&format!("/orders/{}", order_id)).to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
      .uri(&format!("/orders/{}", order_id))
      .set_json(json!({ "status": "COMPLETED" }))
      .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
  }

  #[actix_web::test]
  async fn offset_and_limit_query_params_page_results() {
    let app = test_app!();

    let mut product_ids = Vec::new();
    for likes in 0..3 {
      let req = test::TestRequest::post().uri("/products").set_json(product_body(likes, "paged")).to_request();
      let created: Value = test::call_and_read_body_json(&app, req).await;
      product_ids.push(created["id"].as_str().unwrap().to_string());
    }
    product_ids.sort();

    let req = test::TestRequest::get().uri("/products?offset=1&limit=1&tag=paged").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["id"], product_ids[1].as_str());

    for _ in 0..3 {
      let req = test::TestRequest::post()
        .uri("/orders")
        .set_json(json!({ "buyerEmail": "a@b.com", "products": [product_ids[0]] }))
        .to_request();
      test::call_service(&app, req).await;
    }
    let req = test::TestRequest::get().uri("/orders?offset=2&limit=5").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get().uri("/products?limit=-1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
  }

  #[actix_web::test]
  async fn health_reports_backend() {
    let app = test_app!();
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["backend"], "memory");
  }
}
