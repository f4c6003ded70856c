// tests/http_api_tests.rs
mod common;

use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use common::{fresh_state, seeded_state, valid_dish, valid_order, with_field};
use grubdash::web::routes::configure_app_routes;
use serde_json::{json, Value};

macro_rules! init_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn order_lifecycle_end_to_end() {
  let app = init_app!(fresh_state());

  let req = test::TestRequest::post()
    .uri("/orders")
    .set_json(json!({ "data": { "deliverTo": "A", "mobileNumber": "555", "dishes": [{ "dishId": "1", "quantity": 2 }] } }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  let id = body["data"]["id"].as_str().unwrap().to_string();
  assert!(!id.is_empty());
  assert!(body["data"].get("status").is_none());

  let req = test::TestRequest::put()
    .uri(&format!("/orders/{}", id))
    .set_json(json!({ "data": { "deliverTo": "A", "mobileNumber": "555", "dishes": [{ "dishId": "1", "quantity": 2 }], "status": "delivered" } }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["status"], "delivered");

  let req = test::TestRequest::delete().uri(&format!("/orders/{}", id)).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!({ "error": "An order cannot be deleted unless it is pending" }));
}

#[actix_web::test]
async fn deleting_a_pending_order_returns_no_content() {
  let app = init_app!(seeded_state());

  let req = test::TestRequest::delete().uri("/orders/5").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NO_CONTENT);

  let req = test::TestRequest::get().uri("/orders").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  let ids: Vec<&str> = body["data"].as_array().unwrap().iter().filter_map(|o| o["id"].as_str()).collect();
  assert_eq!(ids, vec!["4"]);
}

#[actix_web::test]
async fn dish_create_read_update_round() {
  let app = init_app!(fresh_state());

  let req = test::TestRequest::post()
    .uri("/dishes")
    .set_json(json!({ "data": valid_dish() }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  let id = body["data"]["id"].as_str().unwrap().to_string();
  assert_eq!(body["data"]["price"], 19);

  let req = test::TestRequest::get().uri(&format!("/dishes/{}", id)).to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["data"]["name"], "Dolcelatte and chickpea spaghetti");

  let updated = with_field(valid_dish(), "name", Some(json!("Spaghetti al limone")));
  let req = test::TestRequest::put()
    .uri(&format!("/dishes/{}", id))
    .set_json(json!({ "data": updated }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["id"], id.as_str());
  assert_eq!(body["data"]["name"], "Spaghetti al limone");
}

#[actix_web::test]
async fn listing_twice_is_stable() {
  let app = init_app!(seeded_state());
  for uri in ["/dishes", "/orders"] {
    let first: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
    let second: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(first, second);
  }
}

#[actix_web::test]
async fn missing_body_is_a_validation_error() {
  let app = init_app!(fresh_state());

  let req = test::TestRequest::post().uri("/dishes").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Dish must include a name");

  let req = test::TestRequest::post()
    .uri("/orders")
    .insert_header(("content-type", "application/json"))
    .set_payload("{not json")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Order must include a deliverTo");
}

#[actix_web::test]
async fn unknown_ids_are_404_with_the_id_in_the_message() {
  let app = init_app!(seeded_state());

  let req = test::TestRequest::get().uri("/dishes/77").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Dish does not exist: 77");

  let req = test::TestRequest::put()
    .uri("/orders/77")
    .set_json(json!({ "data": with_field(valid_order(), "status", Some(json!("pending"))) }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Order not found: 77");
}

#[actix_web::test]
async fn unsupported_methods_are_405() {
  let app = init_app!(seeded_state());

  let cases = [
    (test::TestRequest::delete().uri("/dishes/1"), "DELETE not allowed for /dishes/1"),
    (test::TestRequest::put().uri("/dishes"), "PUT not allowed for /dishes"),
    (test::TestRequest::patch().uri("/orders/5"), "PATCH not allowed for /orders/5"),
  ];
  for (req, message) in cases {
    let resp = test::call_service(&app, req.to_request()).await;
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], message);
  }

  // No order was touched by the rejected PATCH.
  let body: Value = test::call_and_read_body_json(&app, test::TestRequest::get().uri("/orders/5").to_request()).await;
  assert_eq!(body["data"]["status"], "pending");
}

#[actix_web::test]
async fn unknown_paths_are_404() {
  let app = init_app!(fresh_state());
  let req = test::TestRequest::get().uri("/menu").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["error"], "Path not found: /menu");
}

#[actix_web::test]
async fn numeric_dish_ids_round_trip_unchanged() {
  let app = init_app!(fresh_state());
  let order = with_field(valid_order(), "dishes", Some(json!([{ "dishId": 1, "quantity": 2 }])));

  let req = test::TestRequest::post()
    .uri("/orders")
    .set_json(json!({ "data": order }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body["data"]["dishes"][0]["dishId"], json!(1));

  let id = body["data"]["id"].as_str().unwrap().to_string();
  let req = test::TestRequest::get().uri(&format!("/orders/{}", id)).to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert!(body["data"]["dishes"][0]["dishId"].is_u64());
}
