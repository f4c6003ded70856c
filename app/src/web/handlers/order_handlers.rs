// grubdash/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use grubdash_core::{ContextData, PipelineResult};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::{payload_of, reclaim};
use crate::errors::{AppError, Result as AppResult};
use crate::models::Order;
use crate::pipelines::contexts::OrderCtxData;
use crate::pipelines::payload::Payload;
use crate::pipelines::{CREATE_ORDER, DESTROY_ORDER, READ_ORDER, UPDATE_ORDER};
use crate::state::AppState;

/// What a completed order pipeline left behind.
#[derive(Debug)]
pub enum OrderOutcome {
  Order(Order),
  Deleted,
}

pub async fn run_order_pipeline(
  app_state: &AppState,
  operation: &'static str,
  order_id: Option<String>,
  payload: Payload,
) -> AppResult<OrderOutcome> {
  let store = app_state.store.clone().lock_owned().await;
  let ctx_data = ContextData::new(OrderCtxData::new(store, app_state.ids.clone(), order_id, payload));

  match app_state.registry.run(operation, ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let data = reclaim(ctx_data, operation)?;
      if data.deleted {
        return Ok(OrderOutcome::Deleted);
      }
      data.outcome.map(OrderOutcome::Order).ok_or_else(|| {
        AppError::Internal(format!("Pipeline '{}' completed without producing an order.", operation))
      })
    }
    PipelineResult::Stopped => {
      warn!(operation, "Order pipeline was stopped by a handler.");
      Err(AppError::PipelineHaltedByHandler)
    }
  }
}

fn expect_order(outcome: OrderOutcome) -> AppResult<Order> {
  match outcome {
    OrderOutcome::Order(order) => Ok(order),
    OrderOutcome::Deleted => Err(AppError::Internal("Order pipeline unexpectedly deleted the order.".to_string())),
  }
}

#[instrument(name = "handler::list_orders", skip(app_state))]
pub async fn list_orders_handler(app_state: web::Data<AppState>) -> AppResult<HttpResponse> {
  let store = app_state.store.lock().await;
  Ok(HttpResponse::Ok().json(json!({ "data": store.orders.as_slice() })))
}

#[instrument(name = "handler::create_order", skip(app_state, body))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
  let order = expect_order(run_order_pipeline(&app_state, CREATE_ORDER, None, payload_of(body)).await?)?;
  info!(order_id = %order.id, "Order created.");
  Ok(HttpResponse::Created().json(json!({ "data": order })))
}

#[instrument(name = "handler::read_order", skip(app_state))]
pub async fn read_order_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
  let outcome = run_order_pipeline(&app_state, READ_ORDER, Some(path.into_inner()), Payload::default()).await?;
  Ok(HttpResponse::Ok().json(json!({ "data": expect_order(outcome)? })))
}

#[instrument(name = "handler::update_order", skip(app_state, body))]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
  let outcome = run_order_pipeline(&app_state, UPDATE_ORDER, Some(path.into_inner()), payload_of(body)).await?;
  Ok(HttpResponse::Ok().json(json!({ "data": expect_order(outcome)? })))
}

#[instrument(name = "handler::destroy_order", skip(app_state))]
pub async fn destroy_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> AppResult<HttpResponse> {
  match run_order_pipeline(&app_state, DESTROY_ORDER, Some(path.into_inner()), Payload::default()).await? {
    OrderOutcome::Deleted => Ok(HttpResponse::NoContent().finish()),
    OrderOutcome::Order(order) => Err(AppError::Internal(format!(
      "Destroy pipeline finished without deleting order {}.",
      order.id
    ))),
  }
}
