// grubdash/src/web/handlers/dish_handlers.rs

use actix_web::{web, HttpResponse};
use grubdash_core::{ContextData, PipelineResult};
use serde_json::{json, Value};
use tracing::{info, instrument, warn};

use super::{payload_of, reclaim};
use crate::errors::{AppError, Result as AppResult};
use crate::models::Dish;
use crate::pipelines::contexts::DishCtxData;
use crate::pipelines::payload::Payload;
use crate::pipelines::{CREATE_DISH, READ_DISH, UPDATE_DISH};
use crate::state::AppState;

/// Locks the store, runs `operation` and hands back the dish its terminal
/// step produced. The store stays locked until the pipeline has finished
/// and the context has been taken back.
pub async fn run_dish_pipeline(
  app_state: &AppState,
  operation: &'static str,
  dish_id: Option<String>,
  payload: Payload,
) -> AppResult<Dish> {
  let store = app_state.store.clone().lock_owned().await;
  let ctx_data = ContextData::new(DishCtxData::new(store, app_state.ids.clone(), dish_id, payload));

  match app_state.registry.run(operation, ctx_data.clone()).await? {
    PipelineResult::Completed => {
      let data = reclaim(ctx_data, operation)?;
      data.outcome.ok_or_else(|| {
        AppError::Internal(format!("Pipeline '{}' completed without producing a dish.", operation))
      })
    }
    PipelineResult::Stopped => {
      warn!(operation, "Dish pipeline was stopped by a handler.");
      Err(AppError::PipelineHaltedByHandler)
    }
  }
}

#[instrument(name = "handler::list_dishes", skip(app_state))]
pub async fn list_dishes_handler(app_state: web::Data<AppState>) -> AppResult<HttpResponse> {
  let store = app_state.store.lock().await;
  Ok(HttpResponse::Ok().json(json!({ "data": store.dishes.as_slice() })))
}

#[instrument(name = "handler::create_dish", skip(app_state, body))]
pub async fn create_dish_handler(
  app_state: web::Data<AppState>,
  body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
  let dish = run_dish_pipeline(&app_state, CREATE_DISH, None, payload_of(body)).await?;
  info!(dish_id = %dish.id, "Dish created.");
  Ok(HttpResponse::Created().json(json!({ "data": dish })))
}

#[instrument(name = "handler::read_dish", skip(app_state))]
pub async fn read_dish_handler(app_state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
  let dish = run_dish_pipeline(&app_state, READ_DISH, Some(path.into_inner()), Payload::default()).await?;
  Ok(HttpResponse::Ok().json(json!({ "data": dish })))
}

#[instrument(name = "handler::update_dish", skip(app_state, body))]
pub async fn update_dish_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  body: Option<web::Json<Value>>,
) -> AppResult<HttpResponse> {
  let dish = run_dish_pipeline(&app_state, UPDATE_DISH, Some(path.into_inner()), payload_of(body)).await?;
  Ok(HttpResponse::Ok().json(json!({ "data": dish })))
}
