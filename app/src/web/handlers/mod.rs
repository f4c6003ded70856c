// grubdash/src/web/handlers/mod.rs

pub mod dish_handlers;
pub mod fallback_handlers;
pub mod order_handlers;

use actix_web::web;
use grubdash_core::ContextData;
use serde_json::Value;

use crate::errors::{AppError, Result as AppResult};
use crate::pipelines::payload::Payload;

/// The request body as validators see it. Bodies that are missing or failed
/// to parse as JSON read as `{}`.
pub(crate) fn payload_of(body: Option<web::Json<Value>>) -> Payload {
  Payload::from_body(body.map(web::Json::into_inner))
}

/// Takes the pipeline context back after a run. Dropping it releases the
/// store guard it carries.
pub(crate) fn reclaim<T: Send + Sync + 'static>(ctx_data: ContextData<T>, operation: &str) -> AppResult<T> {
  ctx_data.try_into_inner().map_err(|_| {
    AppError::Internal(format!(
      "Pipeline '{}' left a handle to its context behind.",
      operation
    ))
  })
}
