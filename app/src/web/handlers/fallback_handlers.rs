// grubdash/src/web/handlers/fallback_handlers.rs

//! Responses for requests no route handles.

use actix_web::{HttpRequest, HttpResponse};
use tracing::warn;

use crate::errors::{AppError, Result as AppResult};

/// A known path hit with a method it does not support.
pub async fn method_not_allowed_handler(req: HttpRequest) -> AppResult<HttpResponse> {
  warn!(method = %req.method(), path = req.path(), "Method not allowed.");
  Err(AppError::MethodNotAllowed(format!(
    "{} not allowed for {}",
    req.method(),
    req.path()
  )))
}

pub async fn not_found_handler(req: HttpRequest) -> AppResult<HttpResponse> {
  warn!(path = req.path(), "No route matched.");
  Err(AppError::NotFound(format!("Path not found: {}", req.path())))
}
