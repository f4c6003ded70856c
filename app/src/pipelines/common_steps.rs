// grubdash/src/pipelines/common_steps.rs

//! Building blocks shared by the dish and order steps.

use tracing::warn;

use crate::errors::{AppError, Result as AppResult};
use crate::pipelines::payload::Payload;

/// A 400 for a failed validation rule, logged at `warn`.
pub fn bad_request(message: impl Into<String>) -> AppError {
  let message = message.into();
  warn!(%message, "Request rejected by validation.");
  AppError::BadRequest(message)
}

pub fn not_found(message: impl Into<String>) -> AppError {
  let message = message.into();
  warn!(%message, "Referenced resource does not exist.");
  AppError::NotFound(message)
}

/// The value of `field` when it is a non-empty string, otherwise a 400
/// carrying `message`.
pub fn required_string(payload: &Payload, field: &str, message: &str) -> AppResult<String> {
  payload
    .non_empty_str(field)
    .map(str::to_owned)
    .ok_or_else(|| bad_request(message))
}
