// grubdash/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use grubdash_core::PipelineError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Input failed a validation rule or a lifecycle rule.
  #[error("{0}")]
  BadRequest(String),

  #[error("{0}")]
  NotFound(String),

  #[error("{0}")]
  MethodNotAllowed(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Pipeline Engine Error: {source}")]
  Pipeline {
    #[from]
    source: PipelineError,
  },

  #[error("Internal Server Error: {0}")]
  Internal(String),

  #[error("Pipeline execution was halted by a handler.")]
  PipelineHaltedByHandler,
}

impl AppError {
  /// The message surfaced to clients under `error`. Validation messages are
  /// returned verbatim; server-side failures are not leaked.
  pub fn message(&self) -> String {
    match self {
      AppError::BadRequest(m) | AppError::NotFound(m) | AppError::MethodNotAllowed(m) => m.clone(),
      AppError::Config(_) => "Server configuration issue".to_string(),
      AppError::Pipeline { .. } | AppError::Internal(_) | AppError::PipelineHaltedByHandler => {
        "An internal error occurred".to_string()
      }
    }
  }
}

impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    // `{:#}` keeps the context chain, e.g. "reading seed file x: No such file".
    AppError::Internal(format!("{:#}", err))
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
      AppError::Config(_)
      | AppError::Pipeline { .. }
      | AppError::Internal(_)
      | AppError::PipelineHaltedByHandler => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::debug!(status = status.as_u16(), message = %self, "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "error": self.message() }))
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
