// grubdash_core/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Failures raised by the engine itself, as opposed to errors returned by
/// user handlers. Pipeline error types must be constructible from this.
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("Handler missing for step: {step_name}")]
  HandlerMissing { step_name: String },

  #[error("Type mismatch during context downcast (expected {expected_type}, operation: '{operation}')")]
  TypeMismatch { operation: String, expected_type: String },

  #[error("Error in user-provided handler or external operation. Source: {source}")]
  HandlerError {
    #[source]
    source: AnyhowError,
  },

  #[error("Configuration error for '{operation}': {message}")]
  ConfigurationError { operation: String, message: String },

  #[error("Internal pipeline error: {0}")]
  Internal(String),
}

impl From<AnyhowError> for PipelineError {
  fn from(err: AnyhowError) -> Self {
    PipelineError::HandlerError { source: err }
  }
}

pub type CoreResult<T, E = PipelineError> = std::result::Result<T, E>;
