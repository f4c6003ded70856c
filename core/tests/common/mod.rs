// tests/common/mod.rs
#![allow(dead_code)]

use grubdash_core::{ContextData, Handler, PipelineControl, PipelineError};
use tracing::Level;

// --- Common Context Structs ---
#[derive(Clone, Debug, Default)]
pub struct TestContext {
  pub counter: i32,
  pub message: String,
  pub steps_executed: Vec<String>,
  pub should_stop_at: Option<String>,
}

/// A request-shaped context: a field map under validation and the record
/// produced by the terminal step.
#[derive(Clone, Debug, Default)]
pub struct FormContext {
  pub fields: Vec<(String, String)>,
  pub checks_run: Vec<String>,
  pub saved: Option<String>,
}

impl FormContext {
  pub fn with_fields(fields: &[(&str, &str)]) -> Self {
    Self {
      fields: fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
      ..Default::default()
    }
  }

  pub fn field(&self, name: &str) -> Option<&str> {
    self
      .fields
      .iter()
      .find(|(k, _)| k == name)
      .map(|(_, v)| v.as_str())
  }
}

// --- Common Error Type for Tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  // PipelineError is neither Clone nor PartialEq, so keep its Debug text.
  #[error("Pipeline engine error: {0}")]
  Engine(String),

  #[error("Test handler failed: {0}")]
  Handler(String),

  #[error("{0}")]
  Rejected(String),
}

impl From<PipelineError> for TestError {
  fn from(pe: PipelineError) -> Self {
    TestError::Engine(format!("{:?}", pe))
  }
}

// --- Common Handler Creators ---
pub fn create_simple_handler(step_name: &'static str, message_to_append: &'static str) -> Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.message.push_str(message_to_append);
      guard.steps_executed.push(step_name.to_string());
      tracing::debug!(target: "test_handlers", step = step_name, "executed, counter: {}", guard.counter);
      if guard.should_stop_at.as_deref() == Some(step_name) {
        return Ok(PipelineControl::Stop);
      }
      Ok(PipelineControl::Continue)
    })
  })
}

pub fn create_failing_handler(step_name: &'static str, error_message: &'static str) -> Handler<TestContext, TestError> {
  Box::new(move |ctx: ContextData<TestContext>| {
    Box::pin(async move {
      ctx.write().steps_executed.push(step_name.to_string());
      tracing::warn!(target: "test_handlers", step = step_name, "failing with: '{}'", error_message);
      Err(TestError::Handler(error_message.to_string()))
    })
  })
}

/// Fails with `"Form must include a <field>"` unless the field is non-empty.
pub fn require_field(field: &'static str) -> Handler<FormContext, TestError> {
  Box::new(move |ctx: ContextData<FormContext>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.checks_run.push(field.to_string());
      match guard.field(field) {
        Some(v) if !v.is_empty() => Ok(PipelineControl::Continue),
        _ => Err(TestError::Rejected(format!("Form must include a {}", field))),
      }
    })
  })
}

// --- Helper for Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
