// grubdash_core/src/pipeline/definition.rs

//! Contains the `Pipeline<TData, Err>` struct definition and its
//! constructor.

use crate::core::handler::Handler;
use crate::error::PipelineError;
use std::collections::HashMap;

/// An ordered list of named steps run against a `ContextData<TData>`.
///
/// `Err` is the error type handlers return. It must be `From<PipelineError>`
/// so engine failures (such as a step with no handler) surface through the
/// same type.
pub struct Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub(crate) steps: Vec<String>,
  /// Handlers keyed by step name, in registration order.
  pub(crate) handlers: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Creates a pipeline from step names, in run order. Panics on a repeated
  /// name.
  pub fn new(step_names: &[&str]) -> Self {
    let mut steps: Vec<String> = Vec::with_capacity(step_names.len());
    for name in step_names {
      if steps.iter().any(|s| s == name) {
        panic!("Pipeline setup error: Step '{}' already exists in pipeline definition.", name);
      }
      steps.push(name.to_string());
    }

    Self {
      steps,
      handlers: HashMap::new(),
    }
  }

  /// Step names in execution order.
  pub fn step_names(&self) -> Vec<&str> {
    self.steps.iter().map(String::as_str).collect()
  }

  pub fn has_step(&self, step_name: &str) -> bool {
    self.steps.iter().any(|s| s == step_name)
  }

  /// Index of `step_name`. Panics on unknown names: a typo in a step name is
  /// a setup bug, not a runtime condition.
  pub(crate) fn step_index(&self, step_name: &str) -> usize {
    match self.steps.iter().position(|s| s == step_name) {
      Some(idx) => idx,
      None => panic!("Pipeline setup error: Step '{}' not found in pipeline definition.", step_name),
    }
  }
}
