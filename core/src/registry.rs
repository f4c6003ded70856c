// grubdash_core/src/registry.rs

//! Defines `PipelineRegistry<E>`, which stores pipelines under an
//! operation name and the type of context data they run on, and dispatches
//! runs to them. Results come back in the application error type `E`.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineResult;
use crate::error::PipelineError;
use crate::pipeline::definition::Pipeline;

use async_trait::async_trait;
use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{event, instrument, Level};

type RegistryKey = (TypeId, &'static str);

/// Type-erased pipeline runner so pipelines over different context types
/// can share one map.
#[async_trait]
trait AnyPipelineRunner<ApplicationError>: Send + Sync
where
  ApplicationError: std::error::Error + Send + Sync + 'static,
{
  /// `ctx_obj` must hold a `ContextData<TData>` matching the wrapped pipeline.
  async fn run_erased(&self, operation: &'static str, ctx_obj: Box<dyn Any + Send>)
    -> Result<PipelineResult, ApplicationError>;
}

struct PipelineWrapper<TData, HandlerError, ApplicationError>
where
  TData: 'static + Send + Sync,
  HandlerError: std::error::Error + From<PipelineError> + Send + Sync + 'static,
  ApplicationError: std::error::Error + From<HandlerError> + From<PipelineError> + Send + Sync + 'static,
{
  pipeline: Arc<Pipeline<TData, HandlerError>>,
  _phantom_app_err: PhantomData<fn() -> ApplicationError>,
}

#[async_trait]
impl<TData, HandlerError, ApplicationError> AnyPipelineRunner<ApplicationError>
  for PipelineWrapper<TData, HandlerError, ApplicationError>
where
  TData: 'static + Send + Sync,
  HandlerError: std::error::Error + From<PipelineError> + Send + Sync + 'static,
  ApplicationError: std::error::Error + From<HandlerError> + From<PipelineError> + Send + Sync + 'static,
{
  async fn run_erased(
    &self,
    operation: &'static str,
    ctx_obj: Box<dyn Any + Send>,
  ) -> Result<PipelineResult, ApplicationError> {
    let typed_ctx_data = match ctx_obj.downcast::<ContextData<TData>>() {
      Ok(boxed) => *boxed,
      Err(_) => {
        let expected_type = std::any::type_name::<ContextData<TData>>();
        event!(Level::ERROR, operation, expected_type, "Context object type mismatch.");
        return Err(ApplicationError::from(PipelineError::TypeMismatch {
          operation: operation.to_string(),
          expected_type: expected_type.to_string(),
        }));
      }
    };

    self.pipeline.run(typed_ctx_data).await.map_err(ApplicationError::from)
  }
}

/// Registry of pipelines keyed by `(context data type, operation name)`.
///
/// Several operations may share a context type, e.g. the create and update
/// pipelines of one resource.
pub struct PipelineRegistry<ApplicationError = PipelineError>
where
  ApplicationError: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  registry: RwLock<HashMap<RegistryKey, Arc<dyn AnyPipelineRunner<ApplicationError>>>>,
}

impl<ApplicationError> Default for PipelineRegistry<ApplicationError>
where
  ApplicationError: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}

impl<ApplicationError> PipelineRegistry<ApplicationError>
where
  ApplicationError: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      registry: RwLock::new(HashMap::new()),
    }
  }

  /// Registers `pipeline` under `operation`. A later registration for the
  /// same operation and context type replaces the earlier one.
  pub fn register<TData, HandlerError>(&self, operation: &'static str, pipeline: Pipeline<TData, HandlerError>)
  where
    TData: 'static + Send + Sync,
    HandlerError: std::error::Error + From<PipelineError> + Send + Sync + 'static,
    ApplicationError: From<HandlerError>,
  {
    event!(
      Level::DEBUG,
      operation,
      tdata_type = %std::any::type_name::<TData>(),
      steps = ?pipeline.step_names(),
      "Registering pipeline."
    );
    let wrapper = PipelineWrapper::<TData, HandlerError, ApplicationError> {
      pipeline: Arc::new(pipeline),
      _phantom_app_err: PhantomData,
    };
    let replaced = self
      .registry
      .write()
      .insert((TypeId::of::<TData>(), operation), Arc::new(wrapper));
    if replaced.is_some() {
      event!(Level::WARN, operation, "Replaced an existing pipeline registration.");
    }
  }

  pub fn contains<TData: 'static + Send + Sync>(&self, operation: &'static str) -> bool {
    self.registry.read().contains_key(&(TypeId::of::<TData>(), operation))
  }

  pub fn len(&self) -> usize {
    self.registry.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Runs the pipeline registered for `operation` over `ctx_data`.
  #[instrument(
        name = "PipelineRegistry::run",
        skip(self, ctx_data),
        fields(tdata_type = %std::any::type_name::<TData>())
    )]
  pub async fn run<TData>(
    &self,
    operation: &'static str,
    ctx_data: ContextData<TData>,
  ) -> Result<PipelineResult, ApplicationError>
  where
    TData: 'static + Send + Sync,
  {
    let runner = self
      .registry
      .read()
      .get(&(TypeId::of::<TData>(), operation))
      .cloned()
      .ok_or_else(|| {
        let type_name = std::any::type_name::<TData>();
        event!(Level::ERROR, operation, "No pipeline registered for {}.", type_name);
        ApplicationError::from(PipelineError::ConfigurationError {
          operation: operation.to_string(),
          message: format!("No pipeline registered for TData type {}", type_name),
        })
      })?;

    runner.run_erased(operation, Box::new(ctx_data)).await
  }
}
