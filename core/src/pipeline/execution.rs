// grubdash_core/src/pipeline/execution.rs

//! Contains `Pipeline::run()`, which executes the steps and their handlers.

use crate::core::context_data::ContextData;
use crate::core::control::{PipelineControl, PipelineResult};
use crate::error::PipelineError;
use crate::pipeline::definition::Pipeline;
use tracing::{event, instrument, span, Instrument, Level};

impl<TData, Err> Pipeline<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<PipelineError> + Send + Sync + 'static,
{
  /// Executes the pipeline against `ctx_data`.
  ///
  /// Steps run in order. The first handler error ends the run and is
  /// returned as is; nothing after it executes. A handler returning
  /// `PipelineControl::Stop` ends the run with `PipelineResult::Stopped`.
  /// A step with no handlers fails with `PipelineError::HandlerMissing`,
  /// converted into `Err`.
  #[instrument(
        name = "Pipeline::run",
        skip_all,
        fields(
            pipeline_context_data_type = %std::any::type_name::<TData>(),
            num_steps = self.steps.len(),
        ),
        err(level = "warn")
    )]
  pub async fn run(&self, ctx_data: ContextData<TData>) -> Result<PipelineResult, Err> {
    event!(Level::DEBUG, "Pipeline execution starting.");

    for (step_idx, step_name) in self.steps.iter().enumerate() {
      let step_span = span!(
        Level::INFO,
        "pipeline_step_execution",
        step_name = step_name.as_str(),
        step_index = step_idx
      );
      let control = self.run_step(step_name, &ctx_data).instrument(step_span).await?;
      if control == PipelineControl::Stop {
        event!(Level::INFO, %step_name, "Pipeline stopped by a handler.");
        return Ok(PipelineResult::Stopped);
      }
    }

    event!(Level::DEBUG, "Pipeline execution completed successfully.");
    Ok(PipelineResult::Completed)
  }

  async fn run_step(&self, step_name: &str, ctx_data: &ContextData<TData>) -> Result<PipelineControl, Err> {
    let handlers = match self.handlers.get(step_name) {
      Some(handlers) if !handlers.is_empty() => handlers,
      _ => {
        event!(Level::ERROR, "Step has no handlers.");
        return Err(Err::from(PipelineError::HandlerMissing {
          step_name: step_name.to_string(),
        }));
      }
    };

    for (handler_idx, handler_fn) in handlers.iter().enumerate() {
      match handler_fn(ctx_data.clone()).await {
        Ok(PipelineControl::Continue) => {}
        Ok(PipelineControl::Stop) => {
          event!(Level::DEBUG, handler_index = handler_idx, "Handler requested stop.");
          return Ok(PipelineControl::Stop);
        }
        Err(e) => {
          event!(Level::DEBUG, handler_index = handler_idx, error = %e, "Handler failed.");
          return Err(e);
        }
      }
    }

    event!(Level::DEBUG, "Step processing finished successfully.");
    Ok(PipelineControl::Continue)
  }
}
