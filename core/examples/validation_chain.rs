// grubdash_core/examples/validation_chain.rs

use grubdash_core::{ContextData, Pipeline, PipelineControl, PipelineError, PipelineResult};
use tracing::info;

// A tiny request: a title and a positive quantity.
#[derive(Debug, Default)]
struct LineItemRequest {
  title: String,
  quantity: i64,
  accepted: bool,
}

#[derive(Debug, thiserror::Error)]
enum RequestError {
  #[error("{0}")]
  BadRequest(String),
  #[error(transparent)]
  Engine(#[from] PipelineError),
}

fn build_pipeline() -> Pipeline<LineItemRequest, RequestError> {
  let mut pipeline = Pipeline::<LineItemRequest, RequestError>::new(&[
    "require_title",
    "validate_quantity",
    "accept",
  ]);

  pipeline.on_step("require_title", |ctx: ContextData<LineItemRequest>| async move {
    if ctx.read().title.is_empty() {
      return Err(RequestError::BadRequest("Line item must include a title".to_string()));
    }
    Ok(PipelineControl::Continue)
  });

  pipeline.on_step("validate_quantity", |ctx: ContextData<LineItemRequest>| async move {
    if ctx.read().quantity <= 0 {
      return Err(RequestError::BadRequest(
        "Line item must have a quantity that is an integer greater than 0".to_string(),
      ));
    }
    Ok(PipelineControl::Continue)
  });

  pipeline.on_step("accept", |ctx: ContextData<LineItemRequest>| async move {
    ctx.write().accepted = true;
    Ok::<_, RequestError>(PipelineControl::Continue)
  });

  pipeline
}

#[tokio::main]
async fn main() -> Result<(), RequestError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let pipeline = build_pipeline();

  let good = ContextData::new(LineItemRequest {
    title: "Spaghetti".to_string(),
    quantity: 2,
    ..Default::default()
  });
  let result = pipeline.run(good.clone()).await?;
  assert_eq!(result, PipelineResult::Completed);
  info!("accepted: {}", good.read().accepted);

  let bad = ContextData::new(LineItemRequest {
    title: "Spaghetti".to_string(),
    quantity: 0,
    ..Default::default()
  });
  match pipeline.run(bad.clone()).await {
    Err(RequestError::BadRequest(message)) => info!("rejected: {}", message),
    other => info!("unexpected outcome: {:?}", other),
  }
  assert!(!bad.read().accepted);

  Ok(())
}
