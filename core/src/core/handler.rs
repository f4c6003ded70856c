// grubdash_core/src/core/handler.rs

//! The boxed handler type stored for every step phase.

use crate::core::context_data::ContextData;
use crate::core::control::PipelineControl;
use std::future::Future;
use std::pin::Pin;

/// A pipeline step handler.
///
/// Handlers take a clone of the run's `ContextData<TData>` and resolve to
/// either a [`PipelineControl`] or the pipeline's error type `Err`.
///
/// Lock guards taken from the context must be dropped before any `.await`.
pub type Handler<TData, Err> = Box<
  dyn Fn(ContextData<TData>) -> Pin<Box<dyn Future<Output = Result<PipelineControl, Err>> + Send>>
    + Send
    + Sync,
>;
