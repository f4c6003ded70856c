// grubdash_core/src/lib.rs

//! Grubdash core: an async, named-step pipeline engine.
//!
//! A pipeline is an ordered list of named steps. Each step carries one or
//! more handlers that receive a shared [`ContextData`] and either let the
//! run continue, stop it early, or fail it with the pipeline's error type.
//! The first failing handler ends the run and its error is returned
//! untouched, which makes a pipeline a natural fit for chains of request
//! validators followed by a terminal operation.
//!
//! Pipelines are stored in a [`PipelineRegistry`] keyed by context type and
//! operation name.

pub mod core;
pub mod error;
pub mod pipeline;
pub mod registry;

// --- Re-exports for the Public API ---

pub use crate::core::context_data::ContextData;
pub use crate::core::control::{PipelineControl, PipelineResult};
pub use crate::core::handler::Handler;

pub use crate::pipeline::definition::Pipeline;

pub use crate::error::{CoreResult, PipelineError};

pub use crate::registry::PipelineRegistry;
