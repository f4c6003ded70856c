// grubdash/src/pipelines/mod.rs

//! The validation pipelines behind every dish and order operation, and the
//! names they are registered under.

use grubdash_core::PipelineRegistry;

use crate::errors::AppError;

pub mod common_steps;
pub mod contexts;
pub mod dish_pipeline;
pub mod order_pipeline;
pub mod payload;

pub const CREATE_DISH: &str = "dishes::create";
pub const READ_DISH: &str = "dishes::read";
pub const UPDATE_DISH: &str = "dishes::update";

pub const CREATE_ORDER: &str = "orders::create";
pub const READ_ORDER: &str = "orders::read";
pub const UPDATE_ORDER: &str = "orders::update";
pub const DESTROY_ORDER: &str = "orders::destroy";

/// Registers every pipeline with `registry`. Called once at startup.
pub fn register_all_pipelines(registry: &PipelineRegistry<AppError>) {
  tracing::info!("Registering pipelines...");
  dish_pipeline::register_dish_pipelines(registry);
  order_pipeline::register_order_pipelines(registry);
  tracing::info!(count = registry.len(), "All application pipelines registered.");
}
