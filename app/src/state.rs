// grubdash/src/state.rs

use crate::config::AppConfig;
use crate::errors::{AppError, Result as AppResult};
use crate::pipelines;
use crate::services::id_generator::{IdGenerator, SequentialIdGenerator};
use crate::services::seed;
use crate::store::{ResourceStore, SharedStore};
use grubdash_core::PipelineRegistry;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: SharedStore,
  pub ids: Arc<dyn IdGenerator>,
  pub registry: Arc<PipelineRegistry<AppError>>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Wraps `store` and registers every pipeline on a fresh registry.
  pub fn new(store: ResourceStore, ids: Arc<dyn IdGenerator>, config: AppConfig) -> Self {
    let registry = Arc::new(PipelineRegistry::<AppError>::new());
    pipelines::register_all_pipelines(&registry);
    Self {
      store: store.into_shared(),
      ids,
      registry,
      config: Arc::new(config),
    }
  }

  /// Startup state: the configured fixture (if any) in the store, and ids
  /// continuing after the largest fixture id.
  pub fn from_config(config: AppConfig) -> AppResult<Self> {
    let store = match &config.seed_file {
      Some(path) => ResourceStore::from_seed(seed::load_seed(path)?),
      None => ResourceStore::new(),
    };
    let ids = Arc::new(SequentialIdGenerator::starting_after(store.all_ids()));
    tracing::info!(
      dishes = store.dishes.len(),
      orders = store.orders.len(),
      "Resource store initialised."
    );
    Ok(Self::new(store, ids, config))
  }

  /// An empty store with ids starting at 1.
  pub fn empty() -> Self {
    Self::new(
      ResourceStore::new(),
      Arc::new(SequentialIdGenerator::new()),
      AppConfig::default(),
    )
  }
}
