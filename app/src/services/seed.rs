// grubdash/src/services/seed.rs

//! Loads fixture dishes and orders from a JSON file at startup.

use anyhow::Context;
use std::path::Path;
use tracing::info;

use crate::store::Seed;

pub fn load_seed(path: &Path) -> anyhow::Result<Seed> {
  let raw = std::fs::read_to_string(path).with_context(|| format!("reading seed file {}", path.display()))?;
  let seed = parse_seed(&raw).with_context(|| format!("parsing seed file {}", path.display()))?;
  info!(
    dishes = seed.dishes.len(),
    orders = seed.orders.len(),
    "Loaded seed data from {}.",
    path.display()
  );
  Ok(seed)
}

pub fn parse_seed(raw: &str) -> anyhow::Result<Seed> {
  Ok(serde_json::from_str(raw)?)
}
