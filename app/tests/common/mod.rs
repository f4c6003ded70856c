// tests/common/mod.rs
#![allow(dead_code)]

use grubdash::config::AppConfig;
use grubdash::pipelines::payload::Payload;
use grubdash::state::AppState;
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing::Level;

/// A fresh, empty store with ids starting at 1.
pub fn fresh_state() -> AppState {
  setup_tracing();
  AppState::empty()
}

/// The store loaded from `fixtures/seed.json`: dishes 1-3, order 4
/// (out-for-delivery) and order 5 (pending).
pub fn seeded_state() -> AppState {
  setup_tracing();
  let config = AppConfig {
    seed_file: Some(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/seed.json")),
    ..AppConfig::default()
  };
  AppState::from_config(config).expect("sample fixture should load")
}

/// Wraps `data` the way clients send it: `{ "data": data }`.
pub fn payload(data: Value) -> Payload {
  Payload::from_body(Some(json!({ "data": data })))
}

pub fn valid_dish() -> Value {
  json!({
    "name": "Dolcelatte and chickpea spaghetti",
    "description": "Spaghetti topped with a blend of dolcelatte and chickpeas",
    "price": 19,
    "image_url": "https://images.example.com/dishes/spaghetti.jpg"
  })
}

pub fn valid_order() -> Value {
  json!({
    "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
    "mobileNumber": "(505) 143-3369",
    "dishes": [{ "dishId": "1", "quantity": 2 }]
  })
}

/// `base` with `field` replaced by `value`, or removed when `value` is `None`.
pub fn with_field(base: Value, field: &str, value: Option<Value>) -> Value {
  let mut data = base;
  if let Some(map) = data.as_object_mut() {
    match value {
      Some(v) => {
        map.insert(field.to_string(), v);
      }
      None => {
        map.remove(field);
      }
    }
  }
  data
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
