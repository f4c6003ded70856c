// grubdash/src/models/dish.rs

use serde::{Deserialize, Serialize};

use super::Identified;

/// A menu item. `price` is in the smallest currency unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
  pub id: String,
  pub name: String,
  pub description: String,
  pub price: u64,
  pub image_url: String,
}

impl Identified for Dish {
  fn id(&self) -> &str {
    &self.id
  }
}
