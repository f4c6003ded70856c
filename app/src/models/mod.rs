// grubdash/src/models/mod.rs

//! The two resources served by the API.

pub mod dish;
pub mod order;

pub use dish::Dish;
pub use order::{Order, OrderDish, OrderStatus};

/// Entities that carry a unique, immutable string id.
pub trait Identified {
  fn id(&self) -> &str;
}
