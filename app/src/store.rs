// grubdash/src/store.rs

//! In-memory resource store.
//!
//! `ResourceStore` holds the dish and order collections. It is owned by
//! `AppState` behind one async mutex ([`SharedStore`]); a request locks it
//! once and keeps the guard until its pipeline has finished, so the two
//! collections share a single mutual-exclusion boundary.

use crate::models::{Dish, Identified, Order};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

pub type SharedStore = Arc<Mutex<ResourceStore>>;

/// The store guard a pipeline context holds for the length of one request.
pub type StoreGuard = OwnedMutexGuard<ResourceStore>;

/// An ordered collection looked up by id. Id uniqueness is not checked here;
/// it comes from the id generator.
#[derive(Debug, Clone)]
pub struct Collection<T> {
  items: Vec<T>,
}

impl<T> Default for Collection<T> {
  fn default() -> Self {
    Self { items: Vec::new() }
  }
}

impl<T: Identified> Collection<T> {
  pub fn from_items(items: Vec<T>) -> Self {
    Self { items }
  }

  pub fn find_by_id(&self, id: &str) -> Option<&T> {
    self.items.iter().find(|item| item.id() == id)
  }

  pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut T> {
    self.items.iter_mut().find(|item| item.id() == id)
  }

  pub fn append(&mut self, item: T) {
    self.items.push(item);
  }

  /// Removes and returns the entity with `id`, keeping the order of the rest.
  pub fn remove_by_id(&mut self, id: &str) -> Option<T> {
    let idx = self.items.iter().position(|item| item.id() == id)?;
    Some(self.items.remove(idx))
  }

  pub fn iter(&self) -> impl Iterator<Item = &T> {
    self.items.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.items
  }

  pub fn ids(&self) -> impl Iterator<Item = &str> {
    self.items.iter().map(Identified::id)
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

/// Fixture data loaded at startup.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Seed {
  #[serde(default)]
  pub dishes: Vec<Dish>,
  #[serde(default)]
  pub orders: Vec<Order>,
}

#[derive(Debug, Default, Clone)]
pub struct ResourceStore {
  pub dishes: Collection<Dish>,
  pub orders: Collection<Order>,
}

impl ResourceStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn from_seed(seed: Seed) -> Self {
    Self {
      dishes: Collection::from_items(seed.dishes),
      orders: Collection::from_items(seed.orders),
    }
  }

  /// Every id in both collections.
  pub fn all_ids(&self) -> impl Iterator<Item = &str> {
    self.dishes.ids().chain(self.orders.ids())
  }

  pub fn into_shared(self) -> SharedStore {
    Arc::new(Mutex::new(self))
  }
}
