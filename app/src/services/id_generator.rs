// grubdash/src/services/id_generator.rs

use std::sync::atomic::{AtomicU64, Ordering};

/// Source of fresh entity ids. Ids are never repeated within a process.
pub trait IdGenerator: Send + Sync {
  fn next_id(&self) -> String;
}

/// Process-wide counter shared by dishes and orders; ids are its decimal
/// representation.
#[derive(Debug)]
pub struct SequentialIdGenerator {
  next: AtomicU64,
}

impl SequentialIdGenerator {
  pub fn new() -> Self {
    Self::starting_at(1)
  }

  pub fn starting_at(first: u64) -> Self {
    Self {
      next: AtomicU64::new(first),
    }
  }

  /// Starts after the largest numeric id in `existing`. Non-numeric ids
  /// cannot collide with the counter's output and are ignored.
  pub fn starting_after<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
    let highest = existing
      .into_iter()
      .filter_map(|id| id.parse::<u64>().ok())
      .max()
      .unwrap_or(0);
    Self::starting_at(highest.saturating_add(1))
  }
}

impl Default for SequentialIdGenerator {
  fn default() -> Self {
    Self::new()
  }
}

impl IdGenerator for SequentialIdGenerator {
  fn next_id(&self) -> String {
    self.next.fetch_add(1, Ordering::SeqCst).to_string()
  }
}
