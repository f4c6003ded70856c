// grubdash/src/pipelines/contexts.rs

//! Per-request data the dish and order pipelines run on. Handlers receive
//! these wrapped in `grubdash_core::ContextData`.

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::{Dish, Order, OrderDish, OrderStatus};
use crate::pipelines::payload::Payload;
use crate::services::id_generator::IdGenerator;
use crate::store::StoreGuard;

// --- Dish ---

/// Dish fields that passed validation, filled in step by step.
#[derive(Debug, Clone, Default)]
pub struct DishDraft {
  pub name: Option<String>,
  pub description: Option<String>,
  pub image_url: Option<String>,
  pub price: Option<u64>,
}

pub struct DishFields {
  pub name: String,
  pub description: String,
  pub image_url: String,
  pub price: u64,
}

impl DishDraft {
  /// All four fields, or an internal error naming the first gap. A gap here
  /// means a validation step was removed from the pipeline.
  pub fn complete(&self) -> Result<DishFields, AppError> {
    let missing = |field: &str| AppError::Internal(format!("dish draft has no validated {}", field));
    Ok(DishFields {
      name: self.name.clone().ok_or_else(|| missing("name"))?,
      description: self.description.clone().ok_or_else(|| missing("description"))?,
      image_url: self.image_url.clone().ok_or_else(|| missing("image_url"))?,
      price: self.price.ok_or_else(|| missing("price"))?,
    })
  }
}

pub struct DishCtxData {
  /// Held for the whole run.
  pub store: StoreGuard,
  pub ids: Arc<dyn IdGenerator>,
  /// `{dishId}` from the route, for read and update.
  pub dish_id: Option<String>,
  pub payload: Payload,
  pub draft: DishDraft,
  /// Set by the existence check.
  pub resolved: Option<Dish>,
  /// What the terminal step produced for the response.
  pub outcome: Option<Dish>,
}

impl DishCtxData {
  pub fn new(store: StoreGuard, ids: Arc<dyn IdGenerator>, dish_id: Option<String>, payload: Payload) -> Self {
    Self {
      store,
      ids,
      dish_id,
      payload,
      draft: DishDraft::default(),
      resolved: None,
      outcome: None,
    }
  }

  pub fn route_id(&self) -> Result<String, AppError> {
    self
      .dish_id
      .clone()
      .ok_or_else(|| AppError::Internal("dish route id missing from pipeline context".to_string()))
  }
}

// --- Order ---

#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
  pub deliver_to: Option<String>,
  pub mobile_number: Option<String>,
  pub dishes: Option<Vec<OrderDish>>,
  pub status: Option<OrderStatus>,
}

pub struct OrderFields {
  pub deliver_to: String,
  pub mobile_number: String,
  pub dishes: Vec<OrderDish>,
}

impl OrderDraft {
  /// The fields every order carries. `status` is handled by the update step.
  pub fn complete(&self) -> Result<OrderFields, AppError> {
    let missing = |field: &str| AppError::Internal(format!("order draft has no validated {}", field));
    Ok(OrderFields {
      deliver_to: self.deliver_to.clone().ok_or_else(|| missing("deliverTo"))?,
      mobile_number: self.mobile_number.clone().ok_or_else(|| missing("mobileNumber"))?,
      dishes: self.dishes.clone().ok_or_else(|| missing("dishes"))?,
    })
  }
}

pub struct OrderCtxData {
  pub store: StoreGuard,
  pub ids: Arc<dyn IdGenerator>,
  /// `{orderId}` from the route, for read, update and destroy.
  pub order_id: Option<String>,
  pub payload: Payload,
  pub draft: OrderDraft,
  pub resolved: Option<Order>,
  pub outcome: Option<Order>,
  pub deleted: bool,
}

impl OrderCtxData {
  pub fn new(store: StoreGuard, ids: Arc<dyn IdGenerator>, order_id: Option<String>, payload: Payload) -> Self {
    Self {
      store,
      ids,
      order_id,
      payload,
      draft: OrderDraft::default(),
      resolved: None,
      outcome: None,
      deleted: false,
    }
  }

  pub fn route_id(&self) -> Result<String, AppError> {
    self
      .order_id
      .clone()
      .ok_or_else(|| AppError::Internal("order route id missing from pipeline context".to_string()))
  }

  /// The order resolved by the existence check.
  pub fn resolved_order(&self) -> Result<&Order, AppError> {
    self
      .resolved
      .as_ref()
      .ok_or_else(|| AppError::Internal("order was not resolved before a lifecycle check".to_string()))
  }
}
