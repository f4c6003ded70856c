// grubdash/src/models/order.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::Identified;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
  Pending,
  Preparing,
  OutForDelivery,
  Delivered,
}

impl OrderStatus {
  pub const ALL: [OrderStatus; 4] = [
    OrderStatus::Pending,
    OrderStatus::Preparing,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      OrderStatus::Pending => "pending",
      OrderStatus::Preparing => "preparing",
      OrderStatus::OutForDelivery => "out-for-delivery",
      OrderStatus::Delivered => "delivered",
    }
  }

  pub fn parse(raw: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|s| s.as_str() == raw)
  }
}

impl fmt::Display for OrderStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One line of an order. `dish_id` keeps whatever JSON value the client sent
/// and is not checked against the dish collection. Any other fields the client attached to the
/// line are kept in `extra` and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
  #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
  pub dish_id: Option<Value>,
  pub quantity: u64,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: String,
  pub deliver_to: String,
  pub mobile_number: String,
  pub dishes: Vec<OrderDish>,
  /// Unset until the first update. An unset status counts as pending.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status: Option<OrderStatus>,
}

impl Order {
  pub fn is_delivered(&self) -> bool {
    self.status == Some(OrderStatus::Delivered)
  }

  pub fn is_pending(&self) -> bool {
    matches!(self.status, None | Some(OrderStatus::Pending))
  }
}

impl Identified for Order {
  fn id(&self) -> &str {
    &self.id
  }
}
