// grubdash/src/pipelines/order_pipeline.rs

//! Order pipelines: create, read, update and destroy.
//!
//! Update resolves the stored order first so the lifecycle checks further
//! down can look at its current status. Destroy carries its own existence
//! step, separate from the one read and update share.

use grubdash_core::{ContextData, Pipeline, PipelineControl, PipelineRegistry};
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{Order, OrderDish, OrderStatus};
use crate::pipelines::common_steps::{bad_request, not_found, required_string};
use crate::pipelines::contexts::{OrderCtxData, OrderDraft};
use crate::pipelines::payload::{is_truthy, positive_integer, Payload};
use crate::pipelines::{CREATE_ORDER, DESTROY_ORDER, READ_ORDER, UPDATE_ORDER};

const STATUS_MESSAGE: &str = "Order must have a status of pending, preparing, out-for-delivery, delivered";

pub fn register_order_pipelines(registry: &PipelineRegistry<AppError>) {
  registry.register(CREATE_ORDER, create_pipeline());
  registry.register(READ_ORDER, read_pipeline());
  registry.register(UPDATE_ORDER, update_pipeline());
  registry.register(DESTROY_ORDER, destroy_pipeline());
  info!("Order pipelines registered.");
}

pub fn create_pipeline() -> Pipeline<OrderCtxData, AppError> {
  let mut p = Pipeline::<OrderCtxData, AppError>::new(&[
    "require_deliver_to",
    "require_mobile_number",
    "require_dishes",
    "validate_dish_quantities",
    "create_order",
  ]);
  register_field_checks(&mut p);
  p.on_step("create_order", create_order);
  p
}

pub fn read_pipeline() -> Pipeline<OrderCtxData, AppError> {
  let mut p = Pipeline::<OrderCtxData, AppError>::new(&["resolve_order", "read_order"]);
  p.on_step("resolve_order", resolve_order);
  p.on_step("read_order", |ctx_data: ContextData<OrderCtxData>| async move {
    let mut guard = ctx_data.write();
    guard.outcome = guard.resolved.clone();
    Ok::<_, AppError>(PipelineControl::Continue)
  });
  p
}

pub fn update_pipeline() -> Pipeline<OrderCtxData, AppError> {
  let mut p = Pipeline::<OrderCtxData, AppError>::new(&[
    "resolve_order",
    "require_deliver_to",
    "require_mobile_number",
    "require_dishes",
    "validate_dish_quantities",
    "ensure_order_id_matches_route",
    "validate_status",
    "reject_if_delivered",
    "update_order",
  ]);
  p.on_step("resolve_order", resolve_order);
  register_field_checks(&mut p);
  p.on_step("ensure_order_id_matches_route", ensure_order_id_matches_route);
  p.on_step("validate_status", validate_status);
  p.on_step("reject_if_delivered", reject_if_delivered);
  p.on_step("update_order", update_order);
  p
}

pub fn destroy_pipeline() -> Pipeline<OrderCtxData, AppError> {
  let mut p = Pipeline::<OrderCtxData, AppError>::new(&[
    "resolve_order_for_destroy",
    "ensure_order_pending",
    "destroy_order",
  ]);
  p.on_step("resolve_order_for_destroy", resolve_order_for_destroy);
  p.on_step("ensure_order_pending", ensure_order_pending);
  p.on_step("destroy_order", destroy_order);
  p
}

fn register_field_checks(p: &mut Pipeline<OrderCtxData, AppError>) {
  p.on_step("require_deliver_to", |ctx_data| async move {
    require_field(&ctx_data, "deliverTo", |draft, v| draft.deliver_to = Some(v))
  });
  p.on_step("require_mobile_number", |ctx_data| async move {
    require_field(&ctx_data, "mobileNumber", |draft, v| draft.mobile_number = Some(v))
  });
  p.on_step("require_dishes", require_dishes);
  p.on_step("validate_dish_quantities", validate_dish_quantities);
}

// --- Existence ---

fn lookup_order(ctx_data: &ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let order_id = guard.route_id()?;
  let found = guard.store.orders.find_by_id(&order_id).cloned();
  match found {
    Some(order) => {
      debug!(%order_id, status = ?order.status, "Order resolved.");
      guard.resolved = Some(order);
      Ok(PipelineControl::Continue)
    }
    None => Err(not_found(format!("Order not found: {}", order_id))),
  }
}

async fn resolve_order(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  lookup_order(&ctx_data)
}

async fn resolve_order_for_destroy(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  lookup_order(&ctx_data)
}

// --- Field checks ---

fn require_field(
  ctx_data: &ContextData<OrderCtxData>,
  field: &str,
  record: impl FnOnce(&mut OrderDraft, String),
) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let value = required_string(&guard.payload, field, &format!("Order must include a {}", field))?;
  record(&mut guard.draft, value);
  Ok(PipelineControl::Continue)
}

async fn require_dishes(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  match guard.payload.get("dishes") {
    Some(dishes) if is_truthy(dishes) => match dishes {
      Value::Array(items) if !items.is_empty() => Ok(PipelineControl::Continue),
      _ => Err(bad_request("Order must include at least one dish")),
    },
    _ => Err(bad_request("Order must include a dish")),
  }
}

async fn validate_dish_quantities(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let lines = order_lines(&guard.payload)?;
  guard.draft.dishes = Some(lines);
  Ok(PipelineControl::Continue)
}

/// Builds the order lines, failing on the first line without a positive
/// integer `quantity`.
fn order_lines(payload: &Payload) -> AppResult<Vec<OrderDish>> {
  let Some(Value::Array(items)) = payload.get("dishes") else {
    return Err(AppError::Internal("dish quantities checked before dishes were".to_string()));
  };
  items
    .iter()
    .enumerate()
    .map(|(index, item)| {
      order_line(item).ok_or_else(|| {
        bad_request(format!(
          "Dish {} must have a quantity that is an integer greater than 0",
          index
        ))
      })
    })
    .collect()
}

fn order_line(item: &Value) -> Option<OrderDish> {
  let line = item.as_object()?;
  let quantity = positive_integer(line.get("quantity"))?;
  let dish_id = line.get("dishId").cloned();
  let extra = line
    .iter()
    .filter(|(key, _)| !matches!(key.as_str(), "dishId" | "quantity"))
    .map(|(key, value)| (key.clone(), value.clone()))
    .collect();
  Some(OrderDish {
    dish_id,
    quantity,
    extra,
  })
}

// --- Lifecycle ---

async fn ensure_order_id_matches_route(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  let route_id = guard.route_id()?;
  match guard.payload.conflicting_id(&route_id) {
    Some(body_id) => Err(bad_request(format!(
      "Order id does not match route id. Order: {}, Route: {}.",
      body_id, route_id
    ))),
    None => Ok(PipelineControl::Continue),
  }
}

async fn validate_status(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let status = guard
    .payload
    .non_empty_str("status")
    .and_then(OrderStatus::parse)
    .ok_or_else(|| bad_request(STATUS_MESSAGE))?;
  guard.draft.status = Some(status);
  Ok(PipelineControl::Continue)
}

/// Looks at the stored order, not the incoming status.
async fn reject_if_delivered(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  if guard.resolved_order()?.is_delivered() {
    return Err(bad_request("A delivered order cannot be changed"));
  }
  Ok(PipelineControl::Continue)
}

async fn ensure_order_pending(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  if !guard.resolved_order()?.is_pending() {
    return Err(bad_request("An order cannot be deleted unless it is pending"));
  }
  Ok(PipelineControl::Continue)
}

// --- Terminal ---

#[instrument(name = "order_step::create", skip(ctx_data), err(level = "warn"))]
async fn create_order(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let fields = guard.draft.complete()?;
  let order = Order {
    id: guard.ids.next_id(),
    deliver_to: fields.deliver_to,
    mobile_number: fields.mobile_number,
    dishes: fields.dishes,
    status: None,
  };
  guard.store.orders.append(order.clone());
  info!(order_id = %order.id, lines = order.dishes.len(), "Order created.");
  guard.outcome = Some(order);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "order_step::update", skip(ctx_data), err(level = "warn"))]
async fn update_order(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let fields = guard.draft.complete()?;
  let status = guard
    .draft
    .status
    .ok_or_else(|| AppError::Internal("order draft has no validated status".to_string()))?;
  let order_id = guard.route_id()?;
  let order = guard
    .store
    .orders
    .find_by_id_mut(&order_id)
    .ok_or_else(|| AppError::Internal(format!("resolved order {} vanished from the store", order_id)))?;
  order.deliver_to = fields.deliver_to;
  order.mobile_number = fields.mobile_number;
  order.dishes = fields.dishes;
  order.status = Some(status);
  let updated = order.clone();
  info!(%order_id, %status, "Order updated.");
  guard.outcome = Some(updated);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "order_step::destroy", skip(ctx_data), err(level = "warn"))]
async fn destroy_order(ctx_data: ContextData<OrderCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let order_id = guard.route_id()?;
  guard
    .store
    .orders
    .remove_by_id(&order_id)
    .ok_or_else(|| AppError::Internal(format!("resolved order {} vanished from the store", order_id)))?;
  info!(%order_id, "Order deleted.");
  guard.deleted = true;
  Ok(PipelineControl::Continue)
}
