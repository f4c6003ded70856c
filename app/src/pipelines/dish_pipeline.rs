// grubdash/src/pipelines/dish_pipeline.rs

//! Dish pipelines: create, read and update.
//!
//! Every validation step records what it checked into the context's
//! [`DishDraft`]; the terminal step builds the dish from the draft alone.

use grubdash_core::{ContextData, Pipeline, PipelineControl, PipelineRegistry};
use tracing::{debug, info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::Dish;
use crate::pipelines::common_steps::{bad_request, not_found, required_string};
use crate::pipelines::contexts::{DishCtxData, DishDraft};
use crate::pipelines::payload::positive_integer;
use crate::pipelines::{CREATE_DISH, READ_DISH, UPDATE_DISH};

const PRICE_MESSAGE: &str = "Dish must have a price that is an integer greater than 0";

pub fn register_dish_pipelines(registry: &PipelineRegistry<AppError>) {
  registry.register(CREATE_DISH, create_pipeline());
  registry.register(READ_DISH, read_pipeline());
  registry.register(UPDATE_DISH, update_pipeline());
  info!("Dish pipelines registered.");
}

pub fn create_pipeline() -> Pipeline<DishCtxData, AppError> {
  let mut p = Pipeline::<DishCtxData, AppError>::new(&[
    "require_name",
    "require_description",
    "require_image_url",
    "validate_price",
    "create_dish",
  ]);
  register_field_checks(&mut p);
  p.on_step("create_dish", create_dish);
  p
}

pub fn read_pipeline() -> Pipeline<DishCtxData, AppError> {
  let mut p = Pipeline::<DishCtxData, AppError>::new(&["resolve_dish", "read_dish"]);
  p.on_step("resolve_dish", resolve_dish);
  p.on_step("read_dish", |ctx_data: ContextData<DishCtxData>| async move {
    let mut guard = ctx_data.write();
    guard.outcome = guard.resolved.clone();
    Ok::<_, AppError>(PipelineControl::Continue)
  });
  p
}

pub fn update_pipeline() -> Pipeline<DishCtxData, AppError> {
  let mut p = Pipeline::<DishCtxData, AppError>::new(&[
    "resolve_dish",
    "ensure_dish_id_matches_route",
    "require_name",
    "require_description",
    "require_image_url",
    "validate_price",
    "update_dish",
  ]);
  p.on_step("resolve_dish", resolve_dish);
  p.on_step("ensure_dish_id_matches_route", ensure_dish_id_matches_route);
  register_field_checks(&mut p);
  p.on_step("update_dish", update_dish);
  p
}

fn register_field_checks(p: &mut Pipeline<DishCtxData, AppError>) {
  p.on_step("require_name", |ctx_data| async move {
    require_field(&ctx_data, "name", |draft, v| draft.name = Some(v))
  });
  p.on_step("require_description", |ctx_data| async move {
    require_field(&ctx_data, "description", |draft, v| draft.description = Some(v))
  });
  p.on_step("require_image_url", |ctx_data| async move {
    require_field(&ctx_data, "image_url", |draft, v| draft.image_url = Some(v))
  });
  p.on_step("validate_price", validate_price);
}

// --- Steps ---

async fn resolve_dish(ctx_data: ContextData<DishCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let dish_id = guard.route_id()?;
  let found = guard.store.dishes.find_by_id(&dish_id).cloned();
  match found {
    Some(dish) => {
      debug!(%dish_id, "Dish resolved.");
      guard.resolved = Some(dish);
      Ok(PipelineControl::Continue)
    }
    None => Err(not_found(format!("Dish does not exist: {}", dish_id))),
  }
}

async fn ensure_dish_id_matches_route(ctx_data: ContextData<DishCtxData>) -> AppResult<PipelineControl> {
  let guard = ctx_data.read();
  let route_id = guard.route_id()?;
  match guard.payload.conflicting_id(&route_id) {
    Some(body_id) => Err(bad_request(format!(
      "Dish id does not match route id. Dish: {}, Route: {}",
      body_id, route_id
    ))),
    None => Ok(PipelineControl::Continue),
  }
}

fn require_field(
  ctx_data: &ContextData<DishCtxData>,
  field: &str,
  record: impl FnOnce(&mut DishDraft, String),
) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let value = required_string(&guard.payload, field, &format!("Dish must include a {}", field))?;
  record(&mut guard.draft, value);
  Ok(PipelineControl::Continue)
}

async fn validate_price(ctx_data: ContextData<DishCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let price = positive_integer(guard.payload.get("price")).ok_or_else(|| bad_request(PRICE_MESSAGE))?;
  guard.draft.price = Some(price);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "dish_step::create", skip(ctx_data), err(level = "warn"))]
async fn create_dish(ctx_data: ContextData<DishCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let fields = guard.draft.complete()?;
  let dish = Dish {
    id: guard.ids.next_id(),
    name: fields.name,
    description: fields.description,
    price: fields.price,
    image_url: fields.image_url,
  };
  guard.store.dishes.append(dish.clone());
  info!(dish_id = %dish.id, "Dish created.");
  guard.outcome = Some(dish);
  Ok(PipelineControl::Continue)
}

#[instrument(name = "dish_step::update", skip(ctx_data), err(level = "warn"))]
async fn update_dish(ctx_data: ContextData<DishCtxData>) -> AppResult<PipelineControl> {
  let mut guard = ctx_data.write();
  let fields = guard.draft.complete()?;
  let dish_id = guard.route_id()?;
  let dish = guard
    .store
    .dishes
    .find_by_id_mut(&dish_id)
    .ok_or_else(|| AppError::Internal(format!("resolved dish {} vanished from the store", dish_id)))?;
  dish.name = fields.name;
  dish.description = fields.description;
  dish.price = fields.price;
  dish.image_url = fields.image_url;
  let updated = dish.clone();
  info!(%dish_id, "Dish updated.");
  guard.outcome = Some(updated);
  Ok(PipelineControl::Continue)
}
