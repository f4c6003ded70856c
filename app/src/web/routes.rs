// grubdash/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{dish_handlers, fallback_handlers, order_handlers};

/// Mounts the dish and order resources. Each resource answers unsupported
/// methods with 405; paths outside them get 404.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .service(
      web::resource("/dishes")
        .route(web::get().to(dish_handlers::list_dishes_handler))
        .route(web::post().to(dish_handlers::create_dish_handler))
        .default_service(web::to(fallback_handlers::method_not_allowed_handler)),
    )
    .service(
      web::resource("/dishes/{dishId}")
        .route(web::get().to(dish_handlers::read_dish_handler))
        .route(web::put().to(dish_handlers::update_dish_handler))
        .default_service(web::to(fallback_handlers::method_not_allowed_handler)),
    )
    .service(
      web::resource("/orders")
        .route(web::get().to(order_handlers::list_orders_handler))
        .route(web::post().to(order_handlers::create_order_handler))
        .default_service(web::to(fallback_handlers::method_not_allowed_handler)),
    )
    .service(
      web::resource("/orders/{orderId}")
        .route(web::get().to(order_handlers::read_order_handler))
        .route(web::put().to(order_handlers::update_order_handler))
        .route(web::delete().to(order_handlers::destroy_order_handler))
        .default_service(web::to(fallback_handlers::method_not_allowed_handler)),
    )
    .default_service(web::to(fallback_handlers::not_found_handler));
}
