//! Items API routes

use axum::Router;
use domain_items::{ItemRepository, ItemService, handlers};

/// Create items router
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    handlers::router(service)
}
