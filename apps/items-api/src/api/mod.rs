//! API routes module

pub mod items;

use axum::Router;
use domain_items::{ItemRepository, ItemService};

/// Prefix every item endpoint is served under
pub const ITEMS_PREFIX: &str = "/v1/api/items";

/// Create all API routes
pub fn routes<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    Router::new().nest(ITEMS_PREFIX, items::router(service))
}
