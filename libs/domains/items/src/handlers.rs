use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    IdPath, JsonBody,
    errors::responses::{BadRequestResponse, NotFoundResponse, ValidationErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{Item, ItemPayload};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Body returned by a successful delete
pub const DELETE_CONFIRMATION: &str = "Item deleted Successfully";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(add_item, get_item, get_all_items, list_items, delete_item, update_item),
    components(
        schemas(Item, ItemPayload),
        responses(ValidationErrorResponse, BadRequestResponse, NotFoundResponse)
    ),
    tags(
        (name = "Items", description = "In-memory item catalogue")
    )
)]
pub struct ApiDoc;

/// Create the items router. Paths are relative; mount it under `/v1/api/items`.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/add", post(add_item))
        .route("/get/all", get(get_all_items))
        .route("/all", get(list_items))
        .route("/get/{id}", get(get_item))
        .route("/delete/{id}", delete(delete_item))
        .route("/update/{id}", put(update_item))
        .with_state(shared_service)
}

/// Add a new item
#[utoipa::path(
    post,
    path = "/add",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item created successfully", body = Item),
        (status = 400, response = ValidationErrorResponse)
    )
)]
async fn add_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> ItemResult<Json<Item>> {
    let item = service.add_item(payload).await?;
    Ok(Json(item))
}

/// Get item by ID
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Get all items
#[utoipa::path(
    get,
    path = "/get/all",
    tag = "Items",
    responses(
        (status = 200, description = "List of items returned", body = Vec<Item>)
    )
)]
async fn get_all_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> Json<Vec<Item>> {
    Json(service.get_all_items().await)
}

/// Get all items (short path)
#[utoipa::path(
    get,
    path = "/all",
    tag = "Items",
    responses(
        (status = 200, description = "List of items returned", body = Vec<Item>)
    )
)]
async fn list_items<R: ItemRepository>(
    state: State<Arc<ItemService<R>>>,
) -> Json<Vec<Item>> {
    get_all_items(state).await
}

/// Delete item by ID
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
) -> ItemResult<&'static str> {
    service.delete_item(id).await?;
    Ok(DELETE_CONFIRMATION)
}

/// Update item details
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, response = ValidationErrorResponse),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<ItemPayload>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, payload).await?;
    Ok(Json(item))
}
