use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    AppError, EntityAlerts, IdPath, ValidatedJson,
    errors::responses::{
        BadRequestAlertResponse, BadRequestIdResponse, DatabaseUnavailableResponse,
        InternalServerErrorResponse,
    },
    wrap_or_not_found,
};
use core_proc_macros::ApiResource;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ItemError;
use crate::models::Item;
use crate::repository::ItemRepository;
use crate::service::ItemService;

pub const ENTITY_NAME: &str = "labellaStoreAppItemItem";

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(create_item, update_item, get_all_items, get_item, delete_item),
    components(
        schemas(Item),
        responses(
            BadRequestAlertResponse,
            BadRequestIdResponse,
            DatabaseUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Item management endpoints")
    )
)]
pub struct ApiDoc;

struct ItemState<R: ItemRepository> {
    service: ItemService<R>,
    alerts: EntityAlerts,
}

impl<R: ItemRepository> ItemState<R> {
    fn reject(&self, err: ItemError) -> AppError {
        match err.error_key() {
            Some(key) => self.alerts.bad_request(key, err.to_string()),
            None => err.into(),
        }
    }
}

/// Create the item router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(
    service: ItemService<R>,
    application_name: impl Into<String>,
) -> Router {
    let state = Arc::new(ItemState {
        service,
        alerts: EntityAlerts::new(application_name, ENTITY_NAME),
    });

    Router::new()
        .route(
            "/",
            get(get_all_items::<R>)
                .post(create_item::<R>)
                .put(update_item::<R>),
        )
        .route("/{id}", get(get_item::<R>).delete(delete_item::<R>))
        .with_state(state)
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = Item,
            headers(("Location" = String, description = "URI of the new item"))),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(state): State<Arc<ItemState<R>>>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("REST request to save Item: {:?}", item);

    if item.id.is_some() {
        return Err(state.reject(ItemError::IdExists));
    }

    let saved = state.service.save(item).await?;
    let Some(id) = saved.id else {
        return Err(AppError::InternalServerError("Saved item has no id".into()));
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api{}/{}", entity::Model::URL, id))],
        state.alerts.created(id),
        Json(saved),
    ))
}

/// Update an item; an id with no stored item is saved under a new id
#[utoipa::path(
    put,
    path = "",
    tag = entity::Model::TAG,
    request_body = Item,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(state): State<Arc<ItemState<R>>>,
    ValidatedJson(item): ValidatedJson<Item>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("REST request to update Item: {:?}", item);

    let Some(id) = item.id else {
        return Err(state.reject(ItemError::IdNull));
    };

    let saved = state.service.save(item).await?;
    Ok((StatusCode::OK, state.alerts.updated(id), Json(saved)))
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn get_all_items<R: ItemRepository>(
    State(state): State<Arc<ItemState<R>>>,
) -> Result<Json<Vec<Item>>, AppError> {
    tracing::debug!("REST request to get all Items");
    let items = state.service.find_all().await?;
    Ok(Json(items))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Item not found, empty body"),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(state): State<Arc<ItemState<R>>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to get Item: {}", id);
    let item = state.service.find_one(id).await?;
    Ok(wrap_or_not_found(item))
}

/// Delete an item by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(state): State<Arc<ItemState<R>>>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("REST request to delete Item: {}", id);
    state.service.delete(id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts.deleted(id)))
}
