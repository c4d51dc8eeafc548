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
        BadRequestAlertResponse, BadRequestIdResponse, BadRequestValidationResponse,
        DatabaseUnavailableResponse, InternalServerErrorResponse,
    },
    wrap_or_not_found,
};
use core_proc_macros::ApiResource;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ItemTypeError;
use crate::models::ItemType;
use crate::repository::ItemTypeRepository;
use crate::service::ItemTypeService;

/// Entity name reported in alert headers
pub const ENTITY_NAME: &str = "labellaStoreAppItemItemType";

/// OpenAPI documentation for ItemTypes API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_item_type,
        update_item_type,
        get_all_item_types,
        get_item_type,
        delete_item_type,
    ),
    components(
        schemas(ItemType),
        responses(
            BadRequestAlertResponse,
            BadRequestIdResponse,
            BadRequestValidationResponse,
            DatabaseUnavailableResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Item type management endpoints")
    )
)]
pub struct ApiDoc;

struct ItemTypeState<R: ItemTypeRepository> {
    service: ItemTypeService<R>,
    alerts: EntityAlerts,
}

impl<R: ItemTypeRepository> ItemTypeState<R> {
    /// Id violations become alert errors; everything else maps as usual.
    fn reject(&self, err: ItemTypeError) -> AppError {
        match err.error_key() {
            Some(key) => self.alerts.bad_request(key, err.to_string()),
            None => err.into(),
        }
    }
}

/// Create the item type router; `application_name` prefixes the alert headers
pub fn router<R: ItemTypeRepository + 'static>(
    service: ItemTypeService<R>,
    application_name: impl Into<String>,
) -> Router {
    let state = Arc::new(ItemTypeState {
        service,
        alerts: EntityAlerts::new(application_name, ENTITY_NAME),
    });

    Router::new()
        .route(
            "/",
            get(get_all_item_types::<R>)
                .post(create_item_type::<R>)
                .put(update_item_type::<R>),
        )
        .route(
            "/{id}",
            get(get_item_type::<R>).delete(delete_item_type::<R>),
        )
        .with_state(state)
}

/// Create a new item type
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = ItemType,
    responses(
        (status = 201, description = "Item type created", body = ItemType,
            headers(("Location" = String, description = "URI of the new item type"))),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn create_item_type<R: ItemTypeRepository>(
    State(state): State<Arc<ItemTypeState<R>>>,
    ValidatedJson(item_type): ValidatedJson<ItemType>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("REST request to save ItemType: {:?}", item_type);

    if item_type.id.is_some() {
        return Err(state.reject(ItemTypeError::IdExists));
    }

    let saved = state.service.save(item_type).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::InternalServerError("Saved item type has no id".into()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api{}/{}", entity::Model::URL, id))],
        state.alerts.created(id),
        Json(saved),
    ))
}

/// Update an item type; an id with no stored item type is saved under a new id
#[utoipa::path(
    put,
    path = "",
    tag = entity::Model::TAG,
    request_body = ItemType,
    responses(
        (status = 200, description = "Item type updated", body = ItemType),
        (status = 400, response = BadRequestAlertResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn update_item_type<R: ItemTypeRepository>(
    State(state): State<Arc<ItemTypeState<R>>>,
    ValidatedJson(item_type): ValidatedJson<ItemType>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("REST request to update ItemType: {:?}", item_type);

    let Some(id) = item_type.id else {
        return Err(state.reject(ItemTypeError::IdNull));
    };

    let saved = state.service.save(item_type).await?;

    Ok((StatusCode::OK, state.alerts.updated(id), Json(saved)))
}

/// List all item types
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All item types", body = Vec<ItemType>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn get_all_item_types<R: ItemTypeRepository>(
    State(state): State<Arc<ItemTypeState<R>>>,
) -> Result<Json<Vec<ItemType>>, AppError> {
    tracing::debug!("REST request to get all ItemTypes");
    Ok(Json(state.service.find_all().await?))
}

/// Get an item type by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Item type id")
    ),
    responses(
        (status = 200, description = "Item type found", body = ItemType),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, description = "Item type not found, empty body"),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn get_item_type<R: ItemTypeRepository>(
    State(state): State<Arc<ItemTypeState<R>>>,
    IdPath(id): IdPath,
) -> Result<Response, AppError> {
    tracing::debug!("REST request to get ItemType: {}", id);
    Ok(wrap_or_not_found(state.service.find_one(id).await?))
}

/// Delete an item type by id
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i64, Path, description = "Item type id")
    ),
    responses(
        (status = 204, description = "Item type deleted, or never existed"),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = DatabaseUnavailableResponse)
    )
)]
async fn delete_item_type<R: ItemTypeRepository>(
    State(state): State<Arc<ItemTypeState<R>>>,
    IdPath(id): IdPath,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("REST request to delete ItemType: {}", id);
    state.service.delete(id).await?;
    Ok((StatusCode::NO_CONTENT, state.alerts.deleted(id)))
}
