//! Handlers for status endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::status::{
    CreateStatusRequest, ListStatusParams, SearchStatusParams, UpdateStatusRequest,
};
use crate::domain::entities::{Caller, Status, StatusList};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a status owned by the authenticated caller.
///
/// # Endpoint
///
/// `POST /api/v1/status`
///
/// # Errors
///
/// - 400 if the body is malformed or fails validation
/// - 401 if the caller is not authenticated
pub async fn create_status_handler(
    State(state): State<AppState>,
    caller: Caller,
    payload: Result<Json<CreateStatusRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Status>), AppError> {
    let Json(payload) = payload?;

    let status = state.status_service.create(caller, payload.into()).await?;

    Ok((StatusCode::CREATED, Json(status)))
}

/// Replaces the description, active flag and order number of a status.
///
/// # Endpoint
///
/// `PUT /api/v1/status/{id}`
///
/// # Errors
///
/// - 400 on an invalid id or body
/// - 401 if the caller is not authenticated
/// - 403 if ownership is enforced and the caller did not create the status
/// - 404 if the status is missing or deleted
pub async fn update_status_handler(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<Status>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    let status = state
        .status_service
        .update(caller, id, payload.into())
        .await?;

    Ok(Json(status))
}

/// Returns a single status.
///
/// # Endpoint
///
/// `GET /api/v1/status/{id}`
pub async fn get_status_handler(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Status>, AppError> {
    let Path(id) = id?;

    Ok(Json(state.status_service.get_by_id(id).await?))
}

/// Soft-deletes a status.
///
/// # Endpoint
///
/// `DELETE /api/v1/status/{id}`
///
/// Returns `204 No Content` on success and 404 for an already deleted id.
pub async fn delete_status_handler(
    State(state): State<AppState>,
    caller: Caller,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.status_service.delete(caller, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Lists statuses with pagination and optional equality filters.
///
/// # Endpoint
///
/// `GET /api/v1/status?page=&size=&order_by=&name=&description=&active=&order_number=`
///
/// # Response
///
/// ```json
/// {
///   "total_count": 42,
///   "total_pages": 5,
///   "page": 1,
///   "size": 10,
///   "has_more": true,
///   "data": [ ... ]
/// }
/// ```
pub async fn list_status_handler(
    State(state): State<AppState>,
    params: Result<Query<ListStatusParams>, QueryRejection>,
) -> Result<Json<StatusList>, AppError> {
    let Query(params) = params?;
    let (query, filter) = params.into_parts();

    Ok(Json(state.status_service.list(query, filter).await?))
}

/// Searches statuses whose name or description contains `text`, case-insensitively.
///
/// # Endpoint
///
/// `GET /api/v1/status/search?text=&page=&size=&order_by=`
pub async fn search_status_handler(
    State(state): State<AppState>,
    params: Result<Query<SearchStatusParams>, QueryRejection>,
) -> Result<Json<StatusList>, AppError> {
    let Query(params) = params?;

    let list = state
        .status_service
        .search_by_text(&params.text, params.page.into())
        .await?;

    Ok(Json(list))
}
