//! Folder management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, Folder, FolderRepository, Id};

use super::{ApiResult, ErrorResponse, db_error_response, required_field};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct FolderResponse {
    #[schema(example = 10)]
    pub id: Id,
    #[schema(example = "Work")]
    pub name: String,
}

impl From<Folder> for FolderResponse {
    fn from(f: Folder) -> Self {
        Self {
            id: f.id,
            name: f.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFolderRequest {
    #[schema(example = "Work")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFolderRequest {
    #[schema(example = "Archive")]
    pub name: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/v1/folders",
    tag = "folders",
    responses(
        (status = 200, description = "All folders", body = [FolderResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_folders<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<Vec<FolderResponse>>> {
    let folders = state
        .db()
        .folders()
        .list()
        .await
        .map_err(db_error_response)?;

    Ok(Json(folders.into_iter().map(FolderResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/folders/{id}",
    tag = "folders",
    params(("id" = i64, Path, description = "Folder ID")),
    responses(
        (status = 200, description = "Folder found", body = FolderResponse),
        (status = 404, description = "Folder not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_folder<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<Json<FolderResponse>> {
    let folder = state
        .db()
        .folders()
        .get(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(FolderResponse::from(folder)))
}

#[utoipa::path(
    post,
    path = "/api/v1/folders",
    tag = "folders",
    request_body = CreateFolderRequest,
    responses(
        (status = 201, description = "Folder created", body = FolderResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_folder<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateFolderRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<FolderResponse>)> {
    let name = required_field(req.name, "name")?;

    let folder = state
        .db()
        .folders()
        .create(&name)
        .await
        .map_err(db_error_response)?;

    let location = format!("/api/v1/folders/{}", folder.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FolderResponse::from(folder)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/folders/{id}",
    tag = "folders",
    params(("id" = i64, Path, description = "Folder ID")),
    request_body = UpdateFolderRequest,
    responses(
        (status = 200, description = "Folder renamed", body = FolderResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 404, description = "Folder not found", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_folder<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    Json(req): Json<UpdateFolderRequest>,
) -> ApiResult<Json<FolderResponse>> {
    let name = required_field(req.name, "name")?;

    let folder = state
        .db()
        .folders()
        .update(id, &name)
        .await
        .map_err(db_error_response)?;

    Ok(Json(FolderResponse::from(folder)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/folders/{id}",
    tag = "folders",
    params(("id" = i64, Path, description = "Folder ID")),
    responses(
        (status = 204, description = "Folder deleted; its notes keep existing without a folder"),
        (status = 404, description = "Folder not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_folder<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<StatusCode> {
    state
        .db()
        .folders()
        .delete(id)
        .await
        .map_err(db_error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
