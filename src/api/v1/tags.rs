//! Tag management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, Tag, TagRepository, Id};

use super::{ApiResult, ErrorResponse, db_error_response, required_field};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct TagResponse {
    #[schema(example = 5)]
    pub id: Id,
    #[schema(example = "urgent")]
    pub name: String,
}

impl From<Tag> for TagResponse {
    fn from(f: Tag) -> Self {
        Self {
            id: f.id,
            name: f.name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTagRequest {
    #[schema(example = "urgent")]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTagRequest {
    #[schema(example = "later")]
    pub name: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/v1/tags",
    tag = "tags",
    responses(
        (status = 200, description = "All tags", body = [TagResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_tags<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<Vec<TagResponse>>> {
    let tags = state
        .db()
        .tags()
        .list()
        .await
        .map_err(db_error_response)?;

    Ok(Json(tags.into_iter().map(TagResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/tags/{id}",
    tag = "tags",
    params(("id" = i64, Path, description = "Tag ID")),
    responses(
        (status = 200, description = "Tag found", body = TagResponse),
        (status = 404, description = "Tag not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_tag<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<Json<TagResponse>> {
    let tag = state
        .db()
        .tags()
        .get(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(TagResponse::from(tag)))
}

#[utoipa::path(
    post,
    path = "/api/v1/tags",
    tag = "tags",
    request_body = CreateTagRequest,
    responses(
        (status = 201, description = "Tag created", body = TagResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_tag<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateTagRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<TagResponse>)> {
    let name = required_field(req.name, "name")?;

    let tag = state
        .db()
        .tags()
        .create(&name)
        .await
        .map_err(db_error_response)?;

    let location = format!("/api/v1/tags/{}", tag.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(TagResponse::from(tag)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/tags/{id}",
    tag = "tags",
    params(("id" = i64, Path, description = "Tag ID")),
    request_body = UpdateTagRequest,
    responses(
        (status = 200, description = "Tag renamed", body = TagResponse),
        (status = 400, description = "Missing name", body = ErrorResponse),
        (status = 404, description = "Tag not found", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_tag<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    Json(req): Json<UpdateTagRequest>,
) -> ApiResult<Json<TagResponse>> {
    let name = required_field(req.name, "name")?;

    let tag = state
        .db()
        .tags()
        .update(id, &name)
        .await
        .map_err(db_error_response)?;

    Ok(Json(TagResponse::from(tag)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tags/{id}",
    tag = "tags",
    params(("id" = i64, Path, description = "Tag ID")),
    responses(
        (status = 204, description = "Tag deleted and detached from all notes"),
        (status = 404, description = "Tag not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_tag<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<StatusCode> {
    state
        .db()
        .tags()
        .delete(id)
        .await
        .map_err(db_error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
