//! Note management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::db::{Database, Id, Note, NoteInput, NoteQuery, NoteRepository};

use super::{
    ApiResult, ErrorResponse, FolderResponse, TagResponse, db_error_response, error_response,
    required_field,
};

// =============================================================================
// DTOs
// =============================================================================

#[derive(Serialize, ToSchema)]
pub struct NoteResponse {
    #[schema(example = 1)]
    pub id: Id,
    #[schema(example = "My Note")]
    pub title: String,
    #[schema(example = "Note content")]
    pub content: String,
    /// `null` when the note is not in a folder
    pub folder: Option<FolderResponse>,
    /// Attached tags in attach order
    pub tags: Vec<TagResponse>,
}

impl From<Note> for NoteResponse {
    fn from(n: Note) -> Self {
        Self {
            id: n.id,
            title: n.title,
            content: n.content,
            folder: n.folder.map(FolderResponse::from),
            tags: n.tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[schema(example = "My Note")]
    pub title: Option<String>,
    #[schema(example = "Note content")]
    pub content: Option<String>,
    #[schema(example = 10)]
    pub folder_id: Option<Id>,
    /// Tag IDs to attach, in order
    #[schema(example = json!([5, 6]))]
    #[serde(default)]
    pub tags: Vec<Id>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    #[schema(example = "Updated Note")]
    pub title: Option<String>,
    #[schema(example = "Updated content")]
    pub content: Option<String>,
    /// Omit or set `null` to take the note out of its folder
    #[schema(example = 10)]
    pub folder_id: Option<Id>,
    /// Replaces all attached tags
    #[schema(example = json!([6]))]
    #[serde(default)]
    pub tags: Vec<Id>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListNotesQuery {
    /// Case-insensitive substring match on title
    #[param(example = "groceries")]
    pub search_term: Option<String>,
    /// Only notes in this folder
    #[param(example = 10)]
    pub folder_id: Option<Id>,
    /// Only notes carrying this tag
    #[param(example = 5)]
    pub tag_id: Option<Id>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetNoteQuery {
    /// Not accepted here; use `GET /api/v1/notes?tag_id=` instead
    pub tag_id: Option<Id>,
}

// =============================================================================
// Handlers
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/v1/notes",
    tag = "notes",
    params(ListNotesQuery),
    responses(
        (status = 200, description = "Notes with folder and tags", body = [NoteResponse]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_notes<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListNotesQuery>,
) -> ApiResult<Json<Vec<NoteResponse>>> {
    let db_query = NoteQuery {
        search_term: query.search_term,
        folder_id: query.folder_id,
        tag_id: query.tag_id,
    };

    let notes = state
        .db()
        .notes()
        .list(&db_query)
        .await
        .map_err(db_error_response)?;

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note ID"), GetNoteQuery),
    responses(
        (status = 200, description = "Note found", body = NoteResponse),
        (status = 400, description = "tag_id supplied", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    Query(query): Query<GetNoteQuery>,
) -> ApiResult<Json<NoteResponse>> {
    // The path id always names the note; tag lookups belong to the list route.
    if query.tag_id.is_some() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "`tag_id` is not supported when reading a single note; use GET /api/v1/notes?tag_id=",
        ));
    }

    let note = state
        .db()
        .notes()
        .get(id)
        .await
        .map_err(db_error_response)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    post,
    path = "/api/v1/notes",
    tag = "notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteResponse),
        (status = 400, description = "Missing title or unknown folder/tag", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_note<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, [(header::HeaderName, String); 1], Json<NoteResponse>)> {
    let input = NoteInput {
        title: required_field(req.title, "title")?,
        content: req.content.unwrap_or_default(),
        folder_id: req.folder_id,
        tag_ids: req.tags,
    };

    let note = state
        .db()
        .notes()
        .create(&input)
        .await
        .map_err(db_error_response)?;

    let location = format!("/api/v1/notes/{}", note.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(NoteResponse::from(note)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note ID")),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = NoteResponse),
        (status = 400, description = "Missing title or unknown folder/tag", body = ErrorResponse),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    Json(req): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteResponse>> {
    let input = NoteInput {
        title: required_field(req.title, "title")?,
        content: req.content.unwrap_or_default(),
        folder_id: req.folder_id,
        tag_ids: req.tags,
    };

    let note = state
        .db()
        .notes()
        .update(id, &input)
        .await
        .map_err(db_error_response)?;

    Ok(Json(NoteResponse::from(note)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/notes/{id}",
    tag = "notes",
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_note<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<StatusCode> {
    state
        .db()
        .notes()
        .delete(id)
        .await
        .map_err(db_error_response)?;

    Ok(StatusCode::NO_CONTENT)
}
