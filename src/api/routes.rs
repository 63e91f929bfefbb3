//! API route configuration.

use axum::Router;
use axum::routing::{delete, get, post, put};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::state::AppState;
use super::v1::{
    self, CreateFolderRequest, CreateNoteRequest, CreateTagRequest, ErrorResponse,
    FolderResponse, HealthResponse, NoteResponse, TagResponse, UpdateFolderRequest,
    UpdateNoteRequest, UpdateTagRequest,
};
use crate::db::Database;

/// Build routes with generic database type.
///
/// This macro reduces boilerplate when registering handlers that are generic
/// over the Database trait. It applies the turbofish operator automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Noteful API",
        version = "0.1.0",
        description = "Notes organised by folders and tags",
        license(name = "GPL-2.0")
    ),
    paths(
        v1::health,
        v1::list_notes,
        v1::get_note,
        v1::create_note,
        v1::update_note,
        v1::delete_note,
        v1::list_folders,
        v1::get_folder,
        v1::create_folder,
        v1::update_folder,
        v1::delete_folder,
        v1::list_tags,
        v1::get_tag,
        v1::create_tag,
        v1::update_tag,
        v1::delete_tag,
    ),
    components(
        schemas(
            HealthResponse,
            NoteResponse,
            CreateNoteRequest,
            UpdateNoteRequest,
            FolderResponse,
            CreateFolderRequest,
            UpdateFolderRequest,
            TagResponse,
            CreateTagRequest,
            UpdateTagRequest,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "notes", description = "Notes with their folder and tags"),
        (name = "folders", description = "Folder management endpoints"),
        (name = "tags", description = "Tag management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the API router with OpenAPI documentation at `/docs`.
pub fn create_router<D: Database + 'static>(state: AppState<D>) -> Router {
    let api = ApiDoc::openapi();

    // System routes (non-generic)
    let system_routes = Router::new().route("/health", get(v1::health));

    let note_routes = routes!(D => {
        get "/api/v1/notes" => v1::list_notes,
        get "/api/v1/notes/{id}" => v1::get_note,
        post "/api/v1/notes" => v1::create_note,
        put "/api/v1/notes/{id}" => v1::update_note,
        delete "/api/v1/notes/{id}" => v1::delete_note,
    });

    let folder_routes = routes!(D => {
        get "/api/v1/folders" => v1::list_folders,
        get "/api/v1/folders/{id}" => v1::get_folder,
        post "/api/v1/folders" => v1::create_folder,
        put "/api/v1/folders/{id}" => v1::update_folder,
        delete "/api/v1/folders/{id}" => v1::delete_folder,
    });

    let tag_routes = routes!(D => {
        get "/api/v1/tags" => v1::list_tags,
        get "/api/v1/tags/{id}" => v1::get_tag,
        post "/api/v1/tags" => v1::create_tag,
        put "/api/v1/tags/{id}" => v1::update_tag,
        delete "/api/v1/tags/{id}" => v1::delete_tag,
    });

    system_routes
        .merge(note_routes)
        .merge(folder_routes)
        .merge(tag_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
}
