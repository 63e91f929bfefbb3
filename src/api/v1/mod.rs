//! V1 API handlers.

mod folders;
mod notes;
mod system;
mod tags;

#[cfg(test)]
mod folders_test;

pub use folders::*;
pub use notes::*;
pub use system::*;
pub use tags::*;

use axum::{Json, http::StatusCode};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Missing `title` in request body")]
    pub error: String,
}

/// Handler result with a JSON error body.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

fn error_response(
    status: StatusCode,
    error: impl Into<String>,
) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Map a storage error onto an HTTP status.
///
/// Anything that is not the client's fault, including a malformed join row
/// caught during hydration, becomes a 500.
fn db_error_response(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        DbError::NotFound { entity_type, id } => error_response(
            StatusCode::NOT_FOUND,
            format!("{} '{}' not found", entity_type, id),
        ),
        DbError::Validation { message } => error_response(StatusCode::BAD_REQUEST, message),
        DbError::Constraint { message } => error_response(StatusCode::CONFLICT, message),
        other => {
            error!(error = %other, "request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

/// Require a non-blank string field from a request body.
fn required_field(value: Option<String>, field: &str) -> ApiResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(error_response(
            StatusCode::BAD_REQUEST,
            format!("Missing `{}` in request body", field),
        )),
    }
}
