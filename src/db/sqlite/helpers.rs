//! Shared helper functions for SQLite repositories.

use crate::db::{DbError, Id, NoteQuery};

/// Translate a driver error into a storage-agnostic [`DbError`].
pub fn map_sqlx_error(e: sqlx::Error) -> DbError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DbError::Constraint {
                message: db_err.message().to_string(),
            };
        }
        if db_err.is_foreign_key_violation() {
            return DbError::Validation {
                message: "Referenced folder or tag does not exist".to_string(),
            };
        }
    }

    DbError::Database {
        message: e.to_string(),
    }
}

/// Like [`map_sqlx_error`], but reports unique-name collisions by entity.
pub fn map_name_error(e: sqlx::Error, entity_type: &str, name: &str) -> DbError {
    match map_sqlx_error(e) {
        DbError::Constraint { .. } => DbError::Constraint {
            message: format!("{} named '{}' already exists", entity_type, name),
        },
        other => other,
    }
}

/// A bind value for a dynamically built WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Id(Id),
}

/// WHERE clause plus its bind values, in placeholder order.
#[derive(Debug, Default)]
pub struct NoteFilter {
    pub where_clause: String,
    pub bind_values: Vec<FilterValue>,
}

/// Build the WHERE clause for listing notes.
///
/// The tag filter is an EXISTS subquery rather than a condition on the joined
/// tag column, so matching notes keep their full tag list.
pub fn build_note_filter(query: &NoteQuery) -> NoteFilter {
    let mut conditions = Vec::new();
    let mut bind_values = Vec::new();

    if let Some(term) = query.search_term.as_deref().map(str::trim)
        && !term.is_empty()
    {
        conditions.push(r"notes.title LIKE ? ESCAPE '\'");
        bind_values.push(FilterValue::Text(format!("%{}%", escape_like(term))));
    }

    if let Some(folder_id) = query.folder_id {
        conditions.push("notes.folder_id = ?");
        bind_values.push(FilterValue::Id(folder_id));
    }

    if let Some(tag_id) = query.tag_id {
        conditions.push(
            "EXISTS (SELECT 1 FROM notes_tags nt WHERE nt.note_id = notes.id AND nt.tag_id = ?)",
        );
        bind_values.push(FilterValue::Id(tag_id));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    NoteFilter {
        where_clause,
        bind_values,
    }
}

/// Escape LIKE wildcards so a search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
