//! Domain models for the notes database.
//!
//! These models are storage-agnostic and represent the core entities
//! used throughout the application.

use serde::{Deserialize, Serialize};

/// Integer row id used for all entities.
pub type Id = i64;

/// A named folder. A note sits in at most one folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: Id,
    pub name: String,
}

/// A named tag. Notes and tags are linked M:N through `notes_tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Id,
    pub name: String,
}

/// A note with its folder and tags embedded.
///
/// Built from [`NoteRow`]s by [`hydrate_notes`](crate::db::hydrate_notes).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: Id,
    pub title: String,
    pub content: String,
    /// `None` serializes as `null`.
    pub folder: Option<Folder>,
    /// Unique by id, in attach order.
    pub tags: Vec<Tag>,
}

/// One flattened row of the notes → folders → notes_tags → tags left join.
///
/// A note with N tags yields N rows; a note without tags yields one row with
/// both tag columns null.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteRow {
    /// Always set by a well-formed join query.
    pub note_id: Option<Id>,
    pub title: String,
    pub content: String,
    pub folder_id: Option<Id>,
    pub folder_name: Option<String>,
    pub tag_id: Option<Id>,
    pub tag_name: Option<String>,
}

/// Write-side payload for creating or replacing a note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    pub folder_id: Option<Id>,
    /// Attached in this order; duplicates are ignored.
    pub tag_ids: Vec<Id>,
}

/// Filters for listing notes. All filters are ANDed together.
#[derive(Debug, Clone, Default)]
pub struct NoteQuery {
    /// Substring match on title.
    pub search_term: Option<String>,
    pub folder_id: Option<Id>,
    /// Keep notes carrying this tag. Matching notes still report every tag.
    pub tag_id: Option<Id>,
}
