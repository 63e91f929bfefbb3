//! Regroups flat join rows into nested note documents.
//!
//! The note list query left-joins notes, folders, notes_tags and tags, which
//! yields one row per (note, tag) pair. [`hydrate_notes`] folds those rows back
//! into one [`Note`] per note id with the folder and tags embedded.

use std::collections::{HashMap, HashSet};

use crate::db::{DbError, DbResult, Folder, Id, Note, NoteRow, Tag};

/// A note under construction plus the tag ids already attached to it.
struct Pending {
    note: Note,
    seen_tags: HashSet<Id>,
}

impl Pending {
    fn seed(id: Id, row: NoteRow) -> Self {
        let folder = row.folder_id.map(|folder_id| Folder {
            id: folder_id,
            name: row.folder_name.unwrap_or_default(),
        });

        Self {
            note: Note {
                id,
                title: row.title,
                content: row.content,
                folder,
                tags: Vec::new(),
            },
            seen_tags: HashSet::new(),
        }
    }

    fn add_tag(&mut self, id: Id, name: Option<String>) {
        if self.seen_tags.insert(id) {
            self.note.tags.push(Tag {
                id,
                name: name.unwrap_or_default(),
            });
        }
    }
}

/// Fold join rows into notes.
///
/// Notes come out in the order their id first appears. Rows for the same note
/// merge even when they are not contiguous. The folder is taken from the first
/// row seen for a note; tags are unique by id in first-seen order and rows with
/// a null tag id add nothing.
///
/// # Errors
///
/// Returns [`DbError::InvalidData`] if any row has no note id. The whole call
/// fails; no partially hydrated notes are returned.
pub fn hydrate_notes<I>(rows: I) -> DbResult<Vec<Note>>
where
    I: IntoIterator<Item = NoteRow>,
{
    let mut pending: Vec<Pending> = Vec::new();
    let mut index: HashMap<Id, usize> = HashMap::new();

    for (position, mut row) in rows.into_iter().enumerate() {
        let Some(note_id) = row.note_id else {
            return Err(DbError::InvalidData {
                message: format!("join row {} has no note id", position),
                help: "the note query must select notes.id as note_id".to_string(),
            });
        };

        let tag_id = row.tag_id.take();
        let tag_name = row.tag_name.take();

        let slot = match index.get(&note_id) {
            Some(&slot) => slot,
            None => {
                pending.push(Pending::seed(note_id, row));
                index.insert(note_id, pending.len() - 1);
                pending.len() - 1
            }
        };

        if let Some(tag_id) = tag_id {
            pending[slot].add_tag(tag_id, tag_name);
        }
    }

    Ok(pending.into_iter().map(|p| p.note).collect())
}
