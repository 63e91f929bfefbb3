//! SQLite NoteRepository implementation.
//!
//! Reads go through one left join over notes, folders, notes_tags and tags;
//! the flat rows are regrouped by [`hydrate_notes`].

use std::collections::HashSet;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use super::helpers::{FilterValue, build_note_filter, map_sqlx_error};
use crate::db::{
    DbError, DbResult, Id, Note, NoteInput, NoteQuery, NoteRepository, NoteRow, hydrate_notes,
};

const NOTE_ROWS_SELECT: &str = "SELECT notes.id AS note_id, notes.title AS title, notes.content AS content,
            folders.id AS folder_id, folders.name AS folder_name,
            tags.id AS tag_id, tags.name AS tag_name
     FROM notes
     LEFT JOIN folders ON notes.folder_id = folders.id
     LEFT JOIN notes_tags ON notes.id = notes_tags.note_id
     LEFT JOIN tags ON tags.id = notes_tags.tag_id";

// notes_tags.rowid is the order tags were attached in
const NOTE_ROWS_ORDER: &str = "ORDER BY notes.id, notes_tags.rowid";

/// SQLx-backed note repository.
pub struct SqliteNoteRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn note_row(row: &SqliteRow) -> Result<NoteRow, sqlx::Error> {
    Ok(NoteRow {
        note_id: row.try_get("note_id")?,
        title: row.try_get("title")?,
        content: row.try_get("content")?,
        folder_id: row.try_get("folder_id")?,
        folder_name: row.try_get("folder_name")?,
        tag_id: row.try_get("tag_id")?,
        tag_name: row.try_get("tag_name")?,
    })
}

impl SqliteNoteRepository<'_> {
    async fn fetch_hydrated(
        &self,
        where_clause: &str,
        bind_values: &[FilterValue],
    ) -> DbResult<Vec<Note>> {
        let sql = format!("{} {} {}", NOTE_ROWS_SELECT, where_clause, NOTE_ROWS_ORDER);

        let mut query = sqlx::query(&sql);
        for value in bind_values {
            query = match value {
                FilterValue::Text(text) => query.bind(text.clone()),
                FilterValue::Id(id) => query.bind(*id),
            };
        }

        let rows = query
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let row_count = rows.len();
        let rows = rows
            .iter()
            .map(note_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)?;

        let notes = hydrate_notes(rows)?;
        debug!(rows = row_count, notes = notes.len(), "hydrated notes");
        Ok(notes)
    }
}

/// Link tags to a note in the given order, skipping repeated ids.
async fn attach_tags(conn: &mut SqliteConnection, note_id: Id, tag_ids: &[Id]) -> DbResult<()> {
    let mut seen = HashSet::new();
    for &tag_id in tag_ids.iter().filter(|id| seen.insert(**id)) {
        sqlx::query("INSERT INTO notes_tags (note_id, tag_id) VALUES (?, ?)")
            .bind(note_id)
            .bind(tag_id)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx_error)?;
    }
    Ok(())
}

impl<'a> NoteRepository for SqliteNoteRepository<'a> {
    async fn list(&self, query: &NoteQuery) -> DbResult<Vec<Note>> {
        let filter = build_note_filter(query);
        self.fetch_hydrated(&filter.where_clause, &filter.bind_values)
            .await
    }

    async fn get(&self, id: Id) -> DbResult<Note> {
        self.fetch_hydrated("WHERE notes.id = ?", &[FilterValue::Id(id)])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DbError::not_found("Note", id))
    }

    async fn create(&self, input: &NoteInput) -> DbResult<Note> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query("INSERT INTO notes (title, content, folder_id) VALUES (?, ?, ?)")
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.folder_id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        let id = result.last_insert_rowid();

        attach_tags(&mut tx, id, &input.tag_ids).await?;

        tx.commit().await.map_err(map_sqlx_error)?;

        self.get(id).await
    }

    async fn update(&self, id: Id, input: &NoteInput) -> DbResult<Note> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result =
            sqlx::query("UPDATE notes SET title = ?, content = ?, folder_id = ? WHERE id = ?")
                .bind(&input.title)
                .bind(&input.content)
                .bind(input.folder_id)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Note", id));
        }

        sqlx::query("DELETE FROM notes_tags WHERE note_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        attach_tags(&mut tx, id, &input.tag_ids).await?;

        tx.commit().await.map_err(map_sqlx_error)?;

        self.get(id).await
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Note", id));
        }

        Ok(())
    }
}
