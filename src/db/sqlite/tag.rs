//! SQLite TagRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{map_name_error, map_sqlx_error};
use crate::db::{DbError, DbResult, Id, Tag, TagRepository};

/// SQLx-backed tag repository.
pub struct SqliteTagRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn tag_from_row(row: &SqliteRow) -> Result<Tag, sqlx::Error> {
    Ok(Tag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

impl<'a> TagRepository for SqliteTagRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Tag>> {
        let rows = sqlx::query("SELECT id, name FROM tags ORDER BY id")
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(tag_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }

    async fn get(&self, id: Id) -> DbResult<Tag> {
        let row = sqlx::query("SELECT id, name FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => tag_from_row(&row).map_err(map_sqlx_error),
            None => Err(DbError::not_found("Tag", id)),
        }
    }

    async fn create(&self, name: &str) -> DbResult<Tag> {
        let result = sqlx::query("INSERT INTO tags (name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_error(e, "Tag", name))?;

        Ok(Tag {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    async fn update(&self, id: Id, name: &str) -> DbResult<Tag> {
        let result = sqlx::query("UPDATE tags SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_error(e, "Tag", name))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Tag", id));
        }

        Ok(Tag {
            id,
            name: name.to_string(),
        })
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Tag", id));
        }

        Ok(())
    }
}
