//! SQLite FolderRepository implementation.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::helpers::{map_name_error, map_sqlx_error};
use crate::db::{DbError, DbResult, Folder, FolderRepository, Id};

/// SQLx-backed folder repository.
pub struct SqliteFolderRepository<'a> {
    pub(crate) pool: &'a SqlitePool,
}

fn folder_from_row(row: &SqliteRow) -> Result<Folder, sqlx::Error> {
    Ok(Folder {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
    })
}

impl<'a> FolderRepository for SqliteFolderRepository<'a> {
    async fn list(&self) -> DbResult<Vec<Folder>> {
        let rows = sqlx::query("SELECT id, name FROM folders ORDER BY id")
            .fetch_all(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(folder_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(map_sqlx_error)
    }

    async fn get(&self, id: Id) -> DbResult<Folder> {
        let row = sqlx::query("SELECT id, name FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        match row {
            Some(row) => folder_from_row(&row).map_err(map_sqlx_error),
            None => Err(DbError::not_found("Folder", id)),
        }
    }

    async fn create(&self, name: &str) -> DbResult<Folder> {
        let result = sqlx::query("INSERT INTO folders (name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_error(e, "Folder", name))?;

        Ok(Folder {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        })
    }

    async fn update(&self, id: Id, name: &str) -> DbResult<Folder> {
        let result = sqlx::query("UPDATE folders SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| map_name_error(e, "Folder", name))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Folder", id));
        }

        Ok(Folder {
            id,
            name: name.to_string(),
        })
    }

    async fn delete(&self, id: Id) -> DbResult<()> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Folder", id));
        }

        Ok(())
    }
}
