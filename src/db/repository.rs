//! Repository traits for data access abstraction.
//!
//! These traits define the contract for data access, allowing different
//! storage backends to be swapped without changing the HTTP layer.
//! Futures are required to be `Send` so handlers generic over [`Database`]
//! can run on a multi-threaded runtime.

use std::future::Future;

use crate::db::{
    DbResult,
    models::{Folder, Id, Note, NoteInput, NoteQuery, Tag},
};

/// Repository for Folder operations.
pub trait FolderRepository {
    /// Get all folders ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Folder>>> + Send;

    /// Get a folder by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Folder>> + Send;

    /// Create a folder and return it with its generated ID.
    fn create(&self, name: &str) -> impl Future<Output = DbResult<Folder>> + Send;

    /// Rename an existing folder.
    fn update(&self, id: Id, name: &str) -> impl Future<Output = DbResult<Folder>> + Send;

    /// Delete a folder. Notes in it are left without a folder.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Tag operations.
pub trait TagRepository {
    /// Get all tags ordered by id.
    fn list(&self) -> impl Future<Output = DbResult<Vec<Tag>>> + Send;

    /// Get a tag by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Tag>> + Send;

    /// Create a tag and return it with its generated ID.
    fn create(&self, name: &str) -> impl Future<Output = DbResult<Tag>> + Send;

    /// Rename an existing tag.
    fn update(&self, id: Id, name: &str) -> impl Future<Output = DbResult<Tag>> + Send;

    /// Delete a tag. It is detached from every note.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;
}

/// Repository for Note operations.
///
/// Every read returns hydrated notes with folder and tags embedded.
pub trait NoteRepository {
    /// List notes matching the query, ordered by id.
    fn list(&self, query: &NoteQuery) -> impl Future<Output = DbResult<Vec<Note>>> + Send;

    /// Get a note by ID.
    fn get(&self, id: Id) -> impl Future<Output = DbResult<Note>> + Send;

    /// Insert a note and its tag links in one transaction.
    fn create(&self, input: &NoteInput) -> impl Future<Output = DbResult<Note>> + Send;

    /// Replace a note's fields and tag links in one transaction.
    fn update(&self, id: Id, input: &NoteInput) -> impl Future<Output = DbResult<Note>> + Send;

    /// Delete a note by ID.
    fn delete(&self, id: Id) -> impl Future<Output = DbResult<()>> + Send;
}

/// Combined database interface.
///
/// Repositories are handed out through associated types, avoiding dynamic
/// dispatch.
pub trait Database: Send + Sync {
    type Folders<'a>: FolderRepository + Send + Sync
    where
        Self: 'a;
    type Tags<'a>: TagRepository + Send + Sync
    where
        Self: 'a;
    type Notes<'a>: NoteRepository + Send + Sync
    where
        Self: 'a;

    /// Run pending migrations.
    fn migrate(&self) -> DbResult<()>;

    /// Get the folder repository.
    fn folders(&self) -> Self::Folders<'_>;

    /// Get the tag repository.
    fn tags(&self) -> Self::Tags<'_>;

    /// Get the note repository.
    fn notes(&self) -> Self::Notes<'_>;
}
