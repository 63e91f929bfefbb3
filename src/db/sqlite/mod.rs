//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod connection;
mod folder;
mod helpers;
mod note;
mod tag;

#[cfg(test)]
mod connection_test;
#[cfg(test)]
mod folder_test;

pub use connection::SqliteDatabase;
pub use folder::SqliteFolderRepository;
pub use note::SqliteNoteRepository;
pub use tag::SqliteTagRepository;
