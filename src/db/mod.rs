//! Database abstraction layer.
//!
//! Trait-based abstractions for data access, so the HTTP layer never talks
//! to a concrete storage backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Folder, Tag, Note) and the flat join row
//! - `hydrate`: Join rows → nested notes
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod hydrate;
mod models;
mod repository;
pub mod sqlite;


pub use error::{DbError, DbResult};
pub use hydrate::hydrate_notes;
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
