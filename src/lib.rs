//! Notes, folders and tags over a REST API backed by SQLite.

pub mod api;
pub mod db;
pub mod paths;
