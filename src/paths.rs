//! Path resolution for noteful data files.
//!
//! Provides XDG-compliant path resolution with an env override for the
//! database file.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "NOTEFUL_DB_PATH";

const APP_DIR: &str = "noteful";

/// Get XDG-compliant data directory.
///
/// `$XDG_DATA_HOME/noteful`, else `~/.local/share/noteful`. Falls back to a
/// relative `noteful` directory when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_default();

    data_home.join(APP_DIR)
}

/// Get database file path.
///
/// `NOTEFUL_DB_PATH` if set and non-empty, otherwise `data_dir/noteful.db`.
pub fn get_db_path() -> PathBuf {
    env::var(DB_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| get_data_dir().join("noteful.db"))
}
