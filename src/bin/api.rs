//! Noteful API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use noteful::api::{self, ApiError, Config};
use noteful::db::{Database, DbError, SqliteDatabase};
use noteful::paths::get_db_path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(noteful::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(noteful::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(noteful::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "noteful-api")]
#[command(author, version, about = "Noteful API server", long_about = None)]
struct Cli {
    /// Host address to bind to (overrides NOTEFUL_HOST, default 0.0.0.0)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides NOTEFUL_PORT, default 3000)
    #[arg(short, long)]
    port: Option<u16>,

    /// Database file path (overrides NOTEFUL_DB_PATH, default ~/.local/share/noteful/noteful.db)
    #[arg(long)]
    db: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    run().await.map_err(Into::into)
}

async fn run() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    api::init_tracing();

    let mut config = Config::new();
    if let Some(host) = cli.host {
        config = config.with_host(host);
    }
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }

    let db_path = cli.db.unwrap_or_else(get_db_path);
    info!("Opening database at {:?}", db_path);

    if let Some(parent) = db_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let db = SqliteDatabase::open(&db_path).await?;

    // Run migrations before starting the server
    db.migrate()?;
    info!("Database migrations complete");

    api::run(config, db).await?;

    Ok(())
}
