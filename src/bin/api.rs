//! Todos API server binary.
//!
//! This binary creates the concrete database implementation and passes it
//! to the API server. The API layer remains agnostic of the storage backend.

use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;
use miette::Diagnostic;
use thiserror::Error;
use todos::api::{self, ApiError, Config};
use todos::db::{Database, DbError, SqliteDatabase};
use todos::paths::get_db_path;

/// `--db` value that selects a throwaway in-memory store.
const IN_MEMORY: &str = ":memory:";

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Database error: {0}")]
    #[diagnostic(code(todos::binary::database))]
    Database(#[from] DbError),

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todos::binary::io))]
    Io(#[from] std::io::Error),

    #[error("API server error: {0}")]
    #[diagnostic(code(todos::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "todos-api")]
#[command(author, version, about = "Todos API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Database file path (defaults to XDG data directory: ~/.local/share/todos/todos.db).
    /// Use ":memory:" for a store that lives only as long as the process.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Allowed CORS origin (repeatable; overrides TODOS_CORS_ORIGINS)
    #[arg(long = "cors-origin")]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let db = match cli.db {
        Some(path) if path.as_os_str() == IN_MEMORY => {
            println!("Using in-memory database");
            SqliteDatabase::in_memory().await?
        }
        other => {
            let db_path = other.unwrap_or_else(get_db_path);
            println!("Opening database at {:?}", db_path);

            // Ensure parent directory exists
            if let Some(parent) = db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            SqliteDatabase::open(&db_path).await?
        }
    };

    // Run migrations before starting the server
    db.migrate()?;
    println!("Database migrations complete");

    let mut config = Config::new().with_host(cli.host).with_port(cli.port);
    if !cli.cors_origins.is_empty() {
        config = config.with_cors_origins(cli.cors_origins);
    }

    // Pass the abstract Database to the API layer
    api::run(config, db).await?;

    Ok(())
}
