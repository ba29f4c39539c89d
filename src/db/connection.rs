use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::error::SprintboardError;

use super::migrations;

pub const DATA_DIR_ENV: &str = "SPRINTBOARD_DIR";
const DEFAULT_DIR_NAME: &str = ".sprintboard";
const DB_FILE: &str = "sprintboard.db";
const CONFIG_FILE: &str = "config.json";

/// Resolve the data directory: explicit flag, then `SPRINTBOARD_DIR`, then
/// `.sprintboard` under the current directory.
pub fn data_dir(flag: Option<&Path>) -> Result<PathBuf, SprintboardError> {
    if let Some(dir) = flag {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let cwd = env::current_dir()?;
    Ok(cwd.join(DEFAULT_DIR_NAME))
}

/// Get the path to the sprintboard database.
pub fn db_path(dir: &Path) -> PathBuf {
    dir.join(DB_FILE)
}

/// Get the config file path.
pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Open a connection to the database. Returns error if not initialized.
pub fn open_db(dir: &Path) -> Result<Connection, SprintboardError> {
    let path = db_path(dir);
    if !path.exists() {
        return Err(SprintboardError::not_initialized());
    }
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    debug!(path = %path.display(), "opened database");
    Ok(conn)
}

/// Initialize the database: create directories, database, and run migrations.
pub fn init_db(dir: &Path) -> Result<(PathBuf, Connection), SprintboardError> {
    fs::create_dir_all(dir)?;
    let path = db_path(dir);
    let conn = Connection::open(&path)?;
    configure_connection(&conn)?;
    migrations::run_migrations(&conn)?;
    Ok((path, conn))
}

/// In-memory database with the schema applied.
pub fn open_in_memory() -> Result<Connection, SprintboardError> {
    let conn = Connection::open_in_memory()?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

fn configure_connection(conn: &Connection) -> Result<(), SprintboardError> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;
         PRAGMA busy_timeout=5000;",
    )?;
    Ok(())
}
