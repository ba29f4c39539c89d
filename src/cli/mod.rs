pub mod board;
pub mod commands;
pub mod init;
pub mod sprint;
pub mod status;
pub mod task;
pub mod team;

pub use commands::*;

use std::path::Path;

use rusqlite::Connection;
use serde_json::Value;

use crate::db::connection;
use crate::error::SprintboardError;
use crate::models::ColumnId;
use crate::output;
use crate::store::Workspace;

/// Open the database under the resolved data dir and load both stores.
pub(crate) fn open_workspace(
    data_dir: Option<&Path>,
) -> Result<(Connection, Workspace), SprintboardError> {
    let dir = connection::data_dir(data_dir)?;
    let conn = connection::open_db(&dir)?;
    let workspace = Workspace::load(&conn)?;
    Ok((conn, workspace))
}

/// Run a read-modify-write against the stores under one write lock.
pub(crate) fn update_workspace<T>(
    data_dir: Option<&Path>,
    change: impl FnOnce(&mut Workspace) -> Result<T, SprintboardError>,
) -> Result<(Workspace, T), SprintboardError> {
    let dir = connection::data_dir(data_dir)?;
    let mut conn = connection::open_db(&dir)?;
    Workspace::update(&mut conn, change)
}

pub(crate) fn parse_column(s: &str) -> Result<ColumnId, SprintboardError> {
    ColumnId::from_str(s).ok_or_else(|| SprintboardError::column_not_found(s))
}

pub(crate) fn print_json(value: &Value) {
    println!("{value:#}");
}

/// Turn a command result into an exit code, reporting errors on the way.
pub(crate) fn finish(result: Result<i32, SprintboardError>, json_output: bool) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(code = e.code.as_str(), "command failed");
            if json_output {
                print_json(&output::json::error(&e));
            } else {
                eprintln!("Error: {}", e.message);
            }
            1
        }
    }
}
