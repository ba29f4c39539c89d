use rusqlite::Connection;

use crate::error::SprintboardError;

pub fn run_migrations(conn: &Connection) -> Result<(), SprintboardError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS records (
            name TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now'))
        );
        ",
    )?;
    Ok(())
}
