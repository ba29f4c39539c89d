//! Named records of JSON text, one per store.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::SprintboardError;

pub fn load_record<T: DeserializeOwned>(
    conn: &Connection,
    name: &str,
) -> Result<Option<T>, SprintboardError> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value FROM records WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;

    match raw {
        Some(text) => {
            let value = serde_json::from_str(&text)
                .map_err(|e| SprintboardError::corrupt_record(name, e))?;
            debug!(record = name, bytes = text.len(), "loaded record");
            Ok(Some(value))
        }
        None => Ok(None),
    }
}

pub fn save_record<T: Serialize>(
    conn: &Connection,
    name: &str,
    value: &T,
) -> Result<(), SprintboardError> {
    let text = serde_json::to_string(value)?;
    conn.execute(
        "INSERT INTO records (name, value) VALUES (?1, ?2)
         ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = datetime('now')",
        params![name, text],
    )?;
    debug!(record = name, bytes = text.len(), "saved record");
    Ok(())
}

pub fn record_exists(conn: &Connection, name: &str) -> Result<bool, SprintboardError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM records WHERE name = ?1",
        params![name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
