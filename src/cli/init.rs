use rusqlite::TransactionBehavior;
use serde_json::json;
use std::path::Path;

use crate::cli::{finish, print_json};
use crate::config::Config;
use crate::db::{connection, record_repo};
use crate::error::SprintboardError;
use crate::output;
use crate::store::{board, Workspace};

pub fn run(json_output: bool, data_dir: Option<&Path>) -> i32 {
    finish(run_inner(json_output, data_dir), json_output)
}

fn run_inner(json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let dir = connection::data_dir(data_dir)?;
    let (path, mut conn) = connection::init_db(&dir)?;

    // Re-running init keeps whatever state is already stored.
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
    let seeded = !record_repo::record_exists(&tx, board::RECORD_NAME)?;
    if seeded {
        Workspace::seeded().save(&tx)?;
    }
    tx.commit()?;
    let config_written = Config::write_default(&connection::config_path(&dir))?;

    if json_output {
        print_json(&output::json::success(json!({
            "path": path.to_string_lossy(),
            "seeded": seeded,
            "config_written": config_written
        })));
    } else {
        println!("Initialized sprintboard at {}", path.display());
        if !seeded {
            println!("Existing board kept.");
        }
    }
    Ok(0)
}
