use serde_json::json;
use std::path::Path;

use crate::cli::commands::TaskCommands;
use crate::cli::{finish, open_workspace, print_json, update_workspace};
use crate::config::Config;
use crate::db::connection;
use crate::error::SprintboardError;
use crate::output;

pub fn run(cmd: TaskCommands, json_output: bool, data_dir: Option<&Path>) -> i32 {
    let result = match cmd {
        TaskCommands::Show { id } => run_show(&id, json_output, data_dir),
        TaskCommands::Comment { id, content } => run_comment(&id, &content, json_output, data_dir),
        TaskCommands::Comments { id } => run_comments(&id, json_output, data_dir),
        TaskCommands::LogTime { id, hours, note } => {
            run_log_time(&id, hours, note.as_deref(), json_output, data_dir)
        }
    };
    finish(result, json_output)
}

fn run_show(id: &str, json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let details = ws.task_details(id)?;

    if json_output {
        print_json(&output::json::success(json!({
            "task": serde_json::to_value(&details)?
        })));
    } else {
        output::text::print_task_details(&details);
    }
    Ok(0)
}

fn run_comment(
    id: &str,
    content: &str,
    json_output: bool,
    data_dir: Option<&Path>,
) -> Result<i32, SprintboardError> {
    let dir = connection::data_dir(data_dir)?;
    let config = Config::load(&connection::config_path(&dir))?;
    let (_ws, receipt) = update_workspace(Some(dir.as_path()), |ws| {
        ws.details.add_comment(id, content, &config.user)
    })?;

    if json_output {
        print_json(&output::json::success(json!({
            "task_id": id,
            "comment": serde_json::to_value(&receipt.comment)?,
            "comment_count": receipt.comment_count
        })));
    } else {
        println!("Comment {} added to task {}", receipt.comment.id, id);
        if receipt.comment_count.is_none() {
            println!("(no task {id} in the task list; comment stored anyway)");
        }
    }
    Ok(0)
}

fn run_comments(id: &str, json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let comments = ws.details.task_comments(id);

    if json_output {
        print_json(&output::json::success(json!({
            "task_id": id,
            "comments": serde_json::to_value(&comments)?
        })));
    } else {
        output::text::print_comments(&comments);
    }
    Ok(0)
}

fn run_log_time(
    id: &str,
    hours: f64,
    note: Option<&str>,
    json_output: bool,
    data_dir: Option<&Path>,
) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let entry = ws.log_time(id, hours, note)?;

    if json_output {
        print_json(&output::json::success(json!({
            "task_id": id,
            "time_log": serde_json::to_value(&entry)?,
            "persisted": false
        })));
    } else {
        println!("Logged {}h on task {} (not stored)", entry.hours, id);
    }
    Ok(0)
}
