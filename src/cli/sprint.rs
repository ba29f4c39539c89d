use serde_json::json;
use std::path::Path;

use crate::cli::commands::SprintCommands;
use crate::cli::{finish, open_workspace, print_json, update_workspace};
use crate::error::SprintboardError;
use crate::output;

pub fn run(cmd: SprintCommands, json_output: bool, data_dir: Option<&Path>) -> i32 {
    let result = match cmd {
        SprintCommands::List => run_list(json_output, data_dir),
        SprintCommands::Show { id } => run_show(id.as_deref(), json_output, data_dir),
        SprintCommands::Select { id } => run_select(&id, json_output, data_dir),
        SprintCommands::Health => run_health(json_output, data_dir),
    };
    finish(result, json_output)
}

fn run_list(json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let current = ws.board.current_sprint_id();

    if json_output {
        let sprints: Vec<_> = ws
            .board
            .sprints()
            .iter()
            .map(|s| output::json::sprint_json(s, Some(s.id.as_str()) == current))
            .collect();
        print_json(&output::json::success(json!({
            "sprints": sprints,
            "current_sprint_id": current
        })));
    } else {
        output::text::print_sprint_list(ws.board.sprints(), current);
    }
    Ok(0)
}

fn run_show(id: Option<&str>, json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let id = match id.or(ws.board.current_sprint_id()) {
        Some(id) => id,
        None => return Err(SprintboardError::validation("No current sprint selected")),
    };
    let sprint = ws
        .board
        .sprint(id)
        .ok_or_else(|| SprintboardError::sprint_not_found(id))?;
    let current = ws.board.current_sprint_id() == Some(sprint.id.as_str());

    if json_output {
        print_json(&output::json::success(output::json::sprint_json(sprint, current)));
    } else {
        output::text::print_sprint(sprint, current);
    }
    Ok(0)
}

fn run_select(id: &str, json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (ws, ()) = update_workspace(data_dir, |ws| ws.board.set_current_sprint(id))?;

    let sprint = ws
        .board
        .current_sprint()
        .ok_or_else(|| SprintboardError::sprint_not_found(id))?;
    if json_output {
        print_json(&output::json::success(json!({
            "current": output::json::sprint_json(sprint, true)
        })));
    } else {
        println!("Current sprint: {} ({})", sprint.name, sprint.id);
    }
    Ok(0)
}

fn run_health(json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let metrics = ws.board.sprint_health_metrics();

    if json_output {
        print_json(&output::json::success(output::json::health_json(&metrics)));
    } else {
        output::text::print_health(&metrics);
    }
    Ok(0)
}
