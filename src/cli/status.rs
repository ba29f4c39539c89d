use serde_json::json;
use std::path::Path;

use crate::cli::{finish, open_workspace, print_json};
use crate::error::SprintboardError;
use crate::output;

pub fn run(json_output: bool, data_dir: Option<&Path>) -> i32 {
    finish(run_inner(json_output, data_dir), json_output)
}

fn run_inner(json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let board = &ws.board;
    let sprint = board.current_sprint();
    let metrics = board.sprint_health_metrics();

    if json_output {
        let columns: Vec<_> = board
            .columns()
            .iter()
            .map(|c| json!({ "id": c.id.as_str(), "title": c.title, "count": c.len() }))
            .collect();
        print_json(&output::json::success(json!({
            "sprint": sprint.map(|s| output::json::sprint_json(s, true)),
            "health": output::json::health_json(&metrics),
            "columns": columns,
            "total_tasks": board.task_count()
        })));
    } else {
        match sprint {
            Some(s) => output::text::print_sprint(s, true),
            None => println!("No current sprint selected."),
        }
        println!();
        output::text::print_health(&metrics);
        println!("\nBoard ({} tasks):", board.task_count());
        for c in board.columns() {
            println!("  {}: {}", c.title, c.len());
        }
    }
    Ok(0)
}
