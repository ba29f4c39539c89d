use chrono::Local;
use serde_json::json;
use std::path::Path;

use crate::cli::commands::BoardCommands;
use crate::cli::{finish, open_workspace, parse_column, print_json, update_workspace};
use crate::config::Config;
use crate::db::connection;
use crate::error::SprintboardError;
use crate::models::{find_member, Priority, TaskDraft};
use crate::output;
use crate::seed;
use crate::views::calendar;
use crate::views::list::{self, SortDirection, SortField};

pub fn run(cmd: BoardCommands, json_output: bool, data_dir: Option<&Path>) -> i32 {
    let result = match cmd {
        BoardCommands::Show => run_show(json_output, data_dir),
        BoardCommands::List { sort, asc } => run_list(sort, asc, json_output, data_dir),
        BoardCommands::Calendar { sprint } => run_calendar(sprint.as_deref(), json_output, data_dir),
        BoardCommands::Add {
            title,
            description,
            priority,
            assignee,
            eta,
            column,
        } => run_add(
            NewTaskArgs {
                title,
                description,
                priority,
                assignee,
                eta,
                column,
            },
            json_output,
            data_dir,
        ),
        BoardCommands::Move { id, from, to } => {
            run_move(&id, from.as_deref(), &to, json_output, data_dir)
        }
    };
    finish(result, json_output)
}

struct NewTaskArgs {
    title: String,
    description: String,
    priority: String,
    assignee: Option<String>,
    eta: String,
    column: Option<String>,
}

fn run_show(json_output: bool, data_dir: Option<&Path>) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;

    if json_output {
        let columns: Vec<_> = ws
            .board
            .columns()
            .iter()
            .map(|c| output::json::column_json(&ws.board, c))
            .collect();
        print_json(&output::json::success(json!({
            "columns": columns,
            "total": ws.board.task_count()
        })));
    } else {
        for (i, c) in ws.board.columns().iter().enumerate() {
            if i > 0 {
                println!();
            }
            output::text::print_column(&ws.board, c);
        }
    }
    Ok(0)
}

fn run_list(
    sort: SortField,
    asc: bool,
    json_output: bool,
    data_dir: Option<&Path>,
) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let mut tasks = ws.board.placed_tasks();
    let direction = if asc { SortDirection::Asc } else { SortDirection::Desc };
    list::sort_tasks(&mut tasks, sort, direction);

    if json_output {
        let tasks_json: Vec<_> = tasks
            .iter()
            .map(|p| output::json::task_summary(&p.task, p.status.as_str()))
            .collect();
        print_json(&output::json::success(json!({ "tasks": tasks_json })));
    } else {
        output::text::print_task_list(&tasks);
    }
    Ok(0)
}

fn run_calendar(
    sprint_id: Option<&str>,
    json_output: bool,
    data_dir: Option<&Path>,
) -> Result<i32, SprintboardError> {
    let (_conn, ws) = open_workspace(data_dir)?;
    let sprint = match sprint_id {
        Some(id) => ws.board.sprint(id).ok_or_else(|| SprintboardError::sprint_not_found(id))?,
        None => ws
            .board
            .current_sprint()
            .ok_or_else(|| SprintboardError::validation("No current sprint selected"))?,
    };
    let days = calendar::sprint_calendar(sprint, Local::now().date_naive());

    if json_output {
        print_json(&output::json::success(json!({
            "sprint_id": sprint.id,
            "days": days,
            "working_days": calendar::working_days(&days)
        })));
    } else {
        println!("{} ({} → {})", sprint.name, sprint.start_date, sprint.end_date);
        output::text::print_calendar(&days);
    }
    Ok(0)
}

fn run_add(
    args: NewTaskArgs,
    json_output: bool,
    data_dir: Option<&Path>,
) -> Result<i32, SprintboardError> {
    let dir = connection::data_dir(data_dir)?;
    let config = Config::load(&connection::config_path(&dir))?;

    let priority = Priority::from_str(&args.priority).ok_or_else(|| {
        SprintboardError::validation(format!(
            "Unknown priority '{}'. Expected low, medium or high",
            args.priority
        ))
    })?;
    let column = match args.column.as_deref() {
        Some(c) => parse_column(c)?,
        None => config.default_column,
    };

    let roster = seed::team_members();
    let reference = args.assignee.as_deref().unwrap_or(&config.user.id);
    let assignee = find_member(&roster, reference)
        .ok_or_else(|| SprintboardError::validation(format!("Unknown team member: {reference}")))?
        .assignee();

    let draft = TaskDraft {
        title: args.title,
        description: args.description,
        priority,
        assignee,
        eta: args.eta,
    };
    let (_ws, placed) =
        update_workspace(Some(dir.as_path()), |ws| ws.board.create_task(draft, column))?;

    if json_output {
        print_json(&output::json::success(json!({
            "task": output::json::task_detail(&placed)
        })));
    } else {
        println!(
            "Added task: {} {} → {}",
            placed.task.display_code(),
            placed.task.title,
            placed.status.as_str()
        );
    }
    Ok(0)
}

fn run_move(
    id: &str,
    from: Option<&str>,
    to: &str,
    json_output: bool,
    data_dir: Option<&Path>,
) -> Result<i32, SprintboardError> {
    let target = parse_column(to)?;
    let (ws, source) = update_workspace(data_dir, |ws| {
        let source = match from {
            Some(c) => parse_column(c)?,
            None => ws
                .board
                .status_of(id)
                .ok_or_else(|| SprintboardError::task_not_found(id))?,
        };
        ws.board.move_task(id, source, target)?;
        Ok(source)
    })?;

    let placed = ws
        .board
        .placed_task(id)
        .ok_or_else(|| SprintboardError::task_not_found(id))?;
    if json_output {
        let counts: serde_json::Map<String, serde_json::Value> = ws
            .board
            .columns()
            .iter()
            .map(|c| (c.id.as_str().to_string(), json!(c.len())))
            .collect();
        print_json(&output::json::success(json!({
            "task": output::json::task_summary(&placed.task, placed.status.as_str()),
            "from": source.as_str(),
            "to": target.as_str(),
            "counts": counts
        })));
    } else {
        println!(
            "Task {} {} → {}",
            placed.task.display_code(),
            source.as_str(),
            target.as_str()
        );
    }
    Ok(0)
}
