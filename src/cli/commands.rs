use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::views::list::SortField;

const VERSION: &str = env!("GIT_VERSION");

#[derive(Parser)]
#[command(
    name = "sprintboard",
    version = VERSION,
    about = "Sprint board: sprints, a three-column kanban board and task comments",
    after_help = "\
NOTE:
  State lives in <data-dir>/sprintboard.db. The data dir is --data-dir, else
  $SPRINTBOARD_DIR, else ./.sprintboard. Run `sprintboard init` first.

COLUMNS:
  on-track | slight-delay | critical-delay

EXIT CODES:
  0  Success
  1  Error (not found, validation, storage, etc.)

BEHAVIOR NOTES:
  A task's status is the column that lists it; `board move` changes both.
  Moved and added tasks always land at the end of the target column.
  `task log-time` validates and logs the entry; time logs are not stored.
  Comments on ids unknown to the task list are still stored."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the database and config
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the database and seed the board
    Init,

    /// Sprint roster
    #[command(subcommand)]
    Sprint(SprintCommands),

    /// Kanban board
    #[command(subcommand)]
    Board(BoardCommands),

    /// Task details and comments
    #[command(subcommand)]
    Task(TaskCommands),

    /// List team members
    Team,

    /// Show current sprint, health and column counts
    Status,
}

#[derive(Subcommand)]
pub enum SprintCommands {
    /// List all sprints
    List,
    /// Show a sprint (defaults to the current one)
    Show {
        id: Option<String>,
    },
    /// Make a sprint current
    Select {
        id: String,
    },
    /// Mean health over active and completed sprints
    Health,
}

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Show every column with its tasks
    Show,
    /// Flat task list, sorted
    List {
        #[arg(long, value_enum, default_value = "priority")]
        sort: SortField,
        /// Ascending order (default is descending)
        #[arg(long)]
        asc: bool,
    },
    /// Days of a sprint (defaults to the current one)
    Calendar {
        #[arg(long)]
        sprint: Option<String>,
    },
    /// Create a task
    Add {
        /// Task title
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// low | medium | high
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Team member id or name (defaults to the configured user)
        #[arg(long)]
        assignee: Option<String>,
        /// Estimate, e.g. 4h
        #[arg(long)]
        eta: String,
        /// Target column (defaults to the configured default column)
        #[arg(long)]
        column: Option<String>,
    },
    /// Move a task to the end of another column
    Move {
        /// Task ID
        id: String,
        /// Source column (defaults to the column currently listing the task)
        #[arg(long)]
        from: Option<String>,
        /// Target column
        #[arg(long)]
        to: String,
    },
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Show task details with comments
    Show {
        id: String,
    },
    /// Add a comment to a task
    Comment {
        id: String,
        content: String,
    },
    /// List a task's comments, oldest first
    Comments {
        id: String,
    },
    /// Log time against a task (not stored)
    LogTime {
        id: String,
        #[arg(allow_negative_numbers = true)]
        hours: f64,
        #[arg(long)]
        note: Option<String>,
    },
}
