use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SprintboardError;
use crate::models::{Identity, PlacedTask, TaskComment, TaskTimeLog};

/// Storage record holding the task list and comment threads.
pub const RECORD_NAME: &str = "task-store";

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Result of adding a comment. `comment_count` is `None` when no local task
/// matched the id; the comment is stored under that id regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReceipt {
    pub comment: TaskComment,
    pub comment_count: Option<u32>,
}

/// Flat task list for the details panel and calendar, plus comment threads
/// keyed by task id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskDetailStore {
    tasks: Vec<PlacedTask>,
    comments: BTreeMap<String, Vec<TaskComment>>,
}

impl TaskDetailStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[PlacedTask] {
        &self.tasks
    }

    /// Seed the task list once. Each task's comment count is taken from an
    /// existing thread when there is one. Returns `false` when the list was
    /// already populated and nothing changed.
    pub fn initialize_tasks(&mut self, tasks: Vec<PlacedTask>) -> bool {
        if !self.tasks.is_empty() {
            return false;
        }

        self.tasks = tasks
            .into_iter()
            .map(|mut placed| {
                let stored = self
                    .comments
                    .get(&placed.task.id)
                    .map(Vec::len)
                    .unwrap_or(0);
                if stored > 0 {
                    placed.task.comments = stored as u32;
                }
                placed
            })
            .collect();
        debug!(count = self.tasks.len(), "seeded task list");
        true
    }

    pub fn get_task(&self, task_id: &str) -> Option<&PlacedTask> {
        self.tasks.iter().find(|t| t.task.id == task_id)
    }

    pub fn update_task_comment_count(
        &mut self,
        task_id: &str,
        count: u32,
    ) -> Result<(), SprintboardError> {
        let placed = self
            .tasks
            .iter_mut()
            .find(|t| t.task.id == task_id)
            .ok_or_else(|| SprintboardError::task_not_found(task_id))?;
        placed.task.comments = count;
        Ok(())
    }

    /// Append a comment to a task's thread. Timestamps within a thread never
    /// go backwards, even if the wall clock does.
    pub fn add_comment(
        &mut self,
        task_id: &str,
        content: &str,
        author: &Identity,
    ) -> Result<CommentReceipt, SprintboardError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(SprintboardError::validation("Comment must not be empty"));
        }

        let thread = self.comments.entry(task_id.to_string()).or_default();
        let now = Utc::now();
        let timestamp = thread
            .iter()
            .map(|c| c.timestamp)
            .max()
            .map_or(now, |last| last.max(now));

        let comment = TaskComment {
            id: comment_id(now.timestamp_millis()),
            user_id: author.id.clone(),
            user_name: author.name.clone(),
            user_avatar: author.avatar.clone(),
            content: content.to_string(),
            timestamp,
            attachments: Vec::new(),
        };
        thread.push(comment.clone());
        let thread_len = thread.len() as u32;

        let comment_count = match self.tasks.iter_mut().find(|t| t.task.id == task_id) {
            Some(placed) => {
                placed.task.comments = thread_len;
                Some(thread_len)
            }
            None => {
                debug!(task_id, "comment stored without a matching task");
                None
            }
        };

        debug!(task_id, comment_id = %comment.id, "added comment");
        Ok(CommentReceipt {
            comment,
            comment_count,
        })
    }

    /// The thread for a task, oldest first. Equal timestamps keep insertion
    /// order.
    pub fn task_comments(&self, task_id: &str) -> Vec<TaskComment> {
        let mut comments = self.comments.get(task_id).cloned().unwrap_or_default();
        comments.sort_by_key(|c| c.timestamp);
        comments
    }

    /// Validate a time entry and emit it as a log event. Time logs are not
    /// stored anywhere.
    pub fn log_time(
        &self,
        task_id: &str,
        hours: f64,
        note: Option<&str>,
    ) -> Result<TaskTimeLog, SprintboardError> {
        if !hours.is_finite() || hours <= 0.0 {
            return Err(SprintboardError::validation(format!(
                "Logged hours must be a positive number, got {hours}"
            )));
        }

        let note = note.map(str::trim).filter(|n| !n.is_empty()).map(String::from);
        info!(task_id, hours, note = note.as_deref().unwrap_or(""), "time logged");
        Ok(TaskTimeLog {
            hours,
            note,
            timestamp: Utc::now(),
        })
    }
}

/// `<epoch-ms>-<9 random base36 chars>`.
fn comment_id(epoch_ms: i64) -> String {
    let mut random = ulid::Ulid::new().random();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| {
            let c = BASE36[(random % 36) as usize] as char;
            random /= 36;
            c
        })
        .collect();
    format!("{epoch_ms}-{suffix}")
}
