use serde::{Deserialize, Serialize};

use crate::models::{
    Assignee, ColumnId, PlacedTask, Priority, QaStatus, TaskComment, TaskTimeLog,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRef {
    pub id: String,
    pub title: String,
    pub status: String,
}

/// Everything the task-details panel shows for one task. Assembled on
/// demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskDetails {
    pub id: String,
    pub display_code: String,
    pub title: String,
    pub description: String,
    pub status: ColumnId,
    pub priority: Priority,
    pub assignee: Assignee,
    pub eta: String,
    pub blockers: u32,
    pub qa_status: QaStatus,
    pub comments: Vec<TaskComment>,
    pub time_logs: Vec<TaskTimeLog>,
    pub linked_prs: Vec<String>,
    pub linked_defects: Vec<String>,
    pub dependencies: Vec<DependencyRef>,
}

impl TaskDetails {
    pub fn assemble(placed: PlacedTask, comments: Vec<TaskComment>) -> Self {
        let PlacedTask { task, status } = placed;
        Self {
            display_code: task.display_code(),
            id: task.id,
            title: task.title,
            description: task.description,
            status,
            priority: task.priority,
            assignee: task.assignee,
            eta: task.eta,
            blockers: task.blockers,
            qa_status: task.qa_status,
            comments,
            time_logs: Vec::new(),
            linked_prs: Vec::new(),
            linked_defects: Vec::new(),
            dependencies: Vec::new(),
        }
    }
}
