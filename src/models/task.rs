use serde::{Deserialize, Serialize};

use crate::error::SprintboardError;
use crate::models::ColumnId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QaStatus {
    Pending,
    Passed,
    Failed,
}

impl QaStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Passed => "passed",
            Self::Failed => "failed",
        }
    }
}

/// Embedded copy of the assignee; there is no user table to reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub avatar: String,
}

/// A unit of work on the board. Column membership is not stored here: the
/// board derives a task's status from the column that lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: Assignee,
    /// Free-text duration such as `2h`.
    pub eta: String,
    pub dependencies: u32,
    pub comments: u32,
    pub blockers: u32,
    pub qa_status: QaStatus,
}

impl Task {
    /// Short code shown on cards, e.g. `TMS000001`.
    pub fn display_code(&self) -> String {
        format!("TMS{:0>6}", self.id)
    }

    /// Leading integer of the eta, e.g. `3` for `3h`.
    pub fn eta_hours(&self) -> Option<u32> {
        let digits: String = self
            .eta
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().ok()
    }
}

/// A task together with the id of the column currently holding it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedTask {
    #[serde(flatten)]
    pub task: Task,
    pub status: ColumnId,
}

/// User input for a new task, before it has an id.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: Assignee,
    pub eta: String,
}

impl TaskDraft {
    pub fn validate(&self) -> Result<(), SprintboardError> {
        if self.title.trim().is_empty() {
            return Err(SprintboardError::validation("Task title is required"));
        }
        if self.eta.trim().is_empty() {
            return Err(SprintboardError::validation("Task eta is required"));
        }
        Ok(())
    }

    /// Validate and turn the draft into a fresh task with zeroed counters.
    pub fn into_task(self, id: String) -> Result<Task, SprintboardError> {
        self.validate()?;
        Ok(Task {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            assignee: self.assignee,
            eta: self.eta.trim().to_string(),
            dependencies: 0,
            comments: 0,
            blockers: 0,
            qa_status: QaStatus::Pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, eta: &str) -> Task {
        Task {
            id: id.into(),
            title: "t".into(),
            description: String::new(),
            priority: Priority::Low,
            assignee: Assignee {
                name: "a".into(),
                avatar: String::new(),
            },
            eta: eta.into(),
            dependencies: 0,
            comments: 0,
            blockers: 0,
            qa_status: QaStatus::Pending,
        }
    }

    #[test]
    fn display_code_pads_to_six() {
        assert_eq!(task("1", "1h").display_code(), "TMS000001");
        assert_eq!(task("1234567", "1h").display_code(), "TMS1234567");
    }

    #[test]
    fn eta_hours_reads_leading_integer() {
        assert_eq!(task("1", "12h").eta_hours(), Some(12));
        assert_eq!(task("1", " 3 days").eta_hours(), Some(3));
        assert_eq!(task("1", "soon").eta_hours(), None);
    }

    #[test]
    fn draft_requires_title_and_eta() {
        let draft = TaskDraft {
            title: "  ".into(),
            description: String::new(),
            priority: Priority::High,
            assignee: Assignee {
                name: "a".into(),
                avatar: String::new(),
            },
            eta: "2h".into(),
        };
        assert!(draft.clone().into_task("1".into()).is_err());

        let draft = TaskDraft {
            title: "Ship it".into(),
            eta: String::new(),
            ..draft
        };
        assert!(draft.validate().is_err());
    }
}
