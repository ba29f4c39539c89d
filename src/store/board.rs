use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SprintboardError;
use crate::models::sprint::round_half_up;
use crate::models::{
    Column, ColumnId, HealthMetrics, PlacedTask, Sprint, SprintHealth, Task, TaskDraft,
};
use crate::seed;

/// Storage record holding the board.
pub const RECORD_NAME: &str = "sprint-store";

/// Sprint roster plus the kanban arrangement. The task table is the single
/// owner of task attributes; columns only list ids, and a task's status is
/// whichever column lists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardStore {
    sprints: Vec<Sprint>,
    current_sprint_id: Option<String>,
    tasks: BTreeMap<String, Task>,
    columns: Vec<Column>,
}

impl BoardStore {
    pub fn new(sprints: Vec<Sprint>, columns: Vec<Column>) -> Self {
        Self {
            sprints,
            current_sprint_id: None,
            tasks: BTreeMap::new(),
            columns,
        }
    }

    /// Board as it looks on first run.
    pub fn seeded() -> Self {
        let mut board = Self::new(seed::sprints(), seed::columns());
        board.current_sprint_id = Some(seed::DEFAULT_SPRINT_ID.to_string());
        for (task, column) in seed::tasks() {
            if let Some(col) = board.columns.iter_mut().find(|c| c.id == column) {
                col.task_ids.push(task.id.clone());
                board.tasks.insert(task.id.clone(), task);
            }
        }
        board
    }

    // --- sprints ---

    pub fn sprints(&self) -> &[Sprint] {
        &self.sprints
    }

    pub fn sprint(&self, id: &str) -> Option<&Sprint> {
        self.sprints.iter().find(|s| s.id == id)
    }

    pub fn current_sprint_id(&self) -> Option<&str> {
        self.current_sprint_id.as_deref()
    }

    pub fn current_sprint(&self) -> Option<&Sprint> {
        self.current_sprint_id().and_then(|id| self.sprint(id))
    }

    /// Point the board at another sprint. Unknown ids leave the pointer as is.
    pub fn set_current_sprint(&mut self, sprint_id: &str) -> Result<(), SprintboardError> {
        if self.sprint(sprint_id).is_none() {
            return Err(SprintboardError::sprint_not_found(sprint_id));
        }
        self.current_sprint_id = Some(sprint_id.to_string());
        debug!(sprint_id, "current sprint changed");
        Ok(())
    }

    /// Mean health over active and completed sprints, each field rounded
    /// half up.
    pub fn sprint_health_metrics(&self) -> HealthMetrics {
        let reported: Vec<&SprintHealth> = self
            .sprints
            .iter()
            .filter(|s| s.status.is_reported())
            .map(|s| &s.health)
            .collect();

        if reported.is_empty() {
            return HealthMetrics::EMPTY;
        }

        let count = reported.len() as u64;
        let mean = |field: fn(&SprintHealth) -> u32| {
            let sum: u64 = reported.iter().map(|h| u64::from(field(h))).sum();
            round_half_up(sum, count)
        };

        HealthMetrics {
            on_track: mean(|h| h.on_track),
            slight_delay: mean(|h| h.slight_delay),
            critical: mean(|h| h.critical),
            total: count as u32,
        }
    }

    // --- columns & tasks ---

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    fn column_index(&self, id: ColumnId) -> Result<usize, SprintboardError> {
        self.columns
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SprintboardError::column_not_found(id.as_str()))
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Column currently listing the task.
    pub fn status_of(&self, task_id: &str) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|c| c.contains(task_id))
            .map(|c| c.id)
    }

    /// Tasks of one column in list order.
    pub fn column_tasks(&self, id: ColumnId) -> Vec<&Task> {
        self.column(id)
            .map(|c| c.task_ids.iter().filter_map(|t| self.tasks.get(t)).collect())
            .unwrap_or_default()
    }

    pub fn placed_task(&self, id: &str) -> Option<PlacedTask> {
        let task = self.tasks.get(id)?;
        let status = self.status_of(id)?;
        Some(PlacedTask {
            task: task.clone(),
            status,
        })
    }

    /// Every task with its status, column by column.
    pub fn placed_tasks(&self) -> Vec<PlacedTask> {
        self.columns
            .iter()
            .flat_map(|col| {
                col.task_ids.iter().filter_map(move |id| {
                    self.tasks.get(id).map(|task| PlacedTask {
                        task: task.clone(),
                        status: col.id,
                    })
                })
            })
            .collect()
    }

    /// Move a task listed in `source` to the end of `target`. Moving within
    /// the same column re-appends it.
    pub fn move_task(
        &mut self,
        task_id: &str,
        source: ColumnId,
        target: ColumnId,
    ) -> Result<(), SprintboardError> {
        let source_idx = self.column_index(source)?;
        let position = self.columns[source_idx]
            .task_ids
            .iter()
            .position(|id| id == task_id)
            .ok_or_else(|| SprintboardError::task_not_in_column(task_id, source.as_str()))?;
        let target_idx = self.column_index(target)?;

        let id = self.columns[source_idx].task_ids.remove(position);
        self.columns[target_idx].task_ids.push(id);

        debug!(
            task_id,
            from = source.as_str(),
            to = target.as_str(),
            "moved task"
        );
        Ok(())
    }

    /// Append a fully formed task to a column.
    pub fn add_task(&mut self, task: Task, column: ColumnId) -> Result<(), SprintboardError> {
        let idx = self.column_index(column)?;
        if self.tasks.contains_key(&task.id) {
            return Err(SprintboardError::duplicate_task(&task.id));
        }

        debug!(task_id = %task.id, column = column.as_str(), "added task");
        self.columns[idx].task_ids.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// Build a task from user input and add it to `column`.
    pub fn create_task(
        &mut self,
        draft: TaskDraft,
        column: ColumnId,
    ) -> Result<PlacedTask, SprintboardError> {
        self.column_index(column)?;
        let task = draft.into_task(self.next_task_id())?;
        self.add_task(task.clone(), column)?;
        Ok(PlacedTask {
            task,
            status: column,
        })
    }

    /// Millisecond timestamp id, bumped past any numeric id already in use.
    pub fn next_task_id(&self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let highest = self
            .tasks
            .keys()
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        now.max(highest.saturating_add(1)).to_string()
    }
}
