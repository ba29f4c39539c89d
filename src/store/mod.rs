pub mod board;
pub mod task_detail;

pub use board::BoardStore;
pub use task_detail::{CommentReceipt, TaskDetailStore};

use rusqlite::{Connection, TransactionBehavior};
use tracing::debug;

use crate::db::record_repo;
use crate::error::SprintboardError;
use crate::models::{TaskDetails, TaskTimeLog};

/// Both stores, loaded from and saved to their own storage records.
#[derive(Debug, Clone, PartialEq)]
pub struct Workspace {
    pub board: BoardStore,
    pub details: TaskDetailStore,
}

impl Workspace {
    /// Fresh state: seeded board, detail store seeded from it.
    pub fn seeded() -> Self {
        let mut workspace = Self {
            board: BoardStore::seeded(),
            details: TaskDetailStore::new(),
        };
        workspace.sync_detail_tasks();
        workspace
    }

    /// Rehydrate both stores. A missing board record falls back to the seed
    /// data; the detail store is seeded from the board when its list is empty.
    pub fn load(conn: &Connection) -> Result<Self, SprintboardError> {
        let board = match record_repo::load_record(conn, board::RECORD_NAME)? {
            Some(board) => board,
            None => {
                debug!("no board record, starting from seed data");
                BoardStore::seeded()
            }
        };
        let details = record_repo::load_record(conn, task_detail::RECORD_NAME)?
            .unwrap_or_default();

        let mut workspace = Self { board, details };
        workspace.sync_detail_tasks();
        Ok(workspace)
    }

    /// Load, apply `change` and save both records inside one immediate
    /// transaction. Another writer blocks on the busy timeout until this one
    /// commits, then loads the committed state.
    pub fn update<T>(
        conn: &mut Connection,
        change: impl FnOnce(&mut Workspace) -> Result<T, SprintboardError>,
    ) -> Result<(Self, T), SprintboardError> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        let mut workspace = Self::load(&tx)?;
        let value = change(&mut workspace)?;
        workspace.save(&tx)?;
        tx.commit()?;
        Ok((workspace, value))
    }

    pub fn save(&self, conn: &Connection) -> Result<(), SprintboardError> {
        self.save_board(conn)?;
        self.save_details(conn)
    }

    pub fn save_board(&self, conn: &Connection) -> Result<(), SprintboardError> {
        record_repo::save_record(conn, board::RECORD_NAME, &self.board)
    }

    pub fn save_details(&self, conn: &Connection) -> Result<(), SprintboardError> {
        record_repo::save_record(conn, task_detail::RECORD_NAME, &self.details)
    }

    fn sync_detail_tasks(&mut self) {
        self.details.initialize_tasks(self.board.placed_tasks());
    }

    /// Details panel for a task: attributes and status from the board, the
    /// comment thread from the detail store.
    pub fn task_details(&self, task_id: &str) -> Result<TaskDetails, SprintboardError> {
        let placed = self
            .board
            .placed_task(task_id)
            .ok_or_else(|| SprintboardError::task_not_found(task_id))?;
        let comments = self.details.task_comments(task_id);
        Ok(TaskDetails::assemble(placed, comments))
    }

    /// Log time against a task the board knows about. Nothing is persisted.
    pub fn log_time(
        &self,
        task_id: &str,
        hours: f64,
        note: Option<&str>,
    ) -> Result<TaskTimeLog, SprintboardError> {
        if self.board.task(task_id).is_none() {
            return Err(SprintboardError::task_not_found(task_id));
        }
        self.details.log_time(task_id, hours, note)
    }
}
