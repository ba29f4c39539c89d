use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized,
    SprintNotFound,
    ColumnNotFound,
    TaskNotFound,
    DuplicateTask,
    ValidationError,
    StorageError,
    CorruptRecord,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::SprintNotFound => "SPRINT_NOT_FOUND",
            Self::ColumnNotFound => "COLUMN_NOT_FOUND",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::DuplicateTask => "DUPLICATE_TASK",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::StorageError => "STORAGE_ERROR",
            Self::CorruptRecord => "CORRUPT_RECORD",
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct SprintboardError {
    pub code: ErrorCode,
    pub message: String,
}

impl SprintboardError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_initialized() -> Self {
        Self::new(
            ErrorCode::NotInitialized,
            "sprintboard is not initialized. Run `sprintboard init` first.",
        )
    }

    pub fn sprint_not_found(id: &str) -> Self {
        Self::new(ErrorCode::SprintNotFound, format!("Sprint not found: {id}"))
    }

    pub fn column_not_found(id: &str) -> Self {
        Self::new(ErrorCode::ColumnNotFound, format!("Column not found: {id}"))
    }

    pub fn task_not_found(id: &str) -> Self {
        Self::new(ErrorCode::TaskNotFound, format!("Task not found: {id}"))
    }

    pub fn task_not_in_column(task_id: &str, column_id: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task {task_id} is not in column {column_id}"),
        )
    }

    pub fn duplicate_task(id: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateTask,
            format!("Task {id} is already on the board"),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageError, message)
    }

    pub fn corrupt_record(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::CorruptRecord,
            format!("Stored record '{name}' could not be read: {reason}"),
        )
    }
}

impl From<rusqlite::Error> for SprintboardError {
    fn from(e: rusqlite::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<std::io::Error> for SprintboardError {
    fn from(e: std::io::Error) -> Self {
        Self::storage(e.to_string())
    }
}

impl From<serde_json::Error> for SprintboardError {
    fn from(e: serde_json::Error) -> Self {
        Self::storage(format!("serialization failed: {e}"))
    }
}
