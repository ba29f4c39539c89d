use serde::{Deserialize, Serialize};

/// The three delivery-health buckets of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnId {
    OnTrack,
    SlightDelay,
    CriticalDelay,
}

impl ColumnId {
    pub const ALL: [ColumnId; 3] = [Self::OnTrack, Self::SlightDelay, Self::CriticalDelay];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "on-track",
            Self::SlightDelay => "slight-delay",
            Self::CriticalDelay => "critical-delay",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "on-track" => Some(Self::OnTrack),
            "slight-delay" => Some(Self::SlightDelay),
            "critical-delay" => Some(Self::CriticalDelay),
            _ => None,
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::OnTrack => "On Track",
            Self::SlightDelay => "Slight Delay",
            Self::CriticalDelay => "Critical Delay",
        }
    }
}

/// A board column: an ordered list of task ids, oldest insertion first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub task_ids: Vec<String>,
}

impl Column {
    pub fn new(id: ColumnId) -> Self {
        Self {
            id,
            title: id.default_title().to_string(),
            task_ids: Vec::new(),
        }
    }

    pub fn contains(&self, task_id: &str) -> bool {
        self.task_ids.iter().any(|id| id == task_id)
    }

    pub fn len(&self) -> usize {
        self.task_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.task_ids.is_empty()
    }
}
