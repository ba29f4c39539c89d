use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintStatus {
    Active,
    Upcoming,
    Completed,
}

impl SprintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
        }
    }

    /// Whether sprints in this status contribute to health metrics.
    pub fn is_reported(&self) -> bool {
        matches!(self, Self::Active | Self::Completed)
    }
}

/// Percentage breakdown of a sprint's delivery health. The three values are
/// not required to sum to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SprintHealth {
    pub on_track: u32,
    pub slight_delay: u32,
    pub critical: u32,
}

impl SprintHealth {
    pub fn new(on_track: u32, slight_delay: u32, critical: u32) -> Self {
        Self {
            on_track,
            slight_delay,
            critical,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: SprintStatus,
    pub day: u32,
    pub total_days: u32,
    pub velocity: u32,
    pub completed_tasks: u32,
    pub in_progress_tasks: u32,
    pub blockers: u32,
    pub team_size: u32,
    /// Caller-set completion percentage; independent of `day`/`total_days`.
    pub progress: u32,
    pub health: SprintHealth,
}

impl Sprint {
    /// Share of the sprint's days already elapsed, as a rounded percentage.
    pub fn elapsed_percent(&self) -> u32 {
        if self.total_days == 0 {
            return 0;
        }
        round_half_up(u64::from(self.day) * 100, u64::from(self.total_days))
    }

    /// Every calendar date from start to end, inclusive.
    pub fn calendar_days(&self) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = Some(self.start_date);
        while let Some(day) = current.filter(|d| *d <= self.end_date) {
            days.push(day);
            current = day.succ_opt();
        }
        days
    }
}

/// Integer division rounding halves up, for non-negative operands.
pub(crate) fn round_half_up(numerator: u64, denominator: u64) -> u32 {
    ((numerator * 2 + denominator) / (denominator * 2)) as u32
}
