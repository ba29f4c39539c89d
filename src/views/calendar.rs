use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

use crate::models::Sprint;

/// One column header of the calendar grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: String,
    pub is_weekend: bool,
    pub is_today: bool,
}

pub fn sprint_calendar(sprint: &Sprint, today: NaiveDate) -> Vec<CalendarDay> {
    sprint
        .calendar_days()
        .into_iter()
        .map(|date| CalendarDay {
            date,
            weekday: date.format("%a").to_string(),
            is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
            is_today: date == today,
        })
        .collect()
}

/// Number of weekdays in the sprint.
pub fn working_days(days: &[CalendarDay]) -> usize {
    days.iter().filter(|d| !d.is_weekend).count()
}
