use std::cmp::Ordering;

use clap::ValueEnum;

use crate::models::PlacedTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Id,
    Title,
    Priority,
    Assignee,
    Time,
    Status,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Stable sort for the list view. Priority ranks low < medium < high and
/// status ranks on-track < slight-delay < critical-delay. `Time` compares
/// the leading hours of the eta; tasks without one always sort last.
pub fn sort_tasks(tasks: &mut [PlacedTask], field: SortField, direction: SortDirection) {
    tasks.sort_by(|a, b| match field {
        SortField::Id => direction.apply(a.task.id.cmp(&b.task.id)),
        SortField::Title => direction.apply(a.task.title.cmp(&b.task.title)),
        SortField::Priority => direction.apply(a.task.priority.cmp(&b.task.priority)),
        SortField::Assignee => {
            direction.apply(a.task.assignee.name.cmp(&b.task.assignee.name))
        }
        SortField::Status => direction.apply(a.status.cmp(&b.status)),
        SortField::Time => match (a.task.eta_hours(), b.task.eta_hours()) {
            (Some(x), Some(y)) => direction.apply(x.cmp(&y)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    });
}
