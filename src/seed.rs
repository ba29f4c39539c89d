//! Fixed data the board starts from on first run.

use chrono::NaiveDate;

use crate::models::{
    Column, ColumnId, Priority, QaStatus, Sprint, SprintHealth, SprintStatus, Task, TeamMember,
};

pub const DEFAULT_SPRINT_ID: &str = "1";

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            "1",
            "Alex Chen",
            "Frontend Dev",
            "https://images.unsplash.com/photo-1633332755192-727a05c4013d?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        ),
        member(
            "2",
            "Sarah Kim",
            "UX Designer",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        ),
        member(
            "3",
            "Mike Ross",
            "Backend Dev",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        ),
        member(
            "4",
            "Emma Wilson",
            "Product Manager",
            "https://images.unsplash.com/photo-1517841905240-472988babdf9?ixlib=rb-1.2.1&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80",
        ),
    ]
}

fn member(id: &str, name: &str, role: &str, avatar: &str) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        avatar: avatar.into(),
    }
}

pub fn sprints() -> Vec<Sprint> {
    vec![
        Sprint {
            id: "1".into(),
            name: "Sprint Alpha".into(),
            start_date: date(2024, 4, 1),
            end_date: date(2024, 4, 14),
            status: SprintStatus::Active,
            day: 5,
            total_days: 10,
            velocity: 24,
            completed_tasks: 24,
            in_progress_tasks: 12,
            blockers: 3,
            team_size: 8,
            progress: 65,
            health: SprintHealth::new(85, 12, 3),
        },
        Sprint {
            id: "2".into(),
            name: "Sprint Beta".into(),
            start_date: date(2024, 4, 15),
            end_date: date(2024, 4, 28),
            status: SprintStatus::Active,
            day: 0,
            total_days: 10,
            velocity: 0,
            completed_tasks: 0,
            in_progress_tasks: 0,
            blockers: 0,
            team_size: 8,
            progress: 0,
            health: SprintHealth::new(75, 20, 5),
        },
        Sprint {
            id: "3".into(),
            name: "Sprint Gamma".into(),
            start_date: date(2024, 4, 29),
            end_date: date(2024, 5, 12),
            status: SprintStatus::Upcoming,
            day: 0,
            total_days: 10,
            velocity: 0,
            completed_tasks: 0,
            in_progress_tasks: 0,
            blockers: 0,
            team_size: 8,
            progress: 0,
            health: SprintHealth::default(),
        },
    ]
}

/// Seed tasks paired with the column each starts in.
pub fn tasks() -> Vec<(Task, ColumnId)> {
    let team = team_members();
    vec![
        (
            task(
                "1",
                "User Authentication Flow",
                "Implement OAuth2 with social providers",
                Priority::High,
                &team[0],
                "2h",
                (2, 5, 0),
                QaStatus::Pending,
            ),
            ColumnId::OnTrack,
        ),
        (
            task(
                "2",
                "Dashboard Analytics",
                "Implement real-time data visualization",
                Priority::Medium,
                &team[1],
                "4h",
                (1, 3, 0),
                QaStatus::Pending,
            ),
            ColumnId::OnTrack,
        ),
        (
            task(
                "3",
                "API Documentation",
                "Update Swagger docs for new endpoints",
                Priority::Low,
                &team[2],
                "3h",
                (0, 2, 1),
                QaStatus::Pending,
            ),
            ColumnId::SlightDelay,
        ),
        (
            task(
                "4",
                "Performance Optimization",
                "Fix dashboard loading time issues",
                Priority::High,
                &team[3],
                "6h",
                (3, 8, 2),
                QaStatus::Failed,
            ),
            ColumnId::CriticalDelay,
        ),
    ]
}

pub fn columns() -> Vec<Column> {
    ColumnId::ALL.iter().copied().map(Column::new).collect()
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: &str,
    title: &str,
    description: &str,
    priority: Priority,
    assignee: &TeamMember,
    eta: &str,
    (dependencies, comments, blockers): (u32, u32, u32),
    qa_status: QaStatus,
) -> Task {
    Task {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        priority,
        assignee: assignee.assignee(),
        eta: eta.into(),
        dependencies,
        comments,
        blockers,
        qa_status,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid calendar dates")
}
