use serde_json::{json, Value};

use crate::error::SprintboardError;
use crate::models::{Column, HealthMetrics, PlacedTask, Sprint, Task, TeamMember};
use crate::store::BoardStore;

pub fn success(data: Value) -> Value {
    json!({
        "success": true,
        "data": data
    })
}

pub fn error(err: &SprintboardError) -> Value {
    json!({
        "success": false,
        "error": {
            "code": err.code.as_str(),
            "message": err.message
        }
    })
}

pub fn sprint_json(s: &Sprint, current: bool) -> Value {
    json!({
        "id": s.id,
        "name": s.name,
        "start_date": s.start_date.to_string(),
        "end_date": s.end_date.to_string(),
        "status": s.status.as_str(),
        "day": s.day,
        "total_days": s.total_days,
        "elapsed_percent": s.elapsed_percent(),
        "velocity": s.velocity,
        "completed_tasks": s.completed_tasks,
        "in_progress_tasks": s.in_progress_tasks,
        "blockers": s.blockers,
        "team_size": s.team_size,
        "progress": s.progress,
        "health": {
            "on_track": s.health.on_track,
            "slight_delay": s.health.slight_delay,
            "critical": s.health.critical
        },
        "current": current
    })
}

pub fn health_json(m: &HealthMetrics) -> Value {
    json!({
        "on_track": m.on_track,
        "slight_delay": m.slight_delay,
        "critical": m.critical,
        "total": m.total
    })
}

pub fn task_summary(t: &Task, status: &str) -> Value {
    json!({
        "id": t.id,
        "code": t.display_code(),
        "title": t.title,
        "status": status,
        "priority": t.priority.as_str(),
        "assignee": t.assignee.name,
        "eta": t.eta,
        "comments": t.comments
    })
}

pub fn task_detail(p: &PlacedTask) -> Value {
    let t = &p.task;
    json!({
        "id": t.id,
        "code": t.display_code(),
        "title": t.title,
        "description": t.description,
        "status": p.status.as_str(),
        "priority": t.priority.as_str(),
        "assignee": { "name": t.assignee.name, "avatar": t.assignee.avatar },
        "eta": t.eta,
        "dependencies": t.dependencies,
        "comments": t.comments,
        "blockers": t.blockers,
        "qa_status": t.qa_status.as_str()
    })
}

pub fn column_json(board: &BoardStore, c: &Column) -> Value {
    let tasks: Vec<_> = board
        .column_tasks(c.id)
        .into_iter()
        .map(|t| task_summary(t, c.id.as_str()))
        .collect();
    json!({
        "id": c.id.as_str(),
        "title": c.title,
        "count": c.len(),
        "tasks": tasks
    })
}

pub fn member_json(m: &TeamMember) -> Value {
    json!({
        "id": m.id,
        "name": m.name,
        "role": m.role
    })
}
