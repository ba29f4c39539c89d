use crate::models::{
    Column, HealthMetrics, PlacedTask, Sprint, Task, TaskComment, TaskDetails, TeamMember,
};
use crate::store::BoardStore;
use crate::views::calendar::CalendarDay;

pub fn print_sprint(s: &Sprint, current: bool) {
    let marker = if current { " *" } else { "" };
    println!("Sprint: {} ({}){marker}", s.name, s.id);
    println!("  Dates: {} → {}", s.start_date, s.end_date);
    println!("  Status: {}", s.status.as_str());
    println!("  Day: {}/{} ({}% elapsed)", s.day, s.total_days, s.elapsed_percent());
    println!("  Progress: {}%", s.progress);
    println!(
        "  Tasks: {} done, {} in progress, {} blockers",
        s.completed_tasks, s.in_progress_tasks, s.blockers
    );
    println!("  Velocity: {}  Team: {}", s.velocity, s.team_size);
    println!(
        "  Health: on_track={}% slight_delay={}% critical={}%",
        s.health.on_track, s.health.slight_delay, s.health.critical
    );
}

pub fn print_sprint_list(sprints: &[Sprint], current: Option<&str>) {
    if sprints.is_empty() {
        println!("No sprints found.");
        return;
    }
    for s in sprints {
        let marker = if Some(s.id.as_str()) == current { " *" } else { "" };
        println!(
            "  {} [{}] {} {} → {} {}%{marker}",
            s.id,
            s.status.as_str(),
            s.name,
            s.start_date,
            s.end_date,
            s.progress
        );
    }
}

pub fn print_health(m: &HealthMetrics) {
    println!(
        "Health: on_track={}% slight_delay={}% critical={}% (sprints={})",
        m.on_track, m.slight_delay, m.critical, m.total
    );
}

fn task_line(t: &Task) -> String {
    format!(
        "{} {} [{}] @{} eta={} comments={}",
        t.display_code(),
        t.title,
        t.priority.as_str(),
        t.assignee.name,
        t.eta,
        t.comments
    )
}

pub fn print_column(board: &BoardStore, c: &Column) {
    println!("{} ({})", c.title, c.len());
    if c.is_empty() {
        println!("  (empty)");
    }
    for t in board.column_tasks(c.id) {
        println!("  {}", task_line(t));
    }
}

pub fn print_task_list(tasks: &[PlacedTask]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }
    for p in tasks {
        println!("  [{}] {}", p.status.as_str(), task_line(&p.task));
    }
}

pub fn print_task_details(d: &TaskDetails) {
    println!("Task: {} {} ({})", d.display_code, d.title, d.id);
    if !d.description.is_empty() {
        println!("  Description: {}", d.description);
    }
    println!("  Status: {}", d.status.as_str());
    println!("  Priority: {}", d.priority.as_str());
    println!("  Assignee: {}", d.assignee.name);
    println!("  ETA: {}", d.eta);
    println!("  Blockers: {}", d.blockers);
    println!("  QA: {}", d.qa_status.as_str());
    if !d.comments.is_empty() {
        println!("\nComments:");
        print_comments(&d.comments);
    }
}

pub fn print_comments(comments: &[TaskComment]) {
    if comments.is_empty() {
        println!("No comments.");
        return;
    }
    for c in comments {
        println!(
            "  [{}] {}: {}",
            c.timestamp.format("%Y-%m-%d %H:%M"),
            c.user_name,
            c.content
        );
    }
}

pub fn print_calendar(days: &[CalendarDay]) {
    for d in days {
        let mut flags = String::new();
        if d.is_weekend {
            flags.push_str(" weekend");
        }
        if d.is_today {
            flags.push_str(" today");
        }
        println!("  {} {}{flags}", d.weekday, d.date);
    }
}

pub fn print_team(members: &[TeamMember]) {
    for m in members {
        println!("  {} {} ({})", m.id, m.name, m.role);
    }
}
