#[allow(deprecated)]
use assert_cmd::Command;
use chrono::DateTime;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        Self { dir }
    }

    /// Initialized environment with the seed board.
    fn init() -> Self {
        let env = Self::new();
        env.run_ok(&["init"]);
        env
    }

    fn data_dir(&self) -> PathBuf {
        self.dir.path().join(".sprintboard")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("sprintboard").expect("binary");
        cmd.current_dir(self.dir.path())
            .env_remove("SPRINTBOARD_DIR")
            .env_remove("SPRINTBOARD_LOG");
        cmd
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        let stdout = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn write_config(&self, content: &str) {
        fs::write(self.data_dir().join("config.json"), content).expect("write config");
    }

    fn column<'a>(board: &'a Value, id: &str) -> &'a Value {
        board["data"]["columns"]
            .as_array()
            .expect("columns")
            .iter()
            .find(|c| c["id"] == id)
            .unwrap_or_else(|| panic!("no column {id}: {board}"))
    }

    fn column_ids(&self, id: &str) -> Vec<String> {
        let board = self.run_ok(&["board", "show"]);
        Self::column(&board, id)["tasks"]
            .as_array()
            .expect("tasks")
            .iter()
            .map(|t| t["id"].as_str().expect("id").to_string())
            .collect()
    }
}

fn error_code(v: &Value) -> &str {
    v["error"]["code"].as_str().expect("error code")
}

// ─── init ──────────────────────────────────────────────────────────

#[test]
fn test_init_creates_database_and_config() {
    let env = TestEnv::new();
    let v = env.run_ok(&["init"]);

    assert_eq!(v["data"]["seeded"], true);
    assert_eq!(v["data"]["config_written"], true);
    assert!(v["data"]["path"]
        .as_str()
        .unwrap()
        .ends_with("sprintboard.db"));
    assert!(env.data_dir().join("sprintboard.db").exists());
    assert!(env.data_dir().join("config.json").exists());
}

#[test]
fn test_init_twice_keeps_state() {
    let env = TestEnv::init();
    env.run_ok(&["board", "move", "1", "--to", "critical-delay"]);

    let v = env.run_ok(&["init"]);
    assert_eq!(v["data"]["seeded"], false);
    assert_eq!(v["data"]["config_written"], false);
    assert_eq!(env.column_ids("critical-delay"), vec!["4", "1"]);
}

#[test]
fn test_commands_before_init_fail() {
    let env = TestEnv::new();
    let v = env.run_err(&["board", "show"]);
    assert_eq!(error_code(&v), "NOT_INITIALIZED");
}

#[test]
fn test_data_dir_flag_and_env() {
    let env = TestEnv::new();
    let custom = env.dir.path().join("custom");
    let custom_str = custom.to_str().unwrap();

    env.run_ok(&["init", "--data-dir", custom_str]);
    assert!(custom.join("sprintboard.db").exists());
    assert!(!env.data_dir().exists());

    let v = env.run_ok(&["status", "--data-dir", custom_str]);
    assert_eq!(v["data"]["total_tasks"], 4);

    let output = env
        .cmd()
        .env("SPRINTBOARD_DIR", custom_str)
        .args(["team", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());

    env.cmd()
        .env("SPRINTBOARD_DIR", custom_str)
        .args(["sprint", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprint Alpha"));
}

// ─── sprints ───────────────────────────────────────────────────────

#[test]
fn test_sprint_list() {
    let env = TestEnv::init();
    let v = env.run_ok(&["sprint", "list"]);

    let sprints = v["data"]["sprints"].as_array().unwrap();
    assert_eq!(sprints.len(), 3);
    assert_eq!(v["data"]["current_sprint_id"], "1");
    assert_eq!(sprints[0]["name"], "Sprint Alpha");
    assert_eq!(sprints[0]["current"], true);
    assert_eq!(sprints[0]["elapsed_percent"], 50);
    assert_eq!(sprints[2]["status"], "upcoming");
}

#[test]
fn test_sprint_select_persists() {
    let env = TestEnv::init();
    let v = env.run_ok(&["sprint", "select", "2"]);
    assert_eq!(v["data"]["current"]["id"], "2");

    let v = env.run_ok(&["sprint", "show"]);
    assert_eq!(v["data"]["name"], "Sprint Beta");
    assert_eq!(v["data"]["current"], true);

    let v = env.run_ok(&["sprint", "show", "3"]);
    assert_eq!(v["data"]["current"], false);
}

#[test]
fn test_sprint_select_unknown() {
    let env = TestEnv::init();
    let v = env.run_err(&["sprint", "select", "99"]);
    assert_eq!(error_code(&v), "SPRINT_NOT_FOUND");

    let v = env.run_ok(&["sprint", "list"]);
    assert_eq!(v["data"]["current_sprint_id"], "1");
}

#[test]
fn test_sprint_health() {
    let env = TestEnv::init();
    let v = env.run_ok(&["sprint", "health"]);

    assert_eq!(v["data"]["on_track"], 80);
    assert_eq!(v["data"]["slight_delay"], 16);
    assert_eq!(v["data"]["critical"], 4);
    assert_eq!(v["data"]["total"], 2);
}

// ─── board ─────────────────────────────────────────────────────────

#[test]
fn test_board_show_seed_layout() {
    let env = TestEnv::init();
    let v = env.run_ok(&["board", "show"]);

    assert_eq!(v["data"]["total"], 4);
    assert_eq!(TestEnv::column(&v, "on-track")["count"], 2);
    assert_eq!(TestEnv::column(&v, "slight-delay")["count"], 1);
    assert_eq!(TestEnv::column(&v, "critical-delay")["count"], 1);

    let first = &TestEnv::column(&v, "on-track")["tasks"][0];
    assert_eq!(first["code"], "TMS000001");
    assert_eq!(first["status"], "on-track");
    assert_eq!(first["comments"], 5);
}

#[test]
fn test_board_move_updates_status_and_counts() {
    let env = TestEnv::init();
    let v = env.run_ok(&["board", "move", "1", "--to", "critical-delay"]);

    assert_eq!(v["data"]["from"], "on-track");
    assert_eq!(v["data"]["to"], "critical-delay");
    assert_eq!(v["data"]["task"]["status"], "critical-delay");
    assert_eq!(v["data"]["counts"]["on-track"], 1);
    assert_eq!(v["data"]["counts"]["critical-delay"], 2);

    // persisted for the next invocation
    assert_eq!(env.column_ids("on-track"), vec!["2"]);
    assert_eq!(env.column_ids("critical-delay"), vec!["4", "1"]);
    let v = env.run_ok(&["task", "show", "1"]);
    assert_eq!(v["data"]["task"]["status"], "critical-delay");
}

#[test]
fn test_board_move_same_column_reappends() {
    let env = TestEnv::init();
    env.run_ok(&["board", "move", "1", "--from", "on-track", "--to", "on-track"]);
    assert_eq!(env.column_ids("on-track"), vec!["2", "1"]);
}

#[test]
fn test_board_move_errors_leave_board_alone() {
    let env = TestEnv::init();

    let v = env.run_err(&["board", "move", "3", "--from", "on-track", "--to", "critical-delay"]);
    assert_eq!(error_code(&v), "TASK_NOT_FOUND");

    let v = env.run_err(&["board", "move", "999", "--to", "on-track"]);
    assert_eq!(error_code(&v), "TASK_NOT_FOUND");

    let v = env.run_err(&["board", "move", "1", "--to", "done"]);
    assert_eq!(error_code(&v), "COLUMN_NOT_FOUND");

    let v = env.run_err(&["board", "move", "1", "--from", "backlog", "--to", "on-track"]);
    assert_eq!(error_code(&v), "COLUMN_NOT_FOUND");

    assert_eq!(env.column_ids("on-track"), vec!["1", "2"]);
    assert_eq!(env.column_ids("slight-delay"), vec!["3"]);
    assert_eq!(env.column_ids("critical-delay"), vec!["4"]);
}

#[test]
fn test_board_add_task() {
    let env = TestEnv::init();
    let v = env.run_ok(&[
        "board",
        "add",
        "Release checklist",
        "--eta",
        "2h",
        "--priority",
        "high",
        "--assignee",
        "sarah kim",
        "--column",
        "slight-delay",
    ]);

    let task = &v["data"]["task"];
    assert_eq!(task["title"], "Release checklist");
    assert_eq!(task["status"], "slight-delay");
    assert_eq!(task["priority"], "high");
    assert_eq!(task["assignee"]["name"], "Sarah Kim");
    assert_eq!(task["qa_status"], "pending");
    assert_eq!(task["comments"], 0);
    assert!(task["code"].as_str().unwrap().starts_with("TMS"));

    let id = task["id"].as_str().unwrap().to_string();
    assert_eq!(env.column_ids("slight-delay"), vec!["3".to_string(), id.clone()]);

    let v = env.run_ok(&["task", "show", &id]);
    assert_eq!(v["data"]["task"]["status"], "slight-delay");
}

#[test]
fn test_board_add_uses_config_defaults() {
    let env = TestEnv::init();
    env.write_config(r#"{"default_column": "critical-delay"}"#);

    let v = env.run_ok(&["board", "add", "Hotfix", "--eta", "1h"]);
    assert_eq!(v["data"]["task"]["status"], "critical-delay");
    assert_eq!(v["data"]["task"]["assignee"]["name"], "Alex Chen");
    assert_eq!(v["data"]["task"]["priority"], "medium");
}

#[test]
fn test_board_add_validation() {
    let env = TestEnv::init();

    let v = env.run_err(&["board", "add", "No estimate", "--eta", "  "]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_err(&["board", "add", "  ", "--eta", "2h"]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_err(&["board", "add", "X", "--eta", "2h", "--priority", "urgent"]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_err(&["board", "add", "X", "--eta", "2h", "--assignee", "nobody"]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_err(&["board", "add", "X", "--eta", "2h", "--column", "done"]);
    assert_eq!(error_code(&v), "COLUMN_NOT_FOUND");

    let v = env.run_ok(&["board", "show"]);
    assert_eq!(v["data"]["total"], 4);
}

#[test]
fn test_board_list_sorting() {
    let env = TestEnv::init();

    let v = env.run_ok(&["board", "list"]);
    let ids: Vec<_> = v["data"]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "4", "2", "3"]);

    let v = env.run_ok(&["board", "list", "--sort", "time", "--asc"]);
    let etas: Vec<_> = v["data"]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["eta"].as_str().unwrap())
        .collect();
    assert_eq!(etas, vec!["2h", "3h", "4h", "6h"]);
}

#[test]
fn test_board_calendar() {
    let env = TestEnv::init();
    let v = env.run_ok(&["board", "calendar"]);

    assert_eq!(v["data"]["sprint_id"], "1");
    let days = v["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 14);
    assert_eq!(days[0]["date"], "2024-04-01");
    assert_eq!(days[0]["weekday"], "Mon");
    assert_eq!(days[5]["is_weekend"], true);
    assert_eq!(v["data"]["working_days"], 10);

    let v = env.run_err(&["board", "calendar", "--sprint", "99"]);
    assert_eq!(error_code(&v), "SPRINT_NOT_FOUND");
}

// ─── tasks & comments ──────────────────────────────────────────────

#[test]
fn test_task_show() {
    let env = TestEnv::init();
    let v = env.run_ok(&["task", "show", "4"]);

    let task = &v["data"]["task"];
    assert_eq!(task["display_code"], "TMS000004");
    assert_eq!(task["title"], "Performance Optimization");
    assert_eq!(task["status"], "critical-delay");
    assert_eq!(task["qa_status"], "failed");
    assert_eq!(task["comments"].as_array().unwrap().len(), 0);
    assert_eq!(task["time_logs"].as_array().unwrap().len(), 0);

    let v = env.run_err(&["task", "show", "999"]);
    assert_eq!(error_code(&v), "TASK_NOT_FOUND");
}

#[test]
fn test_task_comment_flow() {
    let env = TestEnv::init();

    let v = env.run_ok(&["task", "comment", "2", "Charts look good"]);
    assert_eq!(v["data"]["comment_count"], 1);
    assert_eq!(v["data"]["comment"]["user_name"], "Alex Chen");
    assert_eq!(v["data"]["comment"]["content"], "Charts look good");

    env.run_ok(&["task", "comment", "2", "Merged"]);

    let v = env.run_ok(&["task", "comments", "2"]);
    let comments = v["data"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "Charts look good");
    assert_eq!(comments[1]["content"], "Merged");
    let stamp = |c: &Value| {
        DateTime::parse_from_rfc3339(c["timestamp"].as_str().expect("timestamp"))
            .expect("rfc3339 timestamp")
    };
    assert!(stamp(&comments[0]) <= stamp(&comments[1]));
    assert!(comments[0]["user_avatar"]
        .as_str()
        .unwrap()
        .starts_with("https://"));
    assert!(comments[0]["id"].as_str().unwrap().contains('-'));

    let v = env.run_ok(&["task", "show", "2"]);
    assert_eq!(v["data"]["task"]["comments"].as_array().unwrap().len(), 2);
}

#[test]
fn test_task_comment_uses_config_user() {
    let env = TestEnv::init();
    env.write_config(r#"{"user": {"id": "9", "name": "Robin", "avatar": ""}}"#);

    let v = env.run_ok(&["task", "comment", "1", "Taking over"]);
    assert_eq!(v["data"]["comment"]["user_id"], "9");
    assert_eq!(v["data"]["comment"]["user_name"], "Robin");
}

#[test]
fn test_task_comment_on_unknown_task_is_stored() {
    let env = TestEnv::init();
    let v = env.run_ok(&["task", "comment", "999", "Orphan note"]);
    assert!(v["data"]["comment_count"].is_null());

    let v = env.run_ok(&["task", "comments", "999"]);
    assert_eq!(v["data"]["comments"].as_array().unwrap().len(), 1);
}

#[test]
fn test_task_comment_rejects_blank() {
    let env = TestEnv::init();
    let v = env.run_err(&["task", "comment", "1", "   "]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_ok(&["task", "comments", "1"]);
    assert_eq!(v["data"]["comments"].as_array().unwrap().len(), 0);
}

#[test]
fn test_task_log_time() {
    let env = TestEnv::init();
    let v = env.run_ok(&["task", "log-time", "1", "2.5", "--note", "pairing"]);
    assert_eq!(v["data"]["persisted"], false);
    assert_eq!(v["data"]["time_log"]["hours"], 2.5);
    assert_eq!(v["data"]["time_log"]["note"], "pairing");

    let v = env.run_err(&["task", "log-time", "1", "-1"]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_err(&["task", "log-time", "999", "1"]);
    assert_eq!(error_code(&v), "TASK_NOT_FOUND");

    let v = env.run_ok(&["task", "show", "1"]);
    assert_eq!(v["data"]["task"]["time_logs"].as_array().unwrap().len(), 0);
}

// ─── misc ──────────────────────────────────────────────────────────

#[test]
fn test_team_and_status() {
    let env = TestEnv::init();

    let v = env.run_ok(&["team"]);
    let members = v["data"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 4);
    assert_eq!(members[3]["name"], "Emma Wilson");

    let v = env.run_ok(&["status"]);
    assert_eq!(v["data"]["sprint"]["id"], "1");
    assert_eq!(v["data"]["total_tasks"], 4);
    assert_eq!(v["data"]["health"]["total"], 2);
}

#[test]
fn test_text_output() {
    let env = TestEnv::init();

    env.cmd()
        .args(["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sprint Alpha"));

    env.cmd()
        .args(["board", "move", "1", "--to", "nowhere"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Column not found: nowhere"));
}
