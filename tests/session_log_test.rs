use std::fs;
use std::path::PathBuf;

use tui_blockfall::core::{Engine, SequenceRng};
use tui_blockfall::session_log::open_or_disabled;
use tui_blockfall::types::GameAction;
use tui_blockfall::{Session, SessionLog};

fn temp_log_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("blockfall-{}-{}.jsonl", name, std::process::id()));
    let _ = fs::remove_file(&path);
    path
}

fn read_records(path: &PathBuf) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn session_log_records_a_game() {
    let path = temp_log_path("game");
    let log = SessionLog::open(&path).unwrap();

    let mut session = Session::with_seed(Engine::new(SequenceRng::constant(2)), 100, 7, log);
    session.apply_action(GameAction::MoveLeft);
    session.tick(100 * 20);
    session.apply_action(GameAction::Restart);
    session.into_log().finish().unwrap();

    let records = read_records(&path);
    let types: Vec<&str> = records.iter().map(|r| r["type"].as_str().unwrap()).collect();

    assert_eq!(types[0], "start");
    assert_eq!(records[0]["seed"], 7);
    assert_eq!(records[0]["gravity_ms"], 100);
    assert_eq!(types[1], "spawn");
    assert_eq!(records[1]["kind"], "i");
    assert_eq!(types[2], "action");
    assert_eq!(records[2]["action"], "moveLeft");
    assert_eq!(records[2]["outcome"], "moved");
    assert!(types.contains(&"lock"));
    assert_eq!(types[types.len() - 2], "restart");
    assert_eq!(types[types.len() - 1], "spawn");

    let lock = records.iter().find(|r| r["type"] == "lock").unwrap();
    assert_eq!(lock["x"], 4);
    assert_eq!(lock["y"], 19);
    assert_eq!(lock["lines_cleared"], 0);

    for (i, r) in records.iter().enumerate() {
        assert_eq!(r["seq"], (i + 1) as u64);
        assert!(r["ts"].as_u64().is_some());
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn session_log_appends_across_sessions() {
    let path = temp_log_path("append");
    for _ in 0..2 {
        let log = SessionLog::open(&path).unwrap();
        let session = Session::new(Engine::new(SequenceRng::constant(0)), 500, log);
        session.into_log().finish().unwrap();
    }

    let records = read_records(&path);
    let starts = records.iter().filter(|r| r["type"] == "start").count();
    assert_eq!(starts, 2);
    assert!(records[0]["seed"].is_null());

    let _ = fs::remove_file(&path);
}

#[test]
fn session_log_unopenable_path_falls_back_to_disabled() {
    let mut path = std::env::temp_dir();
    path.push("blockfall-missing-dir");
    path.push("nested");
    path.push("log.jsonl");

    let (log, err) = open_or_disabled(Some(path.as_path()));
    assert!(!log.is_enabled());
    assert!(err.is_some());

    let (log, err) = open_or_disabled(None);
    assert!(!log.is_enabled());
    assert!(err.is_none());
}
