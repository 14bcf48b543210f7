//! Audit log tests: append-only JSON lines.

use chrono::{Local, TimeZone};
use staff_router_core::{
    audit::{AuditEntry, AuditLog, AUDIT_FILE_NAME},
    scorer::{SelectReason, Selection},
};
use std::fs;
use tempfile::TempDir;

fn selection(id: &str, score: u32, reason: SelectReason) -> Selection {
    Selection { staff_id: id.into(), score, reason }
}

/// The parent directory is created on first append.
#[test]
fn append_creates_missing_directory() {
    let dir = TempDir::new().unwrap();
    let log_dir = dir.path().join("nested").join("logs");
    let log = AuditLog::new(&log_dir);

    let entry = AuditEntry::new("タスク", "high", &selection("a", 15, SelectReason::HighestScore));
    log.append(&entry).unwrap();

    assert!(log_dir.join(AUDIT_FILE_NAME).exists());
    assert_eq!(log.read_all().unwrap(), vec![entry]);
}

/// Appends never overwrite earlier lines.
#[test]
fn appends_accumulate_in_order() {
    let dir = TempDir::new().unwrap();
    let log = AuditLog::new(dir.path());

    let first = AuditEntry::new("first", "medium", &selection("a", 15, SelectReason::HighestScore));
    let second = AuditEntry::new("second", "low", &selection("b", 0, SelectReason::Forced));
    log.append(&first).unwrap();
    log.append(&second).unwrap();

    let content = fs::read_to_string(log.path()).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(content.ends_with('\n'));

    let entries = log.read_all().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].task, "first");
    assert_eq!(entries[1].assigned_to, "b");
    assert_eq!(entries[1].reason, SelectReason::Forced);
}

/// Field names, reason spelling and raw UTF-8 task text on disk.
#[test]
fn record_layout_on_disk() {
    let dir = TempDir::new().unwrap();
    let log = AuditLog::new(dir.path());
    let at = Local.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
    let entry = AuditEntry::at(at, "バグを修正", "high", &selection("claude-sonnet", 13, SelectReason::HighestScore));
    log.append(&entry).unwrap();

    let line = fs::read_to_string(log.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();

    assert_eq!(value["task"], "バグを修正");
    assert_eq!(value["priority"], "high");
    assert_eq!(value["assigned_to"], "claude-sonnet");
    assert_eq!(value["score"], 13);
    assert_eq!(value["reason"], "highest-score");
    assert!(value["timestamp"].as_str().unwrap().starts_with("2026-10-17T09:30:00"));
    assert!(line.contains("バグを修正"), "task text must not be escaped");
}

#[test]
fn missing_log_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let log = AuditLog::new(dir.path().join("never-written"));
    assert!(log.read_all().unwrap().is_empty());
}
