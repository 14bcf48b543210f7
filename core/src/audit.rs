//! Append-only audit log of successful assignments.
//!
//! RULE: The log is only ever appended to. One JSON object per line,
//! one line per successful selection. Nothing here truncates or rewrites.

use crate::{
    error::RouterResult,
    scorer::{SelectReason, Selection},
    types::{Priority, StaffId},
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

pub const AUDIT_FILE_NAME: &str = "tasks.jsonl";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp:   DateTime<Local>,
    pub task:        String,
    pub priority:    Priority,
    pub assigned_to: StaffId,
    pub score:       u32,
    pub reason:      SelectReason,
}

impl AuditEntry {
    pub fn new(task: &str, priority: &str, selection: &Selection) -> Self {
        Self::at(Local::now(), task, priority, selection)
    }

    pub fn at(timestamp: DateTime<Local>, task: &str, priority: &str, selection: &Selection) -> Self {
        Self {
            timestamp,
            task:        task.to_string(),
            priority:    priority.to_string(),
            assigned_to: selection.staff_id.clone(),
            score:       selection.score,
            reason:      selection.reason,
        }
    }
}

pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Log file `tasks.jsonl` inside `dir`. Nothing is created until the
    /// first append.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { path: dir.as_ref().join(AUDIT_FILE_NAME) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, entry: &AuditEntry) -> RouterResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut line = serde_json::to_string(entry)?;
        line.push('\n');

        // Single write of a complete line, append mode.
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    /// All entries in file order. A missing file reads as empty.
    pub fn read_all(&self) -> RouterResult<Vec<AuditEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let reader = BufReader::new(fs::File::open(&self.path)?);
        let mut entries = Vec::new();
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            entries.push(serde_json::from_str(&line)?);
        }
        Ok(entries)
    }
}
