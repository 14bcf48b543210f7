//! The router: one task in, one assignment (or none) out.
//!
//! FLOW (fixed):
//!   1. Analyze the task text into tags.
//!   2. Score the roster and select a winner (or honour a forced id).
//!
//! The roster is a read-only snapshot for the router's lifetime.
//! Persisting the result is left to the caller via `audit_entry`.

use crate::{
    analyzer::{analyze, TaskTag},
    audit::AuditEntry,
    config::Roster,
    diag::DiagnosticSink,
    scorer::{select, Selection},
    staff::StaffRecord,
    types::{Priority, StaffId, DEFAULT_PRIORITY},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRequest {
    pub description:  String,
    pub priority:     Priority,
    pub forced_staff: Option<StaffId>,
}

impl TaskRequest {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description:  description.into(),
            priority:     DEFAULT_PRIORITY.to_string(),
            forced_staff: None,
        }
    }

    pub fn with_priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn forced_to(mut self, staff_id: impl Into<StaffId>) -> Self {
        self.forced_staff = Some(staff_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteOutcome {
    pub tags:      Vec<TaskTag>,
    pub selection: Option<Selection>,
}

pub struct StaffRouter<'a> {
    roster: &'a Roster,
    sink:   &'a dyn DiagnosticSink,
}

impl<'a> StaffRouter<'a> {
    pub fn new(roster: &'a Roster, sink: &'a dyn DiagnosticSink) -> Self {
        Self { roster, sink }
    }

    pub fn roster(&self) -> &Roster {
        self.roster
    }

    pub fn route(&self, request: &TaskRequest) -> RouteOutcome {
        self.sink.info(&format!("analyzing task: {}", request.description));
        let tags = analyze(&request.description, self.sink);

        let selection = select(
            self.roster,
            &tags,
            request.forced_staff.as_deref(),
            self.sink,
        );

        RouteOutcome { tags, selection }
    }

    /// The record behind a selection.
    pub fn staff_for(&self, selection: &Selection) -> Option<&StaffRecord> {
        self.roster.get(&selection.staff_id)
    }

    /// Audit record for a successful route; `None` when nothing was selected.
    pub fn audit_entry(&self, request: &TaskRequest, outcome: &RouteOutcome) -> Option<AuditEntry> {
        outcome
            .selection
            .as_ref()
            .map(|s| AuditEntry::new(&request.description, &request.priority, s))
    }
}
