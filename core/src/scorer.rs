//! Staff scoring and winner selection.
//!
//! SCORE (strictly additive, components never interact):
//!   score = role + skills + model
//!
//!   - role:   fixed role table, unknown roles → 0
//!   - skills: per tag, the first skill containing the tag's category
//!             adds the tag weight; one hit per tag
//!   - model:  +2 top tier, +1 mid tier, +0 otherwise
//!
//! Any staff whose status is not `active` scores exactly 0.
//!
//! SELECTION:
//!   - A forced id that exists always wins, whatever it scores.
//!   - A forced id that does not exist means no winner.
//!   - Otherwise scan in roster order, strict `>` against a -1 sentinel:
//!     the first staff to reach the maximum wins ties.

use crate::{
    analyzer::TaskTag,
    config::Roster,
    diag::DiagnosticSink,
    staff::{role_score, ModelTier, StaffRecord},
    types::StaffId,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent components of a staff score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub role:   u32,
    pub skills: u32,
    pub model:  u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.role + self.skills + self.model
    }
}

/// Why a staff member was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectReason {
    Forced,
    HighestScore,
}

impl SelectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectReason::Forced       => "forced",
            SelectReason::HighestScore => "highest-score",
        }
    }
}

impl fmt::Display for SelectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The winning staff member, its score and the reason it won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub staff_id: StaffId,
    pub score:    u32,
    pub reason:   SelectReason,
}

/// Skill component: for each tag, the weight of the first matching skill.
pub fn skill_score(
    staff_id: &str,
    skills: &[String],
    tags: &[TaskTag],
    sink: &dyn DiagnosticSink,
) -> u32 {
    let skills: Vec<(String, &str)> = skills
        .iter()
        .map(|s| (s.to_lowercase(), s.as_str()))
        .collect();

    let mut total = 0;
    for tag in tags {
        let category = tag.category.to_lowercase();
        if let Some((_, original)) = skills.iter().find(|(lower, _)| lower.contains(&category)) {
            total += tag.weight;
            sink.info(&format!(
                "[MATCH] {staff_id}: {tag} (skill: {original}, +{})",
                tag.weight
            ));
        }
    }
    total
}

/// Score breakdown for one staff member. Inactive staff get all zeros.
pub fn score_breakdown(
    staff_id: &str,
    staff: &StaffRecord,
    tags: &[TaskTag],
    sink: &dyn DiagnosticSink,
) -> ScoreBreakdown {
    if !staff.is_active() {
        sink.info(&format!("[SKIP] {staff_id}: not active (status: {})", staff.status));
        return ScoreBreakdown::default();
    }

    let breakdown = ScoreBreakdown {
        role:   role_score(staff.role_str()),
        skills: skill_score(staff_id, &staff.skills, tags, sink),
        model:  ModelTier::classify(staff.model_str()).bonus(),
    };

    if sink.debug_enabled() {
        sink.debug(&format!(
            "[SCORE] {staff_id}: role={}, skills={}, model={}, total={}",
            breakdown.role,
            breakdown.skills,
            breakdown.model,
            breakdown.total()
        ));
    }

    breakdown
}

/// Total score for one staff member.
pub fn score(
    staff_id: &str,
    staff: &StaffRecord,
    tags: &[TaskTag],
    sink: &dyn DiagnosticSink,
) -> u32 {
    score_breakdown(staff_id, staff, tags, sink).total()
}

/// Pick the staff member for a task, honouring a forced id.
///
/// Returns `None` when the roster is empty or the forced id is unknown.
pub fn select(
    roster: &Roster,
    tags: &[TaskTag],
    forced: Option<&str>,
    sink: &dyn DiagnosticSink,
) -> Option<Selection> {
    if let Some(forced_id) = forced {
        let Some(staff) = roster.get(forced_id) else {
            sink.error(&format!("[FORCE] {forced_id} is not in the roster"));
            return None;
        };
        let score = score(forced_id, staff, tags, sink);
        sink.info(&format!("[FORCE] assigned to {forced_id}: score {score}"));
        return Some(Selection {
            staff_id: forced_id.to_string(),
            score,
            reason: SelectReason::Forced,
        });
    }

    let mut best: Option<Selection> = None;
    let mut best_score: i64 = -1;

    for (staff_id, staff) in roster.iter() {
        let score = score(staff_id, staff, tags, sink);

        if i64::from(score) > best_score {
            best_score = i64::from(score);
            best = Some(Selection {
                staff_id: staff_id.to_string(),
                score,
                reason: SelectReason::HighestScore,
            });
        }

        sink.debug(&format!("[SCAN] {staff_id}: {score} points"));
    }

    best
}
