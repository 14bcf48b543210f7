//! Staff scoring tests: role + skills + model composition and the
//! inactive-staff rule.

use staff_router_core::{
    analyzer::TaskTag,
    diag::{CaptureSink, LogSink},
    scorer::{score, score_breakdown, skill_score, ScoreBreakdown},
    staff::{StaffRecord, StaffStatus},
};

fn staff(role: &str, model: &str, skills: &[&str], status: StaffStatus) -> StaffRecord {
    StaffRecord {
        name: Some("Test".into()),
        role: Some(role.into()),
        model: Some(model.into()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        status,
        ..StaffRecord::default()
    }
}

fn all_tags() -> Vec<TaskTag> {
    vec![
        TaskTag::new("code-gen", 10),
        TaskTag::new("analysis", 7),
        TaskTag::new("debugging", 7),
        TaskTag::new("leadership", 6),
    ]
}

/// Known role + one matching skill + top-tier model = role + weight + 2.
#[test]
fn composite_score_is_role_plus_weight_plus_bonus() {
    let s = staff("engineer", "claude-opus-4", &["code-gen"], StaffStatus::Active);
    let tags = vec![TaskTag::new("code-gen", 10)];
    let sink = CaptureSink::new();

    assert_eq!(score("a", &s, &tags, &sink), 3 + 10 + 2);
    assert_eq!(
        score_breakdown("a", &s, &tags, &sink),
        ScoreBreakdown { role: 3, skills: 10, model: 2 }
    );
}

/// Paused and unknown-status staff always score exactly 0.
#[test]
fn inactive_staff_score_zero() {
    let tags = all_tags();
    let sink = CaptureSink::new();

    for status in [
        StaffStatus::Paused,
        StaffStatus::Other("retired".into()),
        StaffStatus::default(),
    ] {
        let s = staff("cto", "claude-opus-4", &["code-gen", "leadership"], status.clone());
        assert_eq!(score("x", &s, &tags, &sink), 0, "status {status}");
        assert_eq!(score_breakdown("x", &s, &tags, &sink), ScoreBreakdown::default());
    }
    assert!(sink.contains("[SKIP] x"));
    assert!(!sink.contains("[MATCH]"), "inactive staff must not be scored");
}

/// Unknown role, unknown model and no skills degrade to zero, not an error.
#[test]
fn malformed_fields_contribute_nothing() {
    let s = staff("wizard", "mystery-model", &[], StaffStatus::Active);
    assert_eq!(score("w", &s, &all_tags(), &CaptureSink::new()), 0);

    let bare = StaffRecord { status: StaffStatus::Active, ..StaffRecord::default() };
    assert_eq!(score("b", &bare, &all_tags(), &CaptureSink::new()), 0);
}

/// Each tag adds its weight at most once, even if several skills match.
#[test]
fn skill_match_counts_once_per_tag() {
    let skills = vec![
        "code-gen".to_string(),
        "code-gen-rust".to_string(),
        "advanced-code-gen".to_string(),
    ];
    let tags = vec![TaskTag::new("code-gen", 10)];
    assert_eq!(skill_score("s", &skills, &tags, &CaptureSink::new()), 10);
}

/// Skill matching is case-insensitive substring containment.
#[test]
fn skill_match_is_case_insensitive_substring() {
    let skills = vec!["Senior-Debugging-Specialist".to_string(), "DATA-ANALYSIS".to_string()];
    let tags = all_tags();
    assert_eq!(skill_score("s", &skills, &tags, &CaptureSink::new()), 7 + 7);
}

/// Weights from every matched tag add up.
#[test]
fn skill_score_sums_matched_tags() {
    let s = staff(
        "senior-engineer",
        "claude-3.5-sonnet",
        &["code-gen", "debugging", "writing"],
        StaffStatus::Active,
    );
    // role 5 + code-gen 10 + debugging 7 + mid tier 1
    assert_eq!(score("s", &s, &all_tags(), &CaptureSink::new()), 23);
}

/// No tags means only role and model count.
#[test]
fn no_tags_scores_role_and_model_only() {
    let s = staff("manager", "claude-haiku", &["leadership"], StaffStatus::Active);
    assert_eq!(score("m", &s, &[], &CaptureSink::new()), 4 + 1);
}

/// A model string naming both tiers only gets the top-tier bonus.
#[test]
fn model_bonus_is_exclusive() {
    let s = staff("", "opus-sonnet", &[], StaffStatus::Active);
    assert_eq!(score("o", &s, &[], &CaptureSink::new()), 2);
}

#[test]
fn match_and_score_traces_are_emitted() {
    let s = staff("engineer", "gpt-4o", &["Code-Gen"], StaffStatus::Active);
    let sink = CaptureSink::new();
    score("eng-1", &s, &[TaskTag::new("code-gen", 10)], &sink);

    assert!(sink.contains("[MATCH] eng-1: code-gen:10 (skill: Code-Gen, +10)"));
    let debug = sink.messages_at(log::Level::Debug);
    assert_eq!(debug, vec!["[SCORE] eng-1: role=3, skills=10, model=0, total=13".to_string()]);
}

/// The log-backed sink scores identically to the capturing one.
#[test]
fn log_sink_gives_same_score() {
    let _ = env_logger::builder().is_test(true).try_init();
    let s = staff("architect", "claude-4.5", &["architecture"], StaffStatus::Active);
    let tags = vec![TaskTag::new("architecture", 5)];
    assert_eq!(score("arch", &s, &tags, &LogSink), score("arch", &s, &tags, &CaptureSink::new()));
    assert_eq!(score("arch", &s, &tags, &LogSink), 5 + 5 + 2);
}
