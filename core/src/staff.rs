//! Staff records and the fixed role / model-tier tables used to score them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Value;
use std::fmt;

// ── Roles ────────────────────────────────────────────────────────────────────

/// Known roles. Anything else scores 0 and is kept verbatim for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Engineer,
    SeniorEngineer,
    JuniorEngineer,
    Architect,
    Analyst,
    Cto,
    Manager,
    Reviewer,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Engineer,
        Role::SeniorEngineer,
        Role::JuniorEngineer,
        Role::Architect,
        Role::Analyst,
        Role::Cto,
        Role::Manager,
        Role::Reviewer,
    ];

    /// Exact match only, no partial credit for near-misses.
    pub fn parse(s: &str) -> Option<Role> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Engineer       => "engineer",
            Role::SeniorEngineer => "senior-engineer",
            Role::JuniorEngineer => "junior-engineer",
            Role::Architect      => "architect",
            Role::Analyst        => "analyst",
            Role::Cto            => "cto",
            Role::Manager        => "manager",
            Role::Reviewer       => "reviewer",
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Role::Engineer       => 3,
            Role::SeniorEngineer => 5,
            Role::JuniorEngineer => 2,
            Role::Architect      => 5,
            Role::Analyst        => 2,
            Role::Cto            => 5,
            Role::Manager        => 4,
            Role::Reviewer       => 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role score for a raw role string; unknown or empty roles score 0.
pub fn role_score(role: &str) -> u32 {
    Role::parse(role).map(|r| r.score()).unwrap_or(0)
}

// ── Model tiers ──────────────────────────────────────────────────────────────

const TOP_TIER_MARKERS: &[&str] = &["opus", "claude-3.7", "claude-4.5"];
const MID_TIER_MARKERS: &[&str] = &["sonnet", "claude-3.5-sonnet", "claude-haiku"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelTier {
    Top,
    Mid,
    Basic,
}

impl ModelTier {
    /// Case-insensitive substring match. Top tier is tested first, so a
    /// model naming both tiers only ever gets the top-tier bonus.
    pub fn classify(model: &str) -> ModelTier {
        let model = model.to_lowercase();
        if TOP_TIER_MARKERS.iter().any(|m| model.contains(m)) {
            ModelTier::Top
        } else if MID_TIER_MARKERS.iter().any(|m| model.contains(m)) {
            ModelTier::Mid
        } else {
            ModelTier::Basic
        }
    }

    pub fn bonus(&self) -> u32 {
        match self {
            ModelTier::Top   => 2,
            ModelTier::Mid   => 1,
            ModelTier::Basic => 0,
        }
    }
}

// ── Status ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StaffStatus {
    Active,
    Paused,
    Other(String),
}

impl StaffStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, StaffStatus::Active)
    }

    pub fn as_str(&self) -> &str {
        match self {
            StaffStatus::Active   => "active",
            StaffStatus::Paused   => "paused",
            StaffStatus::Other(s) => s,
        }
    }

    /// Roster listing glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            StaffStatus::Active   => "✓",
            StaffStatus::Paused   => "⊘",
            StaffStatus::Other(_) => "?",
        }
    }
}

impl Default for StaffStatus {
    fn default() -> Self {
        StaffStatus::Other("unknown".into())
    }
}

impl From<String> for StaffStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "active" => StaffStatus::Active,
            "paused" => StaffStatus::Paused,
            _        => StaffStatus::Other(s),
        }
    }
}

impl From<StaffStatus> for String {
    fn from(status: StaffStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for StaffStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Staff record ─────────────────────────────────────────────────────────────

/// One roster entry. Every field is optional in the config document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaffRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Always the normalized list form; see `deserialize_skills`.
    #[serde(default, deserialize_with = "deserialize_skills")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub status: StaffStatus,
    #[serde(default)]
    pub bio: Option<String>,
}

impl StaffRecord {
    pub fn role_str(&self) -> &str {
        self.role.as_deref().unwrap_or("")
    }

    pub fn model_str(&self) -> &str {
        self.model.as_deref().unwrap_or("")
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Display name, falling back to the roster id.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.name.as_deref().unwrap_or(id)
    }
}

/// Split a space-delimited skills string. Empty input gives an empty list.
pub fn normalize_skills(raw: &str) -> Vec<String> {
    raw.split(' ')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scalars read as their text form; mappings, sequences and tagged values
/// have no skill text.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b)   => Some(b.to_string()),
        _                => None,
    }
}

/// Skills arrive as a list or a space-delimited string. Entries that are
/// not scalars are dropped so one bad entry never rejects the roster.
fn deserialize_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_text).collect(),
        Some(other) => scalar_text(&other)
            .map(|raw| normalize_skills(&raw))
            .unwrap_or_default(),
        None => Vec::new(),
    })
}
