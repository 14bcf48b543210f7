use crate::{
    diag::DiagnosticSink,
    error::{RouterError, RouterResult},
    staff::{StaffRecord, StaffStatus},
    types::StaffId,
};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

/// Default roster location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config/staff.yaml";

/// Default directory for the audit log.
pub const DEFAULT_LOG_DIR: &str = "logs";

// ── Roster ───────────────────────────────────────────────────────────────────

/// Staff entries in document order.
///
/// Order matters: selection breaks ties in favour of the entry that
/// comes first, so the roster never goes through a hash map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<(StaffId, StaffRecord)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. A replaced entry keeps its original position.
    pub fn insert(&mut self, id: impl Into<StaffId>, record: StaffRecord) {
        let id = id.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, slot)) => *slot = record,
            None => self.entries.push((id, record)),
        }
    }

    pub fn with(mut self, id: impl Into<StaffId>, record: StaffRecord) -> Self {
        self.insert(id, record);
        self
    }

    pub fn get(&self, id: &str) -> Option<&StaffRecord> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StaffRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of staff id to staff record")
            }

            fn visit_unit<E>(self) -> Result<Roster, E>
            where
                E: de::Error,
            {
                Ok(Roster::new())
            }

            fn visit_map<A>(self, mut map: A) -> Result<Roster, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut roster = Roster::new();
                while let Some((id, record)) = map.next_entry::<StaffId, StaffRecord>()? {
                    roster.insert(id, record);
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

// ── Config document ──────────────────────────────────────────────────────────

/// The staff configuration document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaffConfig {
    /// `None` when the document has no `staff` key at all.
    #[serde(default)]
    staff: Option<Roster>,
}

impl StaffConfig {
    pub fn new(roster: Roster) -> Self {
        Self { staff: Some(roster) }
    }

    /// Load a YAML config document.
    pub fn load(path: &Path) -> RouterResult<Self> {
        if !path.exists() {
            return Err(RouterError::ConfigNotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> RouterResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load, or report the failure to `sink` and fall back to an empty
    /// document. Callers see the failure as a missing roster.
    pub fn load_or_empty(path: &Path, sink: &dyn DiagnosticSink) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                sink.error(&format!("failed to load staff config: {e}"));
                Self::default()
            }
        }
    }

    pub fn roster(&self) -> Option<&Roster> {
        self.staff.as_ref()
    }

    pub fn into_roster(self) -> Option<Roster> {
        self.staff
    }

    /// Roster with hardcoded entries for use in unit tests.
    pub fn default_test() -> Self {
        let staff = |name: &str, role: &str, model: &str, skills: &[&str], status: StaffStatus| {
            StaffRecord {
                name:     Some(name.into()),
                provider: Some("anthropic".into()),
                role:     Some(role.into()),
                model:    Some(model.into()),
                skills:   skills.iter().map(|s| s.to_string()).collect(),
                status,
                bio:      Some(format!("{name} ({role})")),
            }
        };

        let roster = Roster::new()
            .with(
                "claude-opus",
                staff("Opus", "architect", "claude-opus-4", &["architecture", "leadership"], StaffStatus::Active),
            )
            .with(
                "claude-sonnet",
                staff("Sonnet", "senior-engineer", "claude-3.5-sonnet", &["code-gen", "debugging"], StaffStatus::Active),
            )
            .with(
                "claude-haiku",
                staff("Haiku", "analyst", "claude-haiku", &["analysis", "writing"], StaffStatus::Active),
            )
            .with(
                "gpt-writer",
                staff("Writer", "reviewer", "gpt-4o", &["writing"], StaffStatus::Paused),
            );

        Self::new(roster)
    }
}
