//! Shared primitive types used across the router.

/// Roster key for a staff entry. Unique within a roster.
pub type StaffId = String;

/// Task priority as given on the command line. Passed through, never validated.
pub type Priority = String;

/// Priority used when none is supplied.
pub const DEFAULT_PRIORITY: &str = "medium";
