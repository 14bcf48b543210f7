//! Staff router core: task analysis, staff scoring and assignment.

pub mod analyzer;
pub mod audit;
pub mod config;
pub mod diag;
pub mod error;
pub mod report;
pub mod router;
pub mod scorer;
pub mod staff;
pub mod types;
