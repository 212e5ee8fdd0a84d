//! funcap-norms
//!
//! Normative job-requirement data and effort-consistency evaluation. Pure
//! data and pure functions — no I/O. Defines the ordered requirement table
//! keyed by test-name patterns, the job-match priority chain, and the
//! fixed battery of consistency crosschecks.

pub mod crosschecks;
pub mod job_match;
pub mod policy;
pub mod requirements;

pub use crosschecks::{run_crosschecks, Crosscheck, CrosscheckVerdict};
pub use job_match::{evaluate_job_match, requirement_value, JobMatchOutcome};
pub use requirements::{requirement_for, RequirementEntry, RequirementKind};
