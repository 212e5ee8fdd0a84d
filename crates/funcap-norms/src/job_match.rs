//! Job-match resolution.
//!
//! A strict priority chain: each rule short-circuits all later ones.
//! Reordering these rules changes report conclusions, so the sequence is
//! kept exactly as the product defines it.

use funcap_core::models::test_record::{JobMatchFlag, NormLevel, TestRecord};
use funcap_core::stats;
use serde::Serialize;
use ts_rs::TS;

use crate::requirements::{requirement_for, RequirementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JobMatchOutcome {
    Match,
    NoMatch,
}

/// Decide whether a test result matches the inferred job requirement.
///
/// Priority: (1) the evaluator's explicit job-match flag, (2) the
/// explicit norm-level judgment, (3) numeric comparison of the
/// better-performing side against the resolved norm, (4) the demonstrated
/// flag, (5) no match.
pub fn evaluate_job_match(test: &TestRecord) -> JobMatchOutcome {
    match test.job_match {
        JobMatchFlag::Matched => return JobMatchOutcome::Match,
        JobMatchFlag::NotMatched => return JobMatchOutcome::NoMatch,
        JobMatchFlag::Unset => {}
    }

    match test.norm_level {
        NormLevel::Yes => return JobMatchOutcome::Match,
        NormLevel::No => return JobMatchOutcome::NoMatch,
        NormLevel::Unset => {}
    }

    if let Some(outcome) = numeric_outcome(test) {
        return outcome;
    }

    match test.demonstrated {
        Some(true) => JobMatchOutcome::Match,
        Some(false) => JobMatchOutcome::NoMatch,
        None => JobMatchOutcome::NoMatch,
    }
}

/// The numeric requirement a test is held against, for report display:
/// the evaluator-entered target when present, else the table threshold.
pub fn requirement_value(test: &TestRecord) -> Option<f64> {
    match requirement_for(&test.test_name).kind {
        RequirementKind::Weight { light_kg, .. } => {
            Some(test.target_value.filter(|v| *v > 0.0).unwrap_or(light_kg))
        }
        RequirementKind::Degrees { functional_min, .. } => Some(functional_min),
        RequirementKind::Cardio | RequirementKind::General => None,
    }
}

fn numeric_outcome(test: &TestRecord) -> Option<JobMatchOutcome> {
    let left = stats::average(&test.left_measurements);
    let right = stats::average(&test.right_measurements);

    match requirement_for(&test.test_name).kind {
        RequirementKind::Weight { light_kg, .. } => {
            let norm = test.target_value.filter(|v| *v > 0.0).unwrap_or(light_kg);
            let best = left.max(right);
            if best == 0.0 {
                return None;
            }
            Some(verdict(best, norm))
        }
        RequirementKind::Degrees { functional_min, .. } => {
            // Spine-style movements record a single column in the left
            // slot; other joints keep both sides.
            let value = if is_single_column_movement(&test.test_name) {
                if left > 0.0 { left } else { right }
            } else {
                left.max(right)
            };
            if value == 0.0 {
                return None;
            }
            Some(verdict(value, functional_min))
        }
        RequirementKind::Cardio | RequirementKind::General => None,
    }
}

fn is_single_column_movement(test_name: &str) -> bool {
    let name = test_name.to_lowercase();
    ["flexion", "extension", "abduction"]
        .iter()
        .any(|kw| name.contains(kw))
}

fn verdict(value: f64, norm: f64) -> JobMatchOutcome {
    if value >= norm {
        JobMatchOutcome::Match
    } else {
        JobMatchOutcome::NoMatch
    }
}
