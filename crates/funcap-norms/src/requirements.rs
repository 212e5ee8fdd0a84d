//! Normative job-requirement table.
//!
//! An ordered list of (test-name pattern → requirement descriptor) pairs
//! with first-match-wins semantics. Order is load-bearing: later entries
//! are reachable only when every earlier pattern fails, and downstream
//! report content depends on which entry wins.

use std::sync::LazyLock;

use serde::Serialize;
use ts_rs::TS;

/// What a test-name pattern demands of the claimant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[serde(rename_all = "snake_case", tag = "type")]
#[ts(export)]
pub enum RequirementKind {
    /// Two-tier mass threshold, in kilograms (the unit trials are
    /// recorded in before display conversion).
    Weight { light_kg: f64, medium_kg: f64 },
    /// Angular minimums, in degrees.
    Degrees { functional_min: f64, normal: f64 },
    /// Cardiovascular test; matched for classification, no numeric norm.
    Cardio,
    /// No normative requirement resolvable from the name.
    General,
}

/// One row of the requirement table.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RequirementEntry {
    /// Lowercase substring matched against the test name.
    pub pattern: &'static str,
    /// Requirement description printed in the report.
    pub label: &'static str,
    pub kind: RequirementKind,
}

/// The requirement table, in evaluation order. The final entry has an
/// empty pattern and matches every name.
static REQUIREMENTS: LazyLock<Vec<RequirementEntry>> = LazyLock::new(|| {
    use RequirementKind::*;

    vec![
        // Grip family. Rapid exchange precedes plain grip so it resolves
        // to its own row.
        entry("rapid exchange", "Rapid-exchange grip", Weight { light_kg: 20.0, medium_kg: 30.0 }),
        entry("grip", "Hand grip strength", Weight { light_kg: 20.0, medium_kg: 30.0 }),
        entry("key pinch", "Key pinch strength", Weight { light_kg: 5.0, medium_kg: 7.0 }),
        entry("tip pinch", "Tip pinch strength", Weight { light_kg: 3.5, medium_kg: 5.0 }),
        entry("palmar pinch", "Palmar pinch strength", Weight { light_kg: 4.5, medium_kg: 6.5 }),
        entry("pinch", "Pinch strength", Weight { light_kg: 4.0, medium_kg: 6.0 }),
        // Lifts and material handling, Dictionary of Occupational Titles
        // light/medium tiers (20 lb / 50 lb).
        entry("floor to knuckle", "Floor-to-knuckle lift", Weight { light_kg: 9.1, medium_kg: 22.7 }),
        entry("knuckle to shoulder", "Knuckle-to-shoulder lift", Weight { light_kg: 9.1, medium_kg: 22.7 }),
        entry("shoulder to overhead", "Shoulder-to-overhead lift", Weight { light_kg: 9.1, medium_kg: 22.7 }),
        entry("carry", "Two-handed carry", Weight { light_kg: 9.1, medium_kg: 22.7 }),
        entry("push", "Push force", Weight { light_kg: 11.3, medium_kg: 27.2 }),
        entry("pull", "Pull force", Weight { light_kg: 11.3, medium_kg: 27.2 }),
        entry("lift", "Dynamic lift", Weight { light_kg: 9.1, medium_kg: 22.7 }),
        // Range of motion: functional minimum / population normal, degrees.
        entry("lumbar flexion", "Lumbar flexion", Degrees { functional_min: 40.0, normal: 60.0 }),
        entry("lumbar extension", "Lumbar extension", Degrees { functional_min: 15.0, normal: 25.0 }),
        entry("cervical flexion", "Cervical flexion", Degrees { functional_min: 35.0, normal: 50.0 }),
        entry("cervical extension", "Cervical extension", Degrees { functional_min: 45.0, normal: 60.0 }),
        entry("cervical rotation", "Cervical rotation", Degrees { functional_min: 60.0, normal: 80.0 }),
        entry("shoulder flexion", "Shoulder flexion", Degrees { functional_min: 120.0, normal: 180.0 }),
        entry("shoulder abduction", "Shoulder abduction", Degrees { functional_min: 120.0, normal: 180.0 }),
        entry("shoulder extension", "Shoulder extension", Degrees { functional_min: 40.0, normal: 60.0 }),
        entry("elbow flexion", "Elbow flexion", Degrees { functional_min: 130.0, normal: 150.0 }),
        entry("wrist flexion", "Wrist flexion", Degrees { functional_min: 40.0, normal: 60.0 }),
        entry("wrist extension", "Wrist extension", Degrees { functional_min: 40.0, normal: 60.0 }),
        entry("hip flexion", "Hip flexion", Degrees { functional_min: 90.0, normal: 120.0 }),
        entry("knee flexion", "Knee flexion", Degrees { functional_min: 110.0, normal: 135.0 }),
        entry("ankle dorsiflexion", "Ankle dorsiflexion", Degrees { functional_min: 10.0, normal: 20.0 }),
        entry("straight leg raise", "Straight leg raise", Degrees { functional_min: 60.0, normal: 80.0 }),
        // Cardio battery.
        entry("treadmill", "Treadmill protocol", Cardio),
        entry("bruce", "Treadmill protocol", Cardio),
        entry("step test", "Step test", Cardio),
        // Catch-all; must stay last.
        entry("", "General functional test", General),
    ]
});

fn entry(pattern: &'static str, label: &'static str, kind: RequirementKind) -> RequirementEntry {
    RequirementEntry {
        pattern,
        label,
        kind,
    }
}

/// Resolve the requirement row for a test name. First match wins.
///
/// # Panics
///
/// Panics if the table loses its trailing catch-all entry; that entry
/// matches every name, so a panic indicates a table definition bug.
pub fn requirement_for(test_name: &str) -> &'static RequirementEntry {
    let name = test_name.to_lowercase();
    REQUIREMENTS
        .iter()
        .find(|e| name.contains(e.pattern))
        .expect("requirement table ends with a catch-all entry")
}
