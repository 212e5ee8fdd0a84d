//! Test classification tables.
//!
//! Each classifier is an explicit ordered list of (keywords → result)
//! rules with first-match-wins semantics. Order is load-bearing: later
//! rules are reachable only when every earlier rule fails, and section
//! placement in the rendered report depends on which rule wins.

use funcap_core::units;
use serde::Serialize;

/// Which result-table shape a test renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultLayout {
    RangeOfMotion,
    Lift,
    Cardio,
    GenericStrength,
}

/// The five fixed report categories. Every test lands in exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportCategory {
    Strength,
    RomTotalSpineExtremity,
    RomHandFoot,
    OccupationalTasks,
    Cardio,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 5] = [
        ReportCategory::Strength,
        ReportCategory::RomTotalSpineExtremity,
        ReportCategory::RomHandFoot,
        ReportCategory::OccupationalTasks,
        ReportCategory::Cardio,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ReportCategory::Strength => "Strength Tests",
            ReportCategory::RomTotalSpineExtremity => "Range of Motion — Total Spine & Extremity",
            ReportCategory::RomHandFoot => "Range of Motion — Hand & Foot",
            ReportCategory::OccupationalTasks => "Occupational Tasks",
            ReportCategory::Cardio => "Cardio Tests",
        }
    }
}

/// Body position a task is performed in, for sit/stand time totals.
/// Independent of the report category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPosition {
    Sitting,
    Standing,
    Neither,
}

struct Rule<T> {
    keywords: &'static [&'static str],
    result: T,
}

fn first_match<T: Copy>(name: &str, rules: &[Rule<T>]) -> Option<T> {
    let name = name.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| name.contains(kw)))
        .map(|rule| rule.result)
}

const LAYOUT_RULES: &[Rule<ResultLayout>] = &[
    Rule {
        keywords: &["treadmill", "bruce", "step test", "ergometer", "bike"],
        result: ResultLayout::Cardio,
    },
    Rule {
        keywords: &["lift", "carry", "push", "pull"],
        result: ResultLayout::Lift,
    },
];

/// Result-table layout for a test. Range of motion wins over everything:
/// a "lumbar flexion" test reads in degrees even when its recorded unit
/// is a weight.
pub fn result_layout(test_name: &str) -> ResultLayout {
    if units::is_range_of_motion(test_name) {
        return ResultLayout::RangeOfMotion;
    }
    first_match(test_name, LAYOUT_RULES).unwrap_or(ResultLayout::GenericStrength)
}

/// Exact test names whose category is fixed regardless of keywords.
/// Checked before the keyword rules, case-insensitively.
const CATEGORY_EXACT: &[(&str, ReportCategory)] = &[
    ("hand grip", ReportCategory::Strength),
    ("rapid exchange grip", ReportCategory::Strength),
    ("straight leg raise", ReportCategory::RomTotalSpineExtremity),
    ("treadmill test", ReportCategory::Cardio),
    ("step test", ReportCategory::Cardio),
];

const CATEGORY_RULES: &[Rule<ReportCategory>] = &[
    Rule {
        keywords: &["treadmill", "bruce", "ergometer", "bike"],
        result: ReportCategory::Cardio,
    },
    Rule {
        keywords: &[
            "fingering",
            "handling",
            "kneel",
            "crouch",
            "crawl",
            "climb",
            "balance",
            "stoop",
            "reach",
            "walk",
        ],
        result: ReportCategory::OccupationalTasks,
    },
];

const HAND_FOOT_KEYWORDS: &[&str] = &["finger", "thumb", "wrist", "hand", "toe", "ankle", "foot"];

/// Category for a test: exact-name matches first, then the keyword rules,
/// then range-of-motion placement, then Strength.
pub fn report_category(test_name: &str) -> ReportCategory {
    let name = test_name.trim().to_lowercase();
    if let Some((_, category)) = CATEGORY_EXACT.iter().find(|(exact, _)| name == *exact) {
        return *category;
    }
    if let Some(category) = first_match(test_name, CATEGORY_RULES) {
        return category;
    }
    if units::is_range_of_motion(test_name) {
        if HAND_FOOT_KEYWORDS.iter().any(|kw| name.contains(kw)) {
            return ReportCategory::RomHandFoot;
        }
        return ReportCategory::RomTotalSpineExtremity;
    }
    ReportCategory::Strength
}

const POSITION_RULES: &[Rule<BodyPosition>] = &[
    Rule {
        keywords: &["sit", "seated", "fingering", "handling", "typing", "keyboard"],
        result: BodyPosition::Sitting,
    },
    Rule {
        keywords: &[
            "stand", "walk", "lift", "carry", "push", "pull", "climb", "reach", "stoop",
            "crouch", "kneel", "balance",
        ],
        result: BodyPosition::Standing,
    },
];

/// Body position for an occupational task, used to accumulate sit/stand
/// tolerance totals.
pub fn body_position(task_name: &str) -> BodyPosition {
    first_match(task_name, POSITION_RULES).unwrap_or(BodyPosition::Neither)
}
