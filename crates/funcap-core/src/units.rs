//! Unit and measurement normalization.
//!
//! Decides how a test's raw trial numbers are displayed: range-of-motion
//! tests always read in degrees regardless of the recorded unit; weight
//! tests convert kilogram-family inputs to pounds when the target unit
//! asks for them.

/// Kilograms to pounds.
pub const KG_TO_LB: f64 = 2.20462;

/// Test-name fragments that mark a range-of-motion test. Checked in order;
/// containment is case-insensitive.
const ROM_KEYWORDS: &[&str] = &[
    "flexion",
    "extension",
    "rotation",
    "abduction",
    "adduction",
    "deviation",
    "supination",
    "pronation",
    "inversion",
    "eversion",
    "dorsiflexion",
    "plantarflexion",
    "straight leg raise",
    "straight-leg raise",
    "slr",
];

const KG_TOKENS: &[&str] = &["kg", "kgs", "kilogram", "kilograms"];
const LB_TOKENS: &[&str] = &["lb", "lbs", "pound", "pounds"];

/// How a test's values should be presented.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    /// Multiply raw values by [`KG_TO_LB`] before display.
    pub convert_to_pounds: bool,
    /// Unit label printed next to the values.
    pub label: String,
}

/// Whether the test name denotes an angular range-of-motion measurement.
pub fn is_range_of_motion(test_name: &str) -> bool {
    let name = test_name.to_lowercase();
    ROM_KEYWORDS.iter().any(|kw| name.contains(kw))
}

/// Whether a unit string carries any of the given unit tokens.
///
/// Matches whole alphabetic tokens, so "kg" matches "kg" and "Kg/force"
/// but not "pkg".
fn has_token(unit: &str, tokens: &[&str]) -> bool {
    unit.to_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .any(|word| tokens.contains(&word))
}

/// Resolve the display unit for a test.
///
/// Range-of-motion names force degrees and skip mass conversion entirely,
/// even when the recorded unit is a weight. Otherwise kilogram-family and
/// pound-family tokens are detected in the source and target unit fields;
/// a kilogram source with a pound target converts for display.
pub fn resolve_display(test_name: &str, unit_measure: &str, target_unit: &str) -> DisplayUnit {
    if is_range_of_motion(test_name) {
        return DisplayUnit {
            convert_to_pounds: false,
            label: "degrees".to_string(),
        };
    }

    let kg_source = has_token(unit_measure, KG_TOKENS);
    let lb_target = has_token(target_unit, LB_TOKENS);
    let lb_source = has_token(unit_measure, LB_TOKENS);

    let convert = kg_source && lb_target;
    let label = if convert || lb_source || lb_target {
        "lbs".to_string()
    } else if kg_source {
        "kg".to_string()
    } else if !target_unit.trim().is_empty() {
        target_unit.trim().to_string()
    } else {
        unit_measure.trim().to_string()
    };

    DisplayUnit {
        convert_to_pounds: convert,
        label,
    }
}

/// Convert a raw value for display, rounding to one decimal place.
pub fn convert(value: f64, display: &DisplayUnit) -> f64 {
    let v = if display.convert_to_pounds {
        value * KG_TO_LB
    } else {
        value
    };
    round1(v)
}

/// Render a value for the report: integers without decimals, everything
/// else with exactly one decimal, absent values as an em dash.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        None => "—".to_string(),
        Some(v) => {
            let rounded = round1(v);
            if rounded.fract() == 0.0 {
                format!("{}", rounded as i64)
            } else {
                format!("{rounded:.1}")
            }
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
