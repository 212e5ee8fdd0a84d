//! Trial statistics.
//!
//! Pure aggregate functions over a side's trial measurements. All of them
//! treat zero as "no valid data", never as a real measured zero; callers
//! must preserve that reading.

use crate::models::test_record::TrialMeasurements;

/// The ordered list of numeric trial values, trial1 through trial6.
/// Absent and non-finite entries are dropped; order is preserved.
pub fn trial_values(m: &TrialMeasurements) -> Vec<f64> {
    m.trials()
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect()
}

fn positive_values(m: &TrialMeasurements) -> Vec<f64> {
    trial_values(m).into_iter().filter(|v| *v > 0.0).collect()
}

/// Arithmetic mean of the strictly-positive trial values, rounded to two
/// decimal places. Returns 0.0 when no positive values remain.
pub fn average(m: &TrialMeasurements) -> f64 {
    let values = positive_values(m);
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    round2(mean)
}

/// Coefficient of variation over the strictly-positive trial values, as a
/// whole percentage. Uses the population standard deviation (divide by N).
/// Returns 0 when no positive values remain.
pub fn coefficient_of_variation(m: &TrialMeasurements) -> u32 {
    let values = positive_values(m);
    if values.is_empty() {
        return 0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    if mean == 0.0 {
        return 0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    (100.0 * variance.sqrt() / mean).round() as u32
}

/// Relative strength/range difference between sides, as a whole
/// percentage of the stronger side. Returns 0 when either side has no
/// valid data (average of 0). Symmetric in its arguments.
pub fn bilateral_deficiency(left_avg: f64, right_avg: f64) -> u32 {
    if left_avg == 0.0 || right_avg == 0.0 {
        return 0;
    }
    let max = left_avg.max(right_avg);
    let min = left_avg.min(right_avg);
    (100.0 * (max - min) / max).round() as u32
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
