use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::loose;

/// Methods-Time-Measurement result for one occupational task type: an
/// ordered sequence of trial entries plus an optional heart-rate summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MtmTestResult {
    pub task_type: String,
    pub trials: Vec<MtmTrial>,
    pub heart_rate: Option<HeartRateSummary>,
}

/// One timed occupational-task trial.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MtmTrial {
    #[serde(deserialize_with = "loose::count")]
    pub reps: u32,
    /// Trial time in seconds. Legacy wizard builds stored this as an
    /// object with a `value` field; both shapes are accepted.
    #[serde(rename = "time", deserialize_with = "loose::seconds")]
    pub time_seconds: f64,
    /// Percent of Industrial Standard for this trial, when recorded.
    #[serde(rename = "percentIS", deserialize_with = "loose::number")]
    pub percent_is: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct HeartRateSummary {
    #[serde(deserialize_with = "loose::number")]
    pub pre: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub post: Option<f64>,
}

impl MtmTestResult {
    /// Mean Percent of Industrial Standard over the trials that recorded
    /// one. Returns `None` when no trial did.
    pub fn average_percent_is(&self) -> Option<f64> {
        let values: Vec<f64> = self.trials.iter().filter_map(|t| t.percent_is).collect();
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }

    /// Total recorded trial time in seconds.
    pub fn total_time_seconds(&self) -> f64 {
        self.trials.iter().map(|t| t.time_seconds).sum()
    }
}
