use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::loose;

/// One physical-ability test as recorded by the testing step of the
/// wizard. Every field is optional in the stored blob; defaults are
/// tolerated, never fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct TestRecord {
    pub test_id: String,
    pub test_name: String,
    pub category: Option<String>,
    pub left_measurements: TrialMeasurements,
    pub right_measurements: TrialMeasurements,
    pub unit_measure: String,
    #[serde(rename = "valueToBeTestedUnit")]
    pub target_unit: String,
    /// Evaluator-entered numeric job target; preferred over the normative
    /// table when present.
    #[serde(rename = "valueToBeTestedNumber", deserialize_with = "loose::number")]
    pub target_value: Option<f64>,
    pub demonstrated: Option<bool>,
    pub effort: Effort,
    pub job_match: JobMatchFlag,
    pub norm_level: NormLevel,
    pub comments: String,
    pub serialized_images: Vec<String>,
}

/// Up to six named trial readings for one side, plus optional heart rates
/// taken around the test.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct TrialMeasurements {
    #[serde(deserialize_with = "loose::number")]
    pub trial1: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub trial2: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub trial3: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub trial4: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub trial5: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub trial6: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub pre_heart_rate: Option<f64>,
    #[serde(deserialize_with = "loose::number")]
    pub post_heart_rate: Option<f64>,
}

impl TrialMeasurements {
    /// The six trial slots in order.
    pub fn trials(&self) -> [Option<f64>; 6] {
        [
            self.trial1,
            self.trial2,
            self.trial3,
            self.trial4,
            self.trial5,
            self.trial6,
        ]
    }

    pub fn from_trials(values: &[f64]) -> Self {
        let mut m = Self::default();
        let mut slots = [
            &mut m.trial1,
            &mut m.trial2,
            &mut m.trial3,
            &mut m.trial4,
            &mut m.trial5,
            &mut m.trial6,
        ];
        for (slot, value) in slots.iter_mut().zip(values) {
            **slot = Some(*value);
        }
        m
    }
}

/// Evaluator's effort rating for the test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Effort {
    Poor,
    Fair,
    Good,
    #[default]
    Unset,
}

impl<'de> serde::Deserialize<'de> for Effort {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match loose::keyword(deserializer)?.as_deref() {
            Some("poor") => Effort::Poor,
            Some("fair") => Effort::Fair,
            Some("good") => Effort::Good,
            _ => Effort::Unset,
        })
    }
}

/// Explicit evaluator override for the job-match decision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JobMatchFlag {
    Matched,
    NotMatched,
    #[default]
    Unset,
}

impl<'de> serde::Deserialize<'de> for JobMatchFlag {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match loose::keyword(deserializer)?.as_deref() {
            Some("matched") => JobMatchFlag::Matched,
            Some("not_matched") => JobMatchFlag::NotMatched,
            _ => JobMatchFlag::Unset,
        })
    }
}

/// Explicit evaluator judgment of whether the result reaches normative
/// level; second in the job-match priority chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum NormLevel {
    Yes,
    No,
    #[default]
    Unset,
}

impl<'de> serde::Deserialize<'de> for NormLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match loose::keyword(deserializer)?.as_deref() {
            Some("yes") => NormLevel::Yes,
            Some("no") => NormLevel::No,
            _ => NormLevel::Unset,
        })
    }
}
