use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Where the report flow currently stands. Transitions are caller-driven:
/// Loading → Ready | Incomplete, Ready → Generating → Generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportStage {
    Loading,
    Ready,
    Incomplete,
    Generating,
    Generated,
}

/// The "review data generated" marker — the only record this core writes
/// back to the wizard store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReviewMarker {
    pub report_id: Uuid,
    pub generated_at: jiff::Timestamp,
}

impl ReviewMarker {
    pub fn new(generated_at: jiff::Timestamp) -> Self {
        Self {
            report_id: Uuid::new_v4(),
            generated_at,
        }
    }
}
