use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Captured evaluator signature, stored as a data URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SignatureImage {
    pub data_url: String,
}
