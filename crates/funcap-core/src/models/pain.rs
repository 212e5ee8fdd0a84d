use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::loose;

/// Claimant-reported pain drawing data captured by the pain-illustration
/// step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PainIllustration {
    pub regions: Vec<PainRegion>,
    pub overlay_image_data: Option<String>,
    pub notes: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PainRegion {
    pub region: String,
    /// 0–10 rating as reported; absent when the region was marked without
    /// an intensity.
    #[serde(deserialize_with = "loose::number")]
    pub intensity: Option<f64>,
    pub quality: String,
}
