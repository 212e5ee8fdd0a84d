use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Clinician identity and clinic metadata. Either recorded locally by the
/// wizard or loaded read-only from the hosted profile document; writes
/// belong to the separate profile-editing surface.
///
/// The report header prints `phone` on both the phone and fax lines —
/// that mirrors the shipped product and is not to be corrected here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct EvaluatorProfile {
    pub id: String,
    pub name: String,
    pub license_number: String,
    pub clinic_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_data_url: Option<String>,
    pub signature_data_url: Option<String>,
}
