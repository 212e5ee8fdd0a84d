use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::loose;

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PaymentRecord {
    pub method: String,
    #[serde(deserialize_with = "loose::number")]
    pub amount: Option<f64>,
    pub paid: bool,
}
