use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::loose;

/// Demographic and referral data for the person being evaluated, sourced
/// from the intake step of the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ClaimantRecord {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub phone: String,
    pub claim_number: String,
    pub employer: String,
    pub occupation: String,
    pub dominant_hand: DominantHand,
    pub referring_physician: String,
    pub diagnosis: String,
    pub date_of_injury: String,
    pub date_of_evaluation: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DominantHand {
    Left,
    Right,
    #[default]
    Unset,
}

impl<'de> serde::Deserialize<'de> for DominantHand {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match loose::keyword(deserializer)?.as_deref() {
            Some("left") => DominantHand::Left,
            Some("right") => DominantHand::Right,
            _ => DominantHand::Unset,
        })
    }
}
