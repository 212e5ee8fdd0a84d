use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One row of the activity-rating questionnaire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ActivityRating {
    pub activity: String,
    pub rating: String,
    pub comments: String,
}
