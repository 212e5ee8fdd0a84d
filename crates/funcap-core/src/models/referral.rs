use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A referral question and the evaluator's answer. Some answers are a
/// `STATUS|comments` composite written by the crosscheck step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ReferralQuestion {
    pub question: String,
    pub answer: String,
    pub saved_image_data: Vec<String>,
}

impl ReferralQuestion {
    /// Split a composite answer into its status and comment parts.
    pub fn composite(&self) -> (String, String) {
        split_composite_answer(&self.answer)
    }
}

/// Split a `STATUS|comments` composite on the first `|`. A missing second
/// segment yields an empty comment; a plain answer is all status.
pub fn split_composite_answer(answer: &str) -> (String, String) {
    match answer.split_once('|') {
        Some((status, comment)) => (status.trim().to_string(), comment.trim().to_string()),
        None => (answer.trim().to_string(), String::new()),
    }
}
