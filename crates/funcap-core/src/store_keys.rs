//! Wizard store key conventions.
//!
//! Pure string constants — no storage dependency. These define the
//! canonical keys under which each wizard step persists its record, and
//! the document path used by the hosted evaluator-profile store.

pub const EVALUATOR_DATA: &str = "evaluator_data";
pub const CLAIMANT_DATA: &str = "claimant_data";
pub const PAIN_ILLUSTRATION_DATA: &str = "pain_illustration_data";
pub const ACTIVITY_RATING_DATA: &str = "activity_rating_data";
pub const REFERRAL_QUESTIONS_DATA: &str = "referral_questions_data";
pub const PROTOCOL_TESTS_DATA: &str = "protocol_tests_data";
pub const OCCUPATIONAL_TASKS_DATA: &str = "occupational_tasks_data";
pub const TEST_DATA: &str = "test_data";
pub const MTM_TEST_DATA: &str = "mtm_test_data";
pub const CARDIO_TEST_DATA: &str = "cardio_test_data";
pub const DIGITAL_LIBRARY_DATA: &str = "digital_library_data";
pub const PAYMENT_DATA: &str = "payment_data";
pub const SIGNATURE_IMAGE: &str = "signature_image";
pub const COMPLETED_STEPS: &str = "completed_steps";
pub const REVIEW_REPORT_GENERATED: &str = "review_report_generated";

/// Document path for an evaluator profile in the hosted store.
pub fn profile_document(profile_id: &str) -> String {
    format!("profiles/{profile_id}.json")
}
