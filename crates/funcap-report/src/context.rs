//! The template-addressable report document.
//!
//! Every field is reachable by name from the Tera template, pre-formatted
//! for display: numeric cells are already converted, rounded, and
//! em-dashed where no valid data exists.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportContext {
    pub report_id: String,
    pub generated_at: String,
    pub evaluator: EvaluatorSection,
    pub claimant: ClaimantSection,
    pub referral_questions: Vec<ReferralRow>,
    pub pain: PainSection,
    pub activity_ratings: Vec<ActivityRow>,
    /// Test battery selected in the protocol step, as planned.
    pub protocol: Vec<String>,
    /// Occupational tasks selected for MTM testing, as planned.
    pub occupational_tasks: Vec<String>,
    /// The five fixed categories, in report order; a category with no
    /// tests renders nothing.
    pub categories: Vec<CategorySection>,
    pub mtm_tables: Vec<MtmSection>,
    pub crosschecks: Vec<CrosscheckRow>,
    pub position_totals: PositionTotals,
    pub conclusions: Conclusions,
    pub library: Vec<LibraryRow>,
    pub signature_data_url: Option<String>,
    pub payment: Option<PaymentRow>,
    pub appendices: Vec<Appendix>,
}

/// Report header block. `phone` feeds both the phone and fax lines of
/// the cover page, mirroring the shipped product.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatorSection {
    pub name: String,
    pub license_number: String,
    pub clinic_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub logo_data_url: Option<String>,
    pub signature_data_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClaimantSection {
    pub name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub address: String,
    pub phone: String,
    pub claim_number: String,
    pub employer: String,
    pub occupation: String,
    pub dominant_hand: String,
    pub referring_physician: String,
    pub diagnosis: String,
    pub date_of_injury: String,
    pub date_of_evaluation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PainSection {
    pub regions: Vec<PainRegionRow>,
    pub notes: String,
    pub has_overlay: bool,
    pub overlay_image_data: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PainRegionRow {
    pub region: String,
    pub intensity: String,
    pub quality: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityRow {
    pub activity: String,
    pub rating: String,
    pub comments: String,
}

/// A referral question with its composite answer already split.
#[derive(Debug, Clone, Serialize)]
pub struct ReferralRow {
    pub question: String,
    pub answer: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySection {
    pub title: String,
    pub tests: Vec<TestRow>,
}

/// One test's display row. `layout` selects the table shape in the
/// template.
#[derive(Debug, Clone, Serialize)]
pub struct TestRow {
    pub test_name: String,
    pub layout: String,
    pub unit_label: String,
    pub left_trials: Vec<String>,
    pub right_trials: Vec<String>,
    pub left_average: String,
    pub right_average: String,
    pub left_cv: String,
    pub right_cv: String,
    pub bilateral_deficiency: String,
    pub requirement: String,
    pub requirement_label: String,
    pub job_match: bool,
    pub effort: String,
    pub demonstrated: String,
    pub comments: String,
    pub pre_heart_rate: String,
    pub post_heart_rate: String,
    pub vo2_max: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MtmSection {
    pub task_type: String,
    pub position: String,
    pub rows: Vec<MtmRow>,
    pub total_time: String,
    pub average_percent_is: String,
    pub heart_rate_pre: String,
    pub heart_rate_post: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MtmRow {
    pub trial: usize,
    pub reps: u32,
    pub time: String,
    pub percent_is: String,
}

/// Crosscheck table row. A checkmark lands in the pass or the fail
/// column, never both; a not-applicable check shows "N/A".
#[derive(Debug, Clone, Serialize)]
pub struct CrosscheckRow {
    pub name: String,
    pub pass_mark: String,
    pub fail_mark: String,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionTotals {
    pub sit_minutes: f64,
    pub stand_minutes: f64,
    pub sit_display: String,
    pub stand_display: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Conclusions {
    pub tests_evaluated: usize,
    pub job_matches: usize,
    pub crosschecks_passed: usize,
    pub crosschecks_failed: usize,
    pub crosschecks_not_applicable: usize,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LibraryRow {
    pub id: String,
    pub name: String,
    pub category: String,
    pub has_image: bool,
    pub data_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentRow {
    pub method: String,
    pub amount: String,
    pub paid: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Appendix {
    pub title: String,
    pub body: String,
}
