//! Report assembly.
//!
//! The engine is injected with the wizard store and attachment store (and
//! optionally a hosted profile source); it never reaches for ambient
//! state. `load` gathers and merges every wizard record; `generate`
//! computes the full report context, writes the review-generated marker,
//! and emits the audit event.

use funcap_audit::AuditEvent;
use funcap_core::models::activity::ActivityRating;
use funcap_core::models::claimant::{ClaimantRecord, DominantHand};
use funcap_core::models::evaluator::EvaluatorProfile;
use funcap_core::models::library::{DigitalLibraryItem, DigitalLibraryMeta, StorageMode};
use funcap_core::models::mtm::MtmTestResult;
use funcap_core::models::pain::PainIllustration;
use funcap_core::models::payment::PaymentRecord;
use funcap_core::models::referral::ReferralQuestion;
use funcap_core::models::report::{ReportStage, ReviewMarker};
use funcap_core::models::signature::SignatureImage;
use funcap_core::models::test_record::{Effort, TestRecord};
use funcap_core::{stats, store_keys, units};
use funcap_norms::{
    evaluate_job_match, requirement_for, requirement_value, run_crosschecks, CrosscheckVerdict,
    JobMatchOutcome,
};
use funcap_store::profile::ProfileSource;
use funcap_store::{load, save, AttachmentStore, StorageError, WizardStore};
use tracing::{info, warn};

use crate::cardio::{self, CardioProtocol};
use crate::classify::{self, BodyPosition, ReportCategory, ResultLayout};
use crate::context::{
    ActivityRow, Appendix, CategorySection, ClaimantSection, Conclusions, CrosscheckRow,
    EvaluatorSection, LibraryRow, MtmRow, MtmSection, PainRegionRow, PainSection, PaymentRow,
    PositionTotals, ReferralRow, ReportContext, TestRow,
};
use crate::error::ReportError;

/// Everything the report needs, loaded and merged from the stores.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub evaluator: EvaluatorProfile,
    pub claimant: ClaimantRecord,
    pub pain: PainIllustration,
    pub activity: Vec<ActivityRating>,
    pub referral: Vec<ReferralQuestion>,
    pub protocol: Vec<String>,
    pub tests: Vec<TestRecord>,
    pub occupational_tasks: Vec<String>,
    pub mtm: Vec<MtmTestResult>,
    pub library: Vec<DigitalLibraryItem>,
    pub signature: Option<SignatureImage>,
    pub payment: Option<PaymentRecord>,
    pub completed_steps: Vec<String>,
}

/// Outcome of the load phase. Incomplete is a blocking state: the caller
/// offers navigation back to the wizard, never a partial render. The
/// completed-steps list says how far the wizard got.
#[derive(Debug)]
pub enum Loaded {
    Ready(Box<Bundle>),
    Incomplete {
        missing: Vec<&'static str>,
        completed_steps: Vec<String>,
    },
}

/// A generated report: the rendered-ready context plus the marker that
/// was written back.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub stage: ReportStage,
    pub marker: ReviewMarker,
    pub context: ReportContext,
}

/// Profile source that never finds anything; used when no hosted store
/// is wired in.
struct NoProfile;

impl ProfileSource for NoProfile {
    async fn fetch(&self, _profile_id: &str) -> Result<Option<EvaluatorProfile>, StorageError> {
        Ok(None)
    }
}

pub struct ReportEngine<'a, W, A> {
    wizard: &'a W,
    attachments: &'a A,
}

impl<'a, W: WizardStore, A: AttachmentStore> ReportEngine<'a, W, A> {
    pub fn new(wizard: &'a W, attachments: &'a A) -> Self {
        Self {
            wizard,
            attachments,
        }
    }

    /// Load with no hosted profile fallback.
    pub async fn load(&self) -> Result<Loaded, ReportError> {
        self.load_inner(Option::<(&NoProfile, &str)>::None).await
    }

    /// Load, falling back to the hosted profile document when no local
    /// evaluator record exists.
    pub async fn load_with_profile<P: ProfileSource>(
        &self,
        source: &P,
        profile_id: &str,
    ) -> Result<Loaded, ReportError> {
        self.load_inner(Some((source, profile_id))).await
    }

    async fn load_inner<P: ProfileSource>(
        &self,
        hosted: Option<(&P, &str)>,
    ) -> Result<Loaded, ReportError> {
        let mut evaluator: Option<EvaluatorProfile> =
            load(self.wizard, store_keys::EVALUATOR_DATA)?;
        if evaluator.is_none()
            && let Some((source, profile_id)) = hosted
        {
            evaluator = match source.fetch(profile_id).await {
                Ok(profile) => profile,
                Err(e) => {
                    warn!(error = %e, "hosted profile fetch failed; continuing without");
                    None
                }
            };
        }
        let claimant: Option<ClaimantRecord> = load(self.wizard, store_keys::CLAIMANT_DATA)?;

        let completed_steps: Vec<String> =
            load(self.wizard, store_keys::COMPLETED_STEPS)?.unwrap_or_default();

        let mut missing = Vec::new();
        if evaluator.is_none() {
            missing.push(store_keys::EVALUATOR_DATA);
        }
        if claimant.is_none() {
            missing.push(store_keys::CLAIMANT_DATA);
        }
        if !missing.is_empty() {
            info!(?missing, "wizard data incomplete; blocking report");
            return Ok(Loaded::Incomplete {
                missing,
                completed_steps,
            });
        }

        let mut tests: Vec<TestRecord> =
            load(self.wizard, store_keys::TEST_DATA)?.unwrap_or_default();
        let cardio_tests: Option<Vec<TestRecord>> =
            load(self.wizard, store_keys::CARDIO_TEST_DATA)?;
        tests.extend(cardio_tests.unwrap_or_default());

        let bundle = Bundle {
            evaluator: evaluator.unwrap_or_default(),
            claimant: claimant.unwrap_or_default(),
            pain: load(self.wizard, store_keys::PAIN_ILLUSTRATION_DATA)?.unwrap_or_default(),
            activity: load(self.wizard, store_keys::ACTIVITY_RATING_DATA)?.unwrap_or_default(),
            referral: load(self.wizard, store_keys::REFERRAL_QUESTIONS_DATA)?.unwrap_or_default(),
            protocol: load(self.wizard, store_keys::PROTOCOL_TESTS_DATA)?.unwrap_or_default(),
            tests,
            occupational_tasks: load(self.wizard, store_keys::OCCUPATIONAL_TASKS_DATA)?
                .unwrap_or_default(),
            mtm: load(self.wizard, store_keys::MTM_TEST_DATA)?.unwrap_or_default(),
            library: self.load_library()?,
            signature: load(self.wizard, store_keys::SIGNATURE_IMAGE)?,
            payment: load(self.wizard, store_keys::PAYMENT_DATA)?,
            completed_steps,
        };
        Ok(Loaded::Ready(Box::new(bundle)))
    }

    /// Digital-library records, with attachment-store entries preferred
    /// over the legacy embedded data URLs, merged by id. A failing or
    /// empty scan leaves the metadata untouched.
    fn load_library(&self) -> Result<Vec<DigitalLibraryItem>, ReportError> {
        let meta: DigitalLibraryMeta =
            load(self.wizard, store_keys::DIGITAL_LIBRARY_DATA)?.unwrap_or_default();
        if meta.storage_mode != StorageMode::ObjectStore {
            return Ok(meta.items);
        }

        let stored = match self.attachments.get_all() {
            Ok(stored) => stored,
            Err(e) => {
                warn!(error = %e, "attachment store scan failed; using metadata only");
                return Ok(meta.items);
            }
        };

        Ok(meta
            .items
            .into_iter()
            .map(|mut item| {
                if let Some(hit) = stored.iter().find(|s| s.id == item.id)
                    && hit.data_url.is_some()
                {
                    item.data_url = hit.data_url.clone();
                }
                item
            })
            .collect())
    }

    /// Produce the report context, write the review-generated marker, and
    /// emit the audit event. Single-shot: no retries, not re-entrant
    /// against concurrent wizard writes.
    pub fn generate(&self, bundle: &Bundle) -> Result<GeneratedReport, ReportError> {
        let generated_at = jiff::Timestamp::now();
        let marker = ReviewMarker::new(generated_at);
        let context = build_context(bundle, &marker);

        save(self.wizard, store_keys::REVIEW_REPORT_GENERATED, &marker)?;
        AuditEvent::new("report.generate", "report", marker.report_id.to_string())
            .with_details(serde_json::json!({
                "claim_number": bundle.claimant.claim_number,
                "tests": bundle.tests.len(),
            }))
            .emit();

        Ok(GeneratedReport {
            stage: ReportStage::Generated,
            marker,
            context,
        })
    }
}

// ---------------------------------------------------------------------------
// Context construction
// ---------------------------------------------------------------------------

fn build_context(bundle: &Bundle, marker: &ReviewMarker) -> ReportContext {
    let test_rows: Vec<(ReportCategory, TestRow)> = bundle
        .tests
        .iter()
        .map(|t| (classify::report_category(&t.test_name), test_row(t, bundle)))
        .collect();

    let categories = ReportCategory::ALL
        .iter()
        .map(|category| CategorySection {
            title: category.title().to_string(),
            tests: test_rows
                .iter()
                .filter(|(c, _)| c == category)
                .map(|(_, row)| row.clone())
                .collect(),
        })
        .collect();

    let crosschecks = run_crosschecks(&bundle.tests, &bundle.referral, bundle.claimant.dominant_hand);
    let crosscheck_rows: Vec<CrosscheckRow> = crosschecks
        .iter()
        .map(|c| {
            let (pass_mark, fail_mark) = match c.verdict {
                CrosscheckVerdict::Pass => ("\u{2713}", ""),
                CrosscheckVerdict::Fail => ("", "\u{2713}"),
                CrosscheckVerdict::NotApplicable => ("N/A", ""),
            };
            CrosscheckRow {
                name: c.name.to_string(),
                pass_mark: pass_mark.to_string(),
                fail_mark: fail_mark.to_string(),
                comment: c.comment.clone(),
            }
        })
        .collect();

    let job_matches = bundle
        .tests
        .iter()
        .filter(|t| evaluate_job_match(t) == JobMatchOutcome::Match)
        .count();
    let passed = crosschecks
        .iter()
        .filter(|c| c.verdict == CrosscheckVerdict::Pass)
        .count();
    let failed = crosschecks
        .iter()
        .filter(|c| c.verdict == CrosscheckVerdict::Fail)
        .count();
    let not_applicable = crosschecks.len() - passed - failed;

    let conclusions = Conclusions {
        tests_evaluated: bundle.tests.len(),
        job_matches,
        crosschecks_passed: passed,
        crosschecks_failed: failed,
        crosschecks_not_applicable: not_applicable,
        summary: format!(
            "{job_matches} of {} tests met the inferred job requirement. \
             {passed} of {} applicable consistency checks passed, indicating \
             {} effort across the evaluation.",
            bundle.tests.len(),
            passed + failed,
            if failed == 0 { "consistent" } else { "inconsistent" },
        ),
    };

    ReportContext {
        report_id: marker.report_id.to_string(),
        generated_at: marker
            .generated_at
            .strftime("%Y-%m-%d %H:%M UTC")
            .to_string(),
        evaluator: evaluator_section(&bundle.evaluator),
        claimant: claimant_section(&bundle.claimant),
        referral_questions: bundle.referral.iter().map(referral_row).collect(),
        protocol: bundle.protocol.clone(),
        occupational_tasks: bundle.occupational_tasks.clone(),
        pain: pain_section(&bundle.pain),
        activity_ratings: bundle
            .activity
            .iter()
            .map(|a| ActivityRow {
                activity: a.activity.clone(),
                rating: a.rating.clone(),
                comments: a.comments.clone(),
            })
            .collect(),
        categories,
        mtm_tables: bundle.mtm.iter().map(mtm_section).collect(),
        crosschecks: crosscheck_rows,
        position_totals: position_totals(&bundle.mtm),
        conclusions,
        library: bundle
            .library
            .iter()
            .map(|item| LibraryRow {
                id: item.id.clone(),
                name: item.name.clone(),
                category: item.category.clone(),
                has_image: item.data_url.is_some(),
                data_url: item.data_url.clone(),
            })
            .collect(),
        signature_data_url: bundle.signature.as_ref().map(|s| s.data_url.clone()),
        payment: bundle.payment.as_ref().map(|p| PaymentRow {
            method: p.method.clone(),
            amount: units::format_value(p.amount),
            paid: p.paid,
        }),
        appendices: standard_appendices(),
    }
}

fn evaluator_section(e: &EvaluatorProfile) -> EvaluatorSection {
    EvaluatorSection {
        name: e.name.clone(),
        license_number: e.license_number.clone(),
        clinic_name: e.clinic_name.clone(),
        address: e.address.clone(),
        phone: e.phone.clone(),
        email: e.email.clone(),
        logo_data_url: e.logo_data_url.clone(),
        signature_data_url: e.signature_data_url.clone(),
    }
}

fn claimant_section(c: &ClaimantRecord) -> ClaimantSection {
    ClaimantSection {
        name: c.name.clone(),
        date_of_birth: c.date_of_birth.clone(),
        gender: c.gender.clone(),
        address: c.address.clone(),
        phone: c.phone.clone(),
        claim_number: c.claim_number.clone(),
        employer: c.employer.clone(),
        occupation: c.occupation.clone(),
        dominant_hand: match c.dominant_hand {
            DominantHand::Left => "Left".to_string(),
            DominantHand::Right => "Right".to_string(),
            DominantHand::Unset => "—".to_string(),
        },
        referring_physician: c.referring_physician.clone(),
        diagnosis: c.diagnosis.clone(),
        date_of_injury: c.date_of_injury.clone(),
        date_of_evaluation: c.date_of_evaluation.clone(),
    }
}

fn pain_section(p: &PainIllustration) -> PainSection {
    PainSection {
        regions: p
            .regions
            .iter()
            .map(|r| PainRegionRow {
                region: r.region.clone(),
                intensity: units::format_value(r.intensity),
                quality: r.quality.clone(),
            })
            .collect(),
        notes: p.notes.clone(),
        has_overlay: p.overlay_image_data.is_some(),
        overlay_image_data: p.overlay_image_data.clone(),
    }
}

fn referral_row(q: &ReferralQuestion) -> ReferralRow {
    if q.answer.contains('|') {
        let (status, comment) = q.composite();
        ReferralRow {
            question: q.question.clone(),
            answer: status,
            comment,
        }
    } else {
        ReferralRow {
            question: q.question.clone(),
            answer: q.answer.trim().to_string(),
            comment: String::new(),
        }
    }
}

fn test_row(test: &TestRecord, bundle: &Bundle) -> TestRow {
    let display = units::resolve_display(&test.test_name, &test.unit_measure, &test.target_unit);
    let layout = classify::result_layout(&test.test_name);

    let left_avg = stats::average(&test.left_measurements);
    let right_avg = stats::average(&test.right_measurements);

    let format_side_avg = |avg: f64| {
        if avg == 0.0 {
            units::format_value(None)
        } else {
            units::format_value(Some(units::convert(avg, &display)))
        }
    };
    let format_cv = |avg: f64, cv: u32| {
        if avg == 0.0 {
            "—".to_string()
        } else {
            format!("{cv}%")
        }
    };

    let bilateral = if left_avg == 0.0 || right_avg == 0.0 {
        "—".to_string()
    } else {
        format!("{}%", stats::bilateral_deficiency(left_avg, right_avg))
    };

    let requirement = match requirement_value(test) {
        Some(value) => format!(
            "{} {}",
            units::format_value(Some(units::convert(value, &display))),
            display.label
        ),
        None => "—".to_string(),
    };

    let pre_hr = test
        .left_measurements
        .pre_heart_rate
        .or(test.right_measurements.pre_heart_rate);
    let post_hr = test
        .left_measurements
        .post_heart_rate
        .or(test.right_measurements.post_heart_rate);

    TestRow {
        test_name: test.test_name.clone(),
        layout: layout_tag(layout).to_string(),
        unit_label: display.label.clone(),
        left_trials: trial_cells(&test.left_measurements.trials(), &display),
        right_trials: trial_cells(&test.right_measurements.trials(), &display),
        left_average: format_side_avg(left_avg),
        right_average: format_side_avg(right_avg),
        left_cv: format_cv(
            left_avg,
            stats::coefficient_of_variation(&test.left_measurements),
        ),
        right_cv: format_cv(
            right_avg,
            stats::coefficient_of_variation(&test.right_measurements),
        ),
        bilateral_deficiency: bilateral,
        requirement,
        requirement_label: requirement_for(&test.test_name).label.to_string(),
        job_match: evaluate_job_match(test) == JobMatchOutcome::Match,
        effort: effort_label(test.effort).to_string(),
        demonstrated: match test.demonstrated {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => "—".to_string(),
        },
        comments: test.comments.clone(),
        pre_heart_rate: units::format_value(pre_hr),
        post_heart_rate: units::format_value(post_hr),
        vo2_max: vo2_display(test, bundle, post_hr),
    }
}

fn trial_cells(trials: &[Option<f64>; 6], display: &units::DisplayUnit) -> Vec<String> {
    trials
        .iter()
        .map(|t| units::format_value(t.map(|v| units::convert(v, display))))
        .collect()
}

fn layout_tag(layout: ResultLayout) -> &'static str {
    match layout {
        ResultLayout::RangeOfMotion => "range_of_motion",
        ResultLayout::Lift => "lift",
        ResultLayout::Cardio => "cardio",
        ResultLayout::GenericStrength => "generic_strength",
    }
}

fn effort_label(effort: Effort) -> &'static str {
    match effort {
        Effort::Poor => "Poor",
        Effort::Fair => "Fair",
        Effort::Good => "Good",
        Effort::Unset => "—",
    }
}

/// VO2 max for cardio layouts: treadmill protocols derive from the
/// longest recorded time, the step test from the recovery heart rate.
fn vo2_display(test: &TestRecord, bundle: &Bundle, post_hr: Option<f64>) -> String {
    let Some(protocol) = cardio::cardio_protocol(&test.test_name) else {
        return "—".to_string();
    };
    let vo2 = match protocol {
        CardioProtocol::Treadmill => {
            let minutes = stats::trial_values(&test.left_measurements)
                .into_iter()
                .chain(stats::trial_values(&test.right_measurements))
                .fold(0.0_f64, f64::max);
            if minutes <= 0.0 {
                return "—".to_string();
            }
            cardio::bruce_treadmill_vo2_max(minutes)
        }
        CardioProtocol::StepTest => {
            let Some(hr) = post_hr.filter(|hr| *hr > 0.0) else {
                return "—".to_string();
            };
            let female = bundle
                .claimant
                .gender
                .trim()
                .to_lowercase()
                .starts_with('f');
            cardio::step_test_vo2_max(hr, female)
        }
    };
    format!("{} ml/kg/min", units::format_value(Some(vo2)))
}

fn mtm_section(result: &MtmTestResult) -> MtmSection {
    let position = classify::body_position(&result.task_type);
    MtmSection {
        task_type: result.task_type.clone(),
        position: match position {
            BodyPosition::Sitting => "Sitting".to_string(),
            BodyPosition::Standing => "Standing".to_string(),
            BodyPosition::Neither => "—".to_string(),
        },
        rows: result
            .trials
            .iter()
            .enumerate()
            .map(|(i, trial)| MtmRow {
                trial: i + 1,
                reps: trial.reps,
                time: format!("{} s", units::format_value(Some(trial.time_seconds))),
                percent_is: match trial.percent_is {
                    Some(p) => format!("{}%", units::format_value(Some(p))),
                    None => "—".to_string(),
                },
            })
            .collect(),
        total_time: format!(
            "{} s",
            units::format_value(Some(result.total_time_seconds()))
        ),
        average_percent_is: match result.average_percent_is() {
            Some(p) => format!("{}%", units::format_value(Some(p))),
            None => "—".to_string(),
        },
        heart_rate_pre: units::format_value(result.heart_rate.as_ref().and_then(|h| h.pre)),
        heart_rate_post: units::format_value(result.heart_rate.as_ref().and_then(|h| h.post)),
    }
}

/// Sit/stand tolerance totals accumulated from occupational-task trial
/// times, using the body-position classification of each task name.
fn position_totals(mtm: &[MtmTestResult]) -> PositionTotals {
    let mut sit_seconds = 0.0;
    let mut stand_seconds = 0.0;
    for result in mtm {
        match classify::body_position(&result.task_type) {
            BodyPosition::Sitting => sit_seconds += result.total_time_seconds(),
            BodyPosition::Standing => stand_seconds += result.total_time_seconds(),
            BodyPosition::Neither => {}
        }
    }
    let sit_minutes = (sit_seconds / 60.0 * 10.0).round() / 10.0;
    let stand_minutes = (stand_seconds / 60.0 * 10.0).round() / 10.0;
    PositionTotals {
        sit_minutes,
        stand_minutes,
        sit_display: format!("{} min", units::format_value(Some(sit_minutes))),
        stand_display: format!("{} min", units::format_value(Some(stand_minutes))),
    }
}

fn standard_appendices() -> Vec<Appendix> {
    vec![
        Appendix {
            title: "Physical Demand Classifications".to_string(),
            body: "Sedentary: exerting up to 10 lbs of force occasionally. \
                   Light: up to 20 lbs occasionally, 10 lbs frequently. \
                   Medium: up to 50 lbs occasionally, 20 lbs frequently. \
                   Heavy: up to 100 lbs occasionally, 50 lbs frequently. \
                   Very Heavy: over 100 lbs occasionally. \
                   (Dictionary of Occupational Titles strength levels.)"
                .to_string(),
        },
        Appendix {
            title: "Consistency Measures".to_string(),
            body: "Coefficient of variation (CV) is the standard deviation of \
                   repeated trials divided by their mean, expressed as a \
                   percentage; low values across trials indicate reliable, \
                   repeatable effort. Bilateral deficiency is the relative \
                   difference between left and right sides as a percentage of \
                   the stronger side."
                .to_string(),
        },
    ]
}
