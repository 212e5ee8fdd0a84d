//! Effort-consistency crosschecks.
//!
//! A fixed battery of independent checks over the full test set, each
//! reported as Pass, Fail, or Not Applicable. A check is applicable only
//! when its input tests (or referral answer) exist; it never reports both
//! a pass and a fail.

use funcap_core::models::claimant::DominantHand;
use funcap_core::models::referral::ReferralQuestion;
use funcap_core::models::test_record::TestRecord;
use funcap_core::{stats, units};
use serde::Serialize;
use ts_rs::TS;

use crate::policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CrosscheckVerdict {
    Pass,
    Fail,
    NotApplicable,
}

/// One row of the consistency table in the report.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Crosscheck {
    pub name: &'static str,
    pub verdict: CrosscheckVerdict,
    pub comment: String,
}

/// Run the full battery in report order.
pub fn run_crosschecks(
    tests: &[TestRecord],
    referral: &[ReferralQuestion],
    dominant: DominantHand,
) -> Vec<Crosscheck> {
    vec![
        rapid_exchange_grip(tests),
        grip_bell_curve(tests),
        pinch_cv(tests),
        lift_heart_rate(tests),
        rom_trial_consistency(tests),
        test_retest(tests),
        dominant_hand_ratio(tests, dominant),
        cv_pass_rate(tests),
        referral_attested("Distraction test consistency", "distraction", referral),
        referral_attested("Diagnosis consistency", "diagnosis", referral),
    ]
}

fn check(name: &'static str, passed: bool, comment: String) -> Crosscheck {
    Crosscheck {
        name,
        verdict: if passed {
            CrosscheckVerdict::Pass
        } else {
            CrosscheckVerdict::Fail
        },
        comment,
    }
}

fn not_applicable(name: &'static str) -> Crosscheck {
    Crosscheck {
        name,
        verdict: CrosscheckVerdict::NotApplicable,
        comment: String::new(),
    }
}

fn side_averages(test: &TestRecord) -> (f64, f64) {
    (
        stats::average(&test.left_measurements),
        stats::average(&test.right_measurements),
    )
}

/// Max per-side averages across a set of tests. Zero still means "no
/// data" on that side.
fn max_side_averages<'a>(tests: impl Iterator<Item = &'a TestRecord>) -> (f64, f64) {
    tests.fold((0.0_f64, 0.0_f64), |(l, r), t| {
        let (tl, tr) = side_averages(t);
        (l.max(tl), r.max(tr))
    })
}

fn is_standard_grip(test: &TestRecord) -> bool {
    let name = test.test_name.to_lowercase();
    name.contains("grip") && !name.contains("rapid")
}

fn is_rapid_exchange(test: &TestRecord) -> bool {
    test.test_name.to_lowercase().contains("rapid exchange")
}

/// Rapid-exchange grip should drop to a fraction of static grip; an
/// exchange score near or above static grip reads as submaximal static
/// effort.
fn rapid_exchange_grip(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Rapid-exchange grip vs. standard grip";

    let (rapid_l, rapid_r) = max_side_averages(tests.iter().filter(|t| is_rapid_exchange(t)));
    let (std_l, std_r) = max_side_averages(tests.iter().filter(|t| is_standard_grip(t)));

    let mut ratios = Vec::new();
    for (label, rapid, standard) in [("left", rapid_l, std_l), ("right", rapid_r, std_r)] {
        if rapid > 0.0 && standard > 0.0 {
            ratios.push((label, rapid / standard));
        }
    }
    if ratios.is_empty() {
        return not_applicable(NAME);
    }

    let passed = ratios
        .iter()
        .all(|(_, ratio)| *ratio <= policy::RAPID_EXCHANGE_MAX_RATIO);
    let comment = ratios
        .iter()
        .map(|(label, ratio)| format!("{label} {:.0}% of standard grip", ratio * 100.0))
        .collect::<Vec<_>>()
        .join(", ");
    check(NAME, passed, comment)
}

fn grip_bell_curve(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Grip MVE bilateral comparison";

    let (left, right) = max_side_averages(tests.iter().filter(|t| is_standard_grip(t)));
    if left == 0.0 || right == 0.0 {
        return not_applicable(NAME);
    }

    let deficiency = stats::bilateral_deficiency(left, right);
    check(
        NAME,
        deficiency <= policy::GRIP_MVE_MAX_DEFICIENCY,
        format!("bilateral deficiency {deficiency}%"),
    )
}

fn pinch_cv(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Pinch strength variation";

    let mut cvs = Vec::new();
    for test in tests
        .iter()
        .filter(|t| t.test_name.to_lowercase().contains("pinch"))
    {
        for side in [&test.left_measurements, &test.right_measurements] {
            if stats::average(side) > 0.0 {
                cvs.push(stats::coefficient_of_variation(side));
            }
        }
    }
    if cvs.is_empty() {
        return not_applicable(NAME);
    }

    let worst = cvs.iter().copied().max().unwrap_or(0);
    check(
        NAME,
        cvs.iter().all(|cv| *cv <= policy::CV_MAX_PERCENT),
        format!("highest CV {worst}%"),
    )
}

/// Real lifting effort raises heart rate on at least one lift.
fn lift_heart_rate(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Heart-rate response to dynamic lifts";

    let mut applicable = false;
    let mut increased = false;
    for test in tests
        .iter()
        .filter(|t| t.test_name.to_lowercase().contains("lift"))
    {
        for side in [&test.left_measurements, &test.right_measurements] {
            if let (Some(pre), Some(post)) = (side.pre_heart_rate, side.post_heart_rate) {
                applicable = true;
                if post > pre {
                    increased = true;
                }
            }
        }
    }
    if !applicable {
        return not_applicable(NAME);
    }
    check(
        NAME,
        increased,
        if increased {
            "heart rate increased during lifting".to_string()
        } else {
            "no heart-rate increase on any lift".to_string()
        },
    )
}

fn has_consistent_window(values: &[f64]) -> bool {
    values.windows(3).any(|w| {
        let max = w.iter().cloned().fold(f64::MIN, f64::max);
        let min = w.iter().cloned().fold(f64::MAX, f64::min);
        let mean = w.iter().sum::<f64>() / 3.0;
        max - min <= policy::ROM_WINDOW_DEGREES
            && w.iter()
                .all(|v| (v - mean).abs() <= mean * policy::ROM_WINDOW_PERCENT / 100.0)
    })
}

/// Every measured range-of-motion side with at least three trials must
/// show three consecutive trials within the degree and percent windows.
fn rom_trial_consistency(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Range-of-motion trial consistency";

    let mut applicable = false;
    let mut all_consistent = true;
    for test in tests
        .iter()
        .filter(|t| units::is_range_of_motion(&t.test_name))
    {
        for side in [&test.left_measurements, &test.right_measurements] {
            let values = stats::trial_values(side);
            if values.len() >= 3 {
                applicable = true;
                if !has_consistent_window(&values) {
                    all_consistent = false;
                }
            }
        }
    }
    if !applicable {
        return not_applicable(NAME);
    }
    check(
        NAME,
        all_consistent,
        if all_consistent {
            "three consecutive trials within window on all measured motions".to_string()
        } else {
            "trial spread exceeds window on at least one motion".to_string()
        },
    )
}

/// Base name shared by a test and its retest, for grouping repetitions.
fn retest_base(name: &str) -> String {
    name.to_lowercase()
        .replace("re-test", " ")
        .replace("retest", " ")
        .replace(['(', ')'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn test_retest(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Test/retest reliability";

    let mut groups: Vec<(String, Vec<&TestRecord>)> = Vec::new();
    for test in tests {
        let base = retest_base(&test.test_name);
        if let Some(pos) = groups.iter().position(|(b, _)| *b == base) {
            groups[pos].1.push(test);
        } else {
            groups.push((base, vec![test]));
        }
    }
    groups.retain(|(_, members)| members.len() >= 2);
    if groups.is_empty() {
        return not_applicable(NAME);
    }

    let mut cv_total = 0usize;
    let mut cv_passed = 0usize;
    let mut same_weaker_side = true;
    for (_, members) in &groups {
        let mut weaker: Option<&'static str> = None;
        for test in members {
            for side in [&test.left_measurements, &test.right_measurements] {
                if stats::average(side) > 0.0 {
                    cv_total += 1;
                    if stats::coefficient_of_variation(side) <= policy::CV_MAX_PERCENT {
                        cv_passed += 1;
                    }
                }
            }
            let (left, right) = side_averages(test);
            if left > 0.0 && right > 0.0 {
                let this_weaker = if left < right { "left" } else { "right" };
                match weaker {
                    None => weaker = Some(this_weaker),
                    Some(prev) if prev != this_weaker => same_weaker_side = false,
                    Some(_) => {}
                }
            }
        }
    }

    let rate = if cv_total == 0 {
        0.0
    } else {
        100.0 * cv_passed as f64 / cv_total as f64
    };
    let passed = rate >= policy::RETEST_CV_PASS_RATE && same_weaker_side;
    check(
        NAME,
        passed,
        format!(
            "CV pass rate {rate:.0}%, weaker side {}",
            if same_weaker_side { "consistent" } else { "varies" }
        ),
    )
}

fn dominant_hand_ratio(tests: &[TestRecord], dominant: DominantHand) -> Crosscheck {
    const NAME: &str = "Dominant-hand grip expectation";

    let (left, right) = max_side_averages(tests.iter().filter(|t| is_standard_grip(t)));
    let (dom, nondom) = match dominant {
        DominantHand::Left => (left, right),
        DominantHand::Right => (right, left),
        DominantHand::Unset => return not_applicable(NAME),
    };
    if dom == 0.0 || nondom == 0.0 {
        return not_applicable(NAME);
    }

    let ratio = dom / nondom;
    check(
        NAME,
        ratio <= policy::DOMINANT_MAX_RATIO,
        format!("dominant/non-dominant ratio {ratio:.2}"),
    )
}

fn cv_pass_rate(tests: &[TestRecord]) -> Crosscheck {
    const NAME: &str = "Coefficient-of-variation pass rate";

    let mut total = 0usize;
    let mut passed = 0usize;
    for test in tests {
        for side in [&test.left_measurements, &test.right_measurements] {
            if stats::average(side) > 0.0 {
                total += 1;
                if stats::coefficient_of_variation(side) < policy::CV_MAX_PERCENT {
                    passed += 1;
                }
            }
        }
    }
    if total == 0 {
        return not_applicable(NAME);
    }

    let rate = 100.0 * passed as f64 / total as f64;
    check(
        NAME,
        rate >= policy::CV_PASS_RATE_MIN,
        format!("{passed} of {total} measured sides under {}% CV", policy::CV_MAX_PERCENT),
    )
}

/// Evaluator-attested verdict parsed from a referral answer recorded as
/// `STATUS|comments`.
fn referral_attested(
    name: &'static str,
    keyword: &str,
    referral: &[ReferralQuestion],
) -> Crosscheck {
    let Some(question) = referral
        .iter()
        .find(|q| q.question.to_lowercase().contains(keyword))
    else {
        return not_applicable(name);
    };
    if question.answer.trim().is_empty() {
        return not_applicable(name);
    }

    let (status, comment) = question.composite();
    let passed = status.to_uppercase().contains("PASS");
    check(name, passed, comment)
}
