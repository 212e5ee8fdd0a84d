use funcap_core::models::claimant::DominantHand;
use funcap_core::models::referral::ReferralQuestion;
use funcap_core::models::test_record::{TestRecord, TrialMeasurements};
use funcap_norms::{run_crosschecks, Crosscheck, CrosscheckVerdict};

fn test_named(name: &str, left: &[f64], right: &[f64]) -> TestRecord {
    TestRecord {
        test_name: name.to_string(),
        unit_measure: "kg".to_string(),
        left_measurements: TrialMeasurements::from_trials(left),
        right_measurements: TrialMeasurements::from_trials(right),
        ..Default::default()
    }
}

fn question(text: &str, answer: &str) -> ReferralQuestion {
    ReferralQuestion {
        question: text.to_string(),
        answer: answer.to_string(),
        saved_image_data: Vec::new(),
    }
}

fn find<'a>(checks: &'a [Crosscheck], name: &str) -> &'a Crosscheck {
    checks
        .iter()
        .find(|c| c.name.contains(name))
        .unwrap_or_else(|| panic!("no crosscheck named like {name}"))
}

#[test]
fn battery_has_fixed_size_and_order() {
    let checks = run_crosschecks(&[], &[], DominantHand::Unset);
    assert_eq!(checks.len(), 10);
    assert!(checks[0].name.contains("Rapid-exchange"));
    assert!(checks[8].name.contains("Distraction"));
    assert!(checks[9].name.contains("Diagnosis"));
    // Nothing to evaluate: every check is N/A, none pass or fail.
    assert!(checks
        .iter()
        .all(|c| c.verdict == CrosscheckVerdict::NotApplicable));
}

#[test]
fn rapid_exchange_passes_when_clearly_below_standard() {
    let tests = vec![
        test_named("Hand Grip", &[50.0, 51.0], &[48.0, 49.0]),
        test_named("Rapid Exchange Grip", &[38.0, 39.0], &[37.0, 38.0]),
    ];
    let checks = run_crosschecks(&tests, &[], DominantHand::Unset);
    assert_eq!(
        find(&checks, "Rapid-exchange").verdict,
        CrosscheckVerdict::Pass
    );
}

#[test]
fn rapid_exchange_fails_when_near_standard_on_one_side() {
    let tests = vec![
        test_named("Hand Grip", &[50.0, 51.0], &[48.0, 49.0]),
        test_named("Rapid Exchange Grip", &[49.0, 50.0], &[30.0]),
    ];
    let checks = run_crosschecks(&tests, &[], DominantHand::Unset);
    assert_eq!(
        find(&checks, "Rapid-exchange").verdict,
        CrosscheckVerdict::Fail
    );
}

#[test]
fn grip_bilateral_deficiency_over_twenty_percent_fails() {
    let tests = vec![test_named("Hand Grip", &[50.0, 50.0], &[30.0, 30.0])];
    let checks = run_crosschecks(&tests, &[], DominantHand::Unset);
    assert_eq!(find(&checks, "MVE").verdict, CrosscheckVerdict::Fail);

    let close = vec![test_named("Hand Grip", &[50.0, 50.0], &[45.0, 45.0])];
    let checks = run_crosschecks(&close, &[], DominantHand::Unset);
    assert_eq!(find(&checks, "MVE").verdict, CrosscheckVerdict::Pass);
}

#[test]
fn pinch_cv_checks_both_sides() {
    let steady = vec![test_named("Key Pinch", &[5.0, 5.1, 5.0], &[4.9, 5.0, 5.0])];
    let checks = run_crosschecks(&steady, &[], DominantHand::Unset);
    assert_eq!(find(&checks, "Pinch").verdict, CrosscheckVerdict::Pass);

    let erratic = vec![test_named("Key Pinch", &[5.0, 8.0, 3.0], &[4.9, 5.0, 5.0])];
    let checks = run_crosschecks(&erratic, &[], DominantHand::Unset);
    assert_eq!(find(&checks, "Pinch").verdict, CrosscheckVerdict::Fail);
}

#[test]
fn lift_heart_rate_must_rise_somewhere() {
    let mut lift = test_named("Floor to Knuckle Lift", &[15.0, 16.0], &[]);
    lift.left_measurements.pre_heart_rate = Some(72.0);
    lift.left_measurements.post_heart_rate = Some(96.0);
    let checks = run_crosschecks(&[lift.clone()], &[], DominantHand::Unset);
    assert_eq!(find(&checks, "Heart-rate").verdict, CrosscheckVerdict::Pass);

    lift.left_measurements.post_heart_rate = Some(72.0);
    let checks = run_crosschecks(&[lift], &[], DominantHand::Unset);
    assert_eq!(find(&checks, "Heart-rate").verdict, CrosscheckVerdict::Fail);
}

#[test]
fn rom_window_requires_three_consecutive_steady_trials() {
    let steady = vec![test_named(
        "Lumbar Flexion",
        &[44.0, 46.0, 45.0, 45.0],
        &[],
    )];
    let checks = run_crosschecks(&steady, &[], DominantHand::Unset);
    assert_eq!(
        find(&checks, "Range-of-motion").verdict,
        CrosscheckVerdict::Pass
    );

    let erratic = vec![test_named("Lumbar Flexion", &[30.0, 45.0, 60.0], &[])];
    let checks = run_crosschecks(&erratic, &[], DominantHand::Unset);
    assert_eq!(
        find(&checks, "Range-of-motion").verdict,
        CrosscheckVerdict::Fail
    );
}

#[test]
fn retest_requires_same_weaker_side() {
    let consistent = vec![
        test_named("Hand Grip", &[40.0, 41.0], &[50.0, 51.0]),
        test_named("Hand Grip Retest", &[42.0, 41.0], &[52.0, 51.0]),
    ];
    let checks = run_crosschecks(&consistent, &[], DominantHand::Unset);
    assert_eq!(
        find(&checks, "Test/retest").verdict,
        CrosscheckVerdict::Pass
    );

    let flipped = vec![
        test_named("Hand Grip", &[40.0, 41.0], &[50.0, 51.0]),
        test_named("Hand Grip Retest", &[52.0, 51.0], &[42.0, 41.0]),
    ];
    let checks = run_crosschecks(&flipped, &[], DominantHand::Unset);
    assert_eq!(
        find(&checks, "Test/retest").verdict,
        CrosscheckVerdict::Fail
    );
}

#[test]
fn dominant_ratio_flags_exaggerated_dominance() {
    let tests = vec![test_named("Hand Grip", &[40.0, 40.0], &[43.0, 43.0])];
    let checks = run_crosschecks(&tests, &[], DominantHand::Right);
    assert_eq!(find(&checks, "Dominant").verdict, CrosscheckVerdict::Pass);

    let lopsided = vec![test_named("Hand Grip", &[40.0, 40.0], &[48.0, 48.0])];
    let checks = run_crosschecks(&lopsided, &[], DominantHand::Right);
    assert_eq!(find(&checks, "Dominant").verdict, CrosscheckVerdict::Fail);

    let unknown = run_crosschecks(&lopsided, &[], DominantHand::Unset);
    assert_eq!(
        find(&unknown, "Dominant").verdict,
        CrosscheckVerdict::NotApplicable
    );
}

#[test]
fn distraction_answer_parses_status_and_comment() {
    let referral = vec![question(
        "6b) Distraction test consistency",
        "PASS|No inconsistencies noted",
    )];
    let checks = run_crosschecks(&[], &referral, DominantHand::Unset);
    let distraction = find(&checks, "Distraction");
    assert_eq!(distraction.verdict, CrosscheckVerdict::Pass);
    assert_eq!(distraction.comment, "No inconsistencies noted");
}

#[test]
fn diagnosis_answer_fails_on_non_pass_status() {
    let referral = vec![question(
        "6c) Diagnosis consistency",
        "FAIL|Reported symptoms exceed diagnosis",
    )];
    let checks = run_crosschecks(&[], &referral, DominantHand::Unset);
    let diagnosis = find(&checks, "Diagnosis");
    assert_eq!(diagnosis.verdict, CrosscheckVerdict::Fail);
    assert_eq!(diagnosis.comment, "Reported symptoms exceed diagnosis");
}
