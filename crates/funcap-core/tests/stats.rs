use funcap_core::models::test_record::TrialMeasurements;
use funcap_core::stats;

#[test]
fn average_is_mean_of_positive_trials() {
    let m = TrialMeasurements::from_trials(&[50.0, 52.0, 51.0, 49.0, 50.0, 48.0]);
    assert_eq!(stats::average(&m), 50.0);
}

#[test]
fn average_rounds_to_two_decimals() {
    let m = TrialMeasurements::from_trials(&[10.0, 10.0, 11.0]);
    assert_eq!(stats::average(&m), 10.33);
}

#[test]
fn average_ignores_non_positive_entries() {
    let mut m = TrialMeasurements::from_trials(&[20.0, 0.0, 22.0]);
    m.trial4 = Some(-5.0);
    assert_eq!(stats::average(&m), 21.0);
}

#[test]
fn average_of_no_valid_data_is_zero() {
    let m = TrialMeasurements::default();
    assert_eq!(stats::average(&m), 0.0);

    let zeros = TrialMeasurements::from_trials(&[0.0, 0.0]);
    assert_eq!(stats::average(&zeros), 0.0);
}

#[test]
fn trial_values_preserves_order_and_drops_gaps() {
    let m = TrialMeasurements {
        trial1: Some(3.0),
        trial3: Some(1.0),
        trial6: Some(2.0),
        ..Default::default()
    };
    assert_eq!(stats::trial_values(&m), vec![3.0, 1.0, 2.0]);
}

#[test]
fn cv_of_grip_scenario_is_three_percent() {
    let m = TrialMeasurements::from_trials(&[50.0, 52.0, 51.0, 49.0, 50.0, 48.0]);
    assert_eq!(stats::coefficient_of_variation(&m), 3);
}

#[test]
fn cv_is_scale_invariant() {
    let base = [12.0, 14.0, 13.0, 12.5];
    let m = TrialMeasurements::from_trials(&base);
    let scaled =
        TrialMeasurements::from_trials(&base.iter().map(|v| v * 7.3).collect::<Vec<_>>());
    assert_eq!(
        stats::coefficient_of_variation(&m),
        stats::coefficient_of_variation(&scaled)
    );
}

#[test]
fn cv_of_empty_or_single_trial_is_zero() {
    assert_eq!(
        stats::coefficient_of_variation(&TrialMeasurements::default()),
        0
    );
    assert_eq!(
        stats::coefficient_of_variation(&TrialMeasurements::from_trials(&[42.0])),
        0
    );
}

#[test]
fn bilateral_deficiency_is_symmetric() {
    assert_eq!(
        stats::bilateral_deficiency(40.0, 50.0),
        stats::bilateral_deficiency(50.0, 40.0)
    );
    assert_eq!(stats::bilateral_deficiency(40.0, 50.0), 20);
}

#[test]
fn bilateral_deficiency_zero_when_either_side_empty() {
    assert_eq!(stats::bilateral_deficiency(0.0, 50.0), 0);
    assert_eq!(stats::bilateral_deficiency(50.0, 0.0), 0);
}
