use funcap_core::units;

#[test]
fn kg_to_lbs_round_trip_within_tolerance() {
    let display = units::resolve_display("Hand Grip", "kg", "lbs");
    assert!(display.convert_to_pounds);
    assert_eq!(display.label, "lbs");

    let shown = units::convert(50.0, &display);
    let back = shown / units::KG_TO_LB;
    assert!((back - 50.0).abs() < 0.1, "round trip drifted: {back}");
}

#[test]
fn rom_test_forces_degrees_even_with_weight_unit() {
    let display = units::resolve_display("Lumbar Flexion", "kg", "lbs");
    assert!(!display.convert_to_pounds);
    assert_eq!(display.label, "degrees");
}

#[test]
fn rom_keywords_cover_joint_movements() {
    for name in [
        "Shoulder Abduction",
        "Cervical Rotation",
        "Wrist Ulnar Deviation",
        "Forearm Supination",
        "Ankle Dorsiflexion",
        "Straight Leg Raise",
    ] {
        assert!(units::is_range_of_motion(name), "{name} should be ROM");
    }
    assert!(!units::is_range_of_motion("Hand Grip"));
}

#[test]
fn unit_tokens_match_whole_words_only() {
    let display = units::resolve_display("Static Push", "pkg", "lbs");
    assert!(!display.convert_to_pounds);

    let kgs = units::resolve_display("Static Push", "Kgs", "pounds");
    assert!(kgs.convert_to_pounds);
}

#[test]
fn kg_without_pound_target_stays_kg() {
    let display = units::resolve_display("Hand Grip", "kilograms", "");
    assert!(!display.convert_to_pounds);
    assert_eq!(display.label, "kg");
}

#[test]
fn format_value_renders_integers_without_decimals() {
    assert_eq!(units::format_value(Some(110.0)), "110");
    assert_eq!(units::format_value(Some(110.23)), "110.2");
    assert_eq!(units::format_value(None), "—");
}
