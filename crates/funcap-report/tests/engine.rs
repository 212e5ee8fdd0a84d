use funcap_core::models::evaluator::EvaluatorProfile;
use funcap_core::models::library::DigitalLibraryItem;
use funcap_core::store_keys;
use funcap_report::{Loaded, ReportEngine};
use funcap_store::{
    MemoryAttachmentStore, MemoryProfileSource, MemoryStore, WizardStore,
};

fn seed(store: &MemoryStore, key: &str, json: &str) {
    store.put_raw(key, json).unwrap();
}

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    seed(
        &store,
        store_keys::EVALUATOR_DATA,
        r#"{"name": "Dr. Sam Reyes", "licenseNumber": "OT-4471", "clinicName": "Harborview Work Rehab", "phone": "555-0142"}"#,
    );
    seed(
        &store,
        store_keys::CLAIMANT_DATA,
        r#"{"name": "Jordan Avery", "gender": "male", "claimNumber": "WC-2024-0117", "dominantHand": "right", "occupation": "Warehouse associate"}"#,
    );
    seed(
        &store,
        store_keys::TEST_DATA,
        r#"[
            {
                "testName": "Hand Grip",
                "unitMeasure": "kg",
                "leftMeasurements": {"trial1": 50, "trial2": 52, "trial3": 51, "trial4": 49, "trial5": 50, "trial6": 48},
                "rightMeasurements": {"trial1": 48, "trial2": 49, "trial3": 50}
            },
            {
                "testName": "Lumbar Flexion",
                "unitMeasure": "kg",
                "leftMeasurements": {"trial1": 45, "trial2": 46, "trial3": 44}
            },
            {
                "testName": "Floor to Knuckle Lift",
                "unitMeasure": "kg",
                "leftMeasurements": {"trial1": 15, "trial2": 16, "preHeartRate": 72, "postHeartRate": 95}
            },
            {
                "testName": "Treadmill Test",
                "unitMeasure": "minutes",
                "leftMeasurements": {"trial1": 9.5, "postHeartRate": 148}
            }
        ]"#,
    );
    seed(
        &store,
        store_keys::REFERRAL_QUESTIONS_DATA,
        r#"[{"question": "6b) Distraction test consistency", "answer": "PASS|No inconsistencies noted"}]"#,
    );
    seed(
        &store,
        store_keys::MTM_TEST_DATA,
        r#"[{"taskType": "Fingering", "trials": [
            {"reps": 30, "time": 120, "percentIS": 85},
            {"reps": 28, "time": {"value": 118}, "percentIS": 82}
        ]}]"#,
    );
    seed(
        &store,
        store_keys::DIGITAL_LIBRARY_DATA,
        r#"{"storageType": "indexeddb", "items": [{"id": "img-1", "name": "referral.png", "category": "Referral"}]}"#,
    );
    store
}

#[tokio::test]
async fn missing_required_records_block_the_report() {
    let store = MemoryStore::new();
    let attachments = MemoryAttachmentStore::new();
    let engine = ReportEngine::new(&store, &attachments);

    match engine.load().await.unwrap() {
        Loaded::Incomplete {
            missing,
            completed_steps,
        } => {
            assert_eq!(
                missing,
                vec![store_keys::EVALUATOR_DATA, store_keys::CLAIMANT_DATA]
            );
            assert!(completed_steps.is_empty());
        }
        Loaded::Ready(_) => panic!("expected the blocking incomplete state"),
    }
}

#[tokio::test]
async fn hosted_profile_fills_in_for_missing_local_evaluator() {
    let store = seeded_store();
    store.remove(store_keys::EVALUATOR_DATA).unwrap();
    let attachments = MemoryAttachmentStore::new();
    let engine = ReportEngine::new(&store, &attachments);

    // Still blocked without a hosted document.
    assert!(matches!(
        engine.load().await.unwrap(),
        Loaded::Incomplete { .. }
    ));

    let mut hosted = MemoryProfileSource::new();
    hosted.insert(EvaluatorProfile {
        id: "prof-9".to_string(),
        name: "Dr. Hosted Fallback".to_string(),
        ..Default::default()
    });

    match engine.load_with_profile(&hosted, "prof-9").await.unwrap() {
        Loaded::Ready(bundle) => assert_eq!(bundle.evaluator.name, "Dr. Hosted Fallback"),
        Loaded::Incomplete { missing, .. } => panic!("unexpected incomplete: {missing:?}"),
    }
}

#[tokio::test]
async fn generate_assembles_rows_and_writes_the_marker() {
    let store = seeded_store();
    let attachments = MemoryAttachmentStore::new();
    let engine = ReportEngine::new(&store, &attachments);

    let Loaded::Ready(bundle) = engine.load().await.unwrap() else {
        panic!("expected ready bundle");
    };
    let report = engine.generate(&bundle).unwrap();
    let context = &report.context;

    // Grip lands in Strength with the light-work requirement met.
    let strength = context
        .categories
        .iter()
        .find(|c| c.title == "Strength Tests")
        .unwrap();
    let grip = strength
        .tests
        .iter()
        .find(|t| t.test_name == "Hand Grip")
        .unwrap();
    assert!(grip.job_match);
    assert_eq!(grip.unit_label, "kg");
    assert_eq!(grip.left_average, "50");
    assert_eq!(grip.left_cv, "3%");

    // Lumbar flexion classifies as spine ROM and reads in degrees even
    // though the recorded unit is a weight.
    let rom = context
        .categories
        .iter()
        .find(|c| c.title.contains("Total Spine"))
        .unwrap();
    let flexion = rom
        .tests
        .iter()
        .find(|t| t.test_name == "Lumbar Flexion")
        .unwrap();
    assert_eq!(flexion.unit_label, "degrees");
    assert_eq!(flexion.layout, "range_of_motion");
    assert!(flexion.job_match);

    // Treadmill computes a VO2 estimate.
    let cardio = context
        .categories
        .iter()
        .find(|c| c.title == "Cardio Tests")
        .unwrap();
    assert!(cardio.tests[0].vo2_max.contains("ml/kg/min"));

    // Ten crosschecks; the distraction row carries the parsed comment.
    assert_eq!(context.crosschecks.len(), 10);
    let distraction = context
        .crosschecks
        .iter()
        .find(|c| c.name.contains("Distraction"))
        .unwrap();
    assert_eq!(distraction.pass_mark, "\u{2713}");
    assert_eq!(distraction.comment, "No inconsistencies noted");

    // Fingering is seated work: 238 s of sitting time.
    assert_eq!(context.position_totals.sit_minutes, 4.0);
    assert_eq!(context.position_totals.stand_minutes, 0.0);
    assert_eq!(context.mtm_tables[0].average_percent_is, "83.5%");

    // Attachment store was empty, so the library renders metadata only.
    assert_eq!(context.library.len(), 1);
    assert!(!context.library[0].has_image);

    // The only write-back: the review-generated marker.
    let marker_raw = store
        .get_raw(store_keys::REVIEW_REPORT_GENERATED)
        .unwrap()
        .expect("marker written");
    assert!(marker_raw.contains(&report.marker.report_id.to_string()));
}

#[tokio::test]
async fn attachment_records_win_over_embedded_metadata() {
    let store = seeded_store();
    let attachments = MemoryAttachmentStore::new();
    attachments.insert(DigitalLibraryItem {
        id: "img-1".to_string(),
        name: "referral.png".to_string(),
        data_url: Some("data:image/png;base64,QUJD".to_string()),
        ..Default::default()
    });
    let engine = ReportEngine::new(&store, &attachments);

    let Loaded::Ready(bundle) = engine.load().await.unwrap() else {
        panic!("expected ready bundle");
    };
    assert_eq!(
        bundle.library[0].data_url.as_deref(),
        Some("data:image/png;base64,QUJD")
    );
}
