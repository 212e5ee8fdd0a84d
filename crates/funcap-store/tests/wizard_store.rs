use funcap_core::models::claimant::{ClaimantRecord, DominantHand};
use funcap_core::models::library::DigitalLibraryItem;
use funcap_core::store_keys;
use funcap_store::{
    load, save, AttachmentStore, FileAttachmentStore, FileStore, MemoryAttachmentStore,
    MemoryStore, WizardStore,
};

#[test]
fn absent_key_is_none_not_an_error() {
    let store = MemoryStore::new();
    let loaded: Option<ClaimantRecord> = load(&store, store_keys::CLAIMANT_DATA).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn memory_store_round_trips_typed_records() {
    let store = MemoryStore::new();
    let claimant = ClaimantRecord {
        name: "Jordan Avery".to_string(),
        claim_number: "WC-2024-0117".to_string(),
        dominant_hand: DominantHand::Right,
        ..Default::default()
    };
    save(&store, store_keys::CLAIMANT_DATA, &claimant).unwrap();

    let loaded: ClaimantRecord = load(&store, store_keys::CLAIMANT_DATA)
        .unwrap()
        .expect("record saved");
    assert_eq!(loaded.name, "Jordan Avery");
    assert_eq!(loaded.claim_number, "WC-2024-0117");
    assert_eq!(loaded.dominant_hand, DominantHand::Right);
}

#[test]
fn wizard_records_accept_camel_case_blobs() {
    let store = MemoryStore::new();
    store
        .put_raw(
            store_keys::CLAIMANT_DATA,
            r#"{"name": "Jordan Avery", "claimNumber": "WC-2024-0117", "dominantHand": "right"}"#,
        )
        .unwrap();

    let loaded: ClaimantRecord = load(&store, store_keys::CLAIMANT_DATA).unwrap().unwrap();
    assert_eq!(loaded.claim_number, "WC-2024-0117");
    assert_eq!(loaded.dominant_hand, DominantHand::Right);
}

#[test]
fn file_store_round_trips_and_lists_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path());

    assert!(store.get_raw("evaluator_data").unwrap().is_none());
    assert!(store.keys().unwrap().is_empty());

    store.put_raw("evaluator_data", r#"{"name": "Dr. Reyes"}"#).unwrap();
    store.put_raw("completed_steps", r#"["intake"]"#).unwrap();

    assert_eq!(
        store.keys().unwrap(),
        vec!["completed_steps".to_string(), "evaluator_data".to_string()]
    );
    assert!(store
        .get_raw("evaluator_data")
        .unwrap()
        .unwrap()
        .contains("Reyes"));

    store.remove("evaluator_data").unwrap();
    assert!(store.get_raw("evaluator_data").unwrap().is_none());
    // Removing a missing key is not an error.
    store.remove("evaluator_data").unwrap();
}

#[test]
fn memory_attachment_store_scans_all() {
    let store = MemoryAttachmentStore::new();
    assert!(store.get_all().unwrap().is_empty());

    store.insert(DigitalLibraryItem {
        id: "img-1".to_string(),
        name: "referral.png".to_string(),
        data_url: Some("data:image/png;base64,AAAA".to_string()),
        ..Default::default()
    });

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(
        store.get("img-1").unwrap().unwrap().name,
        "referral.png"
    );
    assert!(store.get("img-2").unwrap().is_none());
}

#[test]
fn file_attachment_store_round_trips_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileAttachmentStore::new(dir.path());
    assert!(store.get_all().unwrap().is_empty());

    store
        .insert(&DigitalLibraryItem {
            id: "img-2".to_string(),
            name: "xray.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            size: 2048,
            ..Default::default()
        })
        .unwrap();
    store
        .insert(&DigitalLibraryItem {
            id: "img-1".to_string(),
            name: "referral.png".to_string(),
            ..Default::default()
        })
        .unwrap();

    let all = store.get_all().unwrap();
    assert_eq!(all.len(), 2);
    // Scan order is by id.
    assert_eq!(all[0].id, "img-1");
    assert_eq!(all[1].id, "img-2");
    assert_eq!(store.get("img-2").unwrap().unwrap().size, 2048);
}
