use funcap_core::store_keys;
use funcap_report::render::render_report;
use funcap_report::{docx, export_docx, DocumentStyles, Loaded, ReportEngine};
use funcap_store::{MemoryAttachmentStore, MemoryStore, WizardStore};

fn ready_context() -> funcap_report::ReportContext {
    let store = MemoryStore::new();
    store
        .put_raw(
            store_keys::EVALUATOR_DATA,
            r#"{"name": "Dr. Sam Reyes", "licenseNumber": "OT-4471", "clinicName": "Harborview Work Rehab", "phone": "555-0142"}"#,
        )
        .unwrap();
    store
        .put_raw(
            store_keys::CLAIMANT_DATA,
            r#"{"name": "Jordan Avery", "claimNumber": "WC-2024-0117"}"#,
        )
        .unwrap();
    store
        .put_raw(
            store_keys::TEST_DATA,
            r#"[{
                "testName": "Hand Grip",
                "unitMeasure": "kg",
                "valueToBeTestedUnit": "lbs",
                "leftMeasurements": {"trial1": 50, "trial2": 52, "trial3": 51}
            }]"#,
        )
        .unwrap();

    let attachments = MemoryAttachmentStore::new();
    let engine = ReportEngine::new(&store, &attachments);
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let Loaded::Ready(bundle) = runtime.block_on(engine.load()).unwrap() else {
        panic!("expected ready bundle");
    };
    engine.generate(&bundle).unwrap().context
}

#[test]
fn default_template_renders_the_full_document() {
    let context = ready_context();
    let rendered = render_report(&context, None).unwrap();

    assert!(rendered.contains("# FUNCTIONAL CAPACITY EVALUATION"));
    assert!(rendered.contains("Harborview Work Rehab"));
    // The product prints the phone number on both lines.
    assert!(rendered.contains("Phone: 555-0142  Fax: 555-0142"));
    assert!(rendered.contains("### Hand Grip"));
    // kg source with lbs target converts trial cells for display.
    assert!(rendered.contains("110.2"));
    assert!(rendered.contains("## Consistency Crosschecks"));
    assert!(rendered.contains("# Appendices"));
}

#[test]
fn custom_template_overrides_the_default() {
    let context = ready_context();
    let rendered =
        render_report(&context, Some("Report for {{ claimant.name }}")).unwrap();
    assert_eq!(rendered, "Report for Jordan Avery");
}

#[test]
fn malformed_template_is_a_parse_error() {
    let context = ready_context();
    let err = render_report(&context, Some("{% for x in %}")).unwrap_err();
    assert!(matches!(err, funcap_report::ReportError::TemplateParse(_)));
}

#[test]
fn docx_export_produces_a_document() {
    let context = ready_context();
    let bytes = export_docx(&context).unwrap();
    // A DOCX file is a ZIP archive: PK magic.
    assert!(bytes.len() > 4);
    assert_eq!(&bytes[0..2], b"PK");
}

#[test]
fn docx_converter_handles_tables_and_markup() {
    let rendered = "\
# Title\n\
\n\
| Check | Result |\n\
|---|---|\n\
| Grip CV | Pass |\n\
\n\
- bullet with **bold** text\n\
---\n\
Closing paragraph.\n";
    let bytes = docx::generate_docx(rendered, &DocumentStyles::default()).unwrap();
    assert_eq!(&bytes[0..2], b"PK");
}
