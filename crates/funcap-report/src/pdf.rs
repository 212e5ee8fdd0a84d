use crate::error::ReportError;

/// Generate a PDF from rendered template output.
///
/// This is a placeholder — PDF generation requires a rendering library
/// (e.g. `typst`, `printpdf`, or shelling out to `weasyprint`).
/// For now, this returns an error indicating the feature is not yet
/// implemented; DOCX is the supported export format.
pub fn generate_pdf(_rendered: &str) -> Result<Vec<u8>, ReportError> {
    Err(ReportError::Pdf(
        "PDF generation not yet implemented — library selection pending".to_string(),
    ))
}
