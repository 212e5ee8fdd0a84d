//! funcap-report
//!
//! Report assembly and export for the FCE wizard: loads and merges the
//! wizard records, computes per-test display rows through the stats and
//! norms crates, and renders the assembled document through a Tera
//! template into DOCX bytes.

pub mod assemble;
pub mod cardio;
pub mod classify;
pub mod context;
pub mod docx;
pub mod error;
pub mod pdf;
pub mod render;
pub mod styles;

pub use assemble::{Bundle, GeneratedReport, Loaded, ReportEngine};
pub use context::ReportContext;
pub use error::ReportError;
pub use styles::DocumentStyles;

/// Render a generated report straight to DOCX bytes with the default
/// template and styles.
pub fn export_docx(context: &ReportContext) -> Result<Vec<u8>, ReportError> {
    let rendered = render::render_report(context, None)?;
    docx::generate_docx(&rendered, &DocumentStyles::default())
}
