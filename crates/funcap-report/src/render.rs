use tera::{Context, Tera};

use crate::context::ReportContext;
use crate::error::ReportError;

/// The default report template shipped with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/report.tera");

/// Render a report context through a Tera template to the markdown-ish
/// intermediate the DOCX converter consumes.
///
/// Pass `None` for the stock layout; a clinic-specific template string
/// can be supplied instead. The context fields become the template
/// variables.
pub fn render_report(
    context: &ReportContext,
    template: Option<&str>,
) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template("report", template.unwrap_or(DEFAULT_TEMPLATE))
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(context)?;
    let tera_context =
        Context::from_value(value).map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render("report", &tera_context)?;
    Ok(rendered)
}
