use tera::{Context, Tera};

use somato_core::models::payload::ReportPayload;

use crate::error::ReportError;
use crate::styles::ReportStyles;
use crate::view::{ReportView, build_view};

// No `.html` suffix: Tera's autoescaping would mangle the `/` in dates and
// data URIs. The view model only carries strings we format ourselves.
const TEMPLATE_NAME: &str = "report";
const TEMPLATE: &str = include_str!("../templates/report.html.tera");

/// Render a decoded payload into one self-contained HTML document.
pub fn render_report(payload: &ReportPayload, styles: &ReportStyles) -> Result<String, ReportError> {
    let view = build_view(payload, styles)?;
    render_view(&view)
}

/// Render an already-built view model. The view's fields become the template
/// context variables.
pub fn render_view(view: &ReportView) -> Result<String, ReportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)
        .map_err(|e| ReportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context = Context::from_value(value)
        .map_err(|e| ReportError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(TEMPLATE_NAME, &context)?;
    tracing::debug!(bytes = rendered.len(), "report rendered");
    Ok(rendered)
}
