use tera::{Context, Tera};
use tracing::debug;

use rheum_core::models::consult::ConsultResponse;

use crate::error::ExportError;
use crate::view::ResultView;

/// Tera enables autoescaping by file extension, so the name must end in
/// `.html`.
const RESULT_TEMPLATE_NAME: &str = "result.html";
const RESULT_TEMPLATE: &str = include_str!("../templates/result.html");

/// Footer shown under every result.
pub const REVIEW_REMINDER: &str =
    "AI-generated draft. Review every finding before it enters the medical record.";

/// Render a Tera template with a [`ResultView`] as its context.
///
/// The view's fields become the template variables, plus `review_reminder`.
pub fn render_template(
    template_name: &str,
    template_content: &str,
    view: &ResultView,
) -> Result<String, ExportError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| ExportError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let mut context =
        Context::from_value(value).map_err(|e| ExportError::TemplateRender(e.to_string()))?;
    context.insert("review_reminder", REVIEW_REMINDER);

    let rendered = tera.render(template_name, &context)?;
    debug!(template = template_name, bytes = rendered.len(), "rendered result");
    Ok(rendered)
}

/// Render the result panel for a response as an HTML fragment.
pub fn render_html(response: &ConsultResponse) -> Result<String, ExportError> {
    render_template(
        RESULT_TEMPLATE_NAME,
        RESULT_TEMPLATE,
        &ResultView::from_response(response),
    )
}
