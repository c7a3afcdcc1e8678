//! Rendering of the single registration page.

use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

use crate::backend::dispatch::Outcome;

const INDEX_TEMPLATE: &str = "index";

/// Builds the template registry with the embedded page template
pub fn registry() -> Result<Handlebars<'static>, TemplateError> {
    let mut hbs = Handlebars::new();
    hbs.register_template_string(INDEX_TEMPLATE, include_str!("../../templates/index.hbs"))?;
    Ok(hbs)
}

/// Values shown on the page. Both forms are always rendered; these only fill
/// in the message areas.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Validation messages, escaped by the template
    pub errors: Vec<String>,
    /// Confirmation line, escaped by the template
    pub success: Option<String>,
    /// Already escaped by the echo path, inserted as is
    pub get_message: Option<String>,
}

impl From<&Outcome> for PageView {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Registration { username, result, .. } if result.is_accepted() => Self {
                success: Some(format!("Registration successful! Welcome, {}", username)),
                ..Default::default()
            },
            Outcome::Registration { result, .. } => Self {
                errors: result.errors().to_vec(),
                ..Default::default()
            },
            Outcome::Echo(echo) if !echo.sanitized_text.is_empty() => Self {
                get_message: Some(echo.sanitized_text.clone()),
                ..Default::default()
            },
            Outcome::Echo(_) | Outcome::Idle => Self::default(),
        }
    }
}

pub fn render(hbs: &Handlebars<'_>, view: &PageView) -> Result<String, RenderError> {
    hbs.render(INDEX_TEMPLATE, view)
}
