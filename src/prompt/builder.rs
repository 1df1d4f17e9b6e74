use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::{audience_instructions, Genre};
use crate::error::TranslateError;
use crate::translate::TranslationRequest;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Build the prompt for a validated request.
///
/// Fails with [`TranslateError::TemplateNotFound`] when `text_type` is not a known genre.
pub fn build_prompt(request: &TranslationRequest) -> Result<String, TranslateError> {
    let genre = Genre::from_key(&request.text_type)
        .ok_or_else(|| TranslateError::TemplateNotFound(request.text_type.clone()))?;
    let instructions = audience_instructions(&request.target_audience);

    Ok(render(genre.template(), |name| match name {
        "text" => Some(request.text.as_str()),
        "target_language" => Some(request.target_language.as_str()),
        "source_language" => Some(request.source_language.as_str()),
        "target_audience" => Some(request.target_audience.as_str()),
        "target_audience_instructions" => Some(instructions),
        "additional_request" => Some(request.additional_request.as_str()),
        _ => None,
    }))
}

// Single pass over the template, so values are never themselves expanded.
fn render<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    placeholder_pattern()
        .replace_all(template, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or(&caps[0]).to_string()
        })
        .into_owned()
}
