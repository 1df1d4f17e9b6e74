use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

pub const DEFAULT_TARGET_LANGUAGE: &str = "Korean";
pub const DEFAULT_SOURCE_LANGUAGE: &str = "auto-detect";
pub const DEFAULT_TARGET_AUDIENCE: &str = "adult";

/// Raw `POST /translate` body, before validation.
#[derive(Debug, Default, Deserialize)]
pub struct TranslatePayload {
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub text_type: Option<String>,
    #[serde(alias = "targetLanguage")]
    pub target_language: Option<String>,
    #[serde(alias = "sourceLanguage")]
    pub source_language: Option<String>,
    #[serde(alias = "targetAudience")]
    pub target_audience: Option<String>,
    #[serde(alias = "additionalRequest")]
    pub additional_request: Option<String>,
}

/// A validated translation request with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub text_type: String,
    pub target_language: String,
    pub source_language: String,
    pub target_audience: String,
    pub additional_request: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}

impl TranslatePayload {
    pub fn into_request(self) -> Result<TranslationRequest, TranslateError> {
        let (text, text_type) = match (self.text, self.text_type) {
            (Some(text), Some(text_type)) if !text.is_empty() && !text_type.is_empty() => {
                (text, text_type)
            }
            _ => return Err(TranslateError::MissingField),
        };

        Ok(TranslationRequest {
            text,
            text_type,
            target_language: self
                .target_language
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
            source_language: self
                .source_language
                .unwrap_or_else(|| DEFAULT_SOURCE_LANGUAGE.to_string()),
            target_audience: self
                .target_audience
                .unwrap_or_else(|| DEFAULT_TARGET_AUDIENCE.to_string()),
            additional_request: self
                .additional_request
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Result<TranslationRequest, TranslateError> {
        serde_json::from_value::<TranslatePayload>(value)
            .unwrap()
            .into_request()
    }

    #[test]
    fn test_defaults_applied() {
        let req = parse(json!({"text": "Hi", "type": "daily"})).unwrap();
        assert_eq!(req.target_language, "Korean");
        assert_eq!(req.source_language, "auto-detect");
        assert_eq!(req.target_audience, "adult");
        assert_eq!(req.additional_request, "");
    }

    #[test]
    fn test_additional_request_trimmed() {
        let req = parse(json!({
            "text": "Hi",
            "type": "article",
            "additional_request": "  keep names in English \n"
        }))
        .unwrap();
        assert_eq!(req.additional_request, "keep names in English");
    }

    #[test]
    fn test_camel_case_aliases() {
        let req = parse(json!({
            "text": "Hi",
            "type": "legal",
            "targetLanguage": "Japanese",
            "sourceLanguage": "English",
            "targetAudience": "expert",
            "additionalRequest": "formal"
        }))
        .unwrap();
        assert_eq!(req.target_language, "Japanese");
        assert_eq!(req.source_language, "English");
        assert_eq!(req.target_audience, "expert");
        assert_eq!(req.additional_request, "formal");
    }

    #[test]
    fn test_missing_or_empty_required_fields() {
        for body in [
            json!({"type": "daily"}),
            json!({"text": "Hi"}),
            json!({"text": "", "type": "daily"}),
            json!({"text": "Hi", "type": ""}),
            json!({"text": null, "type": "daily"}),
            json!({}),
        ] {
            assert!(matches!(parse(body), Err(TranslateError::MissingField)));
        }
    }
}
