//! Decoding of the model's reply payload

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use crate::constants::{DEFAULT_INTENT, DEFAULT_TONE};

/// Intent categories the model is asked to choose from.
///
/// The stored intent stays free text; this is only used to recognize
/// the declared categories (e.g. for color-coding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Inquiry,
    Complaint,
    Offer,
    Information,
}

impl Intent {
    pub const ALL: [Intent; 4] = [
        Intent::Inquiry,
        Intent::Complaint,
        Intent::Offer,
        Intent::Information,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Intent::Inquiry => "Inquiry",
            Intent::Complaint => "Complaint",
            Intent::Offer => "Offer",
            Intent::Information => "Information",
        }
    }

    /// Match a model-reported label, case-insensitively
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decoded model output with every field populated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub intent: String,
    pub tone: String,
    pub reply: String,
}

impl ModelResponse {
    pub fn intent_category(&self) -> Option<Intent> {
        Intent::from_label(&self.intent)
    }
}

/// The completion text could not be admitted as a `ModelResponse`
#[derive(Debug, Clone, Error)]
#[error("Failed to parse model response: {reason}")]
pub struct ParseFailure {
    /// Completion text exactly as received
    pub raw: String,
    pub reason: String,
}

/// Decode the completion text as a JSON object and extract the reply fields.
///
/// Missing keys fall back to defaults (`intent` "Unknown", `tone`
/// "Professional", `reply` empty). Numbers and booleans are kept as their
/// JSON text; `null`, arrays and objects count as missing.
pub fn parse_response(raw: &str) -> Result<ModelResponse, ParseFailure> {
    let value: Value = serde_json::from_str(raw).map_err(|e| ParseFailure {
        raw: raw.to_string(),
        reason: e.to_string(),
    })?;

    let Value::Object(map) = value else {
        return Err(ParseFailure {
            raw: raw.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    };

    Ok(ModelResponse {
        intent: field(&map, "intent").unwrap_or_else(|| DEFAULT_INTENT.to_string()),
        tone: field(&map, "tone").unwrap_or_else(|| DEFAULT_TONE.to_string()),
        reply: field(&map, "reply").unwrap_or_default(),
    })
}

fn field(map: &Map<String, Value>, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_keys_present() {
        let raw = r#"{"intent":"Inquiry","tone":"Formal","reply":"Dear Sam,\n\nThe invoice is attached."}"#;
        let response = parse_response(raw).unwrap();
        assert_eq!(response.intent, "Inquiry");
        assert_eq!(response.tone, "Formal");
        assert_eq!(response.reply, "Dear Sam,\n\nThe invoice is attached.");
        assert_eq!(response.intent_category(), Some(Intent::Inquiry));
    }

    #[test]
    fn test_missing_intent_defaults_to_unknown() {
        let response = parse_response(r#"{"tone":"Friendly","reply":"Hi!"}"#).unwrap();
        assert_eq!(response.intent, "Unknown");
        assert_eq!(response.tone, "Friendly");
        assert_eq!(response.reply, "Hi!");
        assert_eq!(response.intent_category(), None);
    }

    #[test]
    fn test_missing_tone_defaults_to_professional() {
        let response = parse_response(r#"{"intent":"Offer","reply":"Thanks"}"#).unwrap();
        assert_eq!(response.tone, "Professional");
    }

    #[test]
    fn test_missing_reply_defaults_to_empty() {
        let response = parse_response(r#"{"intent":"Offer","tone":"Formal"}"#).unwrap();
        assert_eq!(response.reply, "");
    }

    #[test]
    fn test_empty_object_gets_all_defaults() {
        let response = parse_response("{}").unwrap();
        assert_eq!(
            response,
            ModelResponse {
                intent: "Unknown".to_string(),
                tone: "Professional".to_string(),
                reply: String::new(),
            }
        );
    }

    #[test]
    fn test_null_and_nested_values_degrade_to_defaults() {
        let raw = r#"{"intent":null,"tone":["Formal"],"reply":{"text":"x"}}"#;
        let response = parse_response(raw).unwrap();
        assert_eq!(response.intent, "Unknown");
        assert_eq!(response.tone, "Professional");
        assert_eq!(response.reply, "");
    }

    #[test]
    fn test_scalar_values_are_stringified() {
        let response = parse_response(r#"{"intent":42,"tone":true,"reply":"ok"}"#).unwrap();
        assert_eq!(response.intent, "42");
        assert_eq!(response.tone, "true");
    }

    #[test]
    fn test_out_of_set_intent_is_kept() {
        let response = parse_response(r#"{"intent":"Spam","tone":"Formal","reply":""}"#).unwrap();
        assert_eq!(response.intent, "Spam");
        assert_eq!(response.intent_category(), None);
    }

    #[test]
    fn test_extra_keys_ignored() {
        let raw = r#"{"intent":"Complaint","tone":"Formal","reply":"Sorry","confidence":0.9}"#;
        let response = parse_response(raw).unwrap();
        assert_eq!(response.intent, "Complaint");
    }

    #[test]
    fn test_non_json_keeps_raw_text() {
        let err = parse_response("Sorry, I cannot help.").unwrap_err();
        assert_eq!(err.raw, "Sorry, I cannot help.");
        assert!(err.to_string().starts_with("Failed to parse model response"));
    }

    #[test]
    fn test_prose_around_json_is_rejected() {
        let raw = "Here is your reply:\n{\"intent\":\"Inquiry\",\"tone\":\"Formal\",\"reply\":\"Hi\"}";
        let err = parse_response(raw).unwrap_err();
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn test_non_object_json_rejected() {
        let err = parse_response(r#"["Inquiry","Formal","Hi"]"#).unwrap_err();
        assert_eq!(err.reason, "expected a JSON object");
        assert_eq!(err.raw, r#"["Inquiry","Formal","Hi"]"#);
    }

    #[test]
    fn test_intent_from_label_case_insensitive() {
        assert_eq!(Intent::from_label("complaint"), Some(Intent::Complaint));
        assert_eq!(Intent::from_label(" INFORMATION "), Some(Intent::Information));
        assert_eq!(Intent::from_label("General"), None);
    }
}
