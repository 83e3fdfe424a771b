//! Typed mirror of the document-understanding service response.
//!
//! Only the members the engine consumes are modelled; everything else in the
//! payload is ignored during deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Top-level analyzer response: `result -> contents[0] -> fields`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub result: AnalyzeResult,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResult {
    #[serde(default)]
    pub contents: Vec<ContentItem>,
}

/// One analyzed content item carrying the named, typed field wrappers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentItem {
    #[serde(default)]
    pub fields: HashMap<String, FieldValue>,
}

/// Typed value wrapper for one extracted field.
///
/// The analyzer reports a confidence alongside the value. The engine uses
/// the detected value as-is; confidence does not alter extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_boolean: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue {
            value_string: Some(value.to_string()),
            ..Default::default()
        }
    }

    pub fn date(value: &str) -> Self {
        FieldValue {
            value_date: Some(value.to_string()),
            ..Default::default()
        }
    }

    pub fn boolean(value: bool) -> Self {
        FieldValue {
            value_boolean: Some(value),
            ..Default::default()
        }
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
