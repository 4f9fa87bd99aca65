//! Result types for page analysis.
//!
//! This module defines the structured output of one analysis run. The
//! serialized form uses camelCase keys and is the crate's JSON schema.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::encoding::UNKNOWN_CHARSET;
use crate::error::Error;
use crate::language::{LanguageConfidence, UNKNOWN_LANGUAGE};

/// One non-empty, trimmed text fragment taken from one matched element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Tag name the element was matched by.
    pub tag: String,

    /// Trimmed descendant text of the element. Never empty.
    pub text: String,

    /// Whether any whitespace-delimited token contains a Russian letter.
    pub contains_russian: bool,
}

/// A fragment's text keyed by its 1-based position.
///
/// Serializes as a single-entry map, e.g. `{"1": "Привет"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedText {
    /// 1-based position in extraction order.
    pub position: usize,

    /// The fragment text.
    pub text: String,
}

impl Serialize for IndexedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.position.to_string(), &self.text)?;
        map.end()
    }
}

/// The `textElements` field in either of its two shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TextElements {
    /// Full records with tag and Russian flag.
    Full(Vec<TextElement>),

    /// Position-to-text mappings only.
    OnlyText(Vec<IndexedText>),
}

impl TextElements {
    /// Number of fragments in either shape.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Full(elements) => elements.len(),
            Self::OnlyText(texts) => texts.len(),
        }
    }

    /// Returns `true` if no fragment was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Full records, or `None` in the text-only shape.
    #[must_use]
    pub fn as_full(&self) -> Option<&[TextElement]> {
        match self {
            Self::Full(elements) => Some(elements),
            Self::OnlyText(_) => None,
        }
    }

    /// Fragment texts in extraction order, whatever the shape.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Self::Full(elements) => elements.iter().map(|el| el.text.as_str()).collect(),
            Self::OnlyText(texts) => texts.iter().map(|t| t.text.as_str()).collect(),
        }
    }
}

impl Default for TextElements {
    fn default() -> Self {
        Self::Full(Vec::new())
    }
}

/// Result of analyzing one page.
///
/// Exactly one is produced per call to [`crate::analyze_website`]. On
/// failure every field takes its fixed empty value and `error` carries the
/// failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteAnalysis {
    /// The URL as given by the caller.
    pub url: String,

    /// `true` iff the whole-page language code is Russian (`rus`).
    pub is_russian_language: bool,

    /// English name of the detected language, or `"Unknown"`.
    pub detected_language: String,

    /// Extracted fragments, shaped by [`crate::ResultArrayType`].
    pub text_elements: TextElements,

    /// Number of fragments flagged as containing Russian.
    pub russian_elements_count: usize,

    /// Confidence label of the whole-page verdict.
    pub language_confidence: LanguageConfidence,

    /// Charset the body was decoded with, or `"unknown"` on failure.
    pub detected_charset: String,

    /// Failure message. Only present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebsiteAnalysis {
    /// Build the fixed failure shape for `url`.
    #[must_use]
    pub fn failure(url: &str, err: &Error) -> Self {
        Self {
            url: url.to_string(),
            is_russian_language: false,
            detected_language: UNKNOWN_LANGUAGE.to_string(),
            text_elements: TextElements::default(),
            russian_elements_count: 0,
            language_confidence: LanguageConfidence::None,
            detected_charset: UNKNOWN_CHARSET.to_string(),
            error: Some(err.to_string()),
        }
    }

    /// Returns `true` if this is the failure shape.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Pretty-printed JSON form.
    ///
    /// # Errors
    ///
    /// Only fails if a serializer invariant is broken; the type holds no
    /// non-string map keys.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
