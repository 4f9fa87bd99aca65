//! Whole-page language classification.
//!
//! Detection is delegated to `whatlang`, which reports ISO 639-3 codes and
//! carries a static code-to-name table. Both lookups are plain functions.

use serde::Serialize;
use whatlang::Lang;

use crate::result::TextElement;

/// Code returned when the identifier cannot classify the text.
pub const UNDETERMINED: &str = "und";

/// ISO 639-3 code for Russian.
pub const RUSSIAN: &str = "rus";

/// Texts shorter than this (in characters, after trimming) are not classified.
pub const MIN_DETECTION_LENGTH: usize = 3;

/// Display name for codes with no table entry.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Confidence label attached to the whole-page verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LanguageConfidence {
    /// The identifier returned a concrete language code.
    High,

    /// The identifier returned [`UNDETERMINED`].
    #[serde(rename = "Unable to determine")]
    UnableToDetermine,

    /// The analysis failed before classification.
    None,
}

impl LanguageConfidence {
    /// Label for an identifier result.
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        if code == UNDETERMINED {
            Self::UnableToDetermine
        } else {
            Self::High
        }
    }
}

/// Outcome of classifying a text corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageVerdict {
    /// ISO 639-3 code, or [`UNDETERMINED`].
    pub code: String,

    /// English language name, or [`UNKNOWN_LANGUAGE`].
    pub name: String,

    /// Confidence label derived from `code`.
    pub confidence: LanguageConfidence,

    /// `true` iff `code` is [`RUSSIAN`].
    pub is_russian: bool,
}

/// Identify the language of `text` as an ISO 639-3 code.
///
/// Returns [`UNDETERMINED`] for texts shorter than [`MIN_DETECTION_LENGTH`]
/// or when the identifier finds no language.
#[must_use]
pub fn detect_language(text: &str) -> &'static str {
    let text = text.trim();
    if text.chars().count() < MIN_DETECTION_LENGTH {
        return UNDETERMINED;
    }

    whatlang::detect(text).map_or(UNDETERMINED, |info| info.lang().code())
}

/// English name for an ISO 639-3 code, if the table has one.
#[must_use]
pub fn language_name(code: &str) -> Option<&'static str> {
    Lang::from_code(code).map(|lang| lang.eng_name())
}

/// Join fragment texts with single spaces, in extraction order.
#[must_use]
pub fn corpus(elements: &[TextElement]) -> String {
    elements
        .iter()
        .map(|el| el.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Classify a text corpus.
///
/// `is_russian` depends only on the raw code, not on whether the name
/// lookup succeeded.
#[must_use]
pub fn classify(text: &str) -> LanguageVerdict {
    let code = detect_language(text);

    LanguageVerdict {
        code: code.to_string(),
        name: language_name(code).unwrap_or(UNKNOWN_LANGUAGE).to_string(),
        confidence: LanguageConfidence::from_code(code),
        is_russian: code == RUSSIAN,
    }
}
