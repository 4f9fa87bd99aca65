//! Configuration options for page analysis.
//!
//! The `Options` struct controls the shape of the result and the outbound
//! request. The JSON form accepted by [`Options`]'s `Deserialize` impl is
//! `{"resultArrayType": "onlyText"}`; every key is optional.

use serde::Deserialize;
use std::time::Duration;

/// Browser-like User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Shape of the `textElements` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResultArrayType {
    /// Full `{tag, text, containsRussian}` records.
    #[default]
    Full,

    /// `{"<1-based position>": text}` mappings.
    OnlyText,
}

/// Configuration options for page analysis.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use ru_page_lang::{Options, ResultArrayType};
///
/// let options = Options {
///     result_array_type: ResultArrayType::OnlyText,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Shape of `textElements` in the result.
    ///
    /// Only changes presentation: counts and verdicts are computed from the
    /// full records either way.
    ///
    /// Default: `ResultArrayType::Full`
    pub result_array_type: ResultArrayType,

    /// User-Agent header of the outbound request.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Overall request timeout.
    ///
    /// Default: `None` (transport default)
    #[serde(skip)]
    pub timeout: Option<Duration>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            result_array_type: ResultArrayType::Full,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl Options {
    /// Options producing the text-only result shape.
    #[must_use]
    pub fn only_text() -> Self {
        Self {
            result_array_type: ResultArrayType::OnlyText,
            ..Self::default()
        }
    }
}
