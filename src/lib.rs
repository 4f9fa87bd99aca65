//! # ru-page-lang
//!
//! Fetches a single web page, strips non-content markup, extracts the
//! visible text of content tags, flags fragments containing Russian letters
//! and gives a whole-page language verdict.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ru_page_lang::{analyze_website, Options};
//!
//! # async fn run() {
//! let analysis = analyze_website("https://support.wix.com/ru", &Options::default()).await;
//! println!("Russian page: {}", analysis.is_russian_language);
//! println!("Russian fragments: {}", analysis.russian_elements_count);
//! # }
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetch**: one GET with a browser-like User-Agent ([`fetch`])
//! 2. **Charset**: taken from the `Content-Type` header, `utf-8` otherwise ([`encoding`])
//! 3. **Sanitize**: `script`, `style`, `noscript` and `iframe` removed ([`sanitize`])
//! 4. **Extract**: per-tag text fragments with a Russian flag ([`extractor`])
//! 5. **Classify**: statistical language identification of all text ([`language`])
//!
//! Errors never reach the caller. Any failing step yields a
//! [`WebsiteAnalysis`] with empty fields and the message in `error`.

mod analyze;
mod error;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Charset resolution and transcoding.
pub mod encoding;

/// Removal of non-content markup.
pub mod sanitize;

/// Per-tag text extraction and Russian-script flagging.
pub mod extractor;

/// Whole-page language classification.
pub mod language;

/// Single-attempt HTTP fetch.
pub mod fetch;

// Public API - re-exports
pub use analyze::shape_text_elements;
pub use error::{Error, Result};
pub use extractor::{contains_russian, is_russian_word};
pub use language::LanguageConfidence;
pub use options::{Options, ResultArrayType, DEFAULT_USER_AGENT};
pub use result::{IndexedText, TextElement, TextElements, WebsiteAnalysis};

/// Fetches and analyzes a page.
///
/// # Arguments
///
/// * `url` - An http or https URL
/// * `options` - Result shape and request settings
///
/// # Returns
///
/// Always returns a [`WebsiteAnalysis`]. When any step fails (invalid URL,
/// network failure, unknown charset, parse failure) the result has no text
/// elements, `languageConfidence` `"None"`, `detectedCharset` `"unknown"`
/// and the failure message in `error`. The failure is also logged.
///
/// # Example
///
/// ```rust,no_run
/// use ru_page_lang::{analyze_website, Options, ResultArrayType};
///
/// # async fn run() {
/// let options = Options {
///     result_array_type: ResultArrayType::OnlyText,
///     ..Options::default()
/// };
/// let analysis = analyze_website("https://example.com", &options).await;
/// if let Some(err) = &analysis.error {
///     eprintln!("analysis failed: {err}");
/// }
/// # }
/// ```
pub async fn analyze_website(url: &str, options: &Options) -> WebsiteAnalysis {
    analyze::analyze_url(url, options).await
}

/// Fetches and analyzes a page using default options.
pub async fn analyze_website_default(url: &str) -> WebsiteAnalysis {
    analyze_website(url, &Options::default()).await
}

/// Analyzes an already fetched response body.
///
/// Runs the same pipeline as [`analyze_website`] without the fetch step.
/// `content_type` is the response's `Content-Type` header value, used only
/// for charset resolution.
///
/// # Example
///
/// ```rust
/// use ru_page_lang::{analyze_bytes, Options};
///
/// let body = b"<html><body><p>\xCF\xF0\xE8\xE2\xE5\xF2</p></body></html>";
/// let analysis = analyze_bytes(
///     "https://example.com",
///     body,
///     Some("text/html; charset=windows-1251"),
///     &Options::default(),
/// );
/// assert_eq!(analysis.detected_charset, "windows-1251");
/// assert_eq!(analysis.russian_elements_count, 1);
/// ```
#[must_use]
pub fn analyze_bytes(
    url: &str,
    body: &[u8],
    content_type: Option<&str>,
    options: &Options,
) -> WebsiteAnalysis {
    analyze::analyze_body(url, body, content_type, options)
}
