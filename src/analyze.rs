//! Analysis orchestration.
//!
//! Sequences fetch, charset resolution, decoding, parsing, sanitization,
//! extraction and classification. This is the only place errors are caught:
//! every `Err` from a step becomes the failure-shaped [`WebsiteAnalysis`].

use tracing::{debug, error};

use crate::dom;
use crate::encoding;
use crate::error::{Error, Result};
use crate::extractor::{count_russian, extract_text_elements};
use crate::fetch;
use crate::language;
use crate::options::{Options, ResultArrayType};
use crate::result::{IndexedText, TextElement, TextElements, WebsiteAnalysis};
use crate::sanitize::sanitize;

/// Fetch and analyze one page. Never fails; see [`crate::analyze_website`].
pub(crate) async fn analyze_url(url: &str, options: &Options) -> WebsiteAnalysis {
    match fetch_and_analyze(url, options).await {
        Ok(analysis) => analysis,
        Err(err) => failure(url, &err),
    }
}

/// Analyze an already fetched body. Never fails; see [`crate::analyze_bytes`].
pub(crate) fn analyze_body(
    url: &str,
    body: &[u8],
    content_type: Option<&str>,
    options: &Options,
) -> WebsiteAnalysis {
    run_pipeline(url, body, content_type, options).unwrap_or_else(|err| failure(url, &err))
}

async fn fetch_and_analyze(url: &str, options: &Options) -> Result<WebsiteAnalysis> {
    let parsed = fetch::validate_url(url)?;
    let raw = fetch::fetch(&parsed, options).await?;
    debug!(url, status = raw.status.as_u16(), "analyzing response");
    run_pipeline(url, &raw.body, raw.content_type(), options)
}

// Must stay synchronous: the document tree is not `Send` and may not be held
// across an await.
fn run_pipeline(
    url: &str,
    body: &[u8],
    content_type: Option<&str>,
    options: &Options,
) -> Result<WebsiteAnalysis> {
    let charset = encoding::resolve_charset(content_type);
    debug!(url, charset = %charset, "resolved charset");

    let html = encoding::decode(body, &charset)?;
    let doc = dom::parse(&html)?;
    sanitize(&doc);

    let elements = extract_text_elements(&doc);
    let russian_elements_count = count_russian(&elements);
    let verdict = language::classify(&language::corpus(&elements));
    debug!(
        url,
        elements = elements.len(),
        russian = russian_elements_count,
        language = %verdict.code,
        "analyzed page"
    );

    Ok(WebsiteAnalysis {
        url: url.to_string(),
        is_russian_language: verdict.is_russian,
        detected_language: verdict.name,
        text_elements: shape_text_elements(elements, options.result_array_type),
        russian_elements_count,
        language_confidence: verdict.confidence,
        detected_charset: charset,
        error: None,
    })
}

/// Convert extracted records into the requested result shape.
#[must_use]
pub fn shape_text_elements(elements: Vec<TextElement>, shape: ResultArrayType) -> TextElements {
    match shape {
        ResultArrayType::Full => TextElements::Full(elements),
        ResultArrayType::OnlyText => TextElements::OnlyText(
            elements
                .into_iter()
                .enumerate()
                .map(|(i, el)| IndexedText { position: i + 1, text: el.text })
                .collect(),
        ),
    }
}

fn failure(url: &str, err: &Error) -> WebsiteAnalysis {
    error!(url, error = %err, "Error analyzing website");
    WebsiteAnalysis::failure(url, err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageConfidence;

    fn element(tag: &str, text: &str, contains_russian: bool) -> TextElement {
        TextElement { tag: tag.to_string(), text: text.to_string(), contains_russian }
    }

    #[test]
    fn full_shape_keeps_records() {
        let elements = vec![element("p", "Привет", true)];
        let shaped = shape_text_elements(elements.clone(), ResultArrayType::Full);
        assert_eq!(shaped, TextElements::Full(elements));
    }

    #[test]
    fn only_text_shape_uses_one_based_positions() {
        let elements = vec![element("h1", "one", false), element("p", "два", true), element("a", "three", false)];
        let shaped = shape_text_elements(elements, ResultArrayType::OnlyText);
        let value = serde_json::to_value(&shaped).expect("serialize");
        assert_eq!(value, serde_json::json!([{"1": "one"}, {"2": "два"}, {"3": "three"}]));
    }

    #[test]
    fn pipeline_success_fields() {
        let html = "<html><body><h1>Привет</h1><p>Hello</p></body></html>";
        let analysis = run_pipeline("https://example.com", html.as_bytes(), None, &Options::default())
            .expect("pipeline succeeds");
        assert_eq!(analysis.detected_charset, "utf-8");
        assert_eq!(analysis.russian_elements_count, 1);
        assert_eq!(analysis.text_elements.texts(), ["Привет", "Hello"]);
        assert!(analysis.error.is_none());
    }

    #[test]
    fn pipeline_propagates_unsupported_charset() {
        let err = run_pipeline("https://example.com", b"<p>x</p>", Some("text/html; charset=bogus"), &Options::default())
            .expect_err("bogus charset must fail");
        assert!(matches!(err, Error::UnsupportedCharset(_)));
    }

    #[test]
    fn analyze_body_folds_errors_into_failure_shape() {
        let analysis = analyze_body(
            "https://example.com",
            b"<p>x</p>",
            Some("text/html; charset=bogus"),
            &Options::default(),
        );
        assert_eq!(analysis.error.as_deref(), Some("Encoding not recognized: 'bogus'"));
        assert_eq!(analysis.detected_charset, "unknown");
        assert_eq!(analysis.language_confidence, LanguageConfidence::None);
        assert!(analysis.text_elements.is_empty());
    }

    #[tokio::test]
    async fn analyze_url_rejects_non_http_scheme() {
        let analysis = analyze_url("file:///etc/passwd", &Options::default()).await;
        assert!(analysis.is_error());
        assert_eq!(analysis.russian_elements_count, 0);
    }
}
