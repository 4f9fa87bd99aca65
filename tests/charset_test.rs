use ru_page_lang::encoding::{resolve_charset, DEFAULT_CHARSET};
use ru_page_lang::{analyze_bytes, LanguageConfidence, Options};

const URL: &str = "https://example.com/";

#[test]
fn header_charset_resolved_verbatim() {
    assert_eq!(resolve_charset(Some("text/html; charset=windows-1251")), "windows-1251");
    assert_eq!(resolve_charset(Some("text/html;charset=UTF-8")), "UTF-8");
    assert_eq!(resolve_charset(Some("text/html; Charset=cp1251; q=1")), "cp1251");
}

#[test]
fn header_without_charset_defaults() {
    assert_eq!(resolve_charset(None), DEFAULT_CHARSET);
    assert_eq!(resolve_charset(Some("text/html")), "utf-8");
    assert_eq!(resolve_charset(Some("")), "utf-8");
}

#[test]
fn windows1251_body_decoded() {
    // <p>Привет мир</p> in windows-1251
    let body = b"<p>\xCF\xF0\xE8\xE2\xE5\xF2 \xEC\xE8\xF0</p>";
    let analysis = analyze_bytes(URL, body, Some("text/html; charset=windows-1251"), &Options::default());

    assert_eq!(analysis.error, None);
    assert_eq!(analysis.detected_charset, "windows-1251");
    assert_eq!(analysis.text_elements.texts(), ["Привет мир"]);
    assert_eq!(analysis.russian_elements_count, 1);
}

#[test]
fn koi8r_body_decoded() {
    // <h1>мир</h1> in KOI8-R
    let body = b"<h1>\xCD\xC9\xD2</h1>";
    let analysis = analyze_bytes(URL, body, Some("text/html; charset=KOI8-R"), &Options::default());

    assert_eq!(analysis.detected_charset, "KOI8-R");
    assert_eq!(analysis.text_elements.texts(), ["мир"]);
}

#[test]
fn body_meta_charset_is_ignored() {
    // Header says nothing, so utf-8 is used even though the page declares windows-1251
    let body = "<html><head><meta charset=\"windows-1251\"></head><body><p>Привет</p></body></html>";
    let analysis = analyze_bytes(URL, body.as_bytes(), Some("text/html"), &Options::default());

    assert_eq!(analysis.detected_charset, "utf-8");
    assert_eq!(analysis.text_elements.texts(), ["Привет"]);
}

#[test]
fn mislabeled_body_still_succeeds() {
    // utf-8 bytes decoded as windows-1251 give mojibake, not an error
    let analysis = analyze_bytes(
        URL,
        "<p>Привет</p>".as_bytes(),
        Some("text/html; charset=windows-1251"),
        &Options::default(),
    );

    assert!(analysis.error.is_none());
    assert_eq!(analysis.text_elements.len(), 1);
    assert_ne!(analysis.text_elements.texts(), ["Привет"]);
}

#[test]
fn quoted_header_charset_decodes() {
    let analysis = analyze_bytes(
        URL,
        "<p>Привет мир</p>".as_bytes(),
        Some("text/html; charset=\"utf-8\""),
        &Options::default(),
    );

    // Reported verbatim, quotes included
    assert_eq!(analysis.error, None);
    assert_eq!(analysis.detected_charset, "\"utf-8\"");
    assert_eq!(analysis.text_elements.texts(), ["Привет мир"]);
    assert_eq!(analysis.russian_elements_count, 1);
}

#[test]
fn quoted_windows1251_header_decodes() {
    // <p>Привет</p> in windows-1251
    let body = b"<p>\xCF\xF0\xE8\xE2\xE5\xF2</p>";
    let analysis = analyze_bytes(URL, body, Some("text/html; charset='windows-1251'"), &Options::default());

    assert_eq!(analysis.detected_charset, "'windows-1251'");
    assert_eq!(analysis.text_elements.texts(), ["Привет"]);
}

#[test]
fn unknown_charset_fails_at_decode() {
    let analysis = analyze_bytes(
        URL,
        b"<p>text</p>",
        Some("text/html; charset=\"x-no-such-charset\""),
        &Options::default(),
    );

    assert_eq!(
        analysis.error.as_deref(),
        Some("Encoding not recognized: '\"x-no-such-charset\"'")
    );
    assert_eq!(analysis.detected_charset, "unknown");
    assert_eq!(analysis.language_confidence, LanguageConfidence::None);
    assert_eq!(analysis.russian_elements_count, 0);
}
