//! Per-tag text extraction and Russian-script flagging.
//!
//! Extraction scans the tree once per content tag rather than once overall.
//! Nested matches (a `div` holding a `p`, a `span` holding an `a`) each
//! yield their own fragment, so the same text can appear several times.
//! Consumers count on those duplicates; do not deduplicate here.

use crate::dom::{self, Document};
use crate::result::TextElement;

/// Content-bearing tags, in scan order.
pub static TEXT_TAGS: [&str; 11] = [
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "div", "span", "li", "a",
];

/// Returns `true` if `c` is a letter of the Russian alphabet (`а`-`я`,
/// `А`-`Я`, `ё`, `Ё`).
#[inline]
#[must_use]
pub fn is_russian_char(c: char) -> bool {
    matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё')
}

/// Returns `true` if the word contains at least one Russian letter.
///
/// # Examples
///
/// ```
/// use ru_page_lang::is_russian_word;
///
/// assert!(is_russian_word("привет"));
/// assert!(is_russian_word("Ёлка"));
/// assert!(!is_russian_word("Hello"));
/// ```
#[must_use]
pub fn is_russian_word(word: &str) -> bool {
    word.chars().any(is_russian_char)
}

/// Returns `true` if any whitespace-delimited token of `text` is Russian.
#[must_use]
pub fn contains_russian(text: &str) -> bool {
    text.split_whitespace().any(is_russian_word)
}

/// Collect the text fragments of a sanitized document.
///
/// For each tag of [`TEXT_TAGS`], every matching element is visited in
/// document order and its trimmed descendant text kept if non-empty.
#[must_use]
pub fn extract_text_elements(doc: &Document) -> Vec<TextElement> {
    let mut elements = Vec::new();

    for tag in TEXT_TAGS {
        for sel in dom::elements_by_tag(doc, tag) {
            let content = dom::text_content(&sel);
            let text = content.trim();
            if text.is_empty() {
                continue;
            }

            elements.push(TextElement {
                tag: tag.to_string(),
                text: text.to_string(),
                contains_russian: contains_russian(text),
            });
        }
    }

    elements
}

/// Number of fragments flagged as Russian.
#[must_use]
pub fn count_russian(elements: &[TextElement]) -> usize {
    elements.iter().filter(|el| el.contains_russian).count()
}
