//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate giving the pipeline the handful of
//! tree operations it needs: parsing, element lookup by tag, subtree removal
//! and descendant text.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

pub use tendril::StrTendril;

use crate::error::{Error, Result};

/// Parse decoded HTML into a document tree.
///
/// Never fails in practice: the HTML5 parser recovers from any input,
/// empty and binary bodies included, and always synthesizes a root
/// `<html>` element. [`Error::Parse`] exists for the result's error schema
/// and is only returned if that root is missing.
pub fn parse(html: &str) -> Result<Document> {
    let doc = Document::from(html);
    if !doc.select("html").exists() {
        return Err(Error::Parse("document has no root element".to_string()));
    }
    Ok(doc)
}

/// All elements with the given tag name, in document order.
#[inline]
#[must_use]
pub fn elements_by_tag<'a>(doc: &'a Document, tag: &str) -> Vec<Selection<'a>> {
    doc.select(tag).nodes().iter().map(|node| Selection::from(*node)).collect()
}

/// Remove every element with the given tag name, subtree included.
#[inline]
pub fn remove_by_tag(doc: &Document, tag: &str) {
    doc.select(tag).remove();
}

/// Concatenated text of the element and all of its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}
