//! Markup sanitization.
//!
//! Removes elements whose content is never shown as page text before any
//! text is collected from the tree.

use crate::dom::{self, Document};

/// Tags removed together with their subtrees.
///
/// The names are disjoint, so removal order does not matter.
pub static EXCLUDED_TAGS: [&str; 4] = ["script", "style", "noscript", "iframe"];

/// Strip scripts, styles, no-script fallbacks and inline frames.
///
/// Running this on an already sanitized tree changes nothing.
pub fn sanitize(doc: &Document) {
    for tag in EXCLUDED_TAGS {
        dom::remove_by_tag(doc, tag);
    }
}
