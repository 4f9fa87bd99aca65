//! Charset resolution and transcoding.
//!
//! The charset comes from the HTTP `Content-Type` header only; the body is
//! never sniffed. The resolved name is handed to `encoding_rs` as a WHATWG
//! label, and names it does not know surface as
//! [`Error::UnsupportedCharset`].

use crate::error::{Error, Result};
use encoding_rs::{Encoding, REPLACEMENT};
use regex::Regex;
use std::sync::LazyLock;

/// Charset assumed when the header carries none.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Charset reported on the failure path.
pub const UNKNOWN_CHARSET: &str = "unknown";

/// Match `charset=<value>` inside a `Content-Type` header value
#[allow(clippy::expect_used)]
static CHARSET_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)charset=([^;]+)").expect("valid regex"));

/// Resolve the charset declared by a `Content-Type` header value.
///
/// The value after `charset=` is returned verbatim up to the next `;`, with
/// no normalization and no check against known encodings. Absent headers
/// and headers without the parameter resolve to [`DEFAULT_CHARSET`].
///
/// # Examples
///
/// ```
/// use ru_page_lang::encoding::resolve_charset;
///
/// assert_eq!(resolve_charset(Some("text/html; charset=windows-1251")), "windows-1251");
/// assert_eq!(resolve_charset(Some("text/html")), "utf-8");
/// assert_eq!(resolve_charset(None), "utf-8");
/// ```
#[must_use]
pub fn resolve_charset(content_type: Option<&str>) -> String {
    content_type
        .and_then(|value| CHARSET_PARAM_RE.captures(value))
        .and_then(|c| c.get(1))
        .map_or_else(|| DEFAULT_CHARSET.to_string(), |m| m.as_str().to_string())
}

/// Look up the decoder for a charset name.
///
/// The raw name is tried first, then the name with surrounding whitespace
/// and `"`/`'` quotes removed (`charset="utf-8"` is valid header syntax).
/// The `replacement` encoding (labels such as `iso-2022-kr`) decodes every
/// input to U+FFFD, so it is rejected like an unknown label.
pub fn encoding_for(charset: &str) -> Result<&'static Encoding> {
    let unquoted = charset.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    let found = Encoding::for_label(charset.as_bytes())
        .or_else(|| Encoding::for_label(unquoted.as_bytes()));

    match found {
        Some(encoding) if encoding != REPLACEMENT => Ok(encoding),
        _ => Err(Error::UnsupportedCharset(charset.to_string())),
    }
}

/// Decode raw response bytes using the named charset.
///
/// A leading BOM matching the encoding is dropped. Malformed sequences are
/// replaced with U+FFFD rather than failing.
pub fn decode(bytes: &[u8], charset: &str) -> Result<String> {
    let encoding = encoding_for(charset)?;
    let (decoded, _had_errors) = encoding.decode_with_bom_removal(bytes);
    Ok(decoded.into_owned())
}
