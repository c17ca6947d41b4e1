//! Character encoding detection and strict decoding.
//!
//! KEGG serves its map pages as UTF-8, but saved copies occasionally carry a
//! legacy charset declaration or a byte-order mark. The loader honours both and
//! refuses bytes that are not valid in the detected encoding.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Bytes examined when sniffing a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#).expect("valid regex")
});

/// Detect the declared character encoding of an HTML document.
///
/// Looks for, in order: `<meta charset>`, then
/// `<meta http-equiv="Content-Type">`, within the first 1024 bytes.
/// Falls back to UTF-8. UTF-16 declarations are mapped to UTF-8, since a
/// document that can be sniffed as ASCII cannot really be UTF-16.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LIMIT)]);

    let declared = extract_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .or_else(|| {
            extract_content_type_charset(&head)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        });

    declared.map_or(UTF_8, Encoding::output_encoding)
}

fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether `label` names UTF-8 (`utf-8`, `UTF8`, `unicode-1-1-utf-8`, ...).
#[must_use]
pub fn is_utf8_label(label: &str) -> bool {
    Encoding::for_label(label.trim().as_bytes()) == Some(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// A byte-order mark wins over any declaration. Malformed sequences are an
/// error rather than being replaced with U+FFFD.
///
/// # Examples
///
/// ```
/// use kegg_map::encoding::decode;
///
/// let html = b"<html><head><meta charset=\"windows-1252\"></head><body>Caf\xE9</body></html>";
/// assert!(decode(html)?.contains("Café"));
/// # Ok::<(), kegg_map::Error>(())
/// ```
pub fn decode(html: &[u8]) -> Result<String> {
    let (encoding, body) = match Encoding::for_bom(html) {
        Some((encoding, bom_len)) => (encoding, &html[bom_len..]),
        None => (detect_encoding(html), html),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(std::borrow::Cow::into_owned)
        .ok_or_else(|| Error::ParseError(encoding.name().to_string()))
}
