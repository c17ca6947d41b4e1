//! Charset declaration rewriting.
//!
//! Output is always written as UTF-8, whatever the input was decoded from,
//! so any surviving `<meta>` charset declaration must say so.

use log::debug;

use crate::dom::{self, Document, Selection};
use crate::encoding::is_utf8_label;
use crate::result::Report;
use crate::rules::OUTPUT_CHARSET;

/// Value of the `charset` parameter in a `Content-Type` string.
fn content_type_charset(content: &str) -> Option<&str> {
    content.split(';').find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

/// Point `<meta charset>` and `<meta http-equiv="Content-Type">` at UTF-8.
pub fn declare_utf8(doc: &Document, report: &mut Report) {
    let mut rewritten = 0;

    for node in doc.select("meta[charset]").nodes() {
        let meta = Selection::from(*node);
        let declared = dom::get_attribute(&meta, "charset").unwrap_or_default();
        if !is_utf8_label(&declared) {
            dom::set_attribute(&meta, "charset", OUTPUT_CHARSET);
            rewritten += 1;
        }
    }

    for node in doc.select("meta[http-equiv][content]").nodes() {
        let meta = Selection::from(*node);
        let is_content_type = dom::get_attribute(&meta, "http-equiv")
            .is_some_and(|value| value.trim().eq_ignore_ascii_case("content-type"));
        if !is_content_type {
            continue;
        }

        let content = dom::get_attribute(&meta, "content").unwrap_or_default();
        if content_type_charset(&content).is_some_and(is_utf8_label) {
            continue;
        }

        let mime = match content.split(';').next().map(str::trim) {
            Some(mime) if !mime.is_empty() => mime,
            _ => "text/html",
        };
        dom::set_attribute(&meta, "content", &format!("{mime}; charset={OUTPUT_CHARSET}"));
        rewritten += 1;
    }

    debug!("rewrote {rewritten} charset declaration(s)");
    report.charset_declarations_rewritten += rewritten;
}
