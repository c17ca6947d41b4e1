//! URL utilities for link rewriting and image source normalization.

use url::Url;

/// Check if a string is already an absolute URL (carries a scheme).
///
/// `javascript:` and `mailto:` links count as absolute: they are not paths on
/// the KEGG host and must not be prefixed.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    Url::parse(s.trim()).is_ok()
}

/// Resolve a KEGG-relative `href` against `base`.
///
/// Returns `None` when the value must be left as it is: already absolute,
/// protocol-relative (`//host/path`), already carrying the base prefix,
/// empty, or a same-document fragment.
/// This makes the rewrite idempotent.
///
/// Root-relative paths are prefixed verbatim (`/kegg-bin/x` becomes
/// `{base}/kegg-bin/x`); other relative paths get a separating slash.
///
/// # Examples
///
/// ```
/// use kegg_map::url_utils::absolutize;
///
/// let href = "/kegg-bin/show_pathway?map00010";
/// let once = absolutize(href, "https://www.kegg.jp").unwrap();
/// assert_eq!(once, "https://www.kegg.jp/kegg-bin/show_pathway?map00010");
/// assert_eq!(absolutize(&once, "https://www.kegg.jp"), None);
/// ```
#[must_use]
pub fn absolutize(href: &str, base: &str) -> Option<String> {
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("//")
        || href.starts_with(base)
        || is_absolute_url(href)
    {
        return None;
    }

    let base = base.trim_end_matches('/');
    if href.starts_with('/') {
        Some(format!("{base}{href}"))
    } else {
        Some(format!("{base}/{href}"))
    }
}

/// Reduce an image source to its bare file name.
///
/// Query string and fragment are dropped before taking the last path
/// component, so both local paths and remote URLs end up referencing a
/// co-located file.
///
/// # Examples
///
/// ```
/// use kegg_map::url_utils::file_basename;
///
/// assert_eq!(file_basename("/tmp/kegg/map00010.png"), "map00010.png");
/// assert_eq!(file_basename("/kegg/pathway/map/map00010.png?1620"), "map00010.png");
/// ```
#[must_use]
pub fn file_basename(src: &str) -> &str {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    path.rsplit(['/', '\\']).next().unwrap_or_default()
}
