//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Attribute access goes through
//! explicit `Option`s so that a missing attribute is always a checked case,
//! never an implicit lookup failure.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

pub use tendril::StrTendril;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose content is written back verbatim by the serializer.
const RAW_CONTENT_ELEMENTS: &[&str] = &["script", "style", "pre", "textarea"];

// === Parsing ===

/// Parse HTML text into a document using the HTML5 tree builder.
///
/// Never fails: unclosed tags, implicit `tbody`/`body` and other tag soup
/// produce a best-effort tree, as a browser would.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Querying ===

/// First element matching `selector`, if any.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let sel = doc.select(selector).first();
    if sel.exists() {
        Some(sel)
    } else {
        None
    }
}

/// Number of elements matching `selector`.
#[inline]
#[must_use]
pub fn count(doc: &Document, selector: &str) -> usize {
    doc.select(selector).length()
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Set an attribute value, replacing any previous one
#[inline]
pub fn set_attribute(sel: &Selection, name: &str, value: &str) {
    sel.set_attr(name, value);
}

/// Check if attribute exists
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Remove an attribute (no-op when absent)
#[inline]
pub fn remove_attribute(sel: &Selection, name: &str) {
    sel.remove_attr(name);
}

/// All attributes of a node as name/value pairs, in source order.
#[must_use]
pub fn node_attributes(node: &NodeRef) -> Vec<(String, String)> {
    node.attrs()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect()
}

// === Tag/Node Information ===

/// Whether `tag` is a void element.
#[must_use]
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Whether `tag` keeps its content verbatim when serialized.
#[must_use]
pub fn is_raw_content_element(tag: &str) -> bool {
    RAW_CONTENT_ELEMENTS.contains(&tag)
}

// === Text Content ===

/// Get all text content of node and descendants, untrimmed
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Tree Manipulation ===

/// Detach the selected nodes together with their subtrees
#[inline]
pub fn remove(sel: &Selection) {
    sel.remove();
}

/// Direct children of the first selected node that are not elements
/// (text, comments).
#[must_use]
pub fn non_element_children<'a>(sel: &Selection<'a>) -> Vec<NodeRef<'a>> {
    sel.nodes()
        .first()
        .map(|node| {
            node.children()
                .into_iter()
                .filter(|child| !child.is_element())
                .collect()
        })
        .unwrap_or_default()
}
