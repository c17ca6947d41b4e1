//! Deterministic, indented HTML serialization.
//!
//! The output is a pure function of the tree: each element starts on its own
//! line, indented by its depth. Elements without element children are written
//! on a single line with whitespace-collapsed text. Comments are not emitted.

use crate::dom::{self, Document, NodeRef, Selection};

/// Render the document as indented HTML, `indent` spaces per level.
///
/// # Example
///
/// ```rust
/// use kegg_map::{dom, serialize};
///
/// let doc = dom::parse("<p>Hello   <b>map</b></p>");
/// let html = serialize(&doc, 2);
/// assert!(html.starts_with("<!DOCTYPE html>\n<html>\n  <head></head>\n  <body>\n"));
/// assert!(html.contains("    <p>\n      Hello\n      <b>map</b>\n    </p>\n"));
/// ```
#[must_use]
pub fn serialize(doc: &Document, indent: usize) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    let html = doc.select("html");
    if let Some(root) = html.nodes().first() {
        push_node(root, 0, indent, &mut out);
    }
    out
}

fn push_node(node: &NodeRef, depth: usize, indent: usize, out: &mut String) {
    if node.is_element() {
        push_element(node, depth, indent, out);
    } else if node.is_text() {
        let text = collapse_whitespace(&node.text());
        if !text.is_empty() {
            push_indent(depth, indent, out);
            out.push_str(&escape_text(&text));
            out.push('\n');
        }
    }
}

fn push_element(node: &NodeRef, depth: usize, indent: usize, out: &mut String) {
    let Some(tag) = node.node_name() else {
        return;
    };

    push_indent(depth, indent, out);
    out.push('<');
    out.push_str(&tag);
    for (name, value) in dom::node_attributes(node) {
        out.push(' ');
        out.push_str(&name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(&value));
        out.push('"');
    }
    out.push('>');

    if dom::is_void_element(&tag) {
        out.push('\n');
        return;
    }

    if dom::is_raw_content_element(&tag) {
        out.push_str(&dom::inner_html(&Selection::from(*node)));
        push_end_tag(&tag, out);
        return;
    }

    let children = node.children();
    if children.iter().all(|child| !child.is_element()) {
        let text: String = children
            .iter()
            .filter(|child| child.is_text())
            .map(|child| child.text().to_string())
            .collect();
        out.push_str(&escape_text(&collapse_whitespace(&text)));
        push_end_tag(&tag, out);
        return;
    }

    out.push('\n');
    for child in &children {
        push_node(child, depth + 1, indent, out);
    }
    push_indent(depth, indent, out);
    push_end_tag(&tag, out);
}

fn push_end_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn push_indent(depth: usize, indent: usize, out: &mut String) {
    out.extend(std::iter::repeat(' ').take(depth * indent));
}

fn collapse_whitespace(text: &str) -> String {
    text.split_ascii_whitespace().collect::<Vec<_>>().join(" ")
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}

fn escape_attribute(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(ch),
        }
    }
    out
}
