//! Structural stripping and navigation pruning.
//!
//! Each rule targets a disjoint set of nodes, so the rules commute and running
//! them in any order gives the same tree.

use log::debug;

use crate::dom::{self, Document, Selection};
use crate::result::Report;
use crate::rules::{NAVIGATION_LABELS, REMOVE_ALL_TAGS, REMOVE_FIRST_TAGS, SENTINEL_DIV_ID};

/// Remove every element matching `selector`; returns how many were removed.
fn remove_all(doc: &Document, selector: &str) -> usize {
    let matched = doc.select(selector);
    let removed = matched.length();
    dom::remove(&matched);
    removed
}

/// Remove the first element matching `selector`; returns whether one existed.
fn remove_first(doc: &Document, selector: &str) -> bool {
    match dom::first_match(doc, selector) {
        Some(first) => {
            dom::remove(&first);
            true
        }
        None => false,
    }
}

/// Remove layout tables, scripts, the first stylesheet and link element, and
/// the popup overlay container.
pub fn strip_structure(doc: &Document, report: &mut Report) {
    let [tables, scripts] = REMOVE_ALL_TAGS.map(|tag| remove_all(doc, tag));
    let [style, link] = REMOVE_FIRST_TAGS.map(|tag| remove_first(doc, tag));
    let overlay = remove_first(doc, &format!(r#"div[id="{SENTINEL_DIV_ID}"]"#));

    debug!(
        "stripped {tables} table(s), {scripts} script(s), style: {style}, link: {link}, overlay: {overlay}"
    );

    report.tables_removed += tables;
    report.scripts_removed += scripts;
    report.style_removed |= style;
    report.link_removed |= link;
    report.overlay_removed |= overlay;
}

/// Remove anchors whose whole text is one of the navigation menu labels.
pub fn prune_navigation(doc: &Document, report: &mut Report) {
    let mut removed = 0;

    for node in doc.select("a").nodes() {
        let anchor = Selection::from(*node);
        if NAVIGATION_LABELS.contains(&*dom::text_content(&anchor)) {
            dom::remove(&anchor);
            removed += 1;
        }
    }

    debug!("pruned {removed} navigation link(s)");
    report.navigation_links_removed += removed;
}
