//! Body reconstruction.

use log::debug;

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::result::Report;

/// Keep only element children of `body`, in their original order, and set
/// its inline style.
///
/// The stray nodes are collected before any of them is detached, so the child
/// list is never walked while it changes.
pub fn rebuild_body(doc: &Document, style: &str, report: &mut Report) -> Result<()> {
    let body = dom::first_match(doc, "body").ok_or(Error::MissingElementError("body"))?;

    let strays = dom::non_element_children(&body);
    for node in &strays {
        dom::remove(&Selection::from(*node));
    }

    dom::set_attribute(&body, "style", style);

    debug!("dropped {} non-element body node(s)", strays.len());
    report.body_nodes_dropped += strays.len();
    Ok(())
}
