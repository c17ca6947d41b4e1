//! Transform pipeline.
//!
//! Rule passes run in a fixed order over one document:
//!
//! - `strip`: tables, scripts, first `style`/`link`, popup overlay, and
//!   navigation menu anchors
//! - `head`: charset declarations, which must match the UTF-8 output
//! - `image_map`: hotspot classes, script handlers, absolute links, and the
//!   map image source
//! - `body`: element-only `body` with the page margin style
//!
//! Any error aborts the run; the partially edited tree is then discarded.

pub mod body;
pub mod head;
pub mod image_map;
pub mod strip;

use log::info;

use crate::dom::Document;
use crate::error::Result;
use crate::options::Options;
use crate::result::Report;

/// Apply every rule to `doc` in place.
pub fn transform(doc: &Document, options: &Options) -> Result<Report> {
    let mut report = Report::default();

    strip::strip_structure(doc, &mut report);
    strip::prune_navigation(doc, &mut report);
    head::declare_utf8(doc, &mut report);

    image_map::classify_hotspots(doc, options, &mut report)?;
    image_map::strip_handlers(doc, &mut report);
    image_map::absolutize_links(doc, &options.base_url, &mut report);
    image_map::normalize_image_source(doc, &mut report)?;

    body::rebuild_body(doc, &options.body_style, &mut report)?;

    info!(
        "removed {} table(s), {} script(s), {} menu link(s); hotspots: {}; {} href(s) rewritten",
        report.tables_removed,
        report.scripts_removed,
        report.navigation_links_removed,
        report.hotspots,
        report.hrefs_rewritten,
    );
    Ok(report)
}
