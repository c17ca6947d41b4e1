//! # kegg-map
//!
//! Rewrites a KEGG pathway map page into a clean, redistributable static
//! HTML document.
//!
//! ## Quick Start
//!
//! ```rust
//! use kegg_map::process;
//!
//! let html = r##"<html><body>
//! <table><tr><td><a href="/kegg/pathway.html">Pathway menu</a></td></tr></table>
//! <img src="/kegg/pathway/map/map00010.png" usemap="#mapdata">
//! <map name="mapdata">
//!   <area shape="rect" coords="0,0,10,10" href="/kegg-bin/show_pathway?map00020">
//!   <area shape="circle" coords="5,5,3" href="/entry/C00031" onmouseover="popupTimer()">
//! </map>
//! </body></html>"##;
//!
//! let result = process(html)?;
//! assert!(result.html.contains(r##"<img src="map00010.png" usemap="#mapdata">"##));
//! assert!(result.html.contains(r#"class="pathway""#));
//! assert_eq!(result.report.hotspots.compound, 1);
//! # Ok::<(), kegg_map::Error>(())
//! ```
//!
//! ## What the pipeline does
//!
//! - **Strips chrome**: tables, scripts, the first stylesheet and link element,
//!   the popup overlay, the navigation menu anchors, and the script handlers
//! - **Classifies hotspots**: each `area` gets `pathway`, `enzyme`,
//!   `reaction` or `compound` from its shape
//! - **Absolutizes links** against `https://www.kegg.jp`
//! - **Declares UTF-8** in any `<meta>` charset declaration, matching the
//!   encoding the output is written in
//! - **Localizes the map image** by reducing its `src` to a file name
//! - **Rebuilds `body`** with element children only and a page margin
//! - **Pretty-prints** the result deterministically

mod error;
mod files;
mod options;
mod result;
mod serialize;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and strict decoding.
pub mod encoding;

/// Rule passes and their orchestration.
pub mod pipeline;

/// Static rule tables: labels, tags, shapes and classes.
pub mod rules;

/// Link absolutization and file name extraction.
pub mod url_utils;

use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, ShapePolicy};
pub use pipeline::transform;
pub use result::{HotspotCounts, ProcessResult, Report};
pub use rules::HotspotClass;
pub use serialize::serialize;

/// Parse HTML text into a document tree.
///
/// Parsing is lenient and never fails; see [`dom::parse`].
#[must_use]
pub fn load(html: &str) -> dom::Document {
    dom::parse(html)
}

/// Process a map page with default options.
pub fn process(html: &str) -> Result<ProcessResult> {
    process_with_options(html, &Options::default())
}

/// Process a map page with custom options.
///
/// # Example
///
/// ```rust
/// use kegg_map::{process_with_options, Options, ShapePolicy};
///
/// let html = r#"<body><img src="map.png"><area shape="default" href="/x"></body>"#;
/// let options = Options {
///     unknown_shapes: ShapePolicy::Skip,
///     ..Options::default()
/// };
/// let result = process_with_options(html, &options)?;
/// assert_eq!(result.report.hotspots_skipped, 1);
/// # Ok::<(), kegg_map::Error>(())
/// ```
pub fn process_with_options(html: &str, options: &Options) -> Result<ProcessResult> {
    let doc = load(html);
    let report = transform(&doc, options)?;
    let html = serialize(&doc, options.indent);
    Ok(ProcessResult { html, report })
}

/// Process raw bytes, detecting the character encoding first.
///
/// The encoding comes from a byte-order mark, a `<meta charset>` or a
/// `<meta http-equiv="Content-Type">` declaration, defaulting to UTF-8.
/// Bytes that are invalid in that encoding yield [`Error::ParseError`].
pub fn process_bytes(html: &[u8]) -> Result<ProcessResult> {
    process_bytes_with_options(html, &Options::default())
}

/// Process raw bytes with custom options.
pub fn process_bytes_with_options(html: &[u8], options: &Options) -> Result<ProcessResult> {
    let text = encoding::decode(html)?;
    process_with_options(&text, options)
}

/// Read `input`, process it and write the result to `output`.
///
/// Nothing is written unless every step succeeds; an existing `output` file
/// is left untouched on failure.
pub fn process_file(input: &Path, output: &Path, options: &Options) -> Result<Report> {
    let bytes = files::read_input(input)?;
    let result = process_bytes_with_options(&bytes, options)?;
    files::write_atomic(output, &result.html)?;
    Ok(result.report)
}
