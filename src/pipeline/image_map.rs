//! Image-map hotspot classification, link rewriting and image source
//! normalization.

use log::{debug, warn};

use crate::dom::{self, Document, Selection};
use crate::error::{Error, Result};
use crate::options::{Options, ShapePolicy};
use crate::result::Report;
use crate::rules::{self, HANDLER_ATTRIBUTES};
use crate::url_utils::{absolutize, file_basename};

/// Assign each `area` a class derived from its shape.
///
/// The class replaces any existing value. Hotspots that cannot be classified
/// abort the run under [`ShapePolicy::Fail`] and are left as they are under
/// [`ShapePolicy::Skip`].
pub fn classify_hotspots(doc: &Document, options: &Options, report: &mut Report) -> Result<()> {
    for (index, node) in doc.select("area").nodes().iter().enumerate() {
        let area = Selection::from(*node);
        let shape = dom::get_attribute(&area, "shape");
        let href = dom::get_attribute(&area, "href");

        match rules::classify(shape.as_deref(), href.as_deref()) {
            Ok(class) => {
                dom::set_attribute(&area, "class", class.as_str());
                report.hotspots.record(class);
            }
            Err(fault) => match options.unknown_shapes {
                ShapePolicy::Fail => {
                    return Err(Error::ClassificationError {
                        index,
                        reason: fault.to_string(),
                    });
                }
                ShapePolicy::Skip => {
                    warn!("skipping area at index {index}: {fault}");
                    report.hotspots_skipped += 1;
                }
            },
        }
    }

    debug!("classified hotspots: {}", report.hotspots);
    Ok(())
}

/// Drop the hover and load handlers that drive KEGG's popup overlay, on every
/// element.
pub fn strip_handlers(doc: &Document, report: &mut Report) {
    let selector = HANDLER_ATTRIBUTES.map(|attr| format!("[{attr}]")).join(", ");
    let mut removed = 0;

    for node in doc.select(&selector).nodes() {
        let el = Selection::from(*node);
        for attr in HANDLER_ATTRIBUTES {
            if dom::has_attribute(&el, attr) {
                dom::remove_attribute(&el, attr);
                removed += 1;
            }
        }
    }

    debug!("removed {removed} handler attribute(s)");
    report.handlers_removed += removed;
}

/// Prefix every relative `href` (hotspots, anchors, surviving `link`s) with the
/// base URL.
pub fn absolutize_links(doc: &Document, base_url: &str, report: &mut Report) {
    let mut rewritten = 0;

    for node in doc.select("[href]").nodes() {
        let el = Selection::from(*node);
        let Some(href) = dom::get_attribute(&el, "href") else {
            continue;
        };
        if let Some(absolute) = absolutize(&href, base_url) {
            dom::set_attribute(&el, "href", &absolute);
            rewritten += 1;
        }
    }

    debug!("rewrote {rewritten} href(s) against {base_url}");
    report.hrefs_rewritten += rewritten;
}

/// Point the map image at a co-located file by reducing its `src` to the
/// bare file name.
pub fn normalize_image_source(doc: &Document, report: &mut Report) -> Result<()> {
    let img = dom::first_match(doc, "img").ok_or(Error::MissingElementError("img"))?;

    let Some(src) = dom::get_attribute(&img, "src") else {
        debug!("map image has no src, leaving it untouched");
        return Ok(());
    };

    let name = file_basename(&src);
    if name != src {
        debug!("image source {src} -> {name}");
        dom::set_attribute(&img, "src", name);
        report.image_source_rewritten = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn areas(doc: &Document) -> Vec<Selection<'_>> {
        doc.select("area").nodes().iter().map(|n| Selection::from(*n)).collect()
    }

    #[test]
    fn classify_by_shape() {
        let doc = dom::parse(
            r#"<map name="mapdata">
            <area shape="rect" coords="1,2,3,4" href="/kegg-bin/show_pathway?map00020">
            <area shape="rect" coords="1,2,3,4" href="/dbget-bin/www_bget?K00844" class="old">
            <area shape="poly" coords="1,2,3,4,5,6" href="/dbget-bin/www_bget?R01786">
            <area shape="circle" coords="5,5,4" href="/dbget-bin/www_bget?C00031">
            </map>"#,
        );
        let mut report = Report::default();
        classify_hotspots(&doc, &Options::default(), &mut report).unwrap();

        let classes: Vec<Option<String>> =
            areas(&doc).iter().map(|a| dom::get_attribute(a, "class")).collect();
        assert_eq!(
            classes,
            [
                Some("pathway".to_string()),
                Some("enzyme".to_string()),
                Some("reaction".to_string()),
                Some("compound".to_string()),
            ]
        );
        assert_eq!(report.hotspots.total(), 4);
    }

    #[test]
    fn unknown_shape_fails_by_default() {
        let doc = dom::parse(
            r#"<area shape="circle" href="/a"><area shape="default" href="/b">"#,
        );
        let err = classify_hotspots(&doc, &Options::default(), &mut Report::default())
            .unwrap_err();

        match err {
            Error::ClassificationError { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("default"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_shape_skipped_when_lenient() {
        let doc = dom::parse(
            r#"<area href="/a" class="keep"><area shape="rect"><area shape="poly" href="/c">"#,
        );
        let options = Options {
            unknown_shapes: ShapePolicy::Skip,
            ..Options::default()
        };
        let mut report = Report::default();
        classify_hotspots(&doc, &options, &mut report).unwrap();

        let areas = areas(&doc);
        assert_eq!(dom::get_attribute(&areas[0], "class"), Some("keep".to_string()));
        assert_eq!(dom::get_attribute(&areas[1], "class"), None);
        assert_eq!(dom::get_attribute(&areas[2], "class"), Some("reaction".to_string()));
        assert_eq!(report.hotspots_skipped, 2);
    }

    #[test]
    fn strip_handlers_everywhere() {
        let doc = dom::parse(
            r#"<area shape="rect" onmouseover="popupTimer(1)" onmouseout="hideMapTn()">
            <img src="x.png" onmouseover="zoom()" onload="fit()"><p onclick="go()">x</p>"#,
        );
        let mut report = Report::default();
        strip_handlers(&doc, &mut report);

        assert_eq!(dom::count(&doc, "[onmouseover], [onmouseout], [onload]"), 0);
        assert_eq!(dom::count(&doc, "[onclick]"), 1);
        assert_eq!(report.handlers_removed, 4);
    }

    #[test]
    fn absolutize_links_on_areas_and_anchors() {
        let doc = dom::parse(
            r##"<area shape="rect" href="/kegg-bin/show_pathway?map00010">
            <area shape="circle" nohref>
            <a href="/entry/map00010">entry</a>
            <a href="#top">top</a>"##,
        );
        let mut report = Report::default();
        absolutize_links(&doc, "https://www.kegg.jp", &mut report);
        absolutize_links(&doc, "https://www.kegg.jp", &mut report);

        assert_eq!(
            dom::get_attribute(&doc.select("area").first(), "href"),
            Some("https://www.kegg.jp/kegg-bin/show_pathway?map00010".to_string())
        );
        assert_eq!(
            dom::get_attribute(&doc.select("a").first(), "href"),
            Some("https://www.kegg.jp/entry/map00010".to_string())
        );
        assert_eq!(report.hrefs_rewritten, 2);
    }

    #[test]
    fn absolutize_links_covers_head_links() {
        let doc = dom::parse(
            r#"<head><link rel="icon" href="/favicon.ico">
            <link rel="canonical" href="https://www.kegg.jp/pathway/map00010"></head>
            <body><area shape="poly" href="//www.genome.jp/entry/R01786"></body>"#,
        );
        let mut report = Report::default();
        absolutize_links(&doc, "https://www.kegg.jp", &mut report);

        assert_eq!(
            dom::get_attribute(&doc.select("link").first(), "href"),
            Some("https://www.kegg.jp/favicon.ico".to_string())
        );
        assert_eq!(
            dom::get_attribute(&doc.select("area"), "href"),
            Some("//www.genome.jp/entry/R01786".to_string())
        );
        assert_eq!(report.hrefs_rewritten, 1);
    }

    #[test]
    fn normalize_image_source_takes_basename() {
        let doc = dom::parse(r#"<img src="/tmp/kegg/map00010.png"><img src="/other/logo.gif">"#);
        let mut report = Report::default();
        normalize_image_source(&doc, &mut report).unwrap();

        let imgs: Vec<Selection> = doc.select("img").nodes().iter().map(|n| Selection::from(*n)).collect();
        assert_eq!(dom::get_attribute(&imgs[0], "src"), Some("map00010.png".to_string()));
        assert_eq!(dom::get_attribute(&imgs[1], "src"), Some("/other/logo.gif".to_string()));
        assert!(report.image_source_rewritten);
    }

    #[test]
    fn normalize_image_source_requires_img() {
        let doc = dom::parse("<p>no image</p>");
        let err = normalize_image_source(&doc, &mut Report::default()).unwrap_err();
        assert!(matches!(err, Error::MissingElementError("img")));
    }
}
