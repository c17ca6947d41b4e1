use kegg_map::pipeline::strip::strip_structure;
use kegg_map::{dom, load, process, serialize, transform, Error, Options, Report};
use pretty_assertions::assert_eq;

const FIXTURE: &str = include_str!("fixtures/map00010.html");

/// Input from the canonical end-to-end scenario: one table, one script, a map
/// image, two hotspots, and whitespace text between the body's elements.
const SCENARIO: &str = r##"<html><head><script>var menu = 1;</script></head><body>
  <table><tr><td>menu</td></tr></table>
  <img src="/x/map1.png" usemap="#map1">
  <map name="map1">
    <area shape="rect" coords="0,0,10,10" href="/kegg-bin/show_pathway?map1">
    <area shape="circle" coords="20,20,5">
  </map>
</body></html>"##;

#[test]
fn end_to_end_scenario() {
    let doc = load(SCENARIO);
    transform(&doc, &Options::default()).expect("transform failed");

    assert_eq!(dom::count(&doc, "table"), 0);
    assert_eq!(dom::count(&doc, "script"), 0);

    let img = doc.select("img");
    assert_eq!(dom::get_attribute(&img, "src").as_deref(), Some("map1.png"));

    let areas: Vec<dom::Selection> =
        doc.select("area").nodes().iter().map(|n| dom::Selection::from(*n)).collect();
    assert_eq!(dom::get_attribute(&areas[0], "class").as_deref(), Some("pathway"));
    assert_eq!(
        dom::get_attribute(&areas[0], "href").as_deref(),
        Some("https://www.kegg.jp/kegg-bin/show_pathway?map1")
    );
    assert_eq!(dom::get_attribute(&areas[1], "class").as_deref(), Some("compound"));

    let body = doc.select("body");
    assert_eq!(dom::get_attribute(&body, "style").as_deref(), Some("margin: 0 10%"));
    assert!(dom::non_element_children(&body).is_empty());
}

#[test]
fn end_to_end_scenario_output() {
    let result = process(SCENARIO).expect("processing failed");

    let expected = r##"<!DOCTYPE html>
<html>
  <head></head>
  <body style="margin: 0 10%">
    <img src="map1.png" usemap="#map1">
    <map name="map1">
      <area shape="rect" coords="0,0,10,10" href="https://www.kegg.jp/kegg-bin/show_pathway?map1" class="pathway">
      <area shape="circle" coords="20,20,5" class="compound">
    </map>
  </body>
</html>
"##;
    assert_eq!(result.html, expected);
}

#[test]
fn processing_own_output_is_stable() {
    let once = process(SCENARIO).expect("first pass failed");
    let twice = process(&once.html).expect("second pass failed");

    assert_eq!(twice.html, once.html);
    assert_eq!(twice.report.hrefs_rewritten, 0);
    assert!(!twice.report.image_source_rewritten);
}

#[test]
fn structural_stripper_is_idempotent() {
    let doc = load(
        r#"<html><head><link rel="stylesheet" href="/a.css"><style>p{}</style></head>
        <body><table><tr><td>x</td></tr></table><script>y()</script>
        <div id="poplay"></div><img src="m.png"></body></html>"#,
    );

    strip_structure(&doc, &mut Report::default());
    let once = serialize(&doc, 2);

    let mut second = Report::default();
    strip_structure(&doc, &mut second);

    assert_eq!(serialize(&doc, 2), once);
    assert_eq!(second, Report::default());
    for selector in ["table", "script", "style", "link", "div#poplay"] {
        assert_eq!(dom::count(&doc, selector), 0, "{selector} survived");
    }
}

#[test]
fn shape_to_class_is_total_for_known_shapes() {
    let cases = [
        ("rect", Some("/kegg-bin/show_pathway?map00030"), "pathway"),
        ("rect", Some("/dbget-bin/www_bget?K01810"), "enzyme"),
        ("poly", Some("/dbget-bin/www_bget?R02740"), "reaction"),
        ("poly", None, "reaction"),
        ("circle", Some("/dbget-bin/www_bget?C00668"), "compound"),
        ("circle", None, "compound"),
    ];

    for (shape, href, class) in cases {
        let href_attr = href.map(|h| format!(r#" href="{h}""#)).unwrap_or_default();
        let html = format!(r#"<body><img src="m.png"><area shape="{shape}"{href_attr} class="stale"></body>"#);
        let result = process(&html).expect("processing failed");
        assert!(
            result.html.contains(&format!(r#"class="{class}""#)),
            "{shape} {href:?} should be {class}:\n{}",
            result.html
        );
        assert!(!result.html.contains("stale"));
    }
}

#[test]
fn navigation_pruning_is_case_sensitive() {
    let html = r##"<body><img src="m.png">
        <div><a href="#">Pathway menu</a><a href="/help">Pathway Menu</a></div></body>"##;
    let result = process(html).expect("processing failed");

    assert!(!result.html.contains(">Pathway menu<"));
    assert!(result.html.contains(r#"<a href="https://www.kegg.jp/help">Pathway Menu</a>"#));
    assert_eq!(result.report.navigation_links_removed, 1);
}

#[test]
fn every_surviving_href_is_absolute() {
    let html = r##"<html><head>
        <link rel="stylesheet" href="/css/kegg.css">
        <link rel="icon" href="/favicon.ico">
        </head><body><img src="/m.png">
        <a href="entry/map00010">entry</a>
        <a href="#top">top</a></body></html>"##;
    let result = process(html).expect("processing failed");

    assert!(!result.html.contains(r#"href="/"#), "relative href survived:\n{}", result.html);
    assert!(result.html.contains(r#"<link rel="icon" href="https://www.kegg.jp/favicon.ico">"#));
    assert!(result.html.contains(r#"<a href="https://www.kegg.jp/entry/map00010">entry</a>"#));
    assert!(result.html.contains(r##"<a href="#top">top</a>"##));
}

#[test]
fn missing_image_is_fatal() {
    let err = process("<body><map><area shape=\"poly\"></map></body>").unwrap_err();
    assert!(matches!(err, Error::MissingElementError("img")));
}

#[test]
fn unknown_shape_is_fatal_by_default() {
    let err = process(r#"<body><img src="m.png"><area shape="default" href="/x"></body>"#)
        .unwrap_err();
    assert!(matches!(err, Error::ClassificationError { index: 0, .. }));
}

#[test]
fn kegg_fixture_is_cleaned() {
    let result = process(FIXTURE).expect("processing failed");
    let html = &result.html;

    assert!(!html.contains("<table"));
    assert!(!html.contains("<script"));
    assert!(!html.contains("<style"));
    assert!(!html.contains("kegg.css"));
    assert!(!html.contains("poplay"));
    assert!(!html.contains("onmouseover"));
    assert!(!html.contains("onmouseout"));
    for label in ["Pathway menu", "Organism menu", "Pathway entry", "Hide description", "User data mapping"] {
        assert!(!html.contains(label), "{label} survived");
    }

    assert!(!html.contains("onload"));
    assert!(!html.contains(r#"href="/"#), "relative href survived:\n{html}");
    assert!(html.contains(r#"    <link rel="shortcut icon" href="https://www.kegg.jp/favicon.ico">"#));
    assert!(html.contains(
        r#"    <meta http-equiv="Content-Type" content="text/html; charset=utf-8">"#
    ));
    assert!(html.contains(r#"  <body style="margin: 0 10%">"#));
    assert!(html.contains(
        r##"    <img src="map00010.png" name="pathwayimage" usemap="#mapdata" border="0">"##
    ));
    assert!(html.contains(
        r#"      <area shape="rect" coords="1,2,47,19" href="https://www.kegg.jp/kegg-bin/show_pathway?map00020" title="map00020: Citrate cycle (TCA cycle)" class="pathway">"#
    ));
    assert!(html.contains(
        r#"      <area shape="rect" coords="115,136,161,153" href="https://www.kegg.jp/dbget-bin/www_bget?K00844" title="2.7.1.1 (HK)" class="enzyme">"#
    ));
    assert!(html.contains(r#"title="R01786" class="reaction">"#));
    assert!(html.contains(r#"title="C00031 (D-Glucose)" class="compound">"#));

    let report = &result.report;
    assert_eq!(report.tables_removed, 1);
    assert_eq!(report.scripts_removed, 3);
    assert_eq!(report.navigation_links_removed, 3);
    assert!(report.style_removed && report.link_removed && report.overlay_removed);
    assert_eq!(report.hotspots.total(), 4);
    assert_eq!(report.handlers_removed, 7);
    assert_eq!(report.charset_declarations_rewritten, 0);
}

#[test]
fn custom_options_flow_through() {
    let options = Options {
        base_url: "https://mirror.example.org".to_string(),
        body_style: "margin: 0 auto".to_string(),
        indent: 1,
        ..Options::default()
    };
    let result = kegg_map::process_with_options(FIXTURE, &options).expect("processing failed");

    assert!(result.html.contains(r#"<body style="margin: 0 auto">"#));
    assert!(result.html.contains("href=\"https://mirror.example.org/dbget-bin/www_bget?C00031\""));
    assert!(result.html.contains("\n <head>\n"));
}
