//! Static rule tables driving the pipeline.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Host every relative link is resolved against.
pub const BASE_URL: &str = "https://www.kegg.jp";

/// Inline style applied to the rebuilt `body`.
pub const BODY_STYLE: &str = "margin: 0 10%";

/// `id` of the popup overlay container KEGG injects for hover descriptions.
pub const SENTINEL_DIV_ID: &str = "poplay";

/// Elements removed wholesale, every occurrence.
pub const REMOVE_ALL_TAGS: [&str; 2] = ["table", "script"];

/// Elements of which only the first occurrence is removed.
pub const REMOVE_FIRST_TAGS: [&str; 2] = ["style", "link"];

/// Event handler attributes stripped from every element. They all call into
/// the scripts removed with `script` elements.
pub const HANDLER_ATTRIBUTES: [&str; 3] = ["onmouseout", "onmouseover", "onload"];

/// Charset the output is written in and declared as.
pub const OUTPUT_CHARSET: &str = "utf-8";

/// Substring marking a rectangle hotspot as a link to another pathway map.
pub const PATHWAY_LINK_MARKER: &str = "show_pathway";

/// Anchor labels of the interactive navigation menus. Compared exactly.
pub static NAVIGATION_LABELS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Pathway menu",
        "Organism menu",
        "Pathway entry",
        "Hide description",
        "User data mapping",
    ]
    .into_iter()
    .collect()
});

/// Semantic class assigned to an image-map hotspot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HotspotClass {
    Pathway,
    Enzyme,
    Reaction,
    Compound,
}

impl HotspotClass {
    /// Every class, in report order.
    pub const ALL: [HotspotClass; 4] = [
        HotspotClass::Pathway,
        HotspotClass::Enzyme,
        HotspotClass::Reaction,
        HotspotClass::Compound,
    ];

    /// CSS class name written to the `class` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            HotspotClass::Pathway => "pathway",
            HotspotClass::Enzyme => "enzyme",
            HotspotClass::Reaction => "reaction",
            HotspotClass::Compound => "compound",
        }
    }
}

impl std::fmt::Display for HotspotClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a hotspot could not be classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeFault {
    MissingShape,
    UnknownShape(String),
    RectWithoutHref,
}

impl std::fmt::Display for ShapeFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeFault::MissingShape => f.write_str("missing shape attribute"),
            ShapeFault::UnknownShape(shape) => write!(f, "unrecognized shape {shape:?}"),
            ShapeFault::RectWithoutHref => f.write_str("rect area has no href"),
        }
    }
}

/// Map a hotspot's `shape` (and, for rectangles, its `href`) to a class.
///
/// Shape values are compared exactly, as KEGG emits them.
pub fn classify(shape: Option<&str>, href: Option<&str>) -> Result<HotspotClass, ShapeFault> {
    match shape {
        Some("rect") => match href {
            Some(href) if href.contains(PATHWAY_LINK_MARKER) => Ok(HotspotClass::Pathway),
            Some(_) => Ok(HotspotClass::Enzyme),
            None => Err(ShapeFault::RectWithoutHref),
        },
        Some("poly") => Ok(HotspotClass::Reaction),
        Some("circle") => Ok(HotspotClass::Compound),
        Some(other) => Err(ShapeFault::UnknownShape(other.to_string())),
        None => Err(ShapeFault::MissingShape),
    }
}
