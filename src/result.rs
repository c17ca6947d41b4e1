//! Result types returned by the processing entry points.

use crate::rules::HotspotClass;

/// Serialized output of one run together with its report.
#[derive(Debug, Clone, Default)]
pub struct ProcessResult {
    /// Pretty-printed HTML of the cleaned document.
    pub html: String,

    /// What the pipeline changed.
    pub report: Report,
}

/// Summary of the edits made by one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Report {
    pub tables_removed: usize,
    pub scripts_removed: usize,
    pub style_removed: bool,
    pub link_removed: bool,
    pub overlay_removed: bool,
    pub navigation_links_removed: usize,
    pub hotspots: HotspotCounts,
    /// Hotspots left unclassified under [`crate::ShapePolicy::Skip`].
    pub hotspots_skipped: usize,
    pub hrefs_rewritten: usize,
    pub handlers_removed: usize,
    /// `<meta>` charset declarations changed to UTF-8.
    pub charset_declarations_rewritten: usize,
    pub image_source_rewritten: bool,
    /// Text and comment nodes dropped from directly under `body`.
    pub body_nodes_dropped: usize,
}

/// Per-class hotspot tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HotspotCounts {
    pub pathway: usize,
    pub enzyme: usize,
    pub reaction: usize,
    pub compound: usize,
}

impl HotspotCounts {
    pub fn record(&mut self, class: HotspotClass) {
        *self.slot(class) += 1;
    }

    #[must_use]
    pub fn get(&self, class: HotspotClass) -> usize {
        match class {
            HotspotClass::Pathway => self.pathway,
            HotspotClass::Enzyme => self.enzyme,
            HotspotClass::Reaction => self.reaction,
            HotspotClass::Compound => self.compound,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.pathway + self.enzyme + self.reaction + self.compound
    }

    fn slot(&mut self, class: HotspotClass) -> &mut usize {
        match class {
            HotspotClass::Pathway => &mut self.pathway,
            HotspotClass::Enzyme => &mut self.enzyme,
            HotspotClass::Reaction => &mut self.reaction,
            HotspotClass::Compound => &mut self.compound,
        }
    }
}

impl std::fmt::Display for HotspotCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for class in HotspotClass::ALL {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{} {class}", self.get(class))?;
        }
        Ok(())
    }
}
