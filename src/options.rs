//! Configuration options for map processing.
//!
//! The defaults reproduce the canonical KEGG rewrite; fields exist so callers
//! can retarget a mirror or tighten/loosen hotspot handling.

use crate::rules::{BASE_URL, BODY_STYLE};

/// What to do with an `area` whose shape has no class mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapePolicy {
    /// Abort the run with a classification error.
    #[default]
    Fail,
    /// Log a warning and leave the hotspot's class untouched.
    Skip,
}

/// Configuration options for map processing.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use kegg_map::{Options, ShapePolicy};
///
/// let options = Options {
///     unknown_shapes: ShapePolicy::Skip,
///     indent: 4,
///     ..Options::default()
/// };
/// assert_eq!(options.base_url, "https://www.kegg.jp");
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Prefix applied to relative `href` values.
    ///
    /// Default: `"https://www.kegg.jp"`
    pub base_url: String,

    /// Inline style set on `body`, replacing any existing value.
    ///
    /// Default: `"margin: 0 10%"`
    pub body_style: String,

    /// Spaces per nesting level in the serialized output.
    ///
    /// Default: `2`
    pub indent: usize,

    /// Handling of hotspots with an unrecognized or missing `shape`.
    ///
    /// Default: [`ShapePolicy::Fail`]
    pub unknown_shapes: ShapePolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            body_style: BODY_STYLE.to_string(),
            indent: 2,
            unknown_shapes: ShapePolicy::Fail,
        }
    }
}
