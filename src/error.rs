//! Error types for kegg-map.
//!
//! Every error is fatal: the pipeline is all-or-nothing and no output file is
//! produced when any of these is returned.

use std::path::PathBuf;

/// Error type for map processing operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file could not be read.
    #[error("Cannot read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid text in the detected encoding.
    #[error("Input cannot be decoded as {0} text")]
    ParseError(String),

    /// A required element (`img` or `body`) is absent from the document.
    #[error("Document has no <{0}> element")]
    MissingElementError(&'static str),

    /// An image-map hotspot could not be assigned a class. `index` is the
    /// zero-based position of the `area` in document order.
    #[error("Cannot classify area at index {index}: {reason}")]
    ClassificationError { index: usize, reason: String },

    /// The output file could not be written.
    #[error("Cannot write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for map processing operations.
pub type Result<T> = std::result::Result<T, Error>;
