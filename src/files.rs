//! Input reading and atomic output writing.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Read the whole input file.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::ReadError {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `contents` to `path` through a temporary file in the same
/// directory, renamed into place once fully written. An existing file at
/// `path` is only replaced on success.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let write_error = |source: std::io::Error| Error::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(contents.as_bytes()).map_err(write_error)?;
    tmp.flush().map_err(write_error)?;
    tmp.persist(path).map_err(|err| write_error(err.error))?;
    Ok(())
}
