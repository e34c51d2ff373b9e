//! Loading a document from disk.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::Result;

/// Read a whole UTF-8 text file into memory.
///
/// A file that is not valid UTF-8 is reported as an I/O error.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!("Loaded {} bytes from {}", text.len(), path.display());
    Ok(text)
}
