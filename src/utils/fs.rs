use crate::error::{BumpError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole document, mapping a missing file to `FileNotFound`.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| with_path(path, e))
}

/// Overwrites a document in place.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| with_path(path, e))
}

fn with_path(path: &Path, err: io::Error) -> BumpError {
    match err.kind() {
        io::ErrorKind::NotFound => BumpError::FileNotFound(path.to_path_buf()),
        kind => BumpError::Io(io::Error::new(kind, format!("{}: {err}", path.display()))),
    }
}
