//! File access helpers with path-carrying errors.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::IoError;

/// Read a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>, IoError> {
    fs::read(path).map_err(|source| IoError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `bytes` to `path` atomically.
///
/// The data lands in a sibling temporary file first and is renamed over
/// the destination, so a failure never leaves a partially written file
/// observable at `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), IoError> {
    let tmp = temp_sibling(path);
    let write_failed = |source| IoError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, bytes).map_err(write_failed)?;
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        write_failed(source)
    })
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name: OsString = path.file_name().map_or_else(|| "out".into(), Into::into);
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}
