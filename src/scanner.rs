use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::pattern::{is_conforming, parse_conforming, PatternError};

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("Failed to read directory: {0}")]
    IoError(#[from] std::io::Error),

    #[error("ID of '{0}' is too large to continue numbering")]
    IdOutOfRange(String),

    #[error("No IDs left after '{0}'")]
    IdExhausted(String),
}

#[derive(Debug, Clone)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
}

impl FolderEntry {
    pub fn new(name: String, path: PathBuf) -> Self {
        Self { name, path }
    }
}

/// List every entry of a folder, sorted by name
pub fn list_entries(folder: &Path) -> Result<Vec<FolderEntry>, ScannerError> {
    debug!(path = ?folder, "Listing folder");

    if !folder.exists() {
        return Err(ScannerError::PathNotFound(folder.to_path_buf()));
    }

    if !folder.is_dir() {
        return Err(ScannerError::NotADirectory(folder.to_path_buf()));
    }

    let mut entries = Vec::new();

    let read_dir = fs::read_dir(folder).map_err(|e| {
        if e.kind() == std::io::ErrorKind::PermissionDenied {
            ScannerError::PermissionDenied(folder.to_path_buf())
        } else {
            ScannerError::IoError(e)
        }
    })?;

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        let name = match entry.file_name().into_string() {
            Ok(n) => n,
            Err(raw) => {
                debug!(name = ?raw, "Skipping entry with non UTF-8 name");
                continue;
            }
        };

        entries.push(FolderEntry::new(name, path));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = entries.len(), "Listing complete");

    Ok(entries)
}

/// Next free sequential ID in a folder: one past the largest conforming ID.
///
/// A missing folder counts as empty and yields 1.
pub fn next_id(folder: &Path) -> Result<u64, ScannerError> {
    if !folder.exists() {
        debug!(path = ?folder, "Folder missing, starting at ID 1");
        return Ok(1);
    }

    let entries = list_entries(folder)?;
    next_id_from_names(entries.iter().map(|e| e.name.as_str()))
}

/// Next free ID computed from a set of already listed names
pub fn next_id_from_names<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<u64, ScannerError> {
    match max_conforming_id(names)? {
        None => Ok(1),
        Some((max_id, name)) => max_id
            .checked_add(1)
            .ok_or_else(|| ScannerError::IdExhausted(name.to_string())),
    }
}

/// Largest conforming ID and the name carrying it.
///
/// Fails when a conforming name holds an ID wider than the counter.
pub fn max_conforming_id<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> Result<Option<(u64, &'a str)>, ScannerError> {
    let mut max: Option<(u64, &'a str)> = None;

    for name in names.into_iter().filter(|name| is_conforming(name)) {
        let id = match parse_conforming(name) {
            Ok(parsed) => parsed.id,
            Err(PatternError::IdOutOfRange(_)) => {
                warn!(name = %name, "Embedded ID out of range");
                return Err(ScannerError::IdOutOfRange(name.to_string()));
            }
            Err(PatternError::NotConforming(_)) => continue,
        };

        if max.map_or(true, |(current, _)| id > current) {
            max = Some((id, name));
        }
    }

    trace!(max_id = ?max.map(|(id, _)| id), "Highest conforming ID");

    Ok(max)
}
