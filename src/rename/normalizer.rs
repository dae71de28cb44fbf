use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::pattern::{is_conforming, is_markdown};
use crate::progress::Progress;
use crate::scanner::{list_entries, max_conforming_id, FolderEntry, ScannerError};

use super::name_builder::build_standard_name;
use super::types::{FolderReport, RenameOperation};

/// Errors that can occur while normalizing a folder
#[derive(Error, Debug)]
pub enum RenameError {
    #[error(transparent)]
    Scan(#[from] ScannerError),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FilesystemError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: {0}")]
    DestinationExists(String),

    #[error("No sequential ID left for '{0}'")]
    IdExhausted(String),
}

/// A folder that stopped partway, with the renames it completed
#[derive(Error, Debug)]
#[error("{error}")]
pub struct FolderError {
    pub report: FolderReport,
    pub error: RenameError,
}

/// Rename every non-conforming Markdown file of a folder to its standardized name.
///
/// Entries are handled in name order. A missing folder is a no-op. Renames done
/// before a failure are kept and returned in the error's report.
pub fn normalize_folder(
    folder: &Path,
    date: NaiveDate,
    progress: &mut Progress,
) -> Result<FolderReport, FolderError> {
    progress.scan_start(folder);

    if !folder.exists() {
        debug!(path = ?folder, "Folder does not exist, nothing to do");
        return Ok(FolderReport::new(folder.to_path_buf(), false, Some(1)));
    }

    let mut report = FolderReport::new(folder.to_path_buf(), true, None);

    match rename_entries(folder, date, &mut report, progress) {
        Ok(()) => {
            debug!(path = ?folder, renamed = report.len(), "Folder done");
            Ok(report)
        }
        Err(error) => Err(FolderError { report, error }),
    }
}

fn rename_entries(
    folder: &Path,
    date: NaiveDate,
    report: &mut FolderReport,
    progress: &mut Progress,
) -> Result<(), RenameError> {
    let entries = list_entries(folder)?;

    // None once the counter has no room left above the highest ID.
    let mut next_id = match max_conforming_id(entries.iter().map(|e| e.name.as_str()))? {
        None => Some(1),
        Some((max_id, _)) => max_id.checked_add(1),
    };
    report.start_id = next_id;

    info!(path = ?folder, start_id = ?next_id, "Normalizing folder");

    for entry in entries.iter().filter(|e| needs_rename(e)) {
        let id = next_id.ok_or_else(|| RenameError::IdExhausted(entry.name.clone()))?;

        let destination_name = build_standard_name(date, id, &entry.name);
        let op = RenameOperation::new(entry.path.clone(), destination_name, id);

        if op.destination_path.exists() {
            return Err(RenameError::DestinationExists(op.destination_name));
        }

        progress.rename_progress(&op.source_name, &op.destination_name);
        execute_rename(&op)?;

        report.add_operation(op);
        next_id = id.checked_add(1);
    }

    Ok(())
}

fn needs_rename(entry: &FolderEntry) -> bool {
    if !is_markdown(&entry.name) {
        trace!(name = %entry.name, "Skipping non-Markdown entry");
        return false;
    }

    if is_conforming(&entry.name) {
        trace!(name = %entry.name, "Already conforming");
        return false;
    }

    true
}

fn execute_rename(op: &RenameOperation) -> Result<(), RenameError> {
    info!("Renaming: {} -> {}", op.source_name, op.destination_name);

    fs::rename(&op.source_path, &op.destination_path).map_err(|e| RenameError::FilesystemError {
        from: op.source_name.clone(),
        to: op.destination_name.clone(),
        source: e,
    })
}
