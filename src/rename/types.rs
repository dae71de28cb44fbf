use std::path::PathBuf;

/// A single rename within a folder
#[derive(Debug, Clone)]
pub struct RenameOperation {
    /// Full path to the original file
    pub source_path: PathBuf,
    /// Original filename
    pub source_name: String,
    /// Full path to the renamed file
    pub destination_path: PathBuf,
    /// Standardized filename
    pub destination_name: String,
    /// Sequential ID assigned to the file
    pub id: u64,
}

impl RenameOperation {
    pub fn new(source_path: PathBuf, destination_name: String, id: u64) -> Self {
        let source_name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let destination_path = source_path
            .parent()
            .map(|p| p.join(&destination_name))
            .unwrap_or_else(|| PathBuf::from(&destination_name));

        Self {
            source_path,
            source_name,
            destination_path,
            destination_name,
            id,
        }
    }
}

/// Outcome of normalizing one folder
#[derive(Debug, Clone)]
pub struct FolderReport {
    /// Folder that was processed
    pub folder: PathBuf,
    /// Whether the folder existed at all
    pub existed: bool,
    /// First ID available before any rename, None when the range is used up
    /// or the folder could not be listed
    pub start_id: Option<u64>,
    /// Renames performed, in order
    pub operations: Vec<RenameOperation>,
}

impl FolderReport {
    pub fn new(folder: PathBuf, existed: bool, start_id: Option<u64>) -> Self {
        Self {
            folder,
            existed,
            start_id,
            operations: Vec::new(),
        }
    }

    pub fn add_operation(&mut self, op: RenameOperation) {
        self.operations.push(op);
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }
}
