use std::path::PathBuf;

/// Folders scanned when no other list is given, relative to the working directory
pub const DEFAULT_TARGET_FOLDERS: [&str; 2] = ["projects", "templates"];

/// Run configuration handed to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamerConfig {
    /// Folders to normalize, processed in this order
    pub target_folders: Vec<PathBuf>,
}

impl RenamerConfig {
    pub fn with_folders<I, P>(folders: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            target_folders: folders.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self::with_folders(DEFAULT_TARGET_FOLDERS)
    }
}
