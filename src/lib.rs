pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod output;
pub mod pattern;
pub mod progress;
pub mod rename;
pub mod scanner;

pub use config::RenamerConfig;
pub use error::{AppError, ExitCode};
pub use orchestrator::{run, FolderOutcome, RunSummary};
pub use pattern::{is_conforming, parse_conforming, ConformingName, PatternError};
pub use rename::{
    build_standard_name, normalize_folder, slugify, FolderError, FolderReport, RenameError,
};
pub use scanner::{list_entries, next_id, FolderEntry, ScannerError};
