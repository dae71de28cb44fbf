mod codes;

pub use codes::ExitCode;

use crate::rename::RenameError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Failed to read folder")]
    ScanFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("Rename failed: {from} -> {to}")]
    RenameError {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: {name}")]
    DestinationExists { name: String },

    #[error("Existing ID too large to continue numbering: {name}")]
    IdOutOfRange { name: String },

    #[error("No sequential ID left after: {name}")]
    IdExhausted { name: String },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::NotADirectory { .. } => ExitCode::ScanError,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::ScanFailed { .. } => ExitCode::ScanError,
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::DestinationExists { .. } => ExitCode::DestinationExists,
            AppError::IdOutOfRange { .. } | AppError::IdExhausted { .. } => {
                ExitCode::IdRangeError
            }
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::NotADirectory { path } => {
                format!(
                    "A target folder exists but is not a directory:\n  {}\n\n\
                     Move the file out of the way or remove it from the folder list.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check folder permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::ScanFailed { source } => {
                format!("Failed to read a target folder:\n  {}", source)
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename file:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Check file permissions and ensure no files are open.\n\
                     Files renamed before this error keep their new names.",
                    from, to, source
                )
            }

            AppError::DestinationExists { name } => {
                format!(
                    "Refusing to overwrite an existing file:\n  {}\n\n\
                     Another file already carries this name. Rename one of them manually \
                     and run again.",
                    name
                )
            }

            AppError::IdOutOfRange { name } => {
                format!(
                    "A file carries an ID larger than the counter can hold:\n  {}\n\n\
                     New files would be numbered below it, so the folder was left unchanged.\n\
                     Renumber that file with a smaller ID and run again.",
                    name
                )
            }

            AppError::IdExhausted { name } => {
                format!(
                    "Sequential IDs ran out at:\n  {}\n\n\
                     No larger ID is available for the remaining files. \
                     Files renamed before this point keep their new names.",
                    name
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => {
                AppError::Other(format!("Folder disappeared during scan: {}", path.display()))
            }
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(source) => AppError::ScanFailed { source },
            ScannerError::IdOutOfRange(name) => AppError::IdOutOfRange { name },
            ScannerError::IdExhausted(name) => AppError::IdExhausted { name },
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::Scan(e) => e.into(),
            RenameError::FilesystemError { from, to, source } => {
                AppError::RenameError { from, to, source }
            }
            RenameError::DestinationExists(name) => AppError::DestinationExists { name },
            RenameError::IdExhausted(name) => AppError::IdExhausted { name },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = AppError::NotADirectory {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::ScanError);

        let err = AppError::PermissionDenied {
            path: PathBuf::from("/test"),
        };
        assert_eq!(err.exit_code(), ExitCode::PermissionError);

        let err = AppError::DestinationExists {
            name: "2024-01-01-001-a.md".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::DestinationExists);
    }

    #[test]
    fn test_detailed_message_includes_context() {
        let err = AppError::RenameError {
            from: "My Notes.md".to_string(),
            to: "2024-01-01-006-my-notes.md".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };

        let msg = err.detailed_message();
        assert!(msg.contains("My Notes.md"));
        assert!(msg.contains("2024-01-01-006-my-notes.md"));
        assert!(msg.contains("disk full"));
    }

    #[test]
    fn test_scanner_error_conversion() {
        let scanner_err = ScannerError::PermissionDenied(PathBuf::from("/locked"));
        let app_err: AppError = scanner_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::PermissionError);
    }

    #[test]
    fn test_rename_error_conversion() {
        let rename_err = RenameError::Scan(ScannerError::NotADirectory(PathBuf::from("/file")));
        let app_err: AppError = rename_err.into();
        assert!(matches!(app_err, AppError::NotADirectory { .. }));

        let rename_err = RenameError::DestinationExists("x.md".to_string());
        let app_err: AppError = rename_err.into();
        assert_eq!(app_err.exit_code(), ExitCode::DestinationExists);
    }

    #[test]
    fn test_id_range_errors_share_exit_code() {
        let app_err: AppError = RenameError::IdExhausted("b.md".to_string()).into();
        assert_eq!(app_err.exit_code(), ExitCode::IdRangeError);
        assert!(app_err.detailed_message().contains("b.md"));

        let huge = "2024-01-01-99999999999999999999999-x.md".to_string();
        let app_err: AppError = RenameError::Scan(ScannerError::IdOutOfRange(huge)).into();
        assert_eq!(app_err.exit_code(), ExitCode::IdRangeError);
        assert!(app_err.detailed_message().contains("left unchanged"));
    }
}
