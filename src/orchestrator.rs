use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{error, info};

use crate::config::RenamerConfig;
use crate::progress::Progress;
use crate::rename::{normalize_folder, FolderError, FolderReport, RenameError};

/// How a single target folder fared
#[derive(Debug)]
pub enum FolderOutcome {
    Done(FolderReport),
    /// Stopped partway; the report holds the renames that did happen
    Failed {
        report: FolderReport,
        error: RenameError,
    },
}

impl FolderOutcome {
    pub fn report(&self) -> &FolderReport {
        match self {
            FolderOutcome::Done(report) | FolderOutcome::Failed { report, .. } => report,
        }
    }
}

/// Result of running over every configured folder
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<FolderOutcome>,
}

impl RunSummary {
    /// Files renamed across all folders, failed ones included
    pub fn renamed_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.report().len()).sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (&PathBuf, &RenameError)> {
        self.outcomes.iter().filter_map(|o| match o {
            FolderOutcome::Failed { report, error } => Some((&report.folder, error)),
            FolderOutcome::Done(_) => None,
        })
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    /// Take ownership of the first failure, if any
    pub fn into_first_failure(self) -> Option<(PathBuf, RenameError)> {
        self.outcomes.into_iter().find_map(|o| match o {
            FolderOutcome::Failed { report, error } => Some((report.folder, error)),
            FolderOutcome::Done(_) => None,
        })
    }
}

/// Normalize every configured folder in order.
///
/// A failing folder is reported and recorded, the remaining folders still run.
pub fn run(config: &RenamerConfig, date: NaiveDate, progress: &mut Progress) -> RunSummary {
    let mut summary = RunSummary::default();

    info!(folders = config.target_folders.len(), %date, "Starting run");

    for folder in &config.target_folders {
        match normalize_folder(folder, date, progress) {
            Ok(report) => summary.outcomes.push(FolderOutcome::Done(report)),
            Err(FolderError { report, error }) => {
                error!(path = ?folder, renamed = report.len(), "{}", error);
                progress.warn(&format!("{}: {}", folder.display(), error));
                summary
                    .outcomes
                    .push(FolderOutcome::Failed { report, error });
            }
        }
    }

    info!(renamed = summary.renamed_count(), "Run complete");

    summary
}
