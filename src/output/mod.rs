use crate::orchestrator::RunSummary;
use std::io::{self, Write};

/// Display the totals of a finished run
pub fn display_summary(summary: &RunSummary, writer: &mut dyn Write) -> io::Result<()> {
    let folders = summary.outcomes.len();
    let failed = summary.failures().count();
    let renamed = summary.renamed_count();

    writeln!(writer)?;
    if renamed == 0 {
        writeln!(writer, "No files to rename in {} folder(s).", folders)?;
    } else {
        writeln!(
            writer,
            "Renamed {} file(s) across {} folder(s).",
            renamed, folders
        )?;
    }

    if failed > 0 {
        writeln!(writer, "{} folder(s) failed:", failed)?;
        for (folder, error) in summary.failures() {
            writeln!(writer, "  - {}: {}", folder.display(), error)?;
        }
    }

    Ok(())
}
