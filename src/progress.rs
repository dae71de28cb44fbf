//! Progress output for user-facing status updates.
//!
//! One line per scanned folder and one per rename, written to stdout.
//! Diagnostics go through tracing on stderr instead.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, output is colorized
    colors_enabled: bool,
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal()
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a new progress reporter writing to stdout
    pub fn new() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            colors_enabled: should_use_colors(),
        }
    }

    /// Create a progress reporter with a custom writer (for testing)
    pub fn with_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer,
            colors_enabled: false,
        }
    }

    /// Writer shared with the final summary
    pub fn writer(&mut self) -> &mut dyn Write {
        &mut self.writer
    }

    /// Report that a folder is about to be scanned
    pub fn scan_start(&mut self, folder: &Path) {
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{}",
                format!("Scanning {}...", folder.display()).bold()
            );
        } else {
            let _ = writeln!(self.writer, "Scanning {}...", folder.display());
        }
    }

    /// Report a single rename
    pub fn rename_progress(&mut self, from: &str, to: &str) {
        if self.colors_enabled {
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                "Renaming".cyan(),
                from.dimmed(),
                "->".cyan(),
                to
            );
        } else {
            let _ = writeln!(self.writer, "Renaming {} -> {}", from, to);
        }
    }

    /// Report a failure that does not stop the run
    pub fn warn(&mut self, message: &str) {
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    pub(crate) fn create_test_progress() -> (Progress, Arc<Mutex<Vec<u8>>>) {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = TestWriter(buffer.clone());
        let progress = Progress::with_writer(Box::new(writer));
        (progress, buffer)
    }

    struct TestWriter(Arc<Mutex<Vec<u8>>>);

    impl Write for TestWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_scan_start() {
        let (mut progress, buffer) = create_test_progress();

        progress.scan_start(Path::new("projects"));

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert_eq!(output, "Scanning projects...\n");
    }

    #[test]
    fn test_rename_progress() {
        let (mut progress, buffer) = create_test_progress();

        progress.rename_progress("My Notes.md", "2024-01-01-006-my-notes.md");

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert_eq!(output, "Renaming My Notes.md -> 2024-01-01-006-my-notes.md\n");
    }

    #[test]
    fn test_warn() {
        let (mut progress, buffer) = create_test_progress();

        progress.warn("templates: permission denied");

        let output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Warning: templates: permission denied"));
    }
}
