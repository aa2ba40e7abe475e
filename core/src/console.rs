//! User-facing goal output.

pub const SIGIL_SUCCEEDED: &str = "✓";
pub const SIGIL_FAILED: &str = "✕";

/// Sink for the rendered goal summary. Production writes to stderr; tests
/// capture lines into a buffer.
pub trait Console: Send + Sync {
    fn print_stderr(&self, line: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct StderrConsole;

impl Console for StderrConsole {
    fn print_stderr(&self, line: &str) {
        eprintln!("{line}");
    }
}
