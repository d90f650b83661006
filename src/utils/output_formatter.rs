/// Output formatter for inspection verdicts
///
/// Stdout lines are plain text. Color is only used for errors on stderr.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::inspector::Verdict;

/// Format a verdict as the lines printed on stdout
///
/// # Arguments
///
/// * `verdict` - Verdict to render
///
/// # Returns
///
/// One or two lines, each terminated by a newline
pub fn format_verdict(verdict: &Verdict) -> String {
    match verdict {
        Verdict::NeedsUpdate { length } => format!(
            "Worksheets.jsx needs updating - has mock data\nFile size: {} characters\n",
            length
        ),
        Verdict::MaybeUpdated => "Worksheets.jsx may already be updated or has issues\n".to_string(),
    }
}

/// Write a verdict to the given writer
pub fn write_verdict<W: Write>(writer: &mut W, verdict: &Verdict) -> io::Result<()> {
    writer.write_all(format_verdict(verdict).as_bytes())?;
    writer.flush()
}

/// Format a fatal error for stderr
pub fn format_error(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}
