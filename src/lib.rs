/// Check Pages - detects leftover mock data in a front-end page
///
/// This library reads `frontend/src/pages/Worksheets.jsx`, checks whether it
/// still initializes state from an inline array and reports the result.

pub mod core;
pub mod utils;

// Re-export main types for convenience
pub use crate::core::inspector::{evaluate, Inspector, Verdict, TARGET_PATH};
pub use crate::utils::file_utils::{FileAccessError, FileContents};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Inspect a single page and return the verdict
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the page to inspect
pub fn inspect_file<P: AsRef<std::path::Path>>(file_path: P) -> Result<Verdict, FileAccessError> {
    Inspector::new(file_path).inspect()
}

/// Command-line application functionality
pub mod app {
    use std::io::Write;

    use crate::core::inspector::Inspector;
    use crate::utils::output_formatter;

    /// Inspect the fixed target page and print the verdict
    ///
    /// # Returns
    ///
    /// Nothing is written to `out` when the page cannot be read.
    pub fn run<W: Write>(out: &mut W) -> anyhow::Result<()> {
        let verdict = Inspector::default().inspect()?;
        output_formatter::write_verdict(out, &verdict)?;
        Ok(())
    }
}
