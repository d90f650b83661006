/// Mock data inspector
///
/// This file contains the Inspector, which reads the worksheets page and
/// decides whether it still carries inline mock data.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::patterns;
use crate::utils::file_utils::{read_text_file, FileAccessError, FileContents};

/// Page inspected by the command-line tool, relative to the working directory
pub const TARGET_PATH: &str = "frontend/src/pages/Worksheets.jsx";

/// Outcome of inspecting a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The page has the mock marker and is over the size threshold
    NeedsUpdate {
        /// Length of the page in characters
        length: usize,
    },
    /// Either the marker is missing or the page is small
    MaybeUpdated,
}

/// Decide the verdict for already-read contents.
///
/// Both conditions are evaluated; the page is flagged only when the marker is
/// present and the length is strictly over the threshold.
pub fn evaluate(contents: &FileContents) -> Verdict {
    let has_marker = patterns::contains_mock_marker(&contents.text);
    let is_large = patterns::exceeds_threshold(contents.length);
    debug!(
        "marker present: {}, length: {} (threshold {})",
        has_marker,
        contents.length,
        patterns::SIZE_THRESHOLD
    );

    if has_marker && is_large {
        Verdict::NeedsUpdate {
            length: contents.length,
        }
    } else {
        Verdict::MaybeUpdated
    }
}

/// Reads one page and evaluates it
pub struct Inspector {
    target: PathBuf,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(TARGET_PATH)
    }
}

impl Inspector {
    /// Create an inspector for the given page
    pub fn new<P: AsRef<Path>>(target: P) -> Self {
        Self {
            target: target.as_ref().to_path_buf(),
        }
    }

    /// Path this inspector reads
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Read the page and decide the verdict
    ///
    /// # Returns
    ///
    /// The verdict, or the read failure. Nothing is evaluated when the read
    /// fails.
    pub fn inspect(&self) -> Result<Verdict, FileAccessError> {
        info!("Inspecting {}", self.target.display());

        let contents = read_text_file(&self.target)?;

        match patterns::find_mock_declaration(&contents.text) {
            Some(found) => debug!(
                "Stricter mock declaration found ({} characters)",
                found.chars().count()
            ),
            None => debug!("No stricter mock declaration found"),
        }

        let verdict = evaluate(&contents);
        info!("Verdict for {}: {:?}", self.target.display(), verdict);
        Ok(verdict)
    }
}
