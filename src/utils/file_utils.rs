/// File handling utilities
///
/// This module reads the inspected page into memory and reports why a read
/// failed.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

/// Error when the target file cannot be turned into text
#[derive(Debug, thiserror::Error)]
pub enum FileAccessError {
    /// The file does not exist
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened or read
    #[error("Failed to read {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid UTF-8 text
    #[error("File is not valid UTF-8 text: {}", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

/// Full text of a file and its length in characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContents {
    /// The content of the file with line endings normalized to `\n`
    pub text: String,
    /// Number of characters (not bytes) in `text`
    pub length: usize,
}

impl FileContents {
    /// Build contents from text that was already decoded
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = normalize_newlines(text.into());
        let length = text.chars().count();
        Self { text, length }
    }
}

/// Read the whole file as UTF-8 text.
///
/// The handle lives only inside this function, so it is closed on every
/// return path.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The file contents, or the reason they could not be read
pub fn read_text_file(file_path: &Path) -> Result<FileContents, FileAccessError> {
    let mut file = File::open(file_path).map_err(|e| classify_io_error(file_path, e))?;

    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| classify_io_error(file_path, e))?;
    debug!("Read {} bytes from {}", buffer.len(), file_path.display());

    let text = String::from_utf8(buffer).map_err(|_| FileAccessError::InvalidUtf8 {
        path: file_path.to_path_buf(),
    })?;

    Ok(FileContents::from_text(text))
}

fn classify_io_error(file_path: &Path, error: io::Error) -> FileAccessError {
    match error.kind() {
        io::ErrorKind::NotFound => FileAccessError::NotFound {
            path: file_path.to_path_buf(),
        },
        io::ErrorKind::InvalidData => FileAccessError::InvalidUtf8 {
            path: file_path.to_path_buf(),
        },
        _ => FileAccessError::Unreadable {
            path: file_path.to_path_buf(),
            source: error,
        },
    }
}

/// Translate `\r\n` and lone `\r` into `\n`, like a text-mode read does.
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
