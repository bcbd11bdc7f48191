// SPDX-License-Identifier: MPL-2.0
//! Text export through a save dialog.
//!
//! The browser build of this workflow triggered a silent download; on the
//! desktop the destination comes from a native save dialog, after which the
//! content is written synchronously. Cancelling the dialog is an expected
//! outcome, not a failure.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Default MIME type when the caller does not care about the format.
pub const DEFAULT_MIME: &str = "text/plain";

/// Errors that can occur while exporting text to a file.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error while writing the chosen file.
    Io(io::Error),
    /// User cancelled the save dialog.
    Cancelled,
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Cancelled => write!(f, "export cancelled"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Cancelled => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Maps a text MIME type to the extension offered in the dialog filter.
///
/// Unknown types fall back to `txt`; the dialog never blocks on an
/// unrecognized MIME string.
#[must_use]
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "text/html" => "html",
        "text/csv" => "csv",
        "text/markdown" => "md",
        "application/json" => "json",
        _ => "txt",
    }
}

/// Generates a default filename for text exports.
///
/// Format: `newsdesk_export_YYYYMMDD_HHMMSS.txt`. Uses local time for
/// user-friendly filenames.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("newsdesk_export_{}.txt", now.format("%Y%m%d_%H%M%S"))
}

/// Writes `content` to `path`, creating parent directories as needed.
pub fn write_text_to_path(path: &Path, content: &str) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Asks the user for a destination and writes `content` there.
///
/// # Errors
///
/// Returns `ExportError::Cancelled` if the user dismisses the dialog and
/// `ExportError::Io` if the write fails.
pub async fn save_text_as_file(
    content: String,
    suggested_name: String,
    mime: &str,
) -> Result<PathBuf, ExportError> {
    let extension = extension_for_mime(mime);

    let handle = rfd::AsyncFileDialog::new()
        .set_title("Save As")
        .set_file_name(&suggested_name)
        .add_filter(extension.to_uppercase(), &[extension])
        .save_file()
        .await
        .ok_or(ExportError::Cancelled)?;

    let path = handle.path().to_path_buf();
    write_text_to_path(&path, &content)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn known_mime_types_map_to_their_extensions() {
        assert_eq!(extension_for_mime("text/plain"), "txt");
        assert_eq!(extension_for_mime("text/html"), "html");
        assert_eq!(extension_for_mime("text/csv"), "csv");
        assert_eq!(extension_for_mime("text/markdown"), "md");
        assert_eq!(extension_for_mime("application/json"), "json");
    }

    #[test]
    fn unknown_mime_falls_back_to_txt() {
        assert_eq!(extension_for_mime("application/x-nonsense"), "txt");
    }

    #[test]
    fn default_filename_has_expected_shape() {
        let name = generate_default_filename();
        assert!(name.starts_with("newsdesk_export_"));
        assert!(name.ends_with(".txt"));
        // newsdesk_export_ + YYYYMMDD_HHMMSS + .txt
        assert_eq!(name.len(), "newsdesk_export_".len() + 15 + 4);
    }

    #[test]
    fn write_text_creates_parents_and_persists_content() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("exports").join("draft.txt");

        write_text_to_path(&path, "## Markets\nquiet session").expect("write failed");
        let read_back = std::fs::read_to_string(&path).expect("read failed");
        assert_eq!(read_back, "## Markets\nquiet session");
    }

    #[test]
    fn export_error_cancelled_displays_correctly() {
        assert_eq!(format!("{}", ExportError::Cancelled), "export cancelled");
    }
}
