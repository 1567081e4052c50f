//! File selection for the summarize slot.
//!
//! Selection applies an advisory plain-text filter. Nothing re-checks the
//! file before it is sent.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension accepted by the selection filter.
pub const ACCEPTED_EXTENSION: &str = "txt";

/// MIME type attached to the uploaded part.
pub const UPLOAD_MIME: &str = "text/plain";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No file path given")]
    EmptyPath,

    #[error("Only .txt files can be attached: {name}")]
    NotPlainText { name: String },
}

/// A file picked for upload. Replaced wholesale on every selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    path: PathBuf,
    name: String,
}

impl SelectedFile {
    /// Accept `path` if it passes the `.txt` filter.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, SelectionError> {
        let path = path.into();
        if path.as_os_str().is_empty() {
            return Err(SelectionError::EmptyPath);
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(ACCEPTED_EXTENSION));
        if !accepted {
            return Err(SelectionError::NotPlainText { name });
        }

        Ok(Self { path, name })
    }

    /// Parse a dropped or typed path.
    ///
    /// Terminals deliver drag-and-drop as pasted text: surrounding quotes,
    /// a `file://` prefix and escaped spaces are stripped.
    pub fn from_dropped(raw: &str) -> Result<Self, SelectionError> {
        let mut text = raw.trim();
        for quote in ['"', '\''] {
            if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
                text = &text[1..text.len() - 1];
            }
        }
        let text = text.strip_prefix("file://").unwrap_or(text);
        Self::from_path(text.replace("\\ ", " "))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
