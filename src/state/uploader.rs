//! Local state of the logo uploader
//!
//! The chosen file is only sent when the user confirms, and at most one
//! upload is in flight at a time.

use std::path::PathBuf;

/// File selection plus the busy flag that gates the Upload button
#[derive(Debug, Clone, Default)]
pub struct Uploader {
    file: Option<PathBuf>,
    busy: bool,
}

impl Uploader {
    /// Remember the file picked in the dialog, replacing any previous choice
    pub fn choose_file(&mut self, path: PathBuf) {
        self.file = Some(path);
    }

    /// File name shown next to the picker
    pub fn file_label(&self) -> String {
        self.file
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "No file chosen".to_string())
    }

    /// Enter the busy state and return the file to send
    ///
    /// Returns `None` without changing anything when no file is chosen or an
    /// upload is already running.
    pub fn begin(&mut self) -> Option<PathBuf> {
        if self.busy {
            return None;
        }
        let file = self.file.clone()?;
        self.busy = true;
        Some(file)
    }

    /// Leave the busy state; called on success and failure alike
    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Label for the Upload button
    pub fn button_label(&self) -> &'static str {
        if self.busy {
            "Uploading..."
        } else {
            "Upload"
        }
    }
}
