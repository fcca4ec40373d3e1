//! Recording export capability for tests and dry runs.

use crate::export::capability::{
    validate_filename, ClipboardError, DownloadArtifact, DownloadError, ExportCapability,
};

/// Capability double that records every copy and download in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryExport {
    clipboard: Option<String>,
    copy_attempts: usize,
    downloads: Vec<DownloadArtifact>,
    deny_clipboard: Option<ClipboardError>,
}

impl InMemoryExport {
    pub fn new() -> Self {
        Self::default()
    }

    /// A double whose clipboard always fails with `error`.
    pub fn denying(error: ClipboardError) -> Self {
        Self {
            deny_clipboard: Some(error),
            ..Self::default()
        }
    }

    /// Switches clipboard denial on (`Some`) or off (`None`).
    pub fn set_clipboard_denial(&mut self, error: Option<ClipboardError>) {
        self.deny_clipboard = error;
    }

    /// Current clipboard contents.
    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    /// Number of clipboard writes attempted, including failed ones.
    pub fn copy_attempts(&self) -> usize {
        self.copy_attempts
    }

    /// Saved artifacts in request order.
    pub fn downloads(&self) -> &[DownloadArtifact] {
        &self.downloads
    }
}

impl ExportCapability for InMemoryExport {
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.copy_attempts += 1;
        if let Some(err) = &self.deny_clipboard {
            return Err(err.clone());
        }
        self.clipboard = Some(text.to_string());
        Ok(())
    }

    fn save_download(&mut self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        validate_filename(&artifact.filename)?;
        self.downloads.push(artifact.clone());
        Ok(())
    }
}
