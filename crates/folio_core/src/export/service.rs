//! Export use-case service.
//!
//! # Responsibility
//! - Run clipboard copies and downloads through one [`ExportCapability`].
//! - Keep copied-indicator transitions consistent with copy outcomes.
//!
//! # Invariants
//! - Clipboard failures are logged and returned as values; never a panic.
//! - Download failures are logged and swallowed.
//! - Payload text is never logged, only its length.

use crate::config::ExportSettings;
use crate::export::capability::{ClipboardError, DownloadArtifact, ExportCapability};
use crate::view::feedback::CopyFeedback;
use log::{info, warn};
use std::time::Instant;

/// Export facade over a host capability.
pub struct ExportService<C: ExportCapability> {
    capability: C,
    settings: ExportSettings,
}

impl<C: ExportCapability> ExportService<C> {
    pub fn new(capability: C, settings: ExportSettings) -> Self {
        Self {
            capability,
            settings,
        }
    }

    pub fn settings(&self) -> &ExportSettings {
        &self.settings
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    pub fn capability_mut(&mut self) -> &mut C {
        &mut self.capability
    }

    pub fn into_capability(self) -> C {
        self.capability
    }

    /// Writes `text` verbatim to the clipboard.
    pub fn copy_to_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        match self.capability.write_clipboard(text) {
            Ok(()) => {
                info!(
                    "event=clipboard_copy module=export status=ok chars={}",
                    text.chars().count()
                );
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=clipboard_copy module=export status=error kind={} error={}",
                    err.kind(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Copies and drives a widget's copied indicator from the outcome.
    ///
    /// Success turns the indicator on until the revert window elapses;
    /// failure leaves it off.
    pub fn copy_with_feedback(
        &mut self,
        text: &str,
        feedback: &mut CopyFeedback,
        now: Instant,
    ) -> Result<(), ClipboardError> {
        let result = self.copy_to_clipboard(text);
        match &result {
            Ok(()) => feedback.mark_copied(now),
            Err(_) => feedback.mark_failed(),
        }
        result
    }

    /// Saves `text` as a plain-text file.
    ///
    /// Falls back to the configured default filename only when `filename`
    /// is absent or empty; any other name is passed to the host verbatim.
    /// Returns the filename that was requested from the host.
    pub fn download_as_file(&mut self, text: &str, filename: Option<&str>) -> String {
        let filename = filename
            .filter(|value| !value.is_empty())
            .unwrap_or(self.settings.default_filename.as_str())
            .to_string();
        let artifact = DownloadArtifact::plain_text(text, filename.as_str());

        match self.capability.save_download(&artifact) {
            Ok(()) => info!(
                "event=download module=export status=ok filename={} bytes={}",
                artifact.filename,
                artifact.bytes.len()
            ),
            Err(err) => warn!(
                "event=download module=export status=error filename={} error={}",
                artifact.filename, err
            ),
        }
        filename
    }
}
