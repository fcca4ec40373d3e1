//! Host export capability contract.
//!
//! The core reaches the clipboard and file-save primitives only through
//! [`ExportCapability`], so tests can substitute [`crate::export::memory::InMemoryExport`].

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// MIME type attached to every download.
pub const PLAIN_TEXT_MIME: &str = "text/plain;charset=utf-8";

/// Clipboard write failure. Recovered locally by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// The host refused the write (permission, insecure context, non-zero exit).
    Denied(String),
    /// No clipboard mechanism is available on this host.
    Unavailable(String),
}

impl ClipboardError {
    /// Stable short code for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Denied(_) => "denied",
            Self::Unavailable(_) => "unavailable",
        }
    }
}

impl Display for ClipboardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denied(details) => write!(f, "clipboard write denied: {details}"),
            Self::Unavailable(details) => write!(f, "clipboard unavailable: {details}"),
        }
    }
}

impl Error for ClipboardError {}

/// Host-level download failure. Never surfaced past the export service.
#[derive(Debug)]
pub enum DownloadError {
    /// Filename would escape the download target or is empty.
    InvalidFilename(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DownloadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFilename(value) => write!(f, "invalid download filename: `{value}`"),
            Self::Io { path, source } => {
                write!(f, "failed to save `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DownloadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidFilename(_) => None,
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Plain-text payload handed to the host's save primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    /// Suggested file name.
    pub filename: String,
    pub mime_type: &'static str,
    /// UTF-8 bytes of the payload, unmodified.
    pub bytes: Vec<u8>,
}

impl DownloadArtifact {
    /// Packages `text` verbatim as a plain-text download.
    pub fn plain_text(text: &str, filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            mime_type: PLAIN_TEXT_MIME,
            bytes: text.as_bytes().to_vec(),
        }
    }
}

/// Narrow host interface for export side effects.
pub trait ExportCapability {
    /// Writes `text` verbatim to the clipboard.
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError>;

    /// Starts a host-initiated save of `artifact`.
    fn save_download(&mut self, artifact: &DownloadArtifact) -> Result<(), DownloadError>;
}

impl<T: ExportCapability + ?Sized> ExportCapability for &mut T {
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_clipboard(text)
    }

    fn save_download(&mut self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        (**self).save_download(artifact)
    }
}

impl<T: ExportCapability + ?Sized> ExportCapability for Box<T> {
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).write_clipboard(text)
    }

    fn save_download(&mut self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        (**self).save_download(artifact)
    }
}

/// Rejects names that are empty or carry path components.
pub fn validate_filename(filename: &str) -> Result<&str, DownloadError> {
    let trimmed = filename.trim();
    if trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains(['/', '\\', '\0'])
    {
        return Err(DownloadError::InvalidFilename(filename.to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{validate_filename, DownloadArtifact, DownloadError, PLAIN_TEXT_MIME};

    #[test]
    fn plain_text_keeps_bytes_verbatim() {
        let artifact = DownloadArtifact::plain_text("line1\nline2", "risk-register.csv");
        assert_eq!(artifact.bytes, b"line1\nline2");
        assert_eq!(artifact.mime_type, PLAIN_TEXT_MIME);
        assert_eq!(artifact.filename, "risk-register.csv");
    }

    #[test]
    fn filename_validation_rejects_paths() {
        assert_eq!(validate_filename(" notes.md ").unwrap(), "notes.md");
        for bad in ["", "  ", "..", "a/b.txt", "..\\x.txt"] {
            let err = validate_filename(bad).unwrap_err();
            assert!(matches!(err, DownloadError::InvalidFilename(_)));
        }
    }
}
