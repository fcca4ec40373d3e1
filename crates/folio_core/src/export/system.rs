//! Platform-backed export capability.
//!
//! # Responsibility
//! - Write clipboard text through the native clipboard (`arboard`).
//! - Write downloads into a host-chosen directory.
//!
//! # Invariants
//! - The native clipboard is opened on first write and kept for reuse; a
//!   failed open is retried on the next write.
//! - Downloads never write outside the target directory.

use crate::export::capability::{
    validate_filename, ClipboardError, DownloadArtifact, DownloadError, ExportCapability,
};
use arboard::Clipboard;
use std::fmt::{Debug, Formatter};
use std::path::{Path, PathBuf};

/// Clipboard writer backed by the platform's native clipboard.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a native clipboard handle is currently held.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Replaces the clipboard text with `text`.
    pub fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(open_error)?,
        };
        let result = clipboard.set_text(text).map_err(write_error);
        self.handle = Some(clipboard);
        result
    }
}

impl Debug for SystemClipboard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.is_open())
            .finish()
    }
}

/// No usable clipboard in this session (headless, no display server).
fn open_error(err: arboard::Error) -> ClipboardError {
    ClipboardError::Unavailable(format!("cannot open clipboard: {err}"))
}

fn write_error(err: arboard::Error) -> ClipboardError {
    match err {
        arboard::Error::ClipboardNotSupported | arboard::Error::ClipboardOccupied => {
            ClipboardError::Unavailable(err.to_string())
        }
        other => ClipboardError::Denied(other.to_string()),
    }
}

/// Download sink that saves artifacts into one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryDownloads {
    dir: PathBuf,
}

impl DirectoryDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an artifact with `filename` would be saved to.
    pub fn target_path(&self, filename: &str) -> Result<PathBuf, DownloadError> {
        Ok(self.dir.join(validate_filename(filename)?))
    }

    /// Creates the directory if needed and writes the artifact bytes.
    pub fn save(&self, artifact: &DownloadArtifact) -> Result<PathBuf, DownloadError> {
        let path = self.target_path(&artifact.filename)?;
        std::fs::create_dir_all(&self.dir).map_err(|source| DownloadError::Io {
            path: self.dir.clone(),
            source,
        })?;
        std::fs::write(&path, &artifact.bytes).map_err(|source| DownloadError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// Real host capability: system clipboard plus directory downloads.
#[derive(Debug)]
pub struct HostExport {
    clipboard: SystemClipboard,
    downloads: DirectoryDownloads,
}

impl HostExport {
    pub fn new(clipboard: SystemClipboard, downloads: DirectoryDownloads) -> Self {
        Self {
            clipboard,
            downloads,
        }
    }

    /// Platform clipboard with downloads saved under `dir`.
    pub fn for_directory(dir: impl Into<PathBuf>) -> Self {
        Self::new(SystemClipboard::new(), DirectoryDownloads::new(dir))
    }

    pub fn downloads(&self) -> &DirectoryDownloads {
        &self.downloads
    }
}

impl ExportCapability for HostExport {
    fn write_clipboard(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard.write(text)
    }

    fn save_download(&mut self, artifact: &DownloadArtifact) -> Result<(), DownloadError> {
        self.downloads.save(artifact).map(|_| ())
    }
}
