//! Read-only content store.
//!
//! # Responsibility
//! - Load résumé content from JSON once at startup.
//! - Hand typed, ordered collections to filters and views.
//!
//! # Invariants
//! - Collections keep source order and are never mutated after load.
//! - Loading validates settings but never rejects record-level oddities;
//!   those surface through [`ContentStore::audit`].

use crate::config::{ConfigError, ExportSettings};
use crate::model::certification::Certification;
use crate::model::record::{Education, ExperienceEntry, Profile, Project, Resource, ToolkitItem};
use log::info;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Content loading errors.
#[derive(Debug)]
pub enum ContentError {
    /// Content file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Content is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// Embedded `settings` object is out of bounds.
    Settings(ConfigError),
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read content `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid content JSON: {err}"),
            Self::Settings(err) => write!(f, "invalid content settings: {err}"),
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Settings(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ConfigError> for ContentError {
    fn from(value: ConfigError) -> Self {
        Self::Settings(value)
    }
}

/// Every collection the résumé renders, plus export settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStore {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub toolkit: Vec<ToolkitItem>,
    #[serde(default)]
    pub settings: ExportSettings,
}

impl ContentStore {
    /// Parses content from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let store: Self = serde_json::from_str(raw)?;
        store.settings.validate()?;
        info!(
            "event=content_load module=content status=ok experience={} education={} projects={} certifications={} resources={} toolkit={}",
            store.experience.len(),
            store.education.len(),
            store.projects.len(),
            store.certifications.len(),
            store.resources.len(),
            store.toolkit.len()
        );
        Ok(store)
    }

    /// Reads and parses a JSON content file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Finds a toolkit item by exact title or anchor.
    pub fn find_toolkit_item(&self, handle: &str) -> Option<&ToolkitItem> {
        self.toolkit.iter().find(|item| item.matches_handle(handle))
    }
}
