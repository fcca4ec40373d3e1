//! Profile and list records.
//!
//! # Responsibility
//! - Describe the wire shape of content-file records.
//! - Provide identity keys for experience, education, project, resource and
//!   toolkit collections.
//!
//! # Invariants
//! - Missing or `null` list and text fields deserialize as empty.
//! - Tag order is preserved as supplied; duplicates are kept.

use crate::model::lenient::null_as_default;
use serde::{Deserialize, Serialize};

/// Header data shown above all tabs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Short badges rendered next to the location (e.g. `Remote-Ready`).
    #[serde(default, deserialize_with = "null_as_default")]
    pub badges: Vec<String>,
}

/// One position in the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bullets: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl ExperienceEntry {
    /// List key: the (role, company) pair.
    pub fn key(&self) -> (&str, &str) {
        (self.role.as_str(), self.company.as_str())
    }

    /// Human-readable form of [`ExperienceEntry::key`].
    pub fn label(&self) -> String {
        format!("{} @ {}", self.role, self.company)
    }
}

/// One degree in the education card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub org: String,
    pub year: String,
}

impl Education {
    pub fn key(&self) -> &str {
        self.degree.as_str()
    }
}

/// Portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub desc: String,
    /// Rendered as `#` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

impl Project {
    pub fn key(&self) -> &str {
        self.name.as_str()
    }

    /// Link target used by the presentation layer.
    pub fn link_or_placeholder(&self) -> &str {
        self.link.as_deref().unwrap_or("#")
    }
}

/// External cyber-defense resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
}

impl Resource {
    pub fn key(&self) -> &str {
        self.url.as_str()
    }
}

/// Downloadable template in the toolkit widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolkitItem {
    pub title: String,
    /// In-page anchor id, also accepted as a lookup handle by hosts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub anchor: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub note: String,
    /// Template body. Items without content cannot be copied or downloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Suggested download filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

impl ToolkitItem {
    pub fn key(&self) -> &str {
        self.title.as_str()
    }

    /// Whether this item matches a host lookup handle (exact title or anchor).
    pub fn matches_handle(&self, handle: &str) -> bool {
        let handle = handle.trim();
        !handle.is_empty() && (self.title == handle || self.anchor == handle)
    }
}
