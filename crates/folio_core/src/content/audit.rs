//! Non-fatal content checks.
//!
//! Hosts run these after load and log the findings. Nothing here blocks
//! startup: malformed values are clamped or defaulted at render time.

use crate::content::store::ContentStore;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("valid http url regex"));

/// One finding from [`ContentStore::audit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentIssue {
    EmptyProfileName,
    NoExperience,
    ExperienceWithoutBullets { key: String },
    NonHttpResourceUrl { url: String },
    ProgressOutOfRange { name: String, progress: i64 },
    BlankToolkitTitle { index: usize },
    BlankToolkitNote { title: String },
    DuplicateKey { collection: &'static str, key: String },
}

impl ContentIssue {
    /// Stable short code for log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyProfileName => "empty_profile_name",
            Self::NoExperience => "no_experience",
            Self::ExperienceWithoutBullets { .. } => "experience_without_bullets",
            Self::NonHttpResourceUrl { .. } => "non_http_resource_url",
            Self::ProgressOutOfRange { .. } => "progress_out_of_range",
            Self::BlankToolkitTitle { .. } => "blank_toolkit_title",
            Self::BlankToolkitNote { .. } => "blank_toolkit_note",
            Self::DuplicateKey { .. } => "duplicate_key",
        }
    }
}

impl Display for ContentIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyProfileName => write!(f, "profile name is empty"),
            Self::NoExperience => write!(f, "experience list is empty"),
            Self::ExperienceWithoutBullets { key } => {
                write!(f, "experience `{key}` has no bullets")
            }
            Self::NonHttpResourceUrl { url } => write!(f, "resource url is not http(s): {url}"),
            Self::ProgressOutOfRange { name, progress } => write!(
                f,
                "certification `{name}` progress {progress} is outside 0..=100 and will be clamped"
            ),
            Self::BlankToolkitTitle { index } => write!(f, "toolkit item #{index} has no title"),
            Self::BlankToolkitNote { title } => write!(f, "toolkit item `{title}` has no note"),
            Self::DuplicateKey { collection, key } => {
                write!(f, "duplicate {collection} key: {key}")
            }
        }
    }
}

impl ContentStore {
    /// Collects data-quality findings in collection order.
    pub fn audit(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        if self.profile.name.trim().is_empty() {
            issues.push(ContentIssue::EmptyProfileName);
        }
        if self.experience.is_empty() {
            issues.push(ContentIssue::NoExperience);
        }
        for entry in &self.experience {
            if entry.bullets.is_empty() {
                issues.push(ContentIssue::ExperienceWithoutBullets { key: entry.label() });
            }
        }
        for resource in &self.resources {
            if !HTTP_URL_RE.is_match(&resource.url) {
                issues.push(ContentIssue::NonHttpResourceUrl {
                    url: resource.url.clone(),
                });
            }
        }
        for cert in &self.certifications {
            if cert.progress_out_of_range() {
                issues.push(ContentIssue::ProgressOutOfRange {
                    name: cert.name.clone(),
                    progress: cert.progress,
                });
            }
        }
        for (index, item) in self.toolkit.iter().enumerate() {
            if item.title.trim().is_empty() {
                issues.push(ContentIssue::BlankToolkitTitle { index });
            } else if item.note.trim().is_empty() {
                issues.push(ContentIssue::BlankToolkitNote {
                    title: item.title.clone(),
                });
            }
        }

        push_duplicates(
            &mut issues,
            "experience",
            self.experience.iter().map(|entry| entry.key()),
            |&(role, company)| format!("{role} @ {company}"),
        );
        push_duplicates(
            &mut issues,
            "education",
            self.education.iter().map(|entry| entry.key()),
            plain_key,
        );
        push_duplicates(
            &mut issues,
            "project",
            self.projects.iter().map(|project| project.key()),
            plain_key,
        );
        push_duplicates(
            &mut issues,
            "certification",
            self.certifications.iter().map(|cert| cert.key()),
            plain_key,
        );
        push_duplicates(
            &mut issues,
            "resource",
            self.resources.iter().map(|resource| resource.key()),
            plain_key,
        );
        push_duplicates(
            &mut issues,
            "toolkit",
            self.toolkit.iter().map(|item| item.key()),
            plain_key,
        );

        issues
    }
}

fn push_duplicates<K: Ord + Clone>(
    issues: &mut Vec<ContentIssue>,
    collection: &'static str,
    keys: impl Iterator<Item = K>,
    label: impl Fn(&K) -> String,
) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for key in keys {
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            issues.push(ContentIssue::DuplicateKey {
                collection,
                key: label(&key),
            });
        }
    }
}

fn plain_key(key: &&str) -> String {
    (*key).to_string()
}
