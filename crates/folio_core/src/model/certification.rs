//! Certification record and progress rules.
//!
//! # Invariants
//! - `progress` is stored as supplied, even out of range. Floats and numeric
//!   strings are rounded; `null` and other shapes decode as `0`.
//! - Everything shown to a user goes through [`Certification::effective_progress`],
//!   which clamps into `[0, 100]`.

use crate::model::lenient::{self, null_as_default};
use serde::{Deserialize, Serialize};

/// Lower bound for displayed progress.
pub const PROGRESS_MIN: i64 = 0;
/// Upper bound for displayed progress.
pub const PROGRESS_MAX: i64 = 100;

/// Certification lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CertificationStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl CertificationStatus {
    /// Display label, identical to the wire form.
    pub fn label(self) -> &'static str {
        match self {
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

/// One certification card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub status: CertificationStatus,
    pub provider: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub desc: String,
    /// Raw progress percentage; may be out of range in source data.
    #[serde(default, deserialize_with = "lenient::progress")]
    pub progress: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
}

impl Certification {
    pub fn key(&self) -> &str {
        self.name.as_str()
    }

    /// Progress clamped into `[0, 100]`.
    pub fn effective_progress(&self) -> u8 {
        clamp_progress(self.progress)
    }

    /// Only in-progress certifications render a progress bar.
    pub fn shows_progress(&self) -> bool {
        self.status == CertificationStatus::InProgress
    }

    /// Whether the stored value needed clamping.
    pub fn progress_out_of_range(&self) -> bool {
        !(PROGRESS_MIN..=PROGRESS_MAX).contains(&self.progress)
    }

    /// `provider • status[ • year]` subtitle line.
    pub fn subtitle(&self) -> String {
        match self.year {
            Some(year) => format!("{} • {} • {year}", self.provider, self.status.label()),
            None => format!("{} • {}", self.provider, self.status.label()),
        }
    }
}

/// Clamps any stored progress into the displayable percentage range.
pub fn clamp_progress(value: i64) -> u8 {
    // Bounds fit in u8 after clamping.
    value.clamp(PROGRESS_MIN, PROGRESS_MAX) as u8
}

#[cfg(test)]
mod tests {
    use super::{clamp_progress, Certification, CertificationStatus};

    fn cert(progress: i64, status: CertificationStatus) -> Certification {
        Certification {
            name: "ISC2 CC".to_string(),
            status,
            provider: "ISC2".to_string(),
            desc: String::new(),
            progress,
            year: None,
        }
    }

    #[test]
    fn clamps_out_of_range_progress() {
        assert_eq!(cert(140, CertificationStatus::InProgress).effective_progress(), 100);
        assert_eq!(cert(-5, CertificationStatus::InProgress).effective_progress(), 0);
        assert_eq!(cert(65, CertificationStatus::InProgress).effective_progress(), 65);
        assert_eq!(clamp_progress(i64::MAX), 100);
        assert_eq!(clamp_progress(i64::MIN), 0);
    }

    #[test]
    fn flags_out_of_range_values() {
        assert!(cert(101, CertificationStatus::Completed).progress_out_of_range());
        assert!(!cert(100, CertificationStatus::Completed).progress_out_of_range());
        assert!(!cert(0, CertificationStatus::Completed).progress_out_of_range());
    }

    #[test]
    fn status_uses_display_labels_on_the_wire() {
        let json = r#"{"name":"SC-900","status":"In Progress","provider":"Microsoft","progress":50}"#;
        let decoded: Certification = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.status, CertificationStatus::InProgress);
        assert!(decoded.shows_progress());
        assert_eq!(decoded.year, None);

        let encoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(encoded["status"], "In Progress");
    }

    #[test]
    fn subtitle_includes_year_only_when_present() {
        let mut completed = cert(100, CertificationStatus::Completed);
        assert_eq!(completed.subtitle(), "ISC2 • Completed");
        completed.year = Some(2023);
        assert_eq!(completed.subtitle(), "ISC2 • Completed • 2023");
    }
}
