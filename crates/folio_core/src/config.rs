//! Export behavior settings.
//!
//! Settings travel inside the content file under an optional `settings`
//! object; every field has a default so the object may be omitted entirely.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Default "copied" confirmation window in milliseconds.
pub const DEFAULT_COPIED_WINDOW_MS: u64 = 1_500;
/// Filename suggested for downloads that do not name one.
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "template.txt";
/// Upper bound accepted for the confirmation window.
pub const MAX_COPIED_WINDOW_MS: u64 = 60_000;

/// Tunables for clipboard feedback and downloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// How long the copied indicator stays on after a successful copy.
    pub copied_window_ms: u64,
    /// Fallback filename for downloads.
    pub default_filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            copied_window_ms: DEFAULT_COPIED_WINDOW_MS,
            default_filename: DEFAULT_DOWNLOAD_FILENAME.to_string(),
        }
    }
}

impl ExportSettings {
    /// Confirmation window as a duration.
    pub fn copied_window(&self) -> Duration {
        Duration::from_millis(self.copied_window_ms)
    }

    /// Validates settings loaded from external content.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.copied_window_ms == 0 || self.copied_window_ms > MAX_COPIED_WINDOW_MS {
            return Err(ConfigError::InvalidCopiedWindow(self.copied_window_ms));
        }
        let filename = self.default_filename.trim();
        if filename.is_empty() || filename.contains(['/', '\\']) {
            return Err(ConfigError::InvalidDefaultFilename(
                self.default_filename.clone(),
            ));
        }
        Ok(())
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidCopiedWindow(u64),
    InvalidDefaultFilename(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCopiedWindow(value) => write!(
                f,
                "copied_window_ms must be within 1..={MAX_COPIED_WINDOW_MS}, got {value}"
            ),
            Self::InvalidDefaultFilename(value) => {
                write!(f, "default_filename must be a bare file name, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{ConfigError, ExportSettings};
    use std::time::Duration;

    #[test]
    fn defaults_match_reference_behavior() {
        let settings = ExportSettings::default();
        assert_eq!(settings.copied_window(), Duration::from_millis(1_500));
        assert_eq!(settings.default_filename, "template.txt");
        settings.validate().expect("defaults are valid");
    }

    #[test]
    fn partial_object_fills_defaults() {
        let settings: ExportSettings = serde_json::from_str(r#"{"copied_window_ms":900}"#).unwrap();
        assert_eq!(settings.copied_window_ms, 900);
        assert_eq!(settings.default_filename, "template.txt");
    }

    #[test]
    fn rejects_zero_window_and_path_filenames() {
        let zero = ExportSettings {
            copied_window_ms: 0,
            ..ExportSettings::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::InvalidCopiedWindow(0)));

        let nested = ExportSettings {
            default_filename: "../out.txt".to_string(),
            ..ExportSettings::default()
        };
        assert!(matches!(
            nested.validate(),
            Err(ConfigError::InvalidDefaultFilename(_))
        ));
    }
}
