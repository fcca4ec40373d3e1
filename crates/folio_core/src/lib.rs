//! Core logic for the Folio résumé site.
//! This crate is the single source of truth for filtering, export and
//! view-state invariants; hosts only render and forward input events.

pub mod config;
pub mod content;
pub mod export;
pub mod logging;
pub mod model;
pub mod search;
pub mod view;

pub use config::{ConfigError, ExportSettings, DEFAULT_COPIED_WINDOW_MS, DEFAULT_DOWNLOAD_FILENAME};
pub use content::audit::ContentIssue;
pub use content::store::{ContentError, ContentStore};
pub use export::capability::{
    ClipboardError, DownloadArtifact, DownloadError, ExportCapability, PLAIN_TEXT_MIME,
};
pub use export::memory::InMemoryExport;
pub use export::resume_text::{resume_plain_text, RESUME_FILENAME};
pub use export::service::ExportService;
pub use export::system::{DirectoryDownloads, HostExport, SystemClipboard};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::certification::{clamp_progress, Certification, CertificationStatus};
pub use model::record::{Education, ExperienceEntry, Profile, Project, Resource, ToolkitItem};
pub use search::filter::{
    filter, matches_query, tag_options, FilterCriteria, Searchable, TagFilter, TAG_FILTER_ALL,
};
pub use view::feedback::CopyFeedback;
pub use view::registry::{MountedWidget, WidgetId, WidgetKind, WidgetRegistry};
pub use view::state::{ToolkitBoard, ToolkitEntry, ViewState};
pub use view::timer::{Clock, ManualClock, SingleShotTimer, SystemClock, TimerToken};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
