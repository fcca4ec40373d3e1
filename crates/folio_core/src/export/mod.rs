//! Clipboard and download side effects.
//!
//! # Responsibility
//! - Define the narrow host capability the core depends on.
//! - Provide the export service, a platform implementation and an
//!   in-memory double.
//!
//! # Invariants
//! - Export runs only on explicit user action; nothing here is automatic.

pub mod capability;
pub mod memory;
pub mod resume_text;
pub mod service;
pub mod system;
