//! Résumé content domain model.
//!
//! # Responsibility
//! - Define the typed records rendered by every résumé view.
//! - Expose stable identity keys used by the presentation layer as list keys.
//!
//! # Invariants
//! - Records are plain data; nothing here mutates after content load.
//! - Identity keys are expected to be unique per collection, but the core
//!   never deduplicates.

pub mod certification;
pub mod lenient;
pub mod record;
