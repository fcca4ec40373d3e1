//! Search and filter entry points.
//!
//! # Responsibility
//! - Expose the pure filter used by every searchable widget.
//! - Keep per-record searchable text definitions inside core.

pub mod filter;
