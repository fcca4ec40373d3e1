//! Content configuration supplied once at startup.
//!
//! # Responsibility
//! - Load the read-only record collections every view renders.
//! - Report data-quality findings without failing the load.
//!
//! # See also
//! - `crates/folio_cli/content/resume.json` for the bundled sample.

pub mod audit;
pub mod store;
