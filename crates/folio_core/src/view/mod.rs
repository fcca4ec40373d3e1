//! Ephemeral per-widget UI state.
//!
//! # Responsibility
//! - Model the widget state machine the presentation layer drives.
//! - Own the only schedulable work in the system: the copied-indicator
//!   revert timer.
//!
//! # Invariants
//! - No state is shared between widget instances.
//! - State lives for a widget's mounted lifetime only.

pub mod feedback;
pub mod registry;
pub mod state;
pub mod timer;
