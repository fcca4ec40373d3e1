//! Mounted widget registry.
//!
//! Each mount gets a fresh id and fresh state. Unmount drops the state, so
//! nothing leaks between instances or across remounts.

use crate::view::state::ViewState;
use log::debug;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Stable identifier for one mounted widget instance.
pub type WidgetId = Uuid;

/// Widget families that own view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Cyber-defense resource search; uses only `query`.
    ResourceSearch,
    /// Certification search; uses only `query`.
    CertificationSearch,
    /// Toolkit search with tag selector.
    ToolkitSearch,
    /// One expandable toolkit item.
    ToolkitItem,
    /// Standalone copy/download button pair.
    CopyButton,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ResourceSearch => "resource_search",
            Self::CertificationSearch => "certification_search",
            Self::ToolkitSearch => "toolkit_search",
            Self::ToolkitItem => "toolkit_item",
            Self::CopyButton => "copy_button",
        }
    }
}

/// Registered widget and its exclusively owned state.
#[derive(Debug, Clone)]
pub struct MountedWidget {
    pub kind: WidgetKind,
    pub state: ViewState,
}

/// In-process widget state registry.
#[derive(Debug)]
pub struct WidgetRegistry {
    widgets: BTreeMap<WidgetId, MountedWidget>,
    copied_window: Duration,
}

impl WidgetRegistry {
    pub fn new(copied_window: Duration) -> Self {
        Self {
            widgets: BTreeMap::new(),
            copied_window,
        }
    }

    /// Creates mount-time state for a new widget instance.
    pub fn mount(&mut self, kind: WidgetKind) -> WidgetId {
        self.mount_with_state(kind).0
    }

    /// Mounts a widget and hands back its fresh state for initial input.
    pub fn mount_with_state(&mut self, kind: WidgetKind) -> (WidgetId, &mut ViewState) {
        let id = Uuid::new_v4();
        debug!(
            "event=widget_mount module=view status=ok kind={} widget_id={id}",
            kind.as_str()
        );
        let widget = self.widgets.entry(id).or_insert(MountedWidget {
            kind,
            state: ViewState::with_copied_window(self.copied_window),
        });
        (id, &mut widget.state)
    }

    /// Discards a widget's state. Returns `false` for unknown ids.
    pub fn unmount(&mut self, id: WidgetId) -> bool {
        let removed = self.widgets.remove(&id);
        if let Some(widget) = &removed {
            debug!(
                "event=widget_unmount module=view status=ok kind={} widget_id={id}",
                widget.kind.as_str()
            );
        }
        removed.is_some()
    }

    pub fn get(&self, id: WidgetId) -> Option<&MountedWidget> {
        self.widgets.get(&id)
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut MountedWidget> {
        self.widgets.get_mut(&id)
    }

    pub fn state_mut(&mut self, id: WidgetId) -> Option<&mut ViewState> {
        self.widgets.get_mut(&id).map(|widget| &mut widget.state)
    }

    /// Applies due copied-indicator reverts across all widgets.
    ///
    /// Returns ids whose indicator changed, in id order.
    pub fn poll(&mut self, now: Instant) -> Vec<WidgetId> {
        self.widgets
            .iter_mut()
            .filter_map(|(id, widget)| widget.state.copy_feedback_mut().poll(now).then_some(*id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::config::DEFAULT_COPIED_WINDOW_MS))
    }
}
