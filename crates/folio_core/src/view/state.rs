//! Per-widget view state.
//!
//! # Responsibility
//! - Hold query, tag selector, open toggle and copied flag for one widget.
//! - Derive filter criteria for the next render.
//!
//! # Invariants
//! - Mount state is `query = ""`, `tag_filter = all`, `is_open = false`.
//! - Only input events mutate state; there is no debounce.
//! - Toolkit open state is keyed by item identity, so it survives items
//!   being filtered out and back in.

use crate::model::record::ToolkitItem;
use crate::search::filter::{filter, FilterCriteria, TagFilter};
use crate::view::feedback::CopyFeedback;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// State owned by one mounted widget.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    query: String,
    tag_filter: TagFilter,
    is_open: bool,
    copy: CopyFeedback,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount state with a custom copied-confirmation window.
    pub fn with_copied_window(window: Duration) -> Self {
        Self {
            copy: CopyFeedback::new(window),
            ..Self::default()
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_tag_filter(&mut self, tag_filter: impl Into<TagFilter>) {
        self.tag_filter = tag_filter.into();
    }

    /// Flips the expanded state and returns the new value.
    pub fn toggle_open(&mut self) -> bool {
        self.is_open = !self.is_open;
        self.is_open
    }

    /// Forces the expanded state, for hosts restoring an open item.
    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag_filter(&self) -> &TagFilter {
        &self.tag_filter
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn copy_feedback(&self) -> &CopyFeedback {
        &self.copy
    }

    pub fn copy_feedback_mut(&mut self) -> &mut CopyFeedback {
        &mut self.copy
    }

    /// Criteria for the next render.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone(),
            tag_filter: self.tag_filter.clone(),
        }
    }
}

/// One toolkit row as the presentation layer should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolkitEntry<'a> {
    pub item: &'a ToolkitItem,
    pub is_open: bool,
    /// Body and copy/download buttons render only when open and present.
    pub shows_content: bool,
    pub copied: bool,
}

/// Toolkit panel: search/tag state plus one state per item.
#[derive(Debug, Clone)]
pub struct ToolkitBoard {
    panel: ViewState,
    items: BTreeMap<String, ViewState>,
    copied_window: Duration,
}

impl ToolkitBoard {
    pub fn new(copied_window: Duration) -> Self {
        Self {
            panel: ViewState::with_copied_window(copied_window),
            items: BTreeMap::new(),
            copied_window,
        }
    }

    pub fn panel(&self) -> &ViewState {
        &self.panel
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.panel.set_query(query);
    }

    pub fn set_tag_filter(&mut self, tag_filter: impl Into<TagFilter>) {
        self.panel.set_tag_filter(tag_filter);
    }

    /// Flips one item's expanded state and returns the new value.
    pub fn toggle_item(&mut self, key: &str) -> bool {
        self.item_state_mut(key).toggle_open()
    }

    /// Expands one item; already-open items stay open.
    pub fn open_item(&mut self, key: &str) {
        self.item_state_mut(key).set_open(true);
    }

    /// State for one item, created on first touch.
    pub fn item_state_mut(&mut self, key: &str) -> &mut ViewState {
        let window = self.copied_window;
        self.items
            .entry(key.to_string())
            .or_insert_with(|| ViewState::with_copied_window(window))
    }

    pub fn item_state(&self, key: &str) -> Option<&ViewState> {
        self.items.get(key)
    }

    pub fn is_item_open(&self, key: &str) -> bool {
        self.items.get(key).is_some_and(ViewState::is_open)
    }

    /// Applies due reverts on every item. Returns how many indicators changed.
    pub fn poll(&mut self, now: Instant) -> usize {
        self.items
            .values_mut()
            .filter_map(|state| state.copy_feedback_mut().poll(now).then_some(()))
            .count()
    }

    /// Filtered rows in source order with their per-item state.
    pub fn visible<'a>(&self, items: &'a [ToolkitItem]) -> Vec<ToolkitEntry<'a>> {
        filter(items, &self.panel.criteria())
            .into_iter()
            .map(|item| {
                let state = self.items.get(item.key());
                let is_open = state.is_some_and(ViewState::is_open);
                ToolkitEntry {
                    item,
                    is_open,
                    shows_content: is_open && item.content.is_some(),
                    copied: state.is_some_and(|state| state.copy_feedback().is_copied()),
                }
            })
            .collect()
    }
}

impl Default for ToolkitBoard {
    fn default() -> Self {
        Self::new(CopyFeedback::default().window())
    }
}
