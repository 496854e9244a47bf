//! Single-element selection.

use crate::element::ElementId;
use crate::store::ElementStore;

/// The UI state of an element, derived from the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementState {
    /// Normal display state.
    #[default]
    Normal,
    /// Element is selected (highlighted, shows its controls).
    Selected,
}

impl ElementState {
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected)
    }
}

/// Tracks at most one selected element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionManager {
    selected: Option<ElementId>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an element, replacing any previous selection.
    pub fn select(&mut self, id: ElementId) {
        self.selected = Some(id);
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Replace the selection with `id`, or clear it for `None`.
    pub fn set(&mut self, id: Option<ElementId>) {
        self.selected = id;
    }

    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selected == Some(id)
    }

    /// Get the state of an element.
    pub fn state(&self, id: ElementId) -> ElementState {
        if self.is_selected(id) {
            ElementState::Selected
        } else {
            ElementState::Normal
        }
    }

    /// Whether the per-element controls (delete button) are shown for `id`.
    pub fn controls_visible(&self, id: ElementId) -> bool {
        self.is_selected(id)
    }

    /// Drop the selection if it points at an element the store no longer has.
    /// Returns true if the selection was cleared.
    pub fn reconcile(&mut self, store: &ElementStore) -> bool {
        match self.selected {
            Some(id) if !store.contains(id) => {
                log::debug!("Clearing stale selection {}", id);
                self.selected = None;
                true
            }
            _ => false,
        }
    }
}
