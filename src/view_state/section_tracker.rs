//! Active-section tracking for a section selector
//!
//! Hosts commonly mirror the scroll position in a segmented control that
//! lives inside the sticky element. The section under the viewport top is
//! the first item at or below the scroll offset, outside the sticky section.

use super::list::StickyListLayout;

/// Section currently highlighted by a section selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SectionTracker {
    selected: usize,
}

impl SectionTracker {
    /// Create a tracker with section 0 selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected section.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Select a section explicitly, e.g. after a tap on the selector.
    pub fn select(&mut self, section: usize) {
        self.selected = section;
    }

    /// Follow the scroll position.
    ///
    /// Falls back to section 0 when no item lies at or below `offset_y`.
    /// Returns the new section only when the selection changed.
    pub fn update(&mut self, layout: &StickyListLayout, offset_y: f64) -> Option<usize> {
        let section = layout
            .index_at(offset_y)
            .map(|index| index.section)
            .unwrap_or(0);
        if section == self.selected {
            None
        } else {
            self.selected = section;
            Some(section)
        }
    }
}
