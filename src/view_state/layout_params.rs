//! Global layout parameters for invalidation tracking.

use super::types::{ItemIndex, SectionInsets};

/// Parameters that affect frame geometry.
///
/// Used for invalidation: if current params != last layout params,
/// the cached frame table must be rebuilt.
///
/// Note: the top bar height is not here. It only moves the pinned
/// element and is applied per scroll tick by the sticky controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Padding around every section.
    pub insets: SectionInsets,
    /// Space added after every item.
    pub inter_item_spacing: f64,
    /// Space added after each section that follows the sticky section.
    pub gap_after_sticky: f64,
    /// The pinned element.
    pub sticky: ItemIndex,
}

impl LayoutParams {
    /// Create new layout params with no inter-item spacing.
    pub fn new(insets: SectionInsets, gap_after_sticky: f64, sticky: ItemIndex) -> Self {
        Self {
            insets,
            inter_item_spacing: 0.0,
            gap_after_sticky,
            sticky,
        }
    }

    /// Set the spacing added after every item.
    pub fn with_inter_item_spacing(mut self, spacing: f64) -> Self {
        self.inter_item_spacing = spacing;
        self
    }

    /// Parameters of the demo list: 16pt bottom inset, first item of section 1 pinned.
    pub fn demo() -> Self {
        Self::new(SectionInsets::new(0.0, 16.0), 0.0, ItemIndex::new(1, 0))
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::new(SectionInsets::default(), 0.0, ItemIndex::default())
    }
}
