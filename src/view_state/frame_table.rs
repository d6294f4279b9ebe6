//! Cached frame tables produced by a layout pass

use super::types::{Frame, ItemIndex};

/// Item frames grouped by section, in layout order.
///
/// # Invariants
/// - Frames within a section are non-decreasing in `y` and never overlap
///   (zero-height items share the `y` of the next item)
/// - Every frame of section `s + 1` starts at or below the last frame of section `s`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameTable {
    sections: Vec<Vec<Frame>>,
}

impl FrameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_sections(sections: Vec<Vec<Frame>>) -> Self {
        Self { sections }
    }

    /// Frame for the given index, `None` when out of range.
    pub fn get(&self, index: ItemIndex) -> Option<Frame> {
        self.sections
            .get(index.section)
            .and_then(|items| items.get(index.item))
            .copied()
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Number of items in a section, `None` when the section does not exist.
    pub fn item_count(&self, section: usize) -> Option<usize> {
        self.sections.get(section).map(Vec::len)
    }

    /// Frames of one section.
    pub fn section(&self, section: usize) -> Option<&[Frame]> {
        self.sections.get(section).map(Vec::as_slice)
    }

    /// Check whether `index` names an existing item.
    pub fn contains(&self, index: ItemIndex) -> bool {
        self.get(index).is_some()
    }

    /// Total number of items across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Check if the table holds no items.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Vec::is_empty)
    }

    /// Iterate over every item in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemIndex, Frame)> + '_ {
        self.sections.iter().enumerate().flat_map(|(section, items)| {
            items
                .iter()
                .enumerate()
                .map(move |(item, frame)| (ItemIndex::new(section, item), *frame))
        })
    }

    /// Last item frame in layout order.
    pub fn last(&self) -> Option<Frame> {
        self.sections.iter().rev().find_map(|items| items.last().copied())
    }
}

/// One optional header frame per section.
///
/// A header is present only when its height is positive and the section
/// has at least one item. It always sits directly above the first item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderFrameTable {
    headers: Vec<Option<Frame>>,
}

impl HeaderFrameTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_headers(headers: Vec<Option<Frame>>) -> Self {
        Self { headers }
    }

    /// Header frame of a section, `None` when the section has no header.
    pub fn get(&self, section: usize) -> Option<Frame> {
        self.headers.get(section).copied().flatten()
    }

    /// Iterate over the sections that have a header.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Frame)> + '_ {
        self.headers
            .iter()
            .enumerate()
            .filter_map(|(section, header)| header.map(|frame| (section, frame)))
    }

    /// Number of sections that have a header.
    pub fn len(&self) -> usize {
        self.headers.iter().flatten().count()
    }

    /// Check if no section has a header.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
