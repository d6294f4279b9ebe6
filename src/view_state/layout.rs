//! Layout engine: one top-to-bottom sweep from counts and sizes to frames

use super::frame_table::{FrameTable, HeaderFrameTable};
use super::layout_params::LayoutParams;
use super::types::{Frame, ItemIndex, Size};
use crate::model::error::LayoutError;
use tracing::debug;

/// Natural (in-flow) placement of the sticky element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyAnchor {
    /// Index of the sticky element.
    pub index: ItemIndex,
    /// Frame the element occupies when it is not pinned.
    pub natural_frame: Frame,
}

impl StickyAnchor {
    /// Top edge of the natural frame.
    pub fn natural_y(&self) -> f64 {
        self.natural_frame.y
    }

    /// Height of the sticky element.
    pub fn height(&self) -> f64 {
        self.natural_frame.height
    }
}

/// Output of one full relayout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LayoutPass {
    /// Item frames.
    pub items: FrameTable,
    /// Header frames.
    pub headers: HeaderFrameTable,
    /// Natural placement of the sticky element.
    /// `None` when the sticky index lies outside the current bounds.
    pub sticky: Option<StickyAnchor>,
}

impl LayoutPass {
    /// Content size derived from the last item frame in layout order.
    ///
    /// Returns `Size::ZERO` for a layout without items.
    pub fn content_size(&self) -> Size {
        self.items
            .last()
            .map(|last| Size::new(last.max_x(), last.max_y()))
            .unwrap_or(Size::ZERO)
    }
}

/// Compute the frames of every header and item.
///
/// Walks sections in order, accumulating a running `y` offset from 0:
/// top inset, header (only when its height is positive and the section has
/// items), items with `inter_item_spacing` after each, bottom inset, and
/// `gap_after_sticky` for every section past the sticky section.
///
/// # Arguments
/// - `section_counts`: number of items per section
/// - `params`: insets, spacing and the sticky index
/// - `size_of`: size of each item; `None` aborts the pass
/// - `header_size_of`: size of each section header; zero height means no header
///
/// # Errors
/// [`LayoutError::MissingItemSize`] when `size_of` returns `None`,
/// [`LayoutError::InvalidItemSize`] when it returns a negative or non-finite size.
///
/// # Examples
///
/// ```
/// use stickylist::view_state::layout::compute_layout;
/// use stickylist::view_state::layout_params::LayoutParams;
/// use stickylist::view_state::types::{ItemIndex, SectionInsets, Size};
///
/// let params = LayoutParams::new(SectionInsets::default(), 0.0, ItemIndex::new(1, 0));
/// let pass = compute_layout(
///     &[1, 3],
///     &params,
///     |_| Some(Size::new(320.0, 100.0)),
///     |_| Size::ZERO,
/// )
/// .unwrap();
/// assert_eq!(pass.sticky.unwrap().natural_y(), 100.0);
/// assert_eq!(pass.content_size().height, 400.0);
/// ```
pub fn compute_layout<F, H>(
    section_counts: &[usize],
    params: &LayoutParams,
    mut size_of: F,
    mut header_size_of: H,
) -> Result<LayoutPass, LayoutError>
where
    F: FnMut(ItemIndex) -> Option<Size>,
    H: FnMut(usize) -> Size,
{
    let mut y_offset = 0.0;
    let mut sections = Vec::with_capacity(section_counts.len());
    let mut headers = Vec::with_capacity(section_counts.len());
    let mut sticky = None;

    for (section, &count) in section_counts.iter().enumerate() {
        y_offset += params.insets.top;

        let mut header = None;
        if count > 0 {
            let header_size = header_size_of(section);
            if header_size.is_valid() && header_size.height > 0.0 {
                header = Some(Frame::at(y_offset, header_size));
                y_offset += header_size.height;
            }
        }

        let mut items = Vec::with_capacity(count);
        for item in 0..count {
            let index = ItemIndex::new(section, item);
            let size = size_of(index).ok_or(LayoutError::MissingItemSize { index })?;
            if !size.is_valid() {
                return Err(LayoutError::InvalidItemSize {
                    index,
                    width: size.width,
                    height: size.height,
                });
            }

            let frame = Frame::at(y_offset, size);
            if index == params.sticky {
                sticky = Some(StickyAnchor {
                    index,
                    natural_frame: frame,
                });
            }
            items.push(frame);
            y_offset += size.height + params.inter_item_spacing;
        }

        y_offset += params.insets.bottom;
        if section > params.sticky.section {
            y_offset += params.gap_after_sticky;
        }

        sections.push(items);
        headers.push(header);
    }

    let pass = LayoutPass {
        items: FrameTable::from_sections(sections),
        headers: HeaderFrameTable::from_headers(headers),
        sticky,
    };

    if pass.sticky.is_none() {
        debug!(sticky = %params.sticky, "Sticky index outside current bounds, no pin this pass");
    }
    debug!(
        sections = section_counts.len(),
        items = pass.items.len(),
        content_height = pass.content_size().height,
        "Computed layout"
    );

    Ok(pass)
}
