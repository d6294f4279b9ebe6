//! Visible-range queries over presented frames
//!
//! Presented frames are the cached natural frames with the sticky override
//! and the below-sticky shift applied. Nothing here writes to the cache.

use super::layout::LayoutPass;
use super::sticky::{StickyResolution, seat_header, shift_below_sticky};
use super::types::{ElementId, Frame, ItemIndex, LayoutAttributes, ZOrder};

/// Presented frame and stacking hint of one item, `None` when out of range.
pub fn presented_item(
    pass: &LayoutPass,
    resolution: Option<&StickyResolution>,
    index: ItemIndex,
) -> Option<(Frame, ZOrder)> {
    let natural = pass.items.get(index)?;
    let (Some(anchor), Some(resolution)) = (pass.sticky.as_ref(), resolution) else {
        return Some((natural, ZOrder::Base));
    };

    if index == anchor.index {
        Some((resolution.frame, resolution.z_order))
    } else {
        Some((
            shift_below_sticky(natural, index.section, anchor, resolution),
            ZOrder::Base,
        ))
    }
}

/// Presented header frame of a section, `None` when the section has no header.
pub fn presented_header(
    pass: &LayoutPass,
    resolution: Option<&StickyResolution>,
    section: usize,
) -> Option<Frame> {
    let header = pass.headers.get(section)?;
    let (Some(anchor), Some(resolution)) = (pass.sticky.as_ref(), resolution) else {
        return Some(header);
    };
    if !resolution.is_pinned() || section <= anchor.index.section {
        return Some(header);
    }

    match presented_item(pass, Some(resolution), ItemIndex::new(section, 0)) {
        Some((first_item, _)) => Some(seat_header(header, first_item)),
        None => Some(shift_below_sticky(header, section, anchor, resolution)),
    }
}

/// All presented elements whose frame intersects `rect`, in layout order.
///
/// Each section contributes its header first, then its items. Intersection
/// is strict: an element that only touches the rectangle's edge is excluded.
pub fn frames_intersecting(
    rect: &Frame,
    pass: &LayoutPass,
    resolution: Option<&StickyResolution>,
) -> Vec<LayoutAttributes> {
    let mut visible = Vec::new();

    for section in 0..pass.items.section_count() {
        if let Some(frame) = presented_header(pass, resolution, section) {
            if rect.intersects(&frame) {
                visible.push(LayoutAttributes {
                    id: ElementId::Header(section),
                    frame,
                    z_order: ZOrder::Base,
                });
            }
        }

        let item_count = pass.items.item_count(section).unwrap_or(0);
        for item in 0..item_count {
            let index = ItemIndex::new(section, item);
            let Some((frame, z_order)) = presented_item(pass, resolution, index) else {
                continue;
            };
            if rect.intersects(&frame) {
                visible.push(LayoutAttributes {
                    id: ElementId::Item(index),
                    frame,
                    z_order,
                });
            }
        }
    }

    visible
}
