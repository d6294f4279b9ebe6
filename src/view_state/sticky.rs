//! Sticky controller: where the pinned element is drawn for a scroll offset
//!
//! Runs on every scroll tick, so everything here is O(1) and never touches
//! the cached frame table.

use super::layout::StickyAnchor;
use super::types::{Frame, ZOrder};

/// Whether the sticky element was pinned after the previous tick.
///
/// Fed back into [`resolve_sticky`] on the next tick. Only the boundary case
/// where the natural top sits exactly at the pin line depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StickyLatch {
    /// Drawn at its natural position.
    #[default]
    Unpinned,
    /// Drawn at the top of the viewport, below the top bar.
    Pinned,
}

/// Rendered placement of the sticky element for one scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickyResolution {
    /// Frame to draw the element at.
    pub frame: Frame,
    /// Stacking hint.
    pub z_order: ZOrder,
    /// Latch to pass to the next call.
    pub latch: StickyLatch,
}

impl StickyResolution {
    fn resting(natural_frame: Frame) -> Self {
        Self {
            frame: natural_frame,
            z_order: ZOrder::Base,
            latch: StickyLatch::Unpinned,
        }
    }

    fn pinned(natural_frame: Frame, pin_y: f64) -> Self {
        Self {
            frame: natural_frame.with_y(pin_y),
            z_order: ZOrder::Pinned,
            latch: StickyLatch::Pinned,
        }
    }

    /// Check if the element is pinned to the viewport.
    pub fn is_pinned(&self) -> bool {
        self.latch == StickyLatch::Pinned
    }
}

/// Resolve the rendered frame of the sticky element.
///
/// Branches, first match wins:
/// 1. `scroll_offset_y < natural_y`: rest at the natural position. Takes
///    priority over the latch, so a fling back above the resting point always
///    detaches the element.
/// 2. `natural_y < scroll_offset_y + top_bar_height`: pin at
///    `scroll_offset_y + top_bar_height`.
/// 3. Otherwise stay pinned if `latch` is [`StickyLatch::Pinned`], else rest.
///
/// # Examples
///
/// ```
/// use stickylist::view_state::sticky::{resolve_sticky, StickyLatch};
/// use stickylist::view_state::types::{Frame, ZOrder};
///
/// let natural = Frame::new(0.0, 500.0, 320.0, 50.0);
/// let above = resolve_sticky(natural, 400.0, 0.0, StickyLatch::Unpinned);
/// assert_eq!((above.frame.y, above.z_order), (500.0, ZOrder::Base));
///
/// let past = resolve_sticky(natural, 600.0, 0.0, above.latch);
/// assert_eq!((past.frame.y, past.z_order), (600.0, ZOrder::Pinned));
/// ```
pub fn resolve_sticky(
    natural_frame: Frame,
    scroll_offset_y: f64,
    top_bar_height: f64,
    latch: StickyLatch,
) -> StickyResolution {
    let natural_y = natural_frame.y;
    let pin_y = scroll_offset_y + top_bar_height;

    if scroll_offset_y < natural_y {
        StickyResolution::resting(natural_frame)
    } else if natural_y < pin_y {
        StickyResolution::pinned(natural_frame, pin_y)
    } else if latch == StickyLatch::Pinned {
        StickyResolution::pinned(natural_frame, pin_y)
    } else {
        StickyResolution::resting(natural_frame)
    }
}

/// Presented frame of an element outside the sticky element itself.
///
/// While the sticky element is pinned it is out of the flow, so every item
/// and header of a section after the sticky section is lifted by the sticky
/// element's height. Headers are re-seated directly above their section's
/// first item via [`seat_header`].
pub fn shift_below_sticky(
    frame: Frame,
    section: usize,
    anchor: &StickyAnchor,
    resolution: &StickyResolution,
) -> Frame {
    if resolution.is_pinned() && section > anchor.index.section {
        frame.offset_y(-anchor.height())
    } else {
        frame
    }
}

/// Place a header immediately above its section's presented first item.
pub fn seat_header(header: Frame, first_item: Frame) -> Frame {
    header.with_y(first_item.y - header.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::types::ItemIndex;

    fn natural(y: f64) -> Frame {
        Frame::new(0.0, y, 320.0, 50.0)
    }

    mod resolve {
        use super::*;

        #[test]
        fn rests_while_scrolled_above_natural_position() {
            let r = resolve_sticky(natural(500.0), 400.0, 0.0, StickyLatch::Unpinned);
            assert_eq!(r.frame, natural(500.0));
            assert_eq!(r.z_order, ZOrder::Base);
            assert_eq!(r.latch, StickyLatch::Unpinned);
        }

        #[test]
        fn pins_once_scrolled_past() {
            let r = resolve_sticky(natural(500.0), 600.0, 0.0, StickyLatch::Unpinned);
            assert_eq!(r.frame, natural(600.0));
            assert_eq!(r.z_order, ZOrder::Pinned);
            assert!(r.is_pinned());
        }

        #[test]
        fn scroll_above_natural_wins_over_pinned_latch() {
            let pinned = resolve_sticky(natural(500.0), 600.0, 0.0, StickyLatch::Unpinned);
            let r = resolve_sticky(natural(500.0), 450.0, 0.0, pinned.latch);
            assert_eq!(r.frame.y, 500.0);
            assert_eq!(r.z_order, ZOrder::Base);
            assert_eq!(r.latch, StickyLatch::Unpinned);
        }

        #[test]
        fn top_bar_moves_pin_line() {
            // pinned below the bar: 500 + 40
            let r = resolve_sticky(natural(500.0), 500.0, 40.0, StickyLatch::Unpinned);
            assert_eq!(r.frame.y, 540.0);
            assert_eq!(r.z_order, ZOrder::Pinned);
        }

        #[test]
        fn exact_pin_line_follows_latch() {
            let unpinned = resolve_sticky(natural(500.0), 500.0, 0.0, StickyLatch::Unpinned);
            assert_eq!(unpinned.frame.y, 500.0);
            assert_eq!(unpinned.z_order, ZOrder::Base);

            let pinned = resolve_sticky(natural(500.0), 500.0, 0.0, StickyLatch::Pinned);
            assert_eq!(pinned.frame.y, 500.0);
            assert_eq!(pinned.z_order, ZOrder::Pinned);
            assert_eq!(pinned.latch, StickyLatch::Pinned);
        }

        #[test]
        fn keeps_size_and_x() {
            let r = resolve_sticky(natural(100.0), 1000.0, 0.0, StickyLatch::Unpinned);
            assert_eq!(r.frame.size(), natural(100.0).size());
            assert_eq!(r.frame.x, 0.0);
        }

        #[test]
        fn does_not_depend_on_latch_away_from_boundary() {
            for offset in [0.0, 250.0, 499.0, 501.0, 900.0] {
                let a = resolve_sticky(natural(500.0), offset, 0.0, StickyLatch::Unpinned);
                let b = resolve_sticky(natural(500.0), offset, 0.0, StickyLatch::Pinned);
                assert_eq!(a, b, "offset {offset}");
            }
        }
    }

    mod shift {
        use super::*;

        fn anchor() -> StickyAnchor {
            StickyAnchor {
                index: ItemIndex::new(1, 0),
                natural_frame: natural(100.0),
            }
        }

        #[test]
        fn lifts_later_sections_while_pinned() {
            let pinned = resolve_sticky(natural(100.0), 200.0, 0.0, StickyLatch::Unpinned);
            let frame = Frame::new(0.0, 300.0, 320.0, 100.0);
            assert_eq!(shift_below_sticky(frame, 2, &anchor(), &pinned).y, 250.0);
        }

        #[test]
        fn leaves_sticky_section_and_earlier_alone() {
            let pinned = resolve_sticky(natural(100.0), 200.0, 0.0, StickyLatch::Unpinned);
            let frame = Frame::new(0.0, 300.0, 320.0, 100.0);
            assert_eq!(shift_below_sticky(frame, 1, &anchor(), &pinned), frame);
            assert_eq!(shift_below_sticky(frame, 0, &anchor(), &pinned), frame);
        }

        #[test]
        fn no_shift_while_resting() {
            let resting = resolve_sticky(natural(100.0), 0.0, 0.0, StickyLatch::Unpinned);
            let frame = Frame::new(0.0, 300.0, 320.0, 100.0);
            assert_eq!(shift_below_sticky(frame, 2, &anchor(), &resting), frame);
        }

        #[test]
        fn seat_header_sits_on_first_item() {
            let header = Frame::new(0.0, 10.0, 320.0, 30.0);
            let first = Frame::new(0.0, 200.0, 320.0, 100.0);
            assert_eq!(seat_header(header, first), Frame::new(0.0, 170.0, 320.0, 30.0));
        }
    }
}
