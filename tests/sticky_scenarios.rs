//! Scenario tests driving the public layout API the way a host does.
//!
//! Demo list: sections [1, 1, 1, 3, 4] with heights 300 / 50 / 200 and a
//! 16pt bottom inset. The 50pt selector at (1, 0) is pinned, resting at
//! y=316. Section 2 starts at 382, section 3 at 598, section 4 at 1214.

use stickylist::model::{LayoutError, ListFixture};
use stickylist::view_state::types::{ElementId, Frame, ItemIndex, SectionInsets, Size, ZOrder};
use stickylist::view_state::{LayoutParams, SectionTracker, StickyListLayout};

const WIDTH: f64 = 390.0;

fn demo_layout(top_bar_height: f64) -> StickyListLayout {
    let fixture = ListFixture::demo(WIDTH);
    let mut layout =
        StickyListLayout::new(LayoutParams::demo()).with_top_bar_height(top_bar_height);
    layout
        .full_relayout(
            &fixture.section_counts(),
            |index| fixture.size_of(index),
            |section| fixture.header_size_of(section),
        )
        .expect("demo lays out");
    layout
}

/// Two sections [1, 3] of 100pt items, zero insets, sticky (1, 0).
fn two_section_layout() -> StickyListLayout {
    let params = LayoutParams::new(SectionInsets::default(), 0.0, ItemIndex::new(1, 0));
    let mut layout = StickyListLayout::new(params);
    layout
        .full_relayout(
            &[1, 3],
            |_| Some(Size::new(WIDTH, 100.0)),
            |_| Size::ZERO,
        )
        .expect("uniform sizes");
    layout
}

#[test]
fn two_section_frames_match_sweep() {
    let layout = two_section_layout();

    let expected = [
        (ItemIndex::new(0, 0), 0.0),
        (ItemIndex::new(1, 0), 100.0),
        (ItemIndex::new(1, 1), 200.0),
        (ItemIndex::new(1, 2), 300.0),
    ];
    for (index, y) in expected {
        assert_eq!(
            layout.frame_for(index),
            Some(Frame::new(0.0, y, WIDTH, 100.0)),
            "frame for {index}"
        );
    }

    let sticky = layout.pass().and_then(|pass| pass.sticky).unwrap();
    assert_eq!(sticky.natural_y(), 100.0);
    assert_eq!(layout.content_size(), Size::new(WIDTH, 400.0));
}

#[test]
fn out_of_range_queries_are_not_found() {
    let layout = two_section_layout();

    assert_eq!(layout.frame_for(ItemIndex::new(1, 3)), None);
    assert_eq!(layout.frame_for(ItemIndex::new(7, 0)), None);
    assert_eq!(layout.header_frame_for(7), None);
}

#[test]
fn hysteresis_around_natural_top() {
    // Natural sticky top at 500: section 0 holds five 100pt items.
    let params = LayoutParams::new(SectionInsets::default(), 0.0, ItemIndex::new(1, 0));
    let mut layout = StickyListLayout::new(params);
    layout
        .full_relayout(&[5, 2], |_| Some(Size::new(WIDTH, 100.0)), |_| Size::ZERO)
        .unwrap();

    let rest = layout.on_scroll(400.0).unwrap();
    assert_eq!(rest.y, 500.0);
    assert_eq!(layout.sticky_resolution().unwrap().z_order, ZOrder::Base);

    let pinned = layout.on_scroll(600.0).unwrap();
    assert_eq!(pinned.y, 600.0);
    assert_eq!(layout.sticky_resolution().unwrap().z_order, ZOrder::Pinned);

    // Scrolling back above the natural top detaches regardless of the latch.
    let back = layout.on_scroll(450.0).unwrap();
    assert_eq!(back.y, 500.0);
    assert_eq!(layout.sticky_resolution().unwrap().z_order, ZOrder::Base);
}

#[test]
fn exact_natural_top_keeps_previous_state() {
    let params = LayoutParams::new(SectionInsets::default(), 0.0, ItemIndex::new(1, 0));
    let mut layout = StickyListLayout::new(params);
    layout
        .full_relayout(&[5, 2], |_| Some(Size::new(WIDTH, 100.0)), |_| Size::ZERO)
        .unwrap();

    // Arriving from above: still resting.
    layout.on_scroll(400.0);
    layout.on_scroll(500.0);
    assert!(!layout.sticky_resolution().unwrap().is_pinned());

    // Arriving from below: still pinned.
    layout.on_scroll(600.0);
    let frame = layout.on_scroll(500.0).unwrap();
    assert!(layout.sticky_resolution().unwrap().is_pinned());
    assert_eq!(frame.y, 500.0);
}

#[test]
fn demo_selector_pins_below_top_bar() {
    let mut layout = demo_layout(44.0);

    // 316 < 320 + 44: the selector already sits under the bar.
    let frame = layout.on_scroll(320.0).unwrap();
    assert_eq!(frame, Frame::new(0.0, 364.0, WIDTH, 50.0));

    let visible = layout.frames_intersecting(&Frame::new(0.0, 320.0, WIDTH, 400.0));
    let sticky = visible
        .iter()
        .find(|attributes| attributes.id == ElementId::Item(ItemIndex::new(1, 0)))
        .expect("sticky element visible");
    assert_eq!(sticky.z_order, ZOrder::Pinned);
    assert_eq!(sticky.frame.y, 364.0);
}

#[test]
fn pinned_selector_lifts_later_sections() {
    let mut layout = demo_layout(0.0);
    layout.on_scroll(1000.0);

    assert_eq!(layout.frame_for(ItemIndex::new(0, 0)).unwrap().y, 0.0);
    assert_eq!(layout.frame_for(ItemIndex::new(3, 2)).unwrap().y, 998.0 - 50.0);
    assert_eq!(layout.frame_for(ItemIndex::new(1, 0)).unwrap().y, 1000.0);

    // Scrolled back above the resting point nothing is lifted.
    layout.on_scroll(100.0);
    assert_eq!(layout.frame_for(ItemIndex::new(3, 2)).unwrap().y, 998.0);
}

#[test]
fn presented_frames_do_not_change_cached_frames() {
    let mut layout = demo_layout(0.0);
    let before = layout.pass().cloned();

    for offset in [0.0, 400.0, 1200.0, 50.0] {
        layout.on_scroll(offset);
    }

    assert_eq!(layout.pass().cloned(), before);
    assert_eq!(layout.content_size(), Size::new(WIDTH, 2014.0));
}

#[test]
fn section_selector_follows_scroll() {
    let mut layout = demo_layout(0.0);
    let mut tracker = SectionTracker::new();

    let mut changes = Vec::new();
    for offset in [0.0, 200.0, 340.0, 382.0, 600.0, 1300.0, 700.0] {
        layout.on_scroll(offset);
        if let Some(section) = tracker.update(&layout, offset) {
            changes.push((offset, section));
        }
    }

    // The first item at or below the offset decides, never the selector itself.
    assert_eq!(
        changes,
        vec![(200.0, 2), (600.0, 3), (1300.0, 4), (700.0, 3)]
    );
}

#[test]
fn tapping_a_segment_scrolls_section_to_top() {
    let layout = demo_layout(0.0);

    assert_eq!(layout.scroll_offset_for_section(2, 844.0), Some(382.0));
    assert_eq!(layout.scroll_offset_for_section(3, 844.0), Some(598.0));
    // Clamped to the last full screen.
    assert_eq!(layout.scroll_offset_for_section(4, 844.0), Some(2014.0 - 844.0));
    assert_eq!(layout.scroll_offset_for_section(9, 844.0), None);
}

#[test]
fn missing_size_aborts_relayout() {
    let mut layout = demo_layout(0.0);

    let size_of = |index: ItemIndex| (index.item == 0).then(|| Size::new(WIDTH, 10.0));
    let err = layout
        .full_relayout(&[1, 1, 2], size_of, |_| Size::ZERO)
        .unwrap_err();

    assert_eq!(
        err,
        LayoutError::MissingItemSize {
            index: ItemIndex::new(2, 1)
        }
    );
    assert!(layout.needs_relayout());
    assert!(layout.frames_intersecting(&Frame::new(0.0, 0.0, WIDTH, 1000.0)).is_empty());
}

#[test]
fn sticky_out_of_bounds_is_a_no_op() {
    let mut layout = demo_layout(0.0);

    // Data update removes the selector section's item.
    let fixture = ListFixture::demo(WIDTH);
    let mut counts = fixture.section_counts();
    counts[1] = 0;
    layout
        .full_relayout(&counts, |index| fixture.size_of(index), |_| Size::ZERO)
        .unwrap();

    assert_eq!(layout.on_scroll(500.0), None);
    assert!(layout.sticky_resolution().is_none());
    // Nothing is lifted without a pin.
    assert_eq!(layout.frame_for(ItemIndex::new(2, 0)).unwrap().y, 332.0);
}

#[test]
fn invalidate_twice_is_harmless() {
    let mut layout = demo_layout(0.0);

    layout.invalidate();
    layout.invalidate();

    assert!(layout.needs_relayout());
    assert_eq!(layout.content_size(), Size::ZERO);
    assert_eq!(layout.index_at(0.0), None);
    assert_eq!(layout.on_scroll(400.0), None);
}
