//! Scroll reports: what a host would position for each scroll offset.
//!
//! Pure formatting over a laid-out [`StickyListLayout`]. The CLI prints these
//! as text or JSON.

use crate::view_state::types::{ElementId, Frame, LayoutAttributes};
use crate::view_state::{SectionTracker, StickyListLayout};
use serde::Serialize;

/// Sticky element placement in a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StickyReport {
    /// Rendered frame.
    pub frame: Frame,
    /// Numeric z-index.
    pub z_index: i32,
}

/// Layout state after one scroll tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollReport {
    /// Scroll offset applied.
    pub offset: f64,
    /// Section highlighted by the section selector.
    pub active_section: usize,
    /// Sticky placement, `None` when the sticky index is out of bounds.
    pub sticky: Option<StickyReport>,
    /// Elements intersecting the viewport.
    pub visible: Vec<LayoutAttributes>,
}

/// Scroll through `offsets` in order and record what is visible at each.
///
/// The viewport is `viewport_width` x `viewport_height` with its top at the offset.
pub fn scroll_reports(
    layout: &mut StickyListLayout,
    tracker: &mut SectionTracker,
    offsets: &[f64],
    viewport_width: f64,
    viewport_height: f64,
) -> Vec<ScrollReport> {
    offsets
        .iter()
        .map(|&offset| {
            layout.on_scroll(offset);
            tracker.update(layout, offset);
            let viewport = Frame::new(0.0, offset, viewport_width, viewport_height);
            ScrollReport {
                offset,
                active_section: tracker.selected(),
                sticky: layout.sticky_resolution().map(|resolution| StickyReport {
                    frame: resolution.frame,
                    z_index: resolution.z_order.z_index(),
                }),
                visible: layout.frames_intersecting(&viewport),
            }
        })
        .collect()
}

/// Render reports as plain text, one block per offset.
pub fn render_text(reports: &[ScrollReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let sticky = match &report.sticky {
            Some(sticky) => format!("y={} z={}", sticky.frame.y, sticky.z_index),
            None => "none".to_string(),
        };
        out.push_str(&format!(
            "offset {} | section {} | sticky {}\n",
            report.offset, report.active_section, sticky
        ));
        for attributes in &report.visible {
            out.push_str(&render_attributes(attributes));
        }
    }
    out
}

/// One indented line for a presented element.
fn render_attributes(attributes: &LayoutAttributes) -> String {
    let label = match attributes.id {
        ElementId::Header(section) => format!("header {section}"),
        ElementId::Item(index) => format!("item {index}"),
    };
    format!(
        "  {} y={} h={} z={}\n",
        label,
        attributes.frame.y,
        attributes.frame.height,
        attributes.z_order.z_index()
    )
}
