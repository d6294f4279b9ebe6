//! View-state for a sticky multi-section list

use super::{
    hit_test,
    layout::{LayoutPass, compute_layout},
    layout_params::LayoutParams,
    sticky::{StickyLatch, StickyResolution, resolve_sticky},
    types::{Frame, ItemIndex, LayoutAttributes, Size},
    visible_range,
};
use crate::model::error::LayoutError;
use tracing::{debug, trace};

/// Layout state for a vertically scrolling list with one pinned element.
///
/// Contains:
/// - Cached frame tables from the last full relayout
/// - Current scroll offset and top bar height
/// - The sticky element's current rendered placement
/// - Content size derived at the last full relayout
///
/// # Invocation rates
/// `full_relayout` sweeps every item and runs only when data or bounds
/// change. `on_scroll` runs on every scroll tick and only re-resolves the
/// sticky element, O(1).
///
/// # Threading
/// Single writer through `&mut self`. Hosts that share it across threads
/// wrap it in a `RwLock` so readers only observe completed relayouts.
#[derive(Debug, Clone)]
pub struct StickyListLayout {
    /// Parameters used by the next full relayout.
    params: LayoutParams,
    /// Height of the bar the sticky element pins below.
    top_bar_height: f64,
    /// Current vertical scroll offset.
    scroll_offset_y: f64,
    /// Cached pass. `None` means invalidated.
    cache: Option<LayoutPass>,
    /// Rendered sticky placement for the current offset.
    sticky: Option<StickyResolution>,
    /// Content size from the last full relayout.
    content_size: Size,
}

impl StickyListLayout {
    /// Create a layout with an empty cache. Nothing is laid out until `full_relayout`.
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            top_bar_height: 0.0,
            scroll_offset_y: 0.0,
            cache: None,
            sticky: None,
            content_size: Size::ZERO,
        }
    }

    /// Set the top bar height. Re-resolves the sticky element if already laid out.
    pub fn with_top_bar_height(mut self, height: f64) -> Self {
        self.set_top_bar_height(height);
        self
    }

    /// Current parameters.
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Replace the parameters. Discards cached geometry if they changed.
    pub fn set_params(&mut self, params: LayoutParams) {
        if self.params != params {
            self.params = params;
            self.invalidate();
        }
    }

    /// Height of the bar the sticky element pins below.
    pub fn top_bar_height(&self) -> f64 {
        self.top_bar_height
    }

    /// Change the top bar height. Re-resolves the sticky element only.
    pub fn set_top_bar_height(&mut self, height: f64) {
        self.top_bar_height = height;
        self.resolve_sticky();
    }

    /// Current scroll offset.
    pub fn scroll_offset_y(&self) -> f64 {
        self.scroll_offset_y
    }

    /// Check if the cache must be rebuilt before frames can be queried.
    pub fn needs_relayout(&self) -> bool {
        self.cache.is_none()
    }

    /// Cached pass from the last full relayout.
    pub fn pass(&self) -> Option<&LayoutPass> {
        self.cache.as_ref()
    }

    /// Rebuild all frames and return the new content size.
    ///
    /// # Arguments
    /// - `section_counts`: number of items in each section
    /// - `size_of`: size of each item, called once per item
    /// - `header_size_of`: size of each section header; zero height means none
    ///
    /// # Errors
    /// Propagates [`LayoutError`] from the layout engine. The cache is left
    /// invalidated in that case.
    pub fn full_relayout<F, H>(
        &mut self,
        section_counts: &[usize],
        size_of: F,
        header_size_of: H,
    ) -> Result<Size, LayoutError>
    where
        F: FnMut(ItemIndex) -> Option<Size>,
        H: FnMut(usize) -> Size,
    {
        self.invalidate();

        let pass = compute_layout(section_counts, &self.params, size_of, header_size_of)?;
        self.content_size = pass.content_size();
        self.cache = Some(pass);
        self.resolve_sticky();

        debug!(
            content_width = self.content_size.width,
            content_height = self.content_size.height,
            "Full relayout complete"
        );
        Ok(self.content_size)
    }

    /// Discard cached geometry. Safe to call on an already empty cache.
    pub fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            trace!("Layout cache invalidated");
        }
        self.sticky = None;
        self.content_size = Size::ZERO;
    }

    /// Record a new scroll offset and return the sticky element's rendered frame.
    ///
    /// Returns `None` when nothing is cached or the sticky index is outside
    /// the current bounds; no pin is applied in either case.
    pub fn on_scroll(&mut self, offset_y: f64) -> Option<Frame> {
        self.scroll_offset_y = offset_y;
        self.resolve_sticky();
        self.sticky.map(|resolution| resolution.frame)
    }

    /// Current rendered placement of the sticky element.
    pub fn sticky_resolution(&self) -> Option<&StickyResolution> {
        self.sticky.as_ref()
    }

    /// Presented frame of an item. `None` when out of range or not laid out.
    pub fn frame_for(&self, index: ItemIndex) -> Option<Frame> {
        let pass = self.cache.as_ref()?;
        visible_range::presented_item(pass, self.sticky.as_ref(), index).map(|(frame, _)| frame)
    }

    /// Presented header frame of a section. `None` when the section has no header.
    pub fn header_frame_for(&self, section: usize) -> Option<Frame> {
        let pass = self.cache.as_ref()?;
        visible_range::presented_header(pass, self.sticky.as_ref(), section)
    }

    /// Presented elements intersecting `rect`, in layout order.
    pub fn frames_intersecting(&self, rect: &Frame) -> Vec<LayoutAttributes> {
        match &self.cache {
            Some(pass) => visible_range::frames_intersecting(rect, pass, self.sticky.as_ref()),
            None => Vec::new(),
        }
    }

    /// First item at or below `y`, never inside the sticky section.
    pub fn index_at(&self, y: f64) -> Option<ItemIndex> {
        let pass = self.cache.as_ref()?;
        hit_test::index_at(y, &pass.items, self.params.sticky.section)
    }

    /// Content size from the last full relayout, `Size::ZERO` when invalidated.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Scroll offset that brings a section's first item to the top of the
    /// viewport, just below the top bar.
    ///
    /// Clamped to `[0, max(0, content_height - viewport_height)]`.
    /// Returns `None` for an empty or unknown section.
    pub fn scroll_offset_for_section(&self, section: usize, viewport_height: f64) -> Option<f64> {
        let pass = self.cache.as_ref()?;
        let first = pass.items.get(ItemIndex::new(section, 0))?;
        let max_offset = (self.content_size.height - viewport_height).max(0.0);
        Some((first.y - self.top_bar_height).clamp(0.0, max_offset))
    }

    fn resolve_sticky(&mut self) {
        let Some(anchor) = self.cache.as_ref().and_then(|pass| pass.sticky) else {
            self.sticky = None;
            return;
        };

        let latch = self
            .sticky
            .map(|resolution| resolution.latch)
            .unwrap_or(StickyLatch::Unpinned);
        let resolution = resolve_sticky(
            anchor.natural_frame,
            self.scroll_offset_y,
            self.top_bar_height,
            latch,
        );
        if resolution.latch != latch {
            trace!(
                offset = self.scroll_offset_y,
                pinned = resolution.is_pinned(),
                "Sticky element changed state"
            );
        }
        self.sticky = Some(resolution);
    }
}
