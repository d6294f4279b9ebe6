//! Core geometry newtypes

use serde::Serialize;

/// Width and height of an element in points.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Size {
    /// Zero size. Used as the content size of an empty layout.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check both dimensions are finite and non-negative.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Rectangle in content coordinates.
///
/// Item and header frames always have `x == 0` (single column).
/// The same type describes the viewport rectangle passed to visible-range queries.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Frame {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width in points.
    pub width: f64,
    /// Height in points.
    pub height: f64,
}

impl Frame {
    /// Create a new frame.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Frame at the left edge (`x == 0`) with the given top and size.
    pub fn at(y: f64, size: Size) -> Self {
        Self::new(0.0, y, size.width, size.height)
    }

    /// Top edge.
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Right edge.
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Size of this frame.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Copy of this frame with its top edge moved to `y`.
    pub fn with_y(&self, y: f64) -> Self {
        Self { y, ..*self }
    }

    /// Copy of this frame moved vertically by `dy`.
    pub fn offset_y(&self, dy: f64) -> Self {
        self.with_y(self.y + dy)
    }

    /// Check whether the two rectangles overlap.
    ///
    /// Rectangles that only share an edge do not intersect, and a rectangle
    /// with zero width or height intersects nothing.
    pub fn intersects(&self, other: &Frame) -> bool {
        if self.width <= 0.0 || self.height <= 0.0 || other.width <= 0.0 || other.height <= 0.0 {
            return false;
        }
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

/// Position of a content cell: section, then item within the section.
///
/// Ordering is section-major, which is also layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct ItemIndex {
    /// Section index (0-based).
    pub section: usize,
    /// Item index within the section (0-based).
    pub item: usize,
}

impl ItemIndex {
    /// Create a new index.
    pub fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// Vertical padding added around every section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SectionInsets {
    /// Space added before a section's header and first item.
    pub top: f64,
    /// Space added after a section's last item.
    pub bottom: f64,
}

impl SectionInsets {
    /// Create new insets.
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

/// Stacking hint for the rendered sticky element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ZOrder {
    /// Regular stacking, same as every other cell.
    #[default]
    Base,
    /// Drawn above the content scrolling underneath it.
    Pinned,
}

impl ZOrder {
    /// Numeric z-index for hosts that stack views by integer.
    pub fn z_index(&self) -> i32 {
        match self {
            ZOrder::Base => 0,
            ZOrder::Pinned => 3,
        }
    }
}

/// Identity of a presented element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ElementId {
    /// Header of the given section.
    Header(usize),
    /// Content cell.
    Item(ItemIndex),
}

/// One element as presented to the positioning consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutAttributes {
    /// Which element this is.
    pub id: ElementId,
    /// Presented frame (sticky override and below-sticky shift applied).
    pub frame: Frame,
    /// Stacking hint.
    pub z_order: ZOrder,
}
