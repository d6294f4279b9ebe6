//! View-state layer - Layout, sticky placement, and hit-testing
//!
//! This module implements the geometry engine for a vertically scrolling,
//! multi-section list with one pinned element.
//!
//! # Module Structure
//!
//! - `types`: Geometry newtypes (Size, Frame, ItemIndex, SectionInsets, ZOrder)
//! - `layout_params`: LayoutParams - parameters that invalidate cached geometry
//! - `frame_table`: FrameTable / HeaderFrameTable - cached frames per section
//! - `layout`: compute_layout - the full relayout sweep
//! - `sticky`: resolve_sticky - per-scroll-tick placement of the pinned element
//! - `hit_test`: index_at - point-to-index lookup skipping the sticky section
//! - `visible_range`: frames_intersecting - presented frames in a rectangle
//! - `list`: StickyListLayout - cached view-state driven by the host
//! - `section_tracker`: SectionTracker - active section for a section selector

pub mod frame_table;
pub mod layout;
pub mod layout_params;
pub mod list;
pub mod section_tracker;
pub mod sticky;
pub mod types;
pub mod visible_range;

pub use layout_params::LayoutParams;
pub use list::StickyListLayout;
pub use section_tracker::SectionTracker;
pub use types::{ElementId, Frame, ItemIndex, LayoutAttributes, SectionInsets, Size, ZOrder};
