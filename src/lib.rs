//! stickylist
//!
//! Layout engine for a vertically scrolling, multi-section list in which one
//! designated item stays pinned below the top bar while everything else
//! scrolls. Frames are computed once per full relayout and cached; each
//! scroll tick only re-resolves the pinned element.
//!
//! Pure core ([`view_state`]) with a thin shell ([`config`], [`logging`],
//! the `stickylist` binary) around it.

pub mod config;
pub mod logging;
pub mod model;
pub mod report;
pub mod view_state;

pub use view_state::{
    ElementId, Frame, ItemIndex, LayoutAttributes, LayoutParams, SectionInsets, SectionTracker,
    Size, StickyListLayout, ZOrder,
};
