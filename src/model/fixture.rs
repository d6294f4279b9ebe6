//! List fixtures: a static data source for the layout engine.
//!
//! A fixture describes section counts and uniform per-section sizes. It is
//! what the CLI lays out, and it stands in for a host's data source in tests.

use super::error::FixtureError;
use crate::view_state::types::{ItemIndex, Size};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One section of a fixture.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SectionFixture {
    /// Number of items.
    pub items: usize,
    /// Height of every item in the section.
    pub item_height: f64,
    /// Height of the section header, 0 for none.
    #[serde(default)]
    pub header_height: f64,
}

impl SectionFixture {
    /// Section without a header.
    pub fn new(items: usize, item_height: f64) -> Self {
        Self {
            items,
            item_height,
            header_height: 0.0,
        }
    }
}

/// A list of sections laid out at a fixed width.
///
/// TOML form:
/// ```toml
/// width = 390.0
///
/// [[sections]]
/// items = 1
/// item_height = 300.0
///
/// [[sections]]
/// items = 3
/// item_height = 200.0
/// header_height = 32.0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ListFixture {
    /// Width of every item and header.
    pub width: f64,
    /// Sections in order.
    pub sections: Vec<SectionFixture>,
}

impl ListFixture {
    /// The demo list: a 300pt banner, a 50pt sticky selector, then three
    /// lists of 200pt rows with 1, 3 and 4 items.
    pub fn demo(width: f64) -> Self {
        Self {
            width,
            sections: vec![
                SectionFixture::new(1, 300.0),
                SectionFixture::new(1, 50.0),
                SectionFixture::new(1, 200.0),
                SectionFixture::new(3, 200.0),
                SectionFixture::new(4, 200.0),
            ],
        }
    }

    /// Number of items in each section.
    pub fn section_counts(&self) -> Vec<usize> {
        self.sections.iter().map(|section| section.items).collect()
    }

    /// Size of an item, `None` for an index the fixture does not contain.
    pub fn size_of(&self, index: ItemIndex) -> Option<Size> {
        self.sections
            .get(index.section)
            .filter(|section| index.item < section.items)
            .map(|section| Size::new(self.width, section.item_height))
    }

    /// Size of a section header; zero height when there is none.
    pub fn header_size_of(&self, section: usize) -> Size {
        self.sections
            .get(section)
            .map(|s| Size::new(self.width, s.header_height))
            .unwrap_or(Size::ZERO)
    }
}

/// Load a fixture from a TOML file.
///
/// # Errors
///
/// Returns `FixtureError::FileNotFound` if the path does not exist,
/// `FixtureError::Io` if it cannot be read and `FixtureError::Parse` if the
/// contents do not match the fixture schema.
pub fn load_fixture(path: &Path) -> Result<ListFixture, FixtureError> {
    if !path.exists() {
        return Err(FixtureError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path)?;
    toml::from_str(&contents).map_err(|e| FixtureError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}
