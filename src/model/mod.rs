//! Domain model: error taxonomy and list fixtures.

pub mod error;
pub mod fixture;

pub use error::{AppError, FixtureError, LayoutError};
pub use fixture::{ListFixture, SectionFixture, load_fixture};
