//! Shared test setup for the Barrio workspace.
//!
//! Tests create a [`TestSetup`] (in-memory SQLite database plus an in-memory session) through
//! the [`test_setup_with_tables!`] or [`test_setup_with_barrio_tables!`] macros, then insert rows
//! with the fixture helpers (`test.user()`, `test.event()`, `test.registration()`) or build
//! detached models with [`fixtures::factory`].

pub mod error;
pub mod fixtures;
pub mod model;
pub mod setup;

pub use error::TestError;
pub use setup::{TestAppState, TestSetup};

pub mod prelude {
    pub use crate::{
        fixtures::factory, test_setup_with_barrio_tables, test_setup_with_tables, TestError,
        TestSetup,
    };
}
