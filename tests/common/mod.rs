//! Shared test utilities for bestiary integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod fake_index;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fake_index::*;
pub use fixtures::*;
