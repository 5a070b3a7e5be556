//! bestiary — tools for a tabletop monster dataset.
//!
//! Each subcommand of the `bestiary` binary is a single pass over one
//! dataset file. The runners live in [`commands`] so the integration
//! harnesses can drive them without spawning the binary.
//!
//! # Architecture
//!
//! ```text
//! grep      ──► bestiary_core::grep
//! normalize ──► bestiary_core::dataset ──► normalizer ──► dataset
//! missing   ──► bestiary_remote (fetch + links) ──► bestiary_core::catalog
//! validate  ──► bestiary_core::dataset
//! ```

pub mod commands;

pub use bestiary_core::{GrepHit, NormalizedMonster, RawMonster, RemoteMonster};
