//! bestiary-core — monster dataset core library.
//!
//! This crate holds the record types shared by every bestiary tool plus the
//! pure transforms that operate on them.
//!
//! # Architecture
//!
//! ```text
//! dataset ──► normalizer ──► dataset
//!    │
//!    ├──► grep
//!    └──► catalog ◄── remote index (bestiary-remote)
//! ```
//!
//! Reading and writing files is confined to [`dataset`] and [`grep`]; the
//! [`normalizer`] and [`catalog`] never touch the filesystem.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod grep;
pub mod normalizer;
pub mod types;

pub use error::{BatchError, DatasetError, NormalizeError};
pub use types::{GrepHit, NormalizedMonster, RawMonster, RemoteMonster};
