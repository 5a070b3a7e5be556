//! Core types for bestiary-core.
//!
//! This module defines the data structures shared across the tools: the
//! loosely-typed [`RawMonster`] read from scraped JSON, the fully-typed
//! [`NormalizedMonster`] written back out, the [`RemoteMonster`] entries of
//! the remote index, and the [`GrepHit`] lines reported by the grep tool.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A raw monster record exactly as it came out of the scraper.
///
/// Field names and types are inconsistent across sources, so the record is
/// kept as a plain JSON object and read through total per-field conversions.
pub type RawMonster = serde_json::Map<String, serde_json::Value>;

/// A display-ready monster record. Every field is always populated.
///
/// Field order matches the serialized JSON layout of the processed dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedMonster {
    pub name: String,
    /// Numeric challenge rating (`"1/4"` becomes `0.25`).
    pub cr: f64,
    /// Challenge rating as it should be shown to users.
    pub cr_display: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub size: String,
    pub ac: i64,
    /// Armor class text including any parenthetical note.
    pub ac_display: String,
    pub hp: i64,
    /// Hit point text including the dice expression, if any.
    pub hp_display: String,
    pub speed: String,
    /// Ability scores in the order they appeared in the raw record.
    pub stats: IndexMap<String, i64>,
    pub alignment: String,
    pub legendary: bool,
    pub source_url: String,
    /// Artwork URL, empty when the record has no image.
    pub image_url: String,
    pub has_image: bool,
}

/// A monster listed on the remote index page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteMonster {
    pub name: String,
    pub slug: String,
    pub url: String,
}

/// One matching line reported by [`crate::grep`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrepHit {
    /// 1-based line number.
    pub line_number: usize,
    /// Line text with surrounding whitespace removed.
    pub text: String,
}

impl std::fmt::Display for GrepHit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.text)
    }
}
