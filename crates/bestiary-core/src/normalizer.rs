//! Normalizer — turns loosely-typed [`RawMonster`] records into
//! display-ready [`NormalizedMonster`] values.
//!
//! Every field goes through a total conversion with a fixed fallback, so a
//! malformed stat, rating, or armor class never fails the record. The only
//! fatal condition is a missing `name`.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{BatchError, NormalizeError};
use crate::types::{NormalizedMonster, RawMonster};

/// Artwork location on the asset host; `{slug}` is the last segment of the
/// record's source URL.
pub const IMAGE_URL_TEMPLATE: &str = "https://www.aidedd.org/dnd/images/{slug}.jpg";

/// Ability score used when a raw stat cannot be read as an integer.
pub const DEFAULT_STAT: i64 = 10;

/// The only `legendary` value that marks a monster as legendary.
pub const LEGENDARY_MARKER: &str = "Legendary";

/// Challenge rating text the scraper writes when a monster has none.
const ABSENT_CR: &str = "None";

const DEFAULT_KIND: &str = "Unknown";
const DEFAULT_SIZE: &str = "Medium";

// ---------------------------------------------------------------------------
// Record-level operations
// ---------------------------------------------------------------------------

/// Normalize a single raw record.
pub fn normalize(raw: &RawMonster) -> Result<NormalizedMonster, NormalizeError> {
    let name = match raw.get("name") {
        None | Some(Value::Null) => return Err(NormalizeError::MissingName),
        Some(value) => text_of(value),
    };

    let cr_display = text_field(raw, "cr", "0");
    let ac_display = text_field(raw, "ac", "");
    let hp_display = text_field(raw, "hp", "");
    let source_url = text_field(raw, "url", "");
    let image_flag = raw.get("image");

    Ok(NormalizedMonster {
        name,
        cr: parse_cr(&cr_display),
        kind: text_field(raw, "type", DEFAULT_KIND),
        size: text_field(raw, "size", DEFAULT_SIZE),
        ac: leading_int(&ac_display),
        hp: leading_int(&hp_display),
        speed: text_field(raw, "speed", ""),
        stats: coerce_stats(raw.get("stats")),
        alignment: text_field(raw, "alignment", ""),
        legendary: matches!(raw.get("legendary"), Some(Value::String(s)) if s == LEGENDARY_MARKER),
        image_url: image_url(image_flag, &source_url),
        has_image: image_flag.and_then(Value::as_bool).unwrap_or(false),
        cr_display,
        ac_display,
        hp_display,
        source_url,
    })
}

/// Normalize a batch, preserving order. Stops at the first record without a
/// name and returns no partial output.
pub fn normalize_all(records: &[RawMonster]) -> Result<Vec<NormalizedMonster>, BatchError> {
    records
        .iter()
        .enumerate()
        .map(|(index, raw)| normalize(raw).map_err(|source| BatchError { index, source }))
        .collect()
}

// ---------------------------------------------------------------------------
// Field conversions
// ---------------------------------------------------------------------------

/// Parse a challenge rating. Never fails: anything unreadable is `0`.
///
/// Fractions (`"1/4"`) are divided out, `"None"` and `""` are `0`, and any
/// other text is read as a decimal number.
pub fn parse_cr(text: &str) -> f64 {
    let value = if let Some((num, den)) = text.split_once('/') {
        match (num.trim().parse::<f64>(), den.trim().parse::<f64>()) {
            (Ok(num), Ok(den)) if den != 0.0 => num / den,
            _ => 0.0,
        }
    } else if text == ABSENT_CR || text.is_empty() {
        0.0
    } else {
        text.trim().parse().unwrap_or(0.0)
    };

    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Value of the leading run of ASCII digits, or `0` when there is none.
///
/// `"18 (natural armor)"` is `18`; `"(natural) 18"` is `0`.
pub fn leading_int(text: &str) -> i64 {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(0)
}

/// Read one ability score, falling back to [`DEFAULT_STAT`].
pub fn coerce_stat(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                    .map(|f| f.trunc() as i64)
            })
            .unwrap_or(DEFAULT_STAT),
        Value::String(s) => s.trim().parse().unwrap_or(DEFAULT_STAT),
        Value::Bool(b) => i64::from(*b),
        _ => DEFAULT_STAT,
    }
}

fn coerce_stats(stats: Option<&Value>) -> IndexMap<String, i64> {
    match stats {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, value)| (key.clone(), coerce_stat(value)))
            .collect(),
        _ => IndexMap::new(),
    }
}

/// Artwork URL for a record, or `""` unless the image flag is literally
/// `true` and the source URL ends in a non-empty slug.
pub fn image_url(image_flag: Option<&Value>, source_url: &str) -> String {
    if image_flag != Some(&Value::Bool(true)) {
        return String::new();
    }
    match source_url.rsplit('/').next() {
        Some(slug) if !slug.is_empty() => IMAGE_URL_TEMPLATE.replace("{slug}", slug),
        _ => String::new(),
    }
}

fn text_field(raw: &RawMonster, key: &str, default: &str) -> String {
    match raw.get(key) {
        None | Some(Value::Null) => default.to_string(),
        Some(value) => text_of(value),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
