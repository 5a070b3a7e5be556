//! Domain-specific assertion macros for bestiary harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! normalized-record invariant was violated.

// ---------------------------------------------------------------------------
// Record assertions
// ---------------------------------------------------------------------------

/// Assert that every field of a normalized record serializes to a non-null
/// value of the expected JSON type.
///
/// ```rust
/// assert_fully_populated!(monster);
/// ```
#[macro_export]
macro_rules! assert_fully_populated {
    ($monster:expr) => {{
        let monster: &bestiary_core::NormalizedMonster = &$monster;
        let value = serde_json::to_value(monster).expect("normalized record serializes");
        let object = value.as_object().expect("normalized record is an object");
        const EXPECTED: &[(&str, &str)] = &[
            ("name", "string"),
            ("cr", "number"),
            ("cr_display", "string"),
            ("type", "string"),
            ("size", "string"),
            ("ac", "number"),
            ("ac_display", "string"),
            ("hp", "number"),
            ("hp_display", "string"),
            ("speed", "string"),
            ("stats", "object"),
            ("alignment", "string"),
            ("legendary", "bool"),
            ("source_url", "string"),
            ("image_url", "string"),
            ("has_image", "bool"),
        ];
        for (key, kind) in EXPECTED {
            let field = object.get(*key).unwrap_or_else(|| {
                panic!(
                    "assert_fully_populated! failed: field {:?} missing.\n  record: {}",
                    key, value
                )
            });
            let ok = match *kind {
                "string" => field.is_string(),
                "number" => field.is_number(),
                "object" => field.is_object(),
                "bool" => field.is_boolean(),
                _ => unreachable!(),
            };
            if !ok {
                panic!(
                    "assert_fully_populated! failed: field {:?} should be a {}, got {}",
                    key, kind, field
                );
            }
        }
        assert_eq!(object.len(), EXPECTED.len(), "unexpected extra fields in {}", value);
    }};
}

/// Assert the numeric and display forms of armor class and hit points.
///
/// ```rust
/// assert_combat_stats!(monster, ac = 18, hp = 135);
/// ```
#[macro_export]
macro_rules! assert_combat_stats {
    ($monster:expr, ac = $ac:expr, hp = $hp:expr) => {{
        let monster: &bestiary_core::NormalizedMonster = &$monster;
        if monster.ac != $ac || monster.hp != $hp {
            panic!(
                "assert_combat_stats! failed for {:?}:\n  expected: ac={} hp={}\n  actual:   ac={} ({:?}) hp={} ({:?})",
                monster.name, $ac, $hp, monster.ac, monster.ac_display, monster.hp, monster.hp_display
            );
        }
    }};
}
