//! Local catalogue — the set of slugs already present in the local dataset,
//! and the difference against the remote index.

use std::collections::HashSet;

use serde_json::Value;

use crate::types::{RawMonster, RemoteMonster};

/// Slug used by the scraper for a monster name: lowercase, spaces become
/// dashes, apostrophes vanish, everything outside `[a-z0-9-]` is dropped.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | '-'))
        .collect()
}

/// Last path segment of a URL.
pub fn url_slug(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// Every slug a local record can be recognised by: its name slug, the slug
/// of its `url`, and its explicit `slug` field.
pub fn local_slugs(records: &[RawMonster]) -> HashSet<String> {
    let mut slugs = HashSet::new();
    for (index, record) in records.iter().enumerate() {
        let Some(Value::String(name)) = record.get("name") else {
            tracing::warn!(index, "local record has no name, skipping");
            continue;
        };
        slugs.insert(slugify(name));

        if let Some(Value::String(url)) = record.get("url") {
            slugs.insert(url_slug(url).to_string());
        }
        if let Some(Value::String(slug)) = record.get("slug") {
            if !slug.is_empty() {
                slugs.insert(slug.clone());
            }
        }
    }
    slugs
}

/// Remote entries whose slug is not in `local`, in remote order.
pub fn missing(remote: Vec<RemoteMonster>, local: &HashSet<String>) -> Vec<RemoteMonster> {
    remote
        .into_iter()
        .filter(|monster| !local.contains(&monster.slug))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
