//! Index page parsing.
//!
//! The index links every monster to `monstres.php?vo=<slug>`; the `vo`
//! parameter is the slug the local catalogue is keyed on.

use std::sync::OnceLock;

use bestiary_core::RemoteMonster;
use regex::Regex;
use scraper::{Html, Selector};

fn monster_link_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| {
        Selector::parse(r#"a[href*="monstres.php?vo="]"#).expect("valid monster link selector")
    })
}

fn vo_param_re() -> &'static Regex {
    static VO_PARAM_RE: OnceLock<Regex> = OnceLock::new();
    VO_PARAM_RE.get_or_init(|| Regex::new(r"vo=([^&]+)").expect("valid vo parameter regex"))
}

/// Every monster link on the index page, in document order.
///
/// `detail_template` builds each entry's URL; `{slug}` is substituted.
pub fn extract_monsters(html: &str, detail_template: &str) -> Vec<RemoteMonster> {
    let document = Html::parse_document(html);
    let monsters: Vec<RemoteMonster> = document
        .select(monster_link_selector())
        .filter_map(|link| {
            let href = link.value().attr("href")?;
            let slug = vo_param_re().captures(href)?.get(1)?.as_str();
            Some(RemoteMonster {
                name: link.text().collect::<String>().trim().to_string(),
                slug: slug.to_string(),
                url: detail_template.replace("{slug}", slug),
            })
        })
        .collect();
    tracing::debug!(count = monsters.len(), "extracted monster links");
    monsters
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
