//! Subcommand runners. Each one owns the file and network boundaries of its
//! tool; the transforms themselves live in `bestiary-core`.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use bestiary_core::config::RemoteConfig;
use bestiary_core::{catalog, dataset, grep, normalizer, GrepHit, RemoteMonster};
use bestiary_remote::Fetcher;

/// Outcome of a `missing` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingReport {
    /// Distinct slugs known locally.
    pub local: usize,
    /// Monster links found on the remote index.
    pub remote: usize,
    pub missing: Vec<RemoteMonster>,
}

/// Lines of `path` containing `pattern` (and `also`, when given).
pub fn grep(path: &Path, pattern: &str, also: Option<&str>) -> anyhow::Result<Vec<GrepHit>> {
    grep::grep_file(path, pattern, also)
        .with_context(|| format!("searching {}", path.display()))
}

/// Normalize the raw dataset at `input` and write it to `output`. Returns
/// the number of records written. Nothing is written if any record fails.
pub fn normalize(input: &Path, output: &Path) -> anyhow::Result<usize> {
    let raw = dataset::load_records(input).context("loading raw monsters")?;
    tracing::info!(count = raw.len(), path = %input.display(), "loaded raw monsters");

    let normalized = normalizer::normalize_all(&raw)
        .with_context(|| format!("normalizing {}", input.display()))?;
    dataset::write_json(output, &normalized).context("writing normalized monsters")?;

    tracing::info!(count = normalized.len(), path = %output.display(), "wrote normalized monsters");
    Ok(normalized.len())
}

/// Number of elements in the JSON document at `path`, or an error if it does
/// not parse.
pub fn validate(path: &Path) -> anyhow::Result<usize> {
    dataset::validate(path).with_context(|| format!("validating {}", path.display()))
}

/// Slugs of the local dataset. A missing file is an empty catalogue.
pub fn local_catalogue(path: &Path) -> anyhow::Result<HashSet<String>> {
    match dataset::load_records(path) {
        Ok(records) => Ok(catalog::local_slugs(&records)),
        Err(err) if err.is_not_found() => {
            tracing::warn!(path = %path.display(), "local dataset not found, assuming empty");
            Ok(HashSet::new())
        }
        Err(err) => Err(err).context("loading local dataset"),
    }
}

/// Diff an already-fetched index page against the local catalogue.
pub fn diff_index(html: &str, local: &HashSet<String>, detail_template: &str) -> MissingReport {
    let remote = bestiary_remote::extract_monsters(html, detail_template);
    let remote_count = remote.len();
    MissingReport {
        local: local.len(),
        remote: remote_count,
        missing: catalog::missing(remote, local),
    }
}

/// Fetch the remote index, diff it against `local_path`, and write the
/// missing entries to `output`.
pub async fn find_missing(
    local_path: &Path,
    output: &Path,
    remote: &RemoteConfig,
) -> anyhow::Result<MissingReport> {
    let local = local_catalogue(local_path)?;
    tracing::info!(count = local.len(), "local monsters");

    let fetcher = Fetcher::new(remote.user_agent.as_str());
    let html = bestiary_remote::fetch_index(&fetcher, &remote.index_url, &remote.fallback_index_url)
        .await
        .context("fetching remote monster index")?;

    let report = diff_index(&html, &local, &remote.detail_url_template);
    tracing::info!(
        remote = report.remote,
        missing = report.missing.len(),
        "diffed remote index"
    );

    dataset::write_json(output, &report.missing).context("writing missing monsters")?;
    Ok(report)
}
