//! bestiary-remote — remote monster index access for bestiary.
//!
//! [`Fetcher`] downloads pages over HTTP(S); [`extract_monsters`] turns the
//! index page into [`bestiary_core::RemoteMonster`] entries that the core
//! catalogue can diff against the local dataset.

pub mod error;
pub mod http;
pub mod index;

pub use error::RemoteError;
pub use http::{FetchResponse, Fetcher, MAX_REDIRECTS};
pub use index::extract_monsters;

/// Fetch the index page body from `primary`, or from `fallback` when the
/// primary source answers with a non-200 status. The fallback is tried once.
pub async fn fetch_index(
    fetcher: &Fetcher,
    primary: &str,
    fallback: &str,
) -> Result<String, RemoteError> {
    tracing::info!(url = primary, "fetching monster index");
    let response = fetcher.get(primary).await?;
    if response.status == 200 {
        return Ok(response.body);
    }

    tracing::warn!(
        url = primary,
        status = response.status,
        fallback,
        "index fetch failed, using fallback source"
    );
    let response = fetcher.get(fallback).await?;
    if response.status != 200 {
        return Err(RemoteError::Status {
            url: fallback.to_string(),
            status: response.status,
        });
    }
    Ok(response.body)
}
