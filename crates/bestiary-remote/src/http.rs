//! HTTP(S) GET client built on `hyper` with rustls.
//!
//! Redirects are followed up to [`MAX_REDIRECTS`] hops; every other status is
//! handed back to the caller untouched.

use http_body_util::{BodyExt, Empty};
use hyper::body::Bytes;
use hyper::header::{LOCATION, USER_AGENT};
use hyper::{Request, Uri};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::error::RemoteError;

pub const MAX_REDIRECTS: usize = 5;

/// Final status and body of a GET request. The body is decoded as UTF-8,
/// lossily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

/// A reusable GET client. Accepts both `https://` and plain `http://` URLs.
pub struct Fetcher {
    client: Client<HttpsConnector<HttpConnector>, Empty<Bytes>>,
    user_agent: String,
}

impl Fetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        let connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        Self {
            client: Client::builder(TokioExecutor::new()).build(connector),
            user_agent: user_agent.into(),
        }
    }

    pub async fn get(&self, url: &str) -> Result<FetchResponse, RemoteError> {
        let mut current = url.to_string();

        for _ in 0..=MAX_REDIRECTS {
            let uri: Uri = current.parse().map_err(|source| RemoteError::InvalidUrl {
                url: current.clone(),
                source,
            })?;
            let request = Request::get(uri.clone())
                .header(USER_AGENT, self.user_agent.as_str())
                .body(Empty::new())?;

            let response = self.client.request(request).await?;
            let status = response.status();
            tracing::debug!(url = %uri, status = status.as_u16(), "GET");

            if status.is_redirection() {
                let next = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .and_then(|location| resolve_location(&uri, location));
                if let Some(next) = next {
                    tracing::debug!(from = %uri, to = %next, "following redirect");
                    current = next;
                    continue;
                }
            }

            let body = response.into_body().collect().await?.to_bytes();
            return Ok(FetchResponse {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Err(RemoteError::TooManyRedirects {
            url: url.to_string(),
        })
    }
}

/// Absolute URL for a `Location` header value. Handles absolute URLs and
/// host-relative paths; anything else is not followed.
fn resolve_location(base: &Uri, location: &str) -> Option<String> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return Some(location.to_string());
    }
    if location.starts_with('/') {
        let scheme = base.scheme_str()?;
        let authority = base.authority()?;
        return Some(format!("{scheme}://{authority}{location}"));
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
