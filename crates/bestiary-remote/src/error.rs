//! Error types for bestiary-remote.

#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("invalid URL {url:?}")]
    InvalidUrl {
        url: String,
        #[source]
        source: http::uri::InvalidUri,
    },
    #[error("failed to build request")]
    Request(#[from] http::Error),
    #[error("request failed")]
    Connect(#[from] hyper_util::client::legacy::Error),
    #[error("failed to read response body")]
    Body(#[from] hyper::Error),
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("too many redirects starting from {url}")]
    TooManyRedirects { url: String },
}
