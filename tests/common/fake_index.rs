//! Fake index host for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1 that answers from a fixed route table, so the `missing` runner
//! can be exercised end-to-end without network access. Unknown paths answer
//! 404.
//!
//! # Example
//!
//! ```rust,ignore
//! let addr = serve(vec![
//!     Route::redirect("/en/rules/monsters", "/en/rules/monsters/"),
//!     Route::ok("/en/rules/monsters/", INDEX_HTML),
//! ])
//! .await;
//! let index_url = url(addr, "/en/rules/monsters");
//! ```

use std::net::SocketAddr;

use axum::{
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use tokio::net::TcpListener;

/// One canned response.
#[derive(Debug, Clone)]
pub struct Route {
    pub path: String,
    pub status: u16,
    /// `Location` header, set for redirects.
    pub location: Option<String>,
    pub body: String,
}

impl Route {
    pub fn ok(path: impl Into<String>, body: &str) -> Self {
        Self::status(path, 200, body)
    }

    pub fn status(path: impl Into<String>, status: u16, body: &str) -> Self {
        Self {
            path: path.into(),
            status,
            location: None,
            body: body.to_string(),
        }
    }

    pub fn redirect(path: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            status: 302,
            location: Some(location.into()),
            body: String::new(),
        }
    }
}

/// A chain of `hops` redirects `/hop0 → /hop1 → … → /hop{hops}`, where the
/// last path serves `body`. Start the fetch at `/hop0`.
pub fn redirect_chain(hops: usize, body: &str) -> Vec<Route> {
    let mut routes: Vec<Route> = (0..hops)
        .map(|i| Route::redirect(format!("/hop{i}"), format!("/hop{}", i + 1)))
        .collect();
    routes.push(Route::ok(format!("/hop{hops}"), body));
    routes
}

/// Start the server on an ephemeral port. The server lives until the test
/// runtime shuts down.
pub async fn serve(routes: Vec<Route>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind fake index");
    let addr = listener.local_addr().expect("local addr");

    let mut app = Router::new();
    for route in routes {
        let path = route.path.clone();
        app = app.route(&path, get(move || respond(route.clone())));
    }
    let app = app.fallback(not_found);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// `http://<addr><path>`
pub fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn respond(route: Route) -> impl IntoResponse {
    let status = StatusCode::from_u16(route.status).expect("valid status code");
    let mut headers = HeaderMap::new();
    if let Some(location) = &route.location {
        headers.insert(
            LOCATION,
            HeaderValue::from_str(location).expect("valid Location header"),
        );
    }
    (status, headers, route.body)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}
