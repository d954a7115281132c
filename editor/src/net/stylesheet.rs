//! Stylesheet loading for the CSS box.
//!
//! Client-side (csr): a real HTTP GET via `gloo-net`.
//! Native builds (tests): returns [`StylesheetError::Unavailable`].
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as a typed error so the caller can log and keep the
//! current CSS text instead of crashing the editor.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "stylesheet_test.rs"]
mod stylesheet_test;

/// Errors produced while loading a stylesheet.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum StylesheetError {
    /// The request could not be sent or the connection failed.
    #[error("stylesheet request failed: {0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("stylesheet request for {path} returned status {status}")]
    Status { path: String, status: u16 },

    /// The response body could not be read as text.
    #[error("stylesheet body unreadable: {0}")]
    Body(String),

    /// HTTP is not available in this build.
    #[error("stylesheet loading is only available in the browser")]
    Unavailable,
}

/// Fetch a stylesheet by (relative) URL and return its text.
///
/// # Errors
///
/// Returns [`StylesheetError`] if the request fails, the status is not 2xx,
/// or the body is not text.
pub async fn fetch_stylesheet(path: &str) -> Result<String, StylesheetError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(path)
            .send()
            .await
            .map_err(|e| StylesheetError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(StylesheetError::Status { path: path.to_owned(), status: resp.status() });
        }
        resp.text().await.map_err(|e| StylesheetError::Body(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(StylesheetError::Unavailable)
    }
}
