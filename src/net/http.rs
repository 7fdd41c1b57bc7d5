//! JSON POST transport for the owner-configured endpoint.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`BrowserTransport`] reports [`TransportError::Unavailable`];
//! tests substitute their own [`JsonTransport`].
//!
//! ERROR HANDLING
//! ==============
//! A response of any status is a successful round trip and comes back as
//! `Ok(status)`. Only failures to build or deliver the request are errors,
//! which is exactly the server-failure / network-failure split the contact
//! fallback needs.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("http is only available in the browser")]
    Unavailable,
}

/// `true` for the 2xx range, matching `Response.ok` in the browser.
#[must_use]
pub fn status_ok(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Sends a JSON body with POST and reports the response status.
#[allow(async_fn_in_trait)]
pub trait JsonTransport {
    /// POST `body` as `application/json` to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error when the request cannot be built or never gets a response.
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError>;
}

/// `fetch`-backed transport used by the running site.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl JsonTransport for BrowserTransport {
    async fn post_json<B: Serialize>(&self, url: &str, body: &B) -> Result<u16, TransportError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .json(body)
                .map_err(|e| TransportError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| TransportError::Network(e.to_string()))?;
            Ok(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _unused = (url, body);
            Err(TransportError::Unavailable)
        }
    }
}
