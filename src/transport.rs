//! HTTP transport: one GET per call, body read in full.
//!
//! [`Transport`] is the seam between the client and the HTTP stack.
//! [`ReqwestTransport`] is the stock implementation; tests and callers with
//! their own stack can provide another.

use crate::error::Result;
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{Client, StatusCode};
use std::fmt;
use std::future::Future;
use std::time::Instant;
use tracing::{debug, instrument};
use url::Url;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Status and fully buffered body of a response.
///
/// The connection has already been released by the time this exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Sends a single authenticated GET and returns the raw response.
///
/// Implementations must not retry and must not interpret the HTTP status;
/// both are left to the caller.
pub trait Transport {
    /// Issue `GET url` with `Accept: application/json` and the API key.
    fn get(&self, url: Url, api_key: &str) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`.
///
/// The inner client is cheap to clone and safe to share between tasks;
/// timeouts and TLS are whatever it was built with.
#[derive(Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReqwestTransport").finish_non_exhaustive()
    }
}

impl Transport for ReqwestTransport {
    #[instrument(level = "debug", skip_all, fields(path = %url.path()))]
    async fn get(&self, url: Url, api_key: &str) -> Result<RawResponse> {
        let t0 = Instant::now();
        let response = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(API_KEY_HEADER, api_key)
            .send()
            .await?;

        let status = response.status();
        // Consumes the response; the connection goes back to the pool here
        // whether or not the body turns out to be decodable.
        let body = response.bytes().await?.to_vec();

        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Received response"
        );
        Ok(RawResponse { status, body })
    }
}
