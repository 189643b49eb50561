//! The client: build request, send it, decode the answer.

use crate::config::{ClientConfig, DEFAULT_BASE_URL};
use crate::decode::decode;
use crate::error::{NewsApiError, Result};
use crate::models::{ArticlesResponse, SourcesResponse};
use crate::request::{ApiRequest, ArticleOptions, SourcesOptions};
use crate::transport::{ReqwestTransport, Transport};
use serde::de::DeserializeOwned;
use std::fmt;
use tracing::{debug, instrument};

/// Entry point for the news API.
///
/// Holds the API key, the base URL and the transport. Every call is a single
/// GET followed by a decode; nothing is cached or retried, and the client can
/// be shared freely between tasks.
///
/// # Example
///
/// ```no_run
/// use newsapi::{Country, NewsApiClient, SourcesOptions};
///
/// # async fn run() -> newsapi::Result<()> {
/// let client = NewsApiClient::new("my-api-key", None);
/// let resp = client
///     .sources(&SourcesOptions::default().with_country(Country::Gb))
///     .await?;
/// for source in resp.sources {
///     println!("{}", source.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct NewsApiClient<T = ReqwestTransport> {
    api_key: String,
    base_url: String,
    transport: T,
}

impl NewsApiClient {
    /// Create a client, using `http` when given or a default `reqwest::Client`.
    pub fn new(api_key: impl Into<String>, http: Option<reqwest::Client>) -> Self {
        Self::with_transport(api_key, ReqwestTransport::new(http.unwrap_or_default()))
    }

    /// Create a client from a [`ClientConfig`], honouring its timeout,
    /// user agent and base URL.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = config.http_client()?;
        Ok(Self::new(config.api_key.clone(), Some(http)).with_base_url(config.base_url.clone()))
    }
}

impl<T: Transport> NewsApiClient<T> {
    pub fn with_transport(api_key: impl Into<String>, transport: T) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            transport,
        }
    }

    /// Point the client at another host, e.g. a local stub server.
    ///
    /// Not validated here; a malformed value surfaces as
    /// [`NewsApiError::InvalidUrl`] on the next call.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// List news sources, filtered by whichever options are set.
    ///
    /// An API-level failure comes back as `Ok` with `status == "error"`.
    #[instrument(level = "debug", skip(self))]
    pub async fn sources(&self, options: &SourcesOptions) -> Result<SourcesResponse> {
        let resp: SourcesResponse = self.execute(ApiRequest::sources(options)).await?;
        debug!(status = %resp.status, count = resp.sources.len(), "Decoded sources");
        Ok(resp)
    }

    /// List articles from one source.
    ///
    /// `source` must be a non-empty source id such as `bbc-news`; an empty
    /// one is rejected before any request is made.
    #[instrument(level = "debug", skip(self))]
    pub async fn articles(&self, source: &str, options: &ArticleOptions) -> Result<ArticlesResponse> {
        if source.trim().is_empty() {
            return Err(NewsApiError::EmptySource);
        }
        let resp: ArticlesResponse = self.execute(ApiRequest::articles(source, options)).await?;
        debug!(status = %resp.status, count = resp.articles.len(), "Decoded articles");
        Ok(resp)
    }

    async fn execute<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let url = request.url(&self.base_url)?;
        debug!(endpoint = %request.endpoint, query = ?request.query, "Sending request");
        let raw = self.transport.get(url, &self.api_key).await?;
        decode(request.endpoint, raw)
    }
}

impl<T: fmt::Debug> fmt::Debug for NewsApiClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("transport", &self.transport)
            .finish()
    }
}
