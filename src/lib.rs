//! # newsapi
//!
//! Async client for the [newsapi.org](https://newsapi.org) v1 API: the list
//! of news sources and the latest articles of a given source, decoded into
//! typed structs.
//!
//! ## Usage
//!
//! ```no_run
//! use newsapi::{ArticleOptions, NewsApiClient, SortBy};
//!
//! # async fn run() -> newsapi::Result<()> {
//! let client = NewsApiClient::new(std::env::var("NEWSAPI_KEY").unwrap_or_default(), None);
//! let resp = client
//!     .articles("bbc-news", &ArticleOptions::default().with_sort_by(SortBy::Top))
//!     .await?
//!     .into_result()?;
//! for article in resp.articles {
//!     println!("{} ({})", article.title, article.published_at);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Each call runs the same short pipeline:
//! 1. **Request**: options become a path plus query ([`request`])
//! 2. **Transport**: one GET with `Accept: application/json` and the API key ([`transport`])
//! 3. **Decode**: the JSON body becomes a response envelope ([`decode`], [`models`])
//!
//! Nothing is cached or retried. API-level failures arrive as ordinary
//! responses with `status == "error"`; check [`SourcesResponse::is_ok`] /
//! [`ArticlesResponse::is_ok`] or call `into_result`.

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod models;
pub mod params;
pub mod request;
pub mod transport;

pub use client::NewsApiClient;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{NewsApiError, Result};
pub use models::{Article, ArticlesResponse, Source, SourcesResponse, UrlsToLogos};
pub use params::{Category, Country, Language, ParseParamError, SortBy};
pub use request::{ApiRequest, ArticleOptions, Endpoint, SourcesOptions};
pub use transport::{RawResponse, ReqwestTransport, Transport};
