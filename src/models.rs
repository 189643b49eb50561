//! Response schemas for the sources and articles endpoints.
//!
//! These structs mirror the JSON the API returns:
//! - [`SourcesResponse`]: status envelope around a list of [`Source`]
//! - [`ArticlesResponse`]: status envelope around a list of [`Article`],
//!   echoing the `source` and `sortBy` that were requested
//!
//! Wire names are camelCase. Decoding is structural only: unknown fields are
//! ignored, and missing or `null` fields fall back to empty values, since the
//! API routinely omits authors, images and descriptions.

use crate::error::{NewsApiError, Result};
use crate::params::{Category, Country, Language, SortBy};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Envelope returned by `/v1/sources`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcesResponse {
    /// `"ok"` on success, `"error"` when the API rejected the request.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sources: Vec<Source>,
    /// Error code, only present when `status` is `"error"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error explanation, only present when `status` is `"error"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SourcesResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Turn an error envelope into [`NewsApiError::Api`].
    ///
    /// The client never does this on its own.
    pub fn into_result(self) -> Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(api_error(self.code, self.message, &self.status))
        }
    }
}

/// Logo image URLs in three sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlsToLogos {
    #[serde(default, deserialize_with = "null_as_default")]
    pub small: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub medium: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub large: String,
}

/// A news provider known to the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    /// Identifier to pass to the articles endpoint, e.g. `bbc-news`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Homepage of the provider.
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls_to_logos: UrlsToLogos,
    /// Sort orders the articles endpoint accepts for this source.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_bys_available: Vec<String>,
}

impl Source {
    /// `category` as a typed value, if it is one this crate knows.
    pub fn category_kind(&self) -> Option<Category> {
        self.category.parse().ok()
    }

    pub fn language_kind(&self) -> Option<Language> {
        self.language.parse().ok()
    }

    pub fn country_kind(&self) -> Option<Country> {
        self.country.parse().ok()
    }

    /// Typed view of `sort_bys_available`; unrecognised entries are skipped.
    pub fn sort_orders(&self) -> Vec<SortBy> {
        self.sort_bys_available
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect()
    }

    pub fn supports(&self, sort_by: SortBy) -> bool {
        self.sort_bys_available.iter().any(|s| s == sort_by.as_str())
    }
}

/// Envelope returned by `/v1/articles`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    /// Echo of the requested source identifier.
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,
    /// Sort order the server actually applied.
    #[serde(default, deserialize_with = "null_as_default")]
    pub sort_by: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ArticlesResponse {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    /// Turn an error envelope into [`NewsApiError::Api`].
    pub fn into_result(self) -> Result<Self> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(api_error(self.code, self.message, &self.status))
        }
    }
}

/// A single news item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url_to_image: String,
    /// ISO-8601 timestamp exactly as sent by the server.
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
}

impl Article {
    /// Parse `published_at` as RFC 3339. `None` when empty or malformed.
    pub fn published_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.published_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

fn api_error(code: Option<String>, message: Option<String>, status: &str) -> NewsApiError {
    NewsApiError::Api {
        code: code.unwrap_or_else(|| format!("status:{status}")),
        message: message.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_news() -> Source {
        Source {
            id: "abc-news-au".to_string(),
            name: "ABC News (AU)".to_string(),
            description: "Australia's most trusted source of local, national and world news.".to_string(),
            url: "http://www.abc.net.au/news".to_string(),
            category: "general".to_string(),
            language: "en".to_string(),
            country: "au".to_string(),
            urls_to_logos: UrlsToLogos {
                small: "http://i.newsapi.org/abc-news-au-s.png".to_string(),
                medium: "http://i.newsapi.org/abc-news-au-m.png".to_string(),
                large: "http://i.newsapi.org/abc-news-au-l.png".to_string(),
            },
            sort_bys_available: vec!["top".to_string()],
        }
    }

    #[test]
    fn test_source_wire_names() {
        let json = serde_json::to_value(abc_news()).unwrap();
        assert_eq!(json["urlsToLogos"]["medium"], "http://i.newsapi.org/abc-news-au-m.png");
        assert_eq!(json["sortBysAvailable"][0], "top");
        assert!(json.get("urls_to_logos").is_none());
    }

    #[test]
    fn test_sources_response_roundtrip() {
        let want = SourcesResponse {
            status: "ok".to_string(),
            sources: vec![abc_news()],
            code: None,
            message: None,
        };
        let json = serde_json::to_string(&want).unwrap();
        assert!(!json.contains("\"code\""));
        let got: SourcesResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn test_articles_response_roundtrip() {
        let want = ArticlesResponse {
            status: "ok".to_string(),
            source: "bbc-news".to_string(),
            sort_by: "top".to_string(),
            articles: vec![Article {
                author: "BBC News".to_string(),
                title: "Speaker Bercow: Trump should not speak in Parliament".to_string(),
                description: "The Speaker sets out his stance to MPs.".to_string(),
                url: "http://www.bbc.co.uk/news/uk-politics-38884604".to_string(),
                url_to_image: "http://ichef.bbci.co.uk/news/1024/_94003482_de30-1.jpg".to_string(),
                published_at: "2017-02-06T20:16:52Z".to_string(),
            }],
            code: None,
            message: None,
        };
        let json = serde_json::to_value(&want).unwrap();
        assert_eq!(json["sortBy"], "top");
        assert_eq!(json["articles"][0]["urlToImage"], want.articles[0].url_to_image);
        let got: ArticlesResponse = serde_json::from_value(json).unwrap();
        assert_eq!(got, want);
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let json = r#"{
            "status": "ok",
            "source": "bbc-news",
            "articles": [{"title": "Only a title", "author": null, "urlToImage": null}]
        }"#;
        let resp: ArticlesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.sort_by, "");
        let article = &resp.articles[0];
        assert_eq!(article.title, "Only a title");
        assert_eq!(article.author, "");
        assert_eq!(article.url_to_image, "");
        assert_eq!(article.published_at, "");
        assert!(article.published_at_utc().is_none());
    }

    #[test]
    fn test_published_at_stays_a_string() {
        let article = Article {
            published_at: "2017-02-06T20:16:52Z".to_string(),
            ..Article::default()
        };
        assert_eq!(article.published_at, "2017-02-06T20:16:52Z");
        let parsed = article.published_at_utc().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2017-02-06T20:16:52+00:00");
    }

    #[test]
    fn test_source_typed_accessors() {
        let mut source = abc_news();
        assert_eq!(source.category_kind(), Some(Category::General));
        assert_eq!(source.language_kind(), Some(Language::En));
        assert_eq!(source.country_kind(), Some(Country::Au));
        source.sort_bys_available = vec!["top".into(), "mystery".into(), "latest".into()];
        assert_eq!(source.sort_orders(), vec![SortBy::Top, SortBy::Latest]);
        assert!(source.supports(SortBy::Latest));
        assert!(!source.supports(SortBy::Popular));

        source.country = "zz".into();
        assert_eq!(source.country_kind(), None);
    }

    #[test]
    fn test_into_result() {
        let ok = SourcesResponse {
            status: "ok".into(),
            ..SourcesResponse::default()
        };
        assert!(ok.into_result().is_ok());

        let failed: ArticlesResponse = serde_json::from_str(
            r#"{"status":"error","code":"sourceDoesntExist","message":"The news source you've entered doesn't exist."}"#,
        )
        .unwrap();
        assert!(!failed.is_ok());
        match failed.into_result() {
            Err(NewsApiError::Api { code, message }) => {
                assert_eq!(code, "sourceDoesntExist");
                assert!(message.contains("doesn't exist"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }

        let bare = SourcesResponse::default();
        match bare.into_result() {
            Err(NewsApiError::Api { code, .. }) => assert_eq!(code, "status:"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
