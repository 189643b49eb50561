//! Turning raw response bodies into typed envelopes.

use crate::error::{NewsApiError, Result};
use crate::request::Endpoint;
use crate::transport::RawResponse;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Decode `raw` into the envelope type for `endpoint`.
///
/// The body has to be a JSON object; anything else (array, scalar, HTML
/// error page, empty body) is a [`NewsApiError::Decode`], never a partially
/// filled value. The `status` field is not inspected and the HTTP status is
/// only used for error context.
#[instrument(level = "debug", skip_all, fields(%endpoint, status = raw.status.as_u16()))]
pub fn decode<T: DeserializeOwned>(endpoint: Endpoint, raw: RawResponse) -> Result<T> {
    let status = raw.status;
    let wrap = |source: serde_json::Error| NewsApiError::Decode {
        endpoint,
        status,
        source,
    };

    // A struct target would also accept a JSON array positionally, so pin
    // the top level to an object first.
    let object: Map<String, Value> = serde_json::from_slice(&raw.body).map_err(wrap)?;
    debug!(fields = object.len(), "Parsed response envelope");
    serde_json::from_value(Value::Object(object)).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ArticlesResponse, SourcesResponse};
    use reqwest::StatusCode;

    fn raw(body: &str) -> RawResponse {
        RawResponse {
            status: StatusCode::OK,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_decodes_sources_with_nested_logos() {
        let resp: SourcesResponse = decode(
            Endpoint::Sources,
            raw(r#"{"status":"ok","sources":[{"id":"bbc-news","name":"BBC News",
                "urlsToLogos":{"small":"s.png","medium":"m.png","large":"l.png"},
                "sortBysAvailable":["top","popular"]}]}"#),
        )
        .unwrap();
        assert_eq!(resp.status, "ok");
        let source = &resp.sources[0];
        assert_eq!(source.urls_to_logos.small, "s.png");
        assert_eq!(source.urls_to_logos.large, "l.png");
        assert_eq!(source.sort_bys_available, vec!["top", "popular"]);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let resp: ArticlesResponse = decode(
            Endpoint::Articles,
            raw(r#"{"status":"ok","totalResults":12,"source":"bbc-news",
                "articles":[{"title":"t","content":"extra","source":{"id":null}}]}"#),
        )
        .unwrap();
        assert_eq!(resp.source, "bbc-news");
        assert_eq!(resp.articles.len(), 1);
        assert_eq!(resp.articles[0].title, "t");
    }

    #[test]
    fn test_status_field_is_not_interpreted() {
        let resp: SourcesResponse = decode(
            Endpoint::Sources,
            raw(r#"{"status":"error","code":"apiKeyInvalid","message":"bad key"}"#),
        )
        .unwrap();
        assert_eq!(resp.status, "error");
        assert_eq!(resp.code.as_deref(), Some("apiKeyInvalid"));
        assert!(resp.sources.is_empty());
    }

    #[test]
    fn test_non_json_is_decode_error() {
        let err = decode::<SourcesResponse>(Endpoint::Sources, raw("<html>502</html>")).unwrap_err();
        assert!(err.is_decode());
        let err = decode::<SourcesResponse>(Endpoint::Sources, raw("")).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_mismatched_shape_is_decode_error() {
        let err = decode::<SourcesResponse>(Endpoint::Sources, raw(r#"{"status":"ok","sources":{"id":"x"}}"#))
            .unwrap_err();
        assert!(err.is_decode());

        let err = decode::<ArticlesResponse>(Endpoint::Articles, raw(r#"["ok","bbc-news"]"#)).unwrap_err();
        assert!(err.is_decode());

        let err = decode::<ArticlesResponse>(Endpoint::Articles, raw(r#"{"articles":[{"title":7}]}"#))
            .unwrap_err();
        match err {
            NewsApiError::Decode { endpoint, status, .. } => {
                assert_eq!(endpoint, Endpoint::Articles);
                assert_eq!(status, StatusCode::OK);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_error_carries_http_status() {
        let body = RawResponse {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: b"upstream down".to_vec(),
        };
        match decode::<SourcesResponse>(Endpoint::Sources, body) {
            Err(NewsApiError::Decode { status, .. }) => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE)
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }
}
