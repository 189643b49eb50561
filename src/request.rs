//! Request building: options structs to resource path plus query parameters.

use crate::error::Result;
use crate::params::{Category, Country, Language, SortBy};
use std::collections::BTreeMap;
use std::fmt;
use url::Url;

/// The two resources exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `/v1/sources`
    Sources,
    /// `/v1/articles`
    Articles,
}

impl Endpoint {
    /// Resource path appended to the base URL.
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Sources => "/v1/sources",
            Endpoint::Articles => "/v1/articles",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::Sources => "sources",
            Endpoint::Articles => "articles",
        })
    }
}

/// Optional filters for the sources listing. Unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SourcesOptions {
    pub language: Option<Language>,
    pub category: Option<Category>,
    pub country: Option<Country>,
}

impl SourcesOptions {
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }
}

/// Optional filters for an articles listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArticleOptions {
    pub sort_by: Option<SortBy>,
}

impl ArticleOptions {
    pub fn with_sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }
}

/// A fully resolved GET request, minus the base URL and credentials.
///
/// The query is keyed by parameter name and kept sorted so the encoded
/// string is deterministic; the server does not care about order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub endpoint: Endpoint,
    pub query: BTreeMap<&'static str, String>,
}

impl ApiRequest {
    /// Request for `/v1/sources` with whichever filters are set.
    pub fn sources(options: &SourcesOptions) -> Self {
        let mut query = BTreeMap::new();
        if let Some(language) = options.language {
            query.insert("language", language.as_str().to_string());
        }
        if let Some(category) = options.category {
            query.insert("category", category.as_str().to_string());
        }
        if let Some(country) = options.country {
            query.insert("country", country.as_str().to_string());
        }
        Self {
            endpoint: Endpoint::Sources,
            query,
        }
    }

    /// Request for `/v1/articles`. `source` is always sent.
    pub fn articles(source: &str, options: &ArticleOptions) -> Self {
        let mut query = BTreeMap::new();
        query.insert("source", source.to_string());
        if let Some(sort_by) = options.sort_by {
            query.insert("sortBy", sort_by.as_str().to_string());
        }
        Self {
            endpoint: Endpoint::Articles,
            query,
        }
    }

    /// Join `base_url` and the endpoint path, then append the query.
    ///
    /// The base is concatenated rather than URL-joined so a base with a path
    /// prefix (a proxy mount, say) keeps it.
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.endpoint.path());
        let mut url = Url::parse(&raw)?;
        if !self.query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }
}
