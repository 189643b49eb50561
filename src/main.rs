//! # newsapi
//!
//! Small terminal front end for the `newsapi` library: prints the sources
//! the API knows about, or the latest articles for a set of sources.
//!
//! ## Usage
//!
//! ```sh
//! newsapi --api-key YOUR_KEY sources --country gb
//! newsapi articles bbc-news --sort-by top
//! ```

use chrono::Local;
use clap::Parser;
use futures::stream::{self, StreamExt};
use newsapi::{ArticleOptions, ArticlesResponse, ClientConfig, Country, NewsApiClient, SourcesOptions};
use std::error::Error;
use tracing::{debug, error, info, instrument, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, Command};

/// How many article listings are fetched at once.
const PARALLEL_FETCHES: usize = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    debug!(config = ?args.config, base_url = ?args.base_url, json = args.json, "Parsed CLI arguments");

    let config = resolve_config(&args).await?;
    let client = NewsApiClient::from_config(&config)?;
    info!(base_url = %client.base_url(), "Client ready");

    match args.command {
        Command::Sources {
            language,
            category,
            country,
        } => {
            let mut options = SourcesOptions {
                language,
                category,
                country,
            };
            if options == SourcesOptions::default() {
                options.country = Some(Country::Gb);
            }
            list_sources(&client, &options, args.json).await
        }
        Command::Articles { sources, sort_by } => {
            let options = ArticleOptions { sort_by };
            list_articles(&client, sources, &options, args.json).await
        }
    }
}

/// Merge the config file (if any) with CLI flags; flags win.
async fn resolve_config(args: &Cli) -> Result<ClientConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path).await?,
        None => ClientConfig::new(String::new()),
    };
    if let Some(key) = &args.api_key {
        config.api_key = key.clone();
    }
    if let Some(base_url) = &args.base_url {
        config.base_url = base_url.clone();
    }
    if config.api_key.is_empty() {
        error!("No API key: pass --api-key, set NEWSAPI_KEY, or add api_key to the config file");
        return Err("missing API key".into());
    }
    Ok(config)
}

#[instrument(level = "info", skip(client, json))]
async fn list_sources(
    client: &NewsApiClient,
    options: &SourcesOptions,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let resp = client.sources(options).await?.into_result()?;
    info!(count = resp.sources.len(), "Fetched sources");

    if json {
        println!("{}", serde_json::to_string_pretty(&resp)?);
        return Ok(());
    }
    for source in &resp.sources {
        println!("{}", source.name);
    }
    Ok(())
}

#[instrument(level = "info", skip_all, fields(count = sources.len()))]
async fn list_articles(
    client: &NewsApiClient,
    sources: Vec<String>,
    options: &ArticleOptions,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let results: Vec<ArticlesResponse> = stream::iter(sources)
        .map(|source| async move {
            match client.articles(&source, options).await.and_then(|r| r.into_result()) {
                Ok(resp) => {
                    debug!(%source, articles = resp.articles.len(), "Fetched articles");
                    Some(resp)
                }
                Err(e) => {
                    warn!(%source, error = %e, "Failed to fetch articles; skipping source");
                    None
                }
            }
        })
        .buffered(PARALLEL_FETCHES)
        .filter_map(|opt| async move { opt })
        .collect()
        .await;

    if results.is_empty() {
        return Err("no articles could be fetched".into());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }
    for resp in &results {
        println!("== {} ({})", resp.source, resp.sort_by);
        for article in &resp.articles {
            let when = article
                .published_at_utc()
                .map(|t| t.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "unknown time".to_string());
            println!("  [{when}] {}", article.title);
            if !article.url.is_empty() {
                println!("      {}", article.url);
            }
        }
    }
    Ok(())
}
