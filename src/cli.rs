//! Command-line interface definitions for the newsapi binary.
//!
//! The API key can come from `--api-key`, the `NEWSAPI_KEY` environment
//! variable, or a YAML config file passed with `--config`.

use clap::{Parser, Subcommand};
use newsapi::{Category, Country, Language, SortBy};

/// Browse newsapi.org sources and articles from the terminal.
///
/// # Examples
///
/// ```sh
/// # Names of the UK sources
/// newsapi --api-key YOUR_KEY sources
///
/// # English business sources as JSON
/// newsapi --json sources --language en --category business
///
/// # Top stories from two sources
/// newsapi articles bbc-news the-guardian-uk --sort-by top
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// API key for newsapi.org
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the API host (useful against a local stub)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the decoded responses as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List news sources; defaults to UK sources when no filter is given
    Sources {
        #[arg(long)]
        language: Option<Language>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long)]
        country: Option<Country>,
    },
    /// List articles for one or more sources
    Articles {
        /// Source identifiers, e.g. bbc-news
        #[arg(required = true)]
        sources: Vec<String>,
        #[arg(long)]
        sort_by: Option<SortBy>,
    },
}
