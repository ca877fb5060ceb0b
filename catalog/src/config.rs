//! Run configuration and the command line that fills it in.

use crate::record::DedupeKey;
use crate::youtube_api::MAX_PAGE_SIZE;
use crate::youtube_api::client::DEFAULT_BASE_URL;
use clap::Parser;
use std::path::PathBuf;

/// Knobs of a single catalog run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// `maxResults` of each `search.list` page.
    pub search_page_size: u32,
    /// `maxResults` of each `playlists.list` page.
    pub playlist_page_size: u32,
    /// `maxResults` of each `playlistItems.list` page.
    pub playlist_item_page_size: u32,
    /// Collapse repeated rows by this column. Off by default.
    pub dedupe: Option<DedupeKey>,
    /// Skip videos whose detail lookups come back empty instead of aborting the run.
    pub skip_unavailable: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            search_page_size: MAX_PAGE_SIZE,
            playlist_page_size: MAX_PAGE_SIZE,
            playlist_item_page_size: MAX_PAGE_SIZE,
            dedupe: None,
            skip_unavailable: false,
        }
    }
}

impl CatalogConfig {
    /// Uses `page_size` for every list endpoint, clamped to what the service accepts.
    pub fn with_page_size(self, page_size: u32) -> Self {
        let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        Self {
            search_page_size: page_size,
            playlist_page_size: page_size,
            playlist_item_page_size: page_size,
            ..self
        }
    }
}

/// Catalog every public video of a YouTube channel into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "channel-catalog", version)]
pub struct Cli {
    /// Channel name or keyword; the first matching channel is cataloged.
    pub query: String,

    /// YouTube Data API key.
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Where to write the CSV [default: the query without whitespace, plus `.csv`]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Page size of every list request.
    #[arg(
        long,
        default_value_t = MAX_PAGE_SIZE,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PAGE_SIZE)),
    )]
    pub page_size: u32,

    /// Keep only the first row per video ID or per title.
    #[arg(long, value_enum)]
    pub dedupe: Option<DedupeKey>,

    /// Skip videos that disappeared between discovery and lookup.
    #[arg(long)]
    pub skip_unavailable: bool,

    /// Base URL of the Data API.
    #[arg(long, env = "YOUTUBE_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub api_base_url: String,
}

impl Cli {
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            dedupe: self.dedupe,
            skip_unavailable: self.skip_unavailable,
            ..CatalogConfig::default()
        }
        .with_page_size(self.page_size)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.query))
    }
}

/// `Mr Beast` becomes `MrBeast.csv`. Path separators are replaced so the file always lands
/// in the working directory.
pub fn default_output_path(query: &str) -> PathBuf {
    let stem: String = query
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if std::path::is_separator(c) { '_' } else { c })
        .collect();
    if stem.is_empty() {
        PathBuf::from("channel.csv")
    } else {
        PathBuf::from(format!("{stem}.csv"))
    }
}
