//! Catalogs every public video of a YouTube channel.
//!
//! A run resolves a channel from a keyword, discovers its videos both through search and
//! through the channel's playlists, looks up details for each, converts durations to seconds
//! and writes the rows out as CSV. See [`discovery::Catalog`] for the pipeline itself.

pub mod config;
pub mod discovery;
pub mod duration;
pub mod enrich;
pub mod record;
pub mod sink;
#[cfg(test)]
mod testing;
pub mod youtube_api;

pub use config::{CatalogConfig, Cli};
pub use discovery::{Catalog, ChannelNotFound};
pub use duration::DurationError;
pub use enrich::{MissingData, VideoEnricher};
pub use record::{ChannelId, Dataset, DedupeKey, EncodedVideoRecord, VideoRecord};
pub use youtube_api::{ApiError, YouTubeApi, YouTubeClient};
