//! Two-way discovery of a channel's videos.
//!
//! A run resolves the channel once, then finds its videos along two independent paths:
//!
//! 1. **search**: every `search.list` result of type video scoped to the channel;
//! 2. **playlists**: every entry of every playlist the channel owns.
//!
//! Each path enriches what it found into its own list of records. The lists are merged by
//! plain concatenation, search first, so a video reachable both ways (which is most of them,
//! since a channel's uploads are searchable *and* listed in its uploads playlist) shows up
//! twice. Durations are normalized afterwards. Deduplication only happens when configured.

use crate::config::CatalogConfig;
use crate::enrich::{MissingData, VideoEnricher};
use crate::record::{ChannelId, Dataset, EncodedVideoRecord};
use crate::youtube_api::{YouTubeApi, fetch_all};
use eyre::Context;
use std::fmt;
use tracing::instrument;

/// The keyword search did not match any channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no channel matches {query:?}")]
pub struct ChannelNotFound {
    pub query: String,
}

/// Which discovery path produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Search,
    Playlists,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Search => "search",
            Self::Playlists => "playlists",
        })
    }
}

/// Catalogs one channel through a [`YouTubeApi`].
///
/// Every request is awaited before the next one is sent, so records come out in a stable
/// order and the service never sees more than one request from a run at a time.
#[derive(Debug)]
pub struct Catalog<'a, A> {
    api: &'a A,
    config: CatalogConfig,
}

impl<'a, A: YouTubeApi> Catalog<'a, A> {
    pub fn new(api: &'a A, config: CatalogConfig) -> Self {
        Self { api, config }
    }

    /// Resolves `query`, runs both discovery paths, merges and normalizes the results.
    #[instrument(skip(self))]
    pub async fn run(&self, query: &str) -> eyre::Result<Dataset> {
        let channel = self.resolve_channel(query).await?;

        let searched = self
            .search_strategy(&channel)
            .await
            .context("discover videos through search")?;
        let listed = self
            .playlist_strategy(&channel)
            .await
            .context("discover videos through playlists")?;

        tracing::info!(
            %channel,
            search = searched.len(),
            playlists = listed.len(),
            "discovery finished"
        );

        let dataset = normalize(merge(searched, listed))?;

        let Some(key) = self.config.dedupe else {
            return Ok(dataset);
        };
        let before = dataset.len();
        let dataset = dataset.dedupe_by(key);
        tracing::info!(?key, removed = before - dataset.len(), "deduplicated rows");
        Ok(dataset)
    }

    /// Takes the first channel a channel search for `query` returns.
    #[instrument(skip(self))]
    pub async fn resolve_channel(&self, query: &str) -> eyre::Result<ChannelId> {
        let results = self
            .api
            .search_channels(query, 1)
            .await
            .with_context(|| format!("resolve channel for {query:?}"))?;

        let channel = results
            .items
            .into_iter()
            .next()
            .and_then(|result| result.id.channel_id)
            .map(ChannelId::new)
            .ok_or_else(|| ChannelNotFound {
                query: query.to_string(),
            })?;

        tracing::info!(query, %channel, "resolved channel");
        Ok(channel)
    }

    /// Enriches every video that a video search scoped to `channel` returns.
    #[instrument(skip(self))]
    pub async fn search_strategy(
        &self,
        channel: &ChannelId,
    ) -> eyre::Result<Vec<EncodedVideoRecord>> {
        let api = self.api;
        let channel_id = channel.as_str();
        let page_size = self.config.search_page_size;

        let results = fetch_all(|page_token| async move {
            api.search_videos(channel_id, page_size, page_token.as_deref())
                .await
        })
        .await
        .with_context(|| format!("search videos of channel {channel}"))?;

        let video_ids = results
            .into_iter()
            .enumerate()
            .map(|(position, result)| {
                result
                    .id
                    .video_id
                    .ok_or_else(|| eyre::eyre!("search result {position} has no video id"))
            })
            .collect::<eyre::Result<Vec<_>>>()?;

        tracing::info!(%channel, videos = video_ids.len(), "search found videos");

        self.enrich_all(&video_ids, Strategy::Search).await
    }

    /// Enriches every entry of every playlist owned by `channel`.
    ///
    /// If the playlists themselves cannot be listed, this path contributes nothing and the
    /// run carries on. Failures after that point are fatal like anywhere else.
    #[instrument(skip(self))]
    pub async fn playlist_strategy(
        &self,
        channel: &ChannelId,
    ) -> eyre::Result<Vec<EncodedVideoRecord>> {
        let playlist_ids = match self.channel_playlists(channel).await {
            Ok(playlist_ids) => playlist_ids,
            Err(e) => {
                tracing::warn!(
                    %channel,
                    "skipping playlist discovery, could not list playlists: {e:#}"
                );
                return Ok(Vec::new());
            }
        };

        let mut video_ids = Vec::new();
        for playlist_id in &playlist_ids {
            video_ids.extend(self.playlist_video_ids(playlist_id).await?);
        }

        tracing::info!(
            %channel,
            playlists = playlist_ids.len(),
            videos = video_ids.len(),
            "playlists found videos"
        );

        self.enrich_all(&video_ids, Strategy::Playlists).await
    }

    async fn channel_playlists(&self, channel: &ChannelId) -> eyre::Result<Vec<String>> {
        let api = self.api;
        let channel_id = channel.as_str();
        let page_size = self.config.playlist_page_size;

        let playlists = fetch_all(|page_token| async move {
            api.list_playlists(channel_id, page_size, page_token.as_deref())
                .await
        })
        .await
        .with_context(|| format!("list playlists of channel {channel}"))?;

        Ok(playlists.into_iter().map(|playlist| playlist.id).collect())
    }

    /// Walks one playlist from its first page; cursors never carry over between playlists.
    async fn playlist_video_ids(&self, playlist_id: &str) -> eyre::Result<Vec<String>> {
        let api = self.api;
        let page_size = self.config.playlist_item_page_size;

        let items = fetch_all(|page_token| async move {
            api.list_playlist_items(playlist_id, page_size, page_token.as_deref())
                .await
        })
        .await
        .with_context(|| format!("list items of playlist {playlist_id}"))?;

        items
            .into_iter()
            .map(|item| {
                item.video_id().map(str::to_string).ok_or_else(|| {
                    eyre::eyre!("item {} of playlist {playlist_id} has no video id", item.id)
                })
            })
            .collect()
    }

    async fn enrich_all(
        &self,
        video_ids: &[String],
        strategy: Strategy,
    ) -> eyre::Result<Vec<EncodedVideoRecord>> {
        let enricher = VideoEnricher::new(self.api);
        let mut records = Vec::with_capacity(video_ids.len());

        for video_id in video_ids {
            match enricher.enrich(video_id).await {
                Ok(record) => records.push(record),
                Err(e)
                    if self.config.skip_unavailable
                        && e.downcast_ref::<MissingData>().is_some() =>
                {
                    tracing::warn!(
                        video_id = video_id.as_str(),
                        %strategy,
                        "skipping unavailable video: {e}"
                    );
                }
                Err(e) => {
                    return Err(e.wrap_err(format!(
                        "enrich video {video_id} found through {strategy}"
                    )));
                }
            }
        }

        Ok(records)
    }
}

/// Concatenates the records of both discovery paths, search first.
///
/// Nothing is dropped: a video found both ways appears once per path.
pub fn merge(
    searched: Vec<EncodedVideoRecord>,
    listed: Vec<EncodedVideoRecord>,
) -> Vec<EncodedVideoRecord> {
    let mut merged = searched;
    merged.extend(listed);
    merged
}

/// Converts every record's duration to seconds, failing on the first malformed one.
pub fn normalize(records: Vec<EncodedVideoRecord>) -> eyre::Result<Dataset> {
    records
        .into_iter()
        .map(|record| {
            let video_id = record.video_id.clone();
            record
                .normalize()
                .with_context(|| format!("normalize duration of video {video_id}"))
        })
        .collect::<eyre::Result<Vec<_>>>()
        .map(Dataset::new)
}
