//! Joins the per-video detail lookups into one record.

use crate::record::{EncodedVideoRecord, VideoRecord};
use crate::youtube_api::{Video, VideoPart, YouTubeApi};
use eyre::Context;
use tracing::instrument;

/// A detail lookup came back without any items, usually because the video was deleted or
/// made private after it was discovered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("videos.list ({part}) returned no items for video {video_id}")]
pub struct MissingData {
    pub video_id: String,
    pub part: VideoPart,
}

/// Builds [`EncodedVideoRecord`]s from three `videos.list` lookups per video.
#[derive(Debug)]
pub struct VideoEnricher<'a, A> {
    api: &'a A,
}

impl<'a, A: YouTubeApi> VideoEnricher<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    /// Looks up statistics, descriptive info and content details of `video_id`, in that order.
    ///
    /// Fails with [`MissingData`] if any lookup returns no items; the caller decides whether
    /// that video can be skipped.
    #[instrument(skip(self))]
    pub async fn enrich(&self, video_id: &str) -> eyre::Result<EncodedVideoRecord> {
        let analytics = self.first_item(video_id, VideoPart::Statistics).await?;
        let info = self.first_item(video_id, VideoPart::Snippet).await?;
        let content_details = self.first_item(video_id, VideoPart::ContentDetails).await?;

        let snippet = info.snippet.unwrap_or_default();
        let statistics = analytics.statistics.unwrap_or_default();
        let details = content_details.content_details.unwrap_or_default();

        Ok(VideoRecord {
            video_id: video_id.to_string(),
            title: snippet.title.unwrap_or_default(),
            description: snippet.description,
            published_at: snippet.published_at.unwrap_or_default(),
            view_count: statistics.view_count,
            like_count: statistics.like_count,
            comment_count: statistics.comment_count,
            duration: details.duration.unwrap_or_default(),
        })
    }

    async fn first_item(&self, video_id: &str, part: VideoPart) -> eyre::Result<Video> {
        let response = self
            .api
            .list_videos(video_id, part)
            .await
            .with_context(|| format!("look up {part} of video {video_id}"))?;

        response.items.into_iter().next().ok_or_else(|| {
            MissingData {
                video_id: video_id.to_string(),
                part,
            }
            .into()
        })
    }
}
