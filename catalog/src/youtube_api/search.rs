//! YouTube Search API types.

use crate::youtube_api::types::ListResponse;
use serde::{Deserialize, Serialize};

/// Response structure for the `search.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
pub type SearchListResponse = ListResponse<SearchResult>;

/// What a `search.list` call should match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Channel,
    Video,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Channel => "channel",
            Self::Video => "video",
        }
    }
}

/// A search result points at a YouTube resource that matched the request.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Identifies the matched resource; which field is set depends on `kind`.
    pub id: ResourceId,
    /// Basic details about the matched resource. Only present when `snippet` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<SearchResultSnippet>,
}

/// Identifies a resource by type and type-specific ID.
///
/// Shared by search results and playlist items (`snippet.resourceId`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceId {
    /// The type of the resource, e.g. `youtube#video`.
    #[serde(default)]
    pub kind: String,
    #[serde(rename = "videoId", default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId", default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(rename = "playlistId", default, skip_serializing_if = "Option::is_none")]
    pub playlist_id: Option<String>,
}

impl ResourceId {
    pub fn video(video_id: impl Into<String>) -> Self {
        Self {
            kind: "youtube#video".to_string(),
            video_id: Some(video_id.into()),
            ..Self::default()
        }
    }

    pub fn channel(channel_id: impl Into<String>) -> Self {
        Self {
            kind: "youtube#channel".to_string(),
            channel_id: Some(channel_id.into()),
            ..Self::default()
        }
    }
}

/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResultSnippet {
    #[serde(rename = "channelId", default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
}
