//! YouTube Videos API types and functionality.

use crate::youtube_api::types::ListResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Response structure for the `videos.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list>
pub type VideoListResponse = ListResponse<Video>;

/// Which part of a video resource a `videos.list` call asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoPart {
    Snippet,
    Statistics,
    ContentDetails,
}

impl VideoPart {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Snippet => "snippet",
            Self::Statistics => "statistics",
            Self::ContentDetails => "contentDetails",
        }
    }
}

impl fmt::Display for VideoPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `video` resource represents a YouTube video.
///
/// Only the parts named in the request are populated.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<VideoSnippet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statistics: Option<VideoStatistics>,
    #[serde(
        rename = "contentDetails",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub content_details: Option<VideoContentDetails>,
}

/// Basic details about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#snippet>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoSnippet {
    pub title: Option<String>,
    pub description: Option<String>,
    /// The date and time that the video was published, in ISO 8601 format.
    ///
    /// Kept as the service sent it; it is only ever written back out.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

/// Statistics about the video.
///
/// Counts arrive as decimal strings and are absent when the owner hides them.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of users who have indicated that they liked the video.
    #[serde(rename = "likeCount")]
    pub like_count: Option<String>,
    /// The number of comments for the video.
    #[serde(rename = "commentCount")]
    pub comment_count: Option<String>,
}

/// See: <https://developers.google.com/youtube/v3/docs/videos#contentDetails>
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoContentDetails {
    /// The length of the video in the compact `PT#H#M#S` encoding.
    pub duration: Option<String>,
}
