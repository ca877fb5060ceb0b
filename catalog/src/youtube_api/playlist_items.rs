//! YouTube PlaylistItems API types.

use crate::youtube_api::search::ResourceId;
use crate::youtube_api::types::ListResponse;
use serde::{Deserialize, Serialize};

/// Response structure for the `playlistItems.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems/list>
pub type PlaylistItemListResponse = ListResponse<PlaylistItem>;

/// A `playlistItem` resource identifies another resource, such as a video, that is included
/// in a playlist.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItem {
    /// The ID that YouTube uses to uniquely identify the playlist item (not the video).
    pub id: String,
    pub snippet: PlaylistItemSnippet,
}

impl PlaylistItem {
    /// The video this entry points at, if it points at a video at all.
    pub fn video_id(&self) -> Option<&str> {
        self.snippet.resource_id.video_id.as_deref()
    }
}

/// See: <https://developers.google.com/youtube/v3/docs/playlistItems#snippet>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistItemSnippet {
    #[serde(rename = "playlistId", default)]
    pub playlist_id: String,
    /// The order in which the item appears in the playlist, zero-based.
    #[serde(default)]
    pub position: u32,
    /// Identifies the resource that was added to the playlist.
    #[serde(rename = "resourceId")]
    pub resource_id: ResourceId,
}
