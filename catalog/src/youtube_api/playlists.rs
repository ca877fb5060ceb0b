//! YouTube Playlists API types.

use crate::youtube_api::types::ListResponse;
use serde::{Deserialize, Serialize};

/// Response structure for the `playlists.list` API call.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists/list>
pub type PlaylistListResponse = ListResponse<Playlist>;

/// A `playlist` resource represents a YouTube playlist.
///
/// Only the ID is requested (`part=id`); the members are listed separately through
/// `playlistItems.list`.
///
/// See: <https://developers.google.com/youtube/v3/docs/playlists#resource>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// The ID that YouTube uses to uniquely identify the playlist.
    pub id: String,
}
