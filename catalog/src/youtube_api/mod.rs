//! YouTube Data API v3 client library.
//!
//! The catalog only ever reads public data, through four list endpoints:
//!
//! - `search.list`: resolving a channel from a keyword, and listing a channel's videos
//! - `playlists.list`: listing a channel's playlists
//! - `playlistItems.list`: listing the entries of one playlist
//! - `videos.list`: looking up one part (`snippet`, `statistics`, `contentDetails`) of a video
//!
//! All list responses share the [`ListResponse`] envelope. Paginated walks go through
//! [`fetch_all`], which follows `nextPageToken` until the service stops handing one out.
//!
//! The [`YouTubeApi`] trait is the seam between the catalog and the wire: [`YouTubeClient`]
//! implements it over HTTPS, and tests substitute scripted implementations.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use youtube_channel_catalog::youtube_api::{YouTubeApi, YouTubeClient, fetch_all};
//!
//! # async fn example() -> eyre::Result<()> {
//! let client = &YouTubeClient::new("API_KEY", reqwest::Client::new());
//! let playlists = fetch_all(|page_token| async move {
//!     client.list_playlists("UC_x5XG1OV2P6uZZ5FSM9Ttw", 50, page_token.as_deref()).await
//! })
//! .await?;
//! println!("{} playlists", playlists.len());
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod playlist_items;
pub mod playlists;
pub mod search;
pub mod types;
pub mod videos;

use std::future::Future;

pub use client::YouTubeClient;
pub use error::ApiError;
pub use playlist_items::{PlaylistItem, PlaylistItemListResponse, PlaylistItemSnippet};
pub use playlists::{Playlist, PlaylistListResponse};
pub use search::{ResourceId, SearchListResponse, SearchResult, SearchType};
pub use types::{ListResponse, PageInfo, PagedStream, fetch_all};
pub use videos::{
    Video, VideoContentDetails, VideoListResponse, VideoPart, VideoSnippet, VideoStatistics,
};

/// The largest page the list endpoints will return.
pub const MAX_PAGE_SIZE: u32 = 50;

/// The remote query service the catalog enumerates channels through.
///
/// Every call is a single request. Paginated methods take the cursor from the previous
/// page's `nextPageToken`, or `None` for the first page. Errors from the transport come
/// back as an [`ApiError`] inside the report.
pub trait YouTubeApi: Send + Sync {
    /// Searches for channels matching `query`; only the first page is of interest.
    fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> impl Future<Output = eyre::Result<SearchListResponse>> + Send;

    /// One page of the videos published by `channel_id`.
    fn search_videos(
        &self,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> impl Future<Output = eyre::Result<SearchListResponse>> + Send;

    /// One page of the playlists owned by `channel_id`.
    fn list_playlists(
        &self,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> impl Future<Output = eyre::Result<PlaylistListResponse>> + Send;

    /// One page of the entries of `playlist_id`.
    fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> impl Future<Output = eyre::Result<PlaylistItemListResponse>> + Send;

    /// The `part` of the video `video_id`; the item list is empty if the video is gone.
    fn list_videos(
        &self,
        video_id: &str,
        part: VideoPart,
    ) -> impl Future<Output = eyre::Result<VideoListResponse>> + Send;
}
