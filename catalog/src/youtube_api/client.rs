//! HTTP implementation of [`YouTubeApi`] on top of `reqwest`.

use crate::youtube_api::{
    ApiError, YouTubeApi,
    playlist_items::PlaylistItemListResponse,
    playlists::PlaylistListResponse,
    search::{SearchListResponse, SearchType},
    videos::{VideoListResponse, VideoPart},
};
use eyre::Context;
use http::Method;
use serde::de::DeserializeOwned;
use tracing::instrument;

/// Where the YouTube Data API v3 lives unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Client for the public, read-only parts of the YouTube Data API v3.
///
/// Requests are authenticated with an API key passed as the `key` query parameter, which is
/// all that listing public channel content requires.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    api_key: String,
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client that talks to [`DEFAULT_BASE_URL`] using `api_key`.
    pub fn new(api_key: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        }
    }

    /// Points the client at a different deployment of the API, e.g. a local proxy.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes an API-key authenticated GET request to one of the list endpoints.
    ///
    /// Transport failures and non-success statuses are turned into [`ApiError`] so callers
    /// can tell transient failures apart from rejected requests.
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    async fn make_request(
        &self,
        endpoint: &'static str,
        query_params: &[(&str, &str)],
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .request(Method::GET, &url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| ApiError::Transport { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::from_status(endpoint, status, &body));
        }

        Ok(response)
    }

    async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        query_params: &[(&str, &str)],
    ) -> eyre::Result<T> {
        let response = self.make_request(endpoint, query_params).await?;
        response
            .json()
            .await
            .with_context(|| format!("parse YouTube {endpoint} API response as JSON"))
    }

    async fn search(
        &self,
        search_type: SearchType,
        filter: (&str, &str),
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "id,snippet"),
            ("type", search_type.as_str()),
            filter,
            ("maxResults", max_results_string.as_str()),
        ];

        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let results: SearchListResponse = self.list("search", &query_params).await?;

        tracing::debug!(
            search_type = search_type.as_str(),
            total_results = results.page_info.total_results,
            returned_items = results.items.len(),
            "fetched search results"
        );

        Ok(results)
    }
}

impl YouTubeApi for YouTubeClient {
    /// Uses `search.list` with `type=channel` to find channels matching `query`.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    async fn search_channels(
        &self,
        query: &str,
        max_results: u32,
    ) -> eyre::Result<SearchListResponse> {
        self.search(SearchType::Channel, ("q", query), max_results, None)
            .await
    }

    /// Uses `search.list` with `type=video` and `channelId` to page through a channel's videos.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self))]
    async fn search_videos(
        &self,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        self.search(
            SearchType::Video,
            ("channelId", channel_id),
            max_results,
            page_token,
        )
        .await
    }

    /// Uses `playlists.list` with `channelId` to page through a channel's playlists.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlists/list>
    #[instrument(skip(self))]
    async fn list_playlists(
        &self,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "id"),
            ("channelId", channel_id),
            ("maxResults", max_results_string.as_str()),
        ];

        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let playlists: PlaylistListResponse = self.list("playlists", &query_params).await?;

        tracing::debug!(
            channel_id,
            total_results = playlists.page_info.total_results,
            returned_items = playlists.items.len(),
            "fetched playlists"
        );

        Ok(playlists)
    }

    /// Uses `playlistItems.list` to page through the entries of one playlist.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/playlistItems/list>
    #[instrument(skip(self))]
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let max_results_string = max_results.to_string();
        let mut query_params = vec![
            ("part", "id,snippet"),
            ("playlistId", playlist_id),
            ("maxResults", max_results_string.as_str()),
        ];

        if let Some(token) = page_token {
            query_params.push(("pageToken", token));
        }

        let items: PlaylistItemListResponse =
            self.list("playlistItems", &query_params).await?;

        tracing::debug!(
            playlist_id,
            total_results = items.page_info.total_results,
            returned_items = items.items.len(),
            "fetched playlist items"
        );

        Ok(items)
    }

    /// Uses `videos.list` to fetch one part of a single video.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/videos/list>
    #[instrument(skip(self))]
    async fn list_videos(
        &self,
        video_id: &str,
        part: VideoPart,
    ) -> eyre::Result<VideoListResponse> {
        let query_params = [("part", part.as_str()), ("id", video_id)];

        let videos: VideoListResponse = self.list("videos", &query_params).await?;

        tracing::debug!(
            video_id,
            %part,
            returned_items = videos.items.len(),
            "fetched video details"
        );

        Ok(videos)
    }
}
