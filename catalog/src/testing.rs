//! Scripted in-memory [`YouTubeApi`] for unit tests.

use crate::youtube_api::{
    ApiError, ListResponse, Playlist, PlaylistItem, PlaylistItemListResponse,
    PlaylistItemSnippet, PlaylistListResponse, ResourceId, SearchListResponse, SearchResult,
    Video, VideoContentDetails, VideoListResponse, VideoPart, VideoSnippet, YouTubeApi,
};
use http::StatusCode;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A call the mock received, in the order it arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Request {
    SearchChannels(String),
    SearchVideos(String, Option<String>),
    Playlists(String, Option<String>),
    PlaylistItems(String, Option<String>),
    Video(String, VideoPart),
}

type Cursor = (String, Option<String>);
type Scripted<T> = Option<(Vec<T>, Option<String>)>;

#[derive(Debug, Default)]
pub(crate) struct MockApi {
    channels: HashMap<String, Vec<String>>,
    video_pages: HashMap<Cursor, Scripted<SearchResult>>,
    playlist_pages: HashMap<Cursor, Scripted<Playlist>>,
    item_pages: HashMap<Cursor, Scripted<PlaylistItem>>,
    videos: HashMap<(String, VideoPart), Option<Video>>,
    failing_videos: HashSet<(String, VideoPart)>,
    requests: Mutex<Vec<Request>>,
}

/// A bare video resource with only its ID set.
pub(crate) fn video(video_id: &str) -> Video {
    Video {
        id: video_id.to_string(),
        ..Video::default()
    }
}

fn cursor(id: &str, page_token: Option<&str>) -> Cursor {
    (id.to_string(), page_token.map(str::to_string))
}

fn unavailable(endpoint: &'static str) -> eyre::Report {
    ApiError::Unavailable {
        endpoint,
        status: StatusCode::SERVICE_UNAVAILABLE,
        message: "scripted failure".to_string(),
    }
    .into()
}

fn serve<T: Clone>(
    endpoint: &'static str,
    pages: &HashMap<Cursor, Scripted<T>>,
    key: &Cursor,
) -> eyre::Result<ListResponse<T>> {
    match pages.get(key) {
        Some(Some((items, next))) => Ok(ListResponse::page(items.clone(), next.as_deref())),
        Some(None) => Err(unavailable(endpoint)),
        None => Err(eyre::eyre!("unscripted {endpoint} request for {key:?}")),
    }
}

impl MockApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn channel(&mut self, query: &str, channel_ids: &[&str]) {
        self.channels.insert(
            query.to_string(),
            channel_ids.iter().map(|id| id.to_string()).collect(),
        );
    }

    pub(crate) fn search_page(
        &mut self,
        channel_id: &str,
        page_token: Option<&str>,
        video_ids: &[&str],
        next: Option<&str>,
    ) {
        let results = video_ids
            .iter()
            .map(|id| SearchResult {
                id: ResourceId::video(*id),
                snippet: None,
            })
            .collect();
        self.video_pages.insert(
            cursor(channel_id, page_token),
            Some((results, next.map(str::to_string))),
        );
    }

    pub(crate) fn playlist_page(
        &mut self,
        channel_id: &str,
        page_token: Option<&str>,
        playlist_ids: &[&str],
        next: Option<&str>,
    ) {
        let playlists = playlist_ids
            .iter()
            .map(|id| Playlist { id: id.to_string() })
            .collect();
        self.playlist_pages.insert(
            cursor(channel_id, page_token),
            Some((playlists, next.map(str::to_string))),
        );
    }

    pub(crate) fn fail_playlists(&mut self, channel_id: &str, page_token: Option<&str>) {
        self.playlist_pages
            .insert(cursor(channel_id, page_token), None);
    }

    pub(crate) fn playlist_item_page(
        &mut self,
        playlist_id: &str,
        page_token: Option<&str>,
        video_ids: &[&str],
        next: Option<&str>,
    ) {
        let items = video_ids
            .iter()
            .enumerate()
            .map(|(position, id)| PlaylistItem {
                id: format!("{playlist_id}.{id}"),
                snippet: PlaylistItemSnippet {
                    playlist_id: playlist_id.to_string(),
                    position: position as u32,
                    resource_id: ResourceId::video(*id),
                },
            })
            .collect();
        self.item_pages.insert(
            cursor(playlist_id, page_token),
            Some((items, next.map(str::to_string))),
        );
    }

    pub(crate) fn fail_playlist_items(&mut self, playlist_id: &str, page_token: Option<&str>) {
        self.item_pages.insert(cursor(playlist_id, page_token), None);
    }

    pub(crate) fn video(&mut self, video_id: &str, part: VideoPart, video: Video) {
        self.videos
            .insert((video_id.to_string(), part), Some(video));
    }

    /// Makes the `part` lookup of `video_id` come back with no items.
    pub(crate) fn no_video(&mut self, video_id: &str, part: VideoPart) {
        self.videos.insert((video_id.to_string(), part), None);
    }

    pub(crate) fn fail_video(&mut self, video_id: &str, part: VideoPart) {
        self.failing_videos.insert((video_id.to_string(), part));
    }

    /// Scripts all three lookups for each video: titled after its ID, with `duration`.
    pub(crate) fn uniform_videos(&mut self, video_ids: &[&str], duration: &str) {
        for id in video_ids {
            self.video(
                id,
                VideoPart::Snippet,
                Video {
                    snippet: Some(VideoSnippet {
                        title: Some(format!("Video {id}")),
                        ..VideoSnippet::default()
                    }),
                    ..video(id)
                },
            );
            self.video(id, VideoPart::Statistics, video(id));
            self.video(
                id,
                VideoPart::ContentDetails,
                Video {
                    content_details: Some(VideoContentDetails {
                        duration: Some(duration.to_string()),
                    }),
                    ..video(id)
                },
            );
        }
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }
}

impl YouTubeApi for MockApi {
    async fn search_channels(
        &self,
        query: &str,
        _max_results: u32,
    ) -> eyre::Result<SearchListResponse> {
        self.record(Request::SearchChannels(query.to_string()));
        let ids = self.channels.get(query).cloned().unwrap_or_default();
        Ok(ListResponse::page(
            ids.into_iter().map(|id| SearchResult {
                id: ResourceId::channel(id),
                snippet: None,
            }),
            None,
        ))
    }

    async fn search_videos(
        &self,
        channel_id: &str,
        _max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        let key = cursor(channel_id, page_token);
        self.record(Request::SearchVideos(key.0.clone(), key.1.clone()));
        serve("search", &self.video_pages, &key)
    }

    async fn list_playlists(
        &self,
        channel_id: &str,
        _max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistListResponse> {
        let key = cursor(channel_id, page_token);
        self.record(Request::Playlists(key.0.clone(), key.1.clone()));
        serve("playlists", &self.playlist_pages, &key)
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        _max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        let key = cursor(playlist_id, page_token);
        self.record(Request::PlaylistItems(key.0.clone(), key.1.clone()));
        serve("playlistItems", &self.item_pages, &key)
    }

    async fn list_videos(
        &self,
        video_id: &str,
        part: VideoPart,
    ) -> eyre::Result<VideoListResponse> {
        self.record(Request::Video(video_id.to_string(), part));
        let key = (video_id.to_string(), part);
        if self.failing_videos.contains(&key) {
            return Err(unavailable("videos"));
        }
        match self.videos.get(&key) {
            Some(video) => Ok(ListResponse::page(video.clone(), None)),
            None => Err(eyre::eyre!("unscripted videos request for {key:?}")),
        }
    }
}
