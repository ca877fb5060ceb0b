use http::StatusCode;
use pretty_assertions::assert_eq;
use serde::de::DeserializeOwned;
use serde_json::json;
use youtube_channel_catalog::youtube_api::{
    PlaylistItemListResponse, PlaylistListResponse, SearchListResponse, VideoListResponse,
    VideoPart,
};
use youtube_channel_catalog::{ApiError, Catalog, CatalogConfig, YouTubeApi, YouTubeClient, sink};

/// How the fake answers `playlists.list`.
#[derive(Default)]
enum Playlists {
    #[default]
    Listed,
    Forbidden,
    /// Sent for real, to a host nobody listens on.
    Unreachable(YouTubeClient),
}

/// Channel `UCX`: search finds A then B across two pages, its only playlist holds B and C.
#[derive(Default)]
struct FakeChannel {
    playlists: Playlists,
}

fn parse<T: DeserializeOwned>(body: serde_json::Value) -> eyre::Result<T> {
    Ok(serde_json::from_value(body)?)
}

impl YouTubeApi for FakeChannel {
    async fn search_channels(
        &self,
        query: &str,
        _max_results: u32,
    ) -> eyre::Result<SearchListResponse> {
        assert_eq!(query, "Example Channel");
        parse(json!({
            "kind": "youtube#searchListResponse",
            "pageInfo": { "totalResults": 1, "resultsPerPage": 1 },
            "items": [{
                "kind": "youtube#searchResult",
                "id": { "kind": "youtube#channel", "channelId": "UCX" },
                "snippet": { "channelId": "UCX", "title": "Example Channel" }
            }]
        }))
    }

    async fn search_videos(
        &self,
        channel_id: &str,
        _max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<SearchListResponse> {
        assert_eq!(channel_id, "UCX");
        let (video_id, next) = match page_token {
            None => ("A", "CAEQAA"),
            Some("CAEQAA") => ("B", ""),
            Some(other) => eyre::bail!("unexpected search cursor {other}"),
        };
        parse(json!({
            "kind": "youtube#searchListResponse",
            "nextPageToken": next,
            "items": [{ "id": { "kind": "youtube#video", "videoId": video_id } }]
        }))
    }

    async fn list_playlists(
        &self,
        channel_id: &str,
        max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistListResponse> {
        assert_eq!((channel_id, page_token), ("UCX", None));
        match &self.playlists {
            Playlists::Listed => {}
            Playlists::Forbidden => {
                return Err(ApiError::Rejected {
                    endpoint: "playlists",
                    status: StatusCode::FORBIDDEN,
                    reason: Some("forbidden".to_string()),
                    message: "playlists are private".to_string(),
                }
                .into());
            }
            Playlists::Unreachable(client) => {
                return client
                    .list_playlists(channel_id, max_results, page_token)
                    .await;
            }
        }
        parse(json!({
            "kind": "youtube#playlistListResponse",
            "items": [{ "kind": "youtube#playlist", "id": "PL1" }]
        }))
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        _max_results: u32,
        page_token: Option<&str>,
    ) -> eyre::Result<PlaylistItemListResponse> {
        assert_eq!((playlist_id, page_token), ("PL1", None));
        let item = |position: u32, video_id: &str| {
            json!({
                "kind": "youtube#playlistItem",
                "id": format!("PL1-{position}"),
                "snippet": {
                    "playlistId": "PL1",
                    "position": position,
                    "resourceId": { "kind": "youtube#video", "videoId": video_id }
                }
            })
        };
        parse(json!({
            "kind": "youtube#playlistItemListResponse",
            "items": [item(0, "B"), item(1, "C")]
        }))
    }

    async fn list_videos(
        &self,
        video_id: &str,
        part: VideoPart,
    ) -> eyre::Result<VideoListResponse> {
        let video = match part {
            VideoPart::Snippet => json!({
                "id": video_id,
                "snippet": {
                    "title": format!("Video {video_id}"),
                    "description": "",
                    "publishedAt": "2024-05-01T12:00:00.000Z"
                }
            }),
            VideoPart::Statistics => json!({
                "id": video_id,
                "statistics": { "viewCount": "1000", "commentCount": "4" }
            }),
            VideoPart::ContentDetails => json!({
                "id": video_id,
                "contentDetails": { "duration": "PT1M30S" }
            }),
        };
        parse(json!({ "kind": "youtube#videoListResponse", "items": [video] }))
    }
}

fn csv(dataset: &youtube_channel_catalog::Dataset) -> String {
    let mut out = Vec::new();
    sink::write_csv(dataset, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn catalogs_a_channel_end_to_end() {
    let api = FakeChannel::default();

    let dataset = Catalog::new(&api, CatalogConfig::default())
        .run("Example Channel")
        .await
        .unwrap();

    assert_eq!(dataset.len(), 4);
    assert!(dataset.iter().all(|row| row.duration == 90));
    assert_eq!(dataset.rows()[1].video_id, "B");
    assert_eq!(dataset.rows()[2].video_id, "B");

    assert_eq!(
        csv(&dataset),
        "videoId,title,description,publishedAt,viewCount,likeCount,commentCount,duration\n\
         A,Video A,,2024-05-01T12:00:00.000Z,1000,,4,90\n\
         B,Video B,,2024-05-01T12:00:00.000Z,1000,,4,90\n\
         B,Video B,,2024-05-01T12:00:00.000Z,1000,,4,90\n\
         C,Video C,,2024-05-01T12:00:00.000Z,1000,,4,90\n"
    );
}

#[tokio::test]
async fn forbidden_playlists_leave_search_results() {
    let api = FakeChannel {
        playlists: Playlists::Forbidden,
    };

    let dataset = Catalog::new(&api, CatalogConfig::default())
        .run("Example Channel")
        .await
        .unwrap();

    let ids: Vec<_> = dataset.iter().map(|row| row.video_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
}

#[tokio::test]
async fn unreachable_playlists_leave_search_results() {
    // Port 9 (discard) on localhost is essentially never listening.
    let transport = reqwest::Client::builder().no_proxy().build().unwrap();
    let client =
        YouTubeClient::new("key", transport).with_base_url("http://127.0.0.1:9/youtube/v3");

    let err = client.list_playlists("UCX", 50, None).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::Transport {
            endpoint: "playlists",
            ..
        })
    ));

    let api = FakeChannel {
        playlists: Playlists::Unreachable(client),
    };
    let dataset = Catalog::new(&api, CatalogConfig::default())
        .run("Example Channel")
        .await
        .unwrap();

    let ids: Vec<_> = dataset.iter().map(|row| row.video_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert!(dataset.iter().all(|row| row.duration == 90));
}

#[tokio::test]
async fn output_file_matches_the_dataset() {
    let api = FakeChannel::default();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ExampleChannel.csv");

    let dataset = Catalog::new(&api, CatalogConfig::default())
        .run("Example Channel")
        .await
        .unwrap();
    sink::write_csv_file(&dataset, &path).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), csv(&dataset));
}
