//! Shared response types and pagination infrastructure for the YouTube API client.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context as TaskContext, Poll};
use tokio_stream::{Stream, StreamExt};

type OneFuturePage<'a, F, T> =
    Pin<Box<dyn Future<Output = eyre::Result<(F, (VecDeque<T>, Option<String>))>> + 'a + Send>>;

/// A paginated stream that automatically fetches subsequent pages from a YouTube API list endpoint.
///
/// This stream yields items one by one, automatically fetching the next page when the current
/// page is exhausted. Only supports forward pagination (no previous page support).
///
/// Each stream owns its cursor. A new stream always starts from the first page, so a cursor
/// issued for one query can never leak into another.
pub struct PagedStream<'a, T, F> {
    /// Current batch of items from the most recent API response
    current_items: VecDeque<T>,
    /// Future representing the currently pending API request, if any
    pending_request: Option<OneFuturePage<'a, F, T>>,
    /// Whether we've reached the end of all available data
    is_done: bool,
}

impl<'a, T, F> PagedStream<'a, T, F> {
    /// Create a new PagedStream; the first page is requested on first poll.
    pub fn new<Fut>(fetcher: F) -> Self
    where
        F: Fn(Option<String>) -> Fut,
        F: Send + 'a,
        Fut: Future<Output = eyre::Result<(VecDeque<T>, Option<String>)>> + Send + 'a,
    {
        let first_page = async move {
            let results = fetcher(None).await?;
            Ok((fetcher, results))
        };
        Self {
            pending_request: Some(Box::pin(first_page)),
            current_items: VecDeque::new(),
            is_done: false,
        }
    }
}

impl<'a, T: Unpin, F> Unpin for PagedStream<'a, T, F> {}

impl<'a, T: Unpin, F, Fut> Stream for PagedStream<'a, T, F>
where
    F: Fn(Option<String>) -> Fut,
    F: Send + 'a,
    Fut: Future<Output = eyre::Result<(VecDeque<T>, Option<String>)>> + Send + 'a,
{
    type Item = eyre::Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(item) = self.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if self.is_done {
                return Poll::Ready(None);
            }

            if let Some(pending) = self.pending_request.as_mut() {
                match pending.as_mut().poll(cx) {
                    Poll::Ready(Ok((fetcher, (items, next_token)))) => {
                        self.current_items.extend(items);

                        // An empty token means the same as no token. An empty page that
                        // still carries a token is not the end, so only the token decides.
                        match next_token.filter(|token| !token.is_empty()) {
                            Some(next_token) => {
                                self.pending_request = Some(Box::pin(async move {
                                    let results = fetcher(Some(next_token)).await?;
                                    Ok((fetcher, results))
                                }));
                            }
                            None => {
                                self.is_done = true;
                                self.pending_request = None;
                            }
                        }

                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        self.pending_request = None;
                        self.is_done = true;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => {
                        return Poll::Pending;
                    }
                }
            } else {
                self.is_done = true;
                return Poll::Ready(None);
            }
        }
    }
}

/// Eagerly walks every page of a list endpoint and returns all items in page order.
///
/// `fetch_page` is called with `None` for the first page and with the previous response's
/// `nextPageToken` afterwards; the query and page size are whatever the closure binds.
/// The first failing page aborts the walk and its error is returned.
pub async fn fetch_all<'a, T, F, Fut>(fetch_page: F) -> eyre::Result<Vec<T>>
where
    T: Unpin + Send + 'a,
    F: Fn(Option<String>) -> Fut + Send + 'a,
    Fut: Future<Output = eyre::Result<ListResponse<T>>> + Send + 'a,
{
    PagedStream::new(move |page_token| {
        let page = fetch_page(page_token);
        async move {
            let page = page.await?;
            Ok((page.items, page.next_page_token))
        }
    })
    .collect()
    .await
}

/// Paging details for lists of resources.
///
/// Includes the total number of items available and the number of resources
/// returned in a single page response.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u32,
    /// The number of results included in the API response.
    #[serde(rename = "resultsPerPage", default)]
    pub results_per_page: u32,
}

/// Response envelope shared by every `*.list` call.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos/list#response>
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    /// Identifies the API resource's type, e.g. `youtube#searchListResponse`.
    #[serde(default)]
    pub kind: String,
    /// The resources on this page. Absent when the service has nothing to return.
    #[serde(default = "VecDeque::new")]
    pub items: VecDeque<T>,
    #[serde(rename = "pageInfo", default)]
    pub page_info: PageInfo,
    /// Token that can be used as the value of the pageToken parameter to retrieve the next page in the result set.
    #[serde(rename = "nextPageToken", default)]
    pub next_page_token: Option<String>,
}

#[cfg(test)]
impl<T> ListResponse<T> {
    /// Builds a page by hand for scripted fakes of [`super::YouTubeApi`].
    pub(crate) fn page(items: impl IntoIterator<Item = T>, next_page_token: Option<&str>) -> Self {
        let items: VecDeque<T> = items.into_iter().collect();
        Self {
            kind: String::new(),
            page_info: PageInfo {
                total_results: 0,
                results_per_page: items.len() as u32,
            },
            items,
            next_page_token: next_page_token.map(str::to_string),
        }
    }
}
