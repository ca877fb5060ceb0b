//! Rows of the catalog and the dataset they form.

use crate::duration::{self, DurationError};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Identifies the channel a run is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelId(String);

impl ChannelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One video with its metadata and statistics.
///
/// `D` is the duration column: the service's encoded string straight after enrichment
/// ([`EncodedVideoRecord`]), whole seconds once normalized ([`VideoRecord`]).
///
/// Text fields the service omitted are empty strings; counts it omitted (e.g. hidden likes)
/// stay `None` rather than becoming zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord<D = u64> {
    pub video_id: String,
    pub title: String,
    pub description: Option<String>,
    pub published_at: String,
    pub view_count: Option<String>,
    pub like_count: Option<String>,
    pub comment_count: Option<String>,
    pub duration: D,
}

/// A record whose duration is still in the service's compact encoding.
pub type EncodedVideoRecord = VideoRecord<String>;

impl EncodedVideoRecord {
    /// Replaces the encoded duration with whole seconds.
    pub fn normalize(self) -> Result<VideoRecord, DurationError> {
        let duration = duration::parse(&self.duration)?;
        Ok(VideoRecord {
            video_id: self.video_id,
            title: self.title,
            description: self.description,
            published_at: self.published_at,
            view_count: self.view_count,
            like_count: self.like_count,
            comment_count: self.comment_count,
            duration,
        })
    }
}

/// Column used to drop repeated rows from a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DedupeKey {
    /// One row per video. Always safe.
    VideoId,
    /// One row per title. Distinct videos can share a title, so this can lose rows.
    Title,
}

/// The final, ordered set of rows handed to the sink.
///
/// Rows keep the order they were discovered in, and the same video may appear more than
/// once when several discovery paths reach it. Use [`Dataset::dedupe_by`] to collapse those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<VideoRecord>,
}

impl Dataset {
    pub fn new(rows: Vec<VideoRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[VideoRecord] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &VideoRecord> {
        self.rows.iter()
    }

    /// Keeps the first row for every distinct `key`, preserving order.
    pub fn dedupe_by(self, key: DedupeKey) -> Self {
        let mut seen = HashSet::new();
        let rows = self
            .rows
            .into_iter()
            .filter(|row| {
                let value = match key {
                    DedupeKey::VideoId => &row.video_id,
                    DedupeKey::Title => &row.title,
                };
                seen.insert(value.clone())
            })
            .collect();
        Self { rows }
    }
}

#[cfg(test)]
pub(crate) fn encoded(video_id: &str, title: &str, duration: &str) -> EncodedVideoRecord {
    VideoRecord {
        video_id: video_id.to_string(),
        title: title.to_string(),
        description: None,
        published_at: String::new(),
        view_count: None,
        like_count: None,
        comment_count: None,
        duration: duration.to_string(),
    }
}
