//! In-memory feed source and clip library.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::{Arc, PoisonError, RwLock};

use crate::audio::ports::AudioSource;
use crate::handlers::{
    domain::FeedItem,
    ports::{AudioOpener, ClipError, ClipResult, FeedError, FeedResult, FeedSource},
};

/// Feed source serving posts published through [`InMemoryFeedSource::publish`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedSource {
    feeds: Arc<RwLock<HashMap<String, Vec<FeedItem>>>>,
}

impl InMemoryFeedSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a source from a JSON object mapping endpoints to post lists.
    ///
    /// # Errors
    ///
    /// Returns the parse error when `json` is not such an object.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let feeds: HashMap<String, Vec<FeedItem>> = serde_json::from_str(json)?;
        Ok(Self {
            feeds: Arc::new(RwLock::new(feeds)),
        })
    }

    /// Replaces the posts listed at `endpoint`.
    pub fn publish(&self, endpoint: impl Into<String>, items: Vec<FeedItem>) {
        self.feeds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(endpoint.into(), items);
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch(&self, endpoint: &str) -> FeedResult<Vec<FeedItem>> {
        self.feeds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(endpoint)
            .cloned()
            .ok_or_else(|| FeedError::UnknownEndpoint(endpoint.to_owned()))
    }
}

/// Clip library held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAudioOpener {
    clips: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryAudioOpener {
    /// Creates an empty library.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a clip.
    pub fn insert(&self, clip: impl Into<String>, data: Vec<u8>) {
        self.clips
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(clip.into(), data);
    }
}

#[async_trait]
impl AudioOpener for InMemoryAudioOpener {
    async fn open(&self, clip: &str) -> ClipResult<AudioSource> {
        let data = self
            .clips
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(clip)
            .cloned()
            .ok_or_else(|| ClipError::NotFound(clip.to_owned()))?;
        Ok(Box::new(Cursor::new(data)))
    }
}
