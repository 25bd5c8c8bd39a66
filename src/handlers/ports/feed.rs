//! Source of posts for paginated feed commands.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::handlers::domain::FeedItem;

/// Result type for feed lookups.
pub type FeedResult<T> = Result<T, FeedError>;

/// Fetches the current posts behind a feed endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Returns the posts currently listed at `endpoint`, in feed order.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::UnknownEndpoint`] when the endpoint does not
    /// exist and [`FeedError::Unavailable`] when the source fails.
    async fn fetch(&self, endpoint: &str) -> FeedResult<Vec<FeedItem>>;
}

/// Errors returned by feed sources.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    /// Nothing is published at the endpoint.
    #[error("unknown feed endpoint: {0}")]
    UnknownEndpoint(String),

    /// The upstream source failed.
    #[error("feed source unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl FeedError {
    /// Wraps an upstream error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
