//! Access to the audio clips played by sound commands.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::audio::ports::AudioSource;

/// Result type for clip lookups.
pub type ClipResult<T> = Result<T, ClipError>;

/// Opens audio clips by name.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AudioOpener: Send + Sync {
    /// Opens `clip`, a path relative to the opener's clip library.
    ///
    /// # Errors
    ///
    /// Returns [`ClipError::NotFound`] when the clip does not exist and
    /// [`ClipError::Unavailable`] when it cannot be read.
    async fn open(&self, clip: &str) -> ClipResult<AudioSource>;
}

/// Errors returned by clip openers.
#[derive(Debug, Clone, Error)]
pub enum ClipError {
    /// No clip with that name.
    #[error("audio clip not found: {0}")]
    NotFound(String),

    /// The clip exists but could not be opened.
    #[error("audio clip unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl ClipError {
    /// Wraps an I/O error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
