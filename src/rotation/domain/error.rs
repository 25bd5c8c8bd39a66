//! Rotation errors.

use std::sync::Arc;
use thiserror::Error;

/// Errors returned by rotation stores.
#[derive(Debug, Clone, Error)]
pub enum RotationError {
    /// A cursor cannot wrap within an empty result set.
    #[error("result set is empty")]
    EmptyResultSet,

    /// The store's internal state is unusable.
    #[error("rotation store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RotationError {
    /// Wraps an internal failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
