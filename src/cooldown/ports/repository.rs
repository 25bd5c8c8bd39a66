//! Cooldown persistence contract.

use crate::gateway::domain::UserId;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for cooldown store operations.
pub type CooldownStoreResult<T> = Result<T, CooldownStoreError>;

/// Per-(command, user) cooldown windows.
///
/// Commands are identified by their canonical trigger.
#[async_trait]
pub trait CooldownRepository: Send + Sync {
    /// Returns the time left before `user` may run `command` again.
    ///
    /// Returns [`Duration::ZERO`] when no window is active.
    ///
    /// # Errors
    ///
    /// Returns [`CooldownStoreError::Unavailable`] when the store fails.
    async fn remaining(&self, command: &str, user: &UserId) -> CooldownStoreResult<Duration>;

    /// Starts (or restarts) a window of `duration` from now.
    ///
    /// # Errors
    ///
    /// Returns [`CooldownStoreError::InvalidDuration`] when the duration
    /// cannot be represented, or [`CooldownStoreError::Unavailable`] when
    /// the store fails.
    async fn commit(&self, command: &str, user: &UserId, duration: Duration)
    -> CooldownStoreResult<()>;

    /// Removes a window, returning whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`CooldownStoreError::Unavailable`] when the store fails.
    async fn clear(&self, command: &str, user: &UserId) -> CooldownStoreResult<bool>;

    /// Removes every window held by `user`, returning how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CooldownStoreError::Unavailable`] when the store fails.
    async fn clear_all(&self, user: &UserId) -> CooldownStoreResult<usize>;
}

/// Errors returned by cooldown store implementations.
#[derive(Debug, Clone, Error)]
pub enum CooldownStoreError {
    /// The requested window is too long to store.
    #[error("cooldown duration out of range: {0:?}")]
    InvalidDuration(Duration),

    /// Persistence-layer failure.
    #[error("cooldown store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl CooldownStoreError {
    /// Wraps a persistence error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
