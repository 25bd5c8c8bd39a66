//! Persistence contracts for tenant configuration and the block list.

use crate::gateway::domain::{TenantId, UserId};
use crate::tenant::domain::{BlockEntry, TenantConfig};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for tenant store operations.
pub type TenantStoreResult<T> = Result<T, TenantStoreError>;

/// Tenant configuration persistence contract.
#[async_trait]
pub trait TenantConfigRepository: Send + Sync {
    /// Returns the tenant's configuration, creating it with `default_prefix`
    /// on first access.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::Unavailable`] when the store fails.
    async fn get_or_create(
        &self,
        tenant: &TenantId,
        default_prefix: &str,
    ) -> TenantStoreResult<TenantConfig>;

    /// Replaces the tenant's prefix and returns the updated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::NotFound`] when the tenant has no
    /// configuration yet.
    async fn set_prefix(&self, tenant: &TenantId, prefix: &str) -> TenantStoreResult<TenantConfig>;

    /// Adds triggers to the tenant's disabled list.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::NotFound`] when the tenant has no
    /// configuration yet.
    async fn disable_commands(
        &self,
        tenant: &TenantId,
        triggers: &[String],
    ) -> TenantStoreResult<TenantConfig>;

    /// Removes triggers from the tenant's disabled list.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::NotFound`] when the tenant has no
    /// configuration yet.
    async fn enable_commands(
        &self,
        tenant: &TenantId,
        triggers: &[String],
    ) -> TenantStoreResult<TenantConfig>;
}

/// Block-list contract.
#[async_trait]
pub trait BlockList: Send + Sync {
    /// Returns `true` when either the user or the tenant is blocked.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::Unavailable`] when the store fails.
    async fn is_blocked(&self, user: &UserId, tenant: &TenantId) -> TenantStoreResult<bool>;

    /// Adds or replaces a block entry.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::Unavailable`] when the store fails.
    async fn block(&self, entry: BlockEntry) -> TenantStoreResult<()>;

    /// Removes a block entry, returning whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`TenantStoreError::Unavailable`] when the store fails.
    async fn unblock(&self, id: &str) -> TenantStoreResult<bool>;
}

/// Errors returned by tenant store implementations.
#[derive(Debug, Clone, Error)]
pub enum TenantStoreError {
    /// The tenant has no stored configuration.
    #[error("tenant not found: {0}")]
    NotFound(TenantId),

    /// Persistence-layer failure.
    #[error("tenant store unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl TenantStoreError {
    /// Wraps a persistence error.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
