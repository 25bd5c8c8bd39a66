//! Thread-safe in-memory tenant configuration and block list.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::gateway::domain::{TenantId, UserId};
use crate::tenant::{
    domain::{BlockEntry, TenantConfig},
    ports::{BlockList, TenantConfigRepository, TenantStoreError, TenantStoreResult},
};

/// In-memory implementation of both tenant ports.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTenantStore {
    state: Arc<RwLock<TenantState>>,
}

#[derive(Debug, Default)]
struct TenantState {
    configs: HashMap<TenantId, TenantConfig>,
    blocked: HashMap<String, BlockEntry>,
}

impl InMemoryTenantStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn update<F>(&self, tenant: &TenantId, mutate: F) -> TenantStoreResult<TenantConfig>
    where
        F: FnOnce(&mut TenantConfig),
    {
        let mut state = self
            .state
            .write()
            .map_err(|err| TenantStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        let config = state
            .configs
            .get_mut(tenant)
            .ok_or_else(|| TenantStoreError::NotFound(tenant.clone()))?;
        mutate(config);
        Ok(config.clone())
    }
}

#[async_trait]
impl TenantConfigRepository for InMemoryTenantStore {
    async fn get_or_create(
        &self,
        tenant: &TenantId,
        default_prefix: &str,
    ) -> TenantStoreResult<TenantConfig> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TenantStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state
            .configs
            .entry(tenant.clone())
            .or_insert_with(|| TenantConfig::new(tenant.clone(), default_prefix))
            .clone())
    }

    async fn set_prefix(&self, tenant: &TenantId, prefix: &str) -> TenantStoreResult<TenantConfig> {
        self.update(tenant, |config| config.set_prefix(prefix))
    }

    async fn disable_commands(
        &self,
        tenant: &TenantId,
        triggers: &[String],
    ) -> TenantStoreResult<TenantConfig> {
        self.update(tenant, |config| config.disable(triggers.iter().cloned()))
    }

    async fn enable_commands(
        &self,
        tenant: &TenantId,
        triggers: &[String],
    ) -> TenantStoreResult<TenantConfig> {
        self.update(tenant, |config| config.enable(triggers))
    }
}

#[async_trait]
impl BlockList for InMemoryTenantStore {
    async fn is_blocked(&self, user: &UserId, tenant: &TenantId) -> TenantStoreResult<bool> {
        let state = self
            .state
            .read()
            .map_err(|err| TenantStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.blocked.contains_key(user.as_str()) || state.blocked.contains_key(tenant.as_str()))
    }

    async fn block(&self, entry: BlockEntry) -> TenantStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TenantStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        state.blocked.insert(entry.id.clone(), entry);
        Ok(())
    }

    async fn unblock(&self, id: &str) -> TenantStoreResult<bool> {
        let mut state = self
            .state
            .write()
            .map_err(|err| TenantStoreError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(state.blocked.remove(id).is_some())
    }
}
