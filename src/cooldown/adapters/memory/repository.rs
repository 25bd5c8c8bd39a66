//! Clock-driven in-memory cooldown windows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::cooldown::ports::{CooldownRepository, CooldownStoreError, CooldownStoreResult};
use crate::gateway::domain::UserId;

type CooldownKey = (String, UserId);

/// Thread-safe in-memory cooldown repository.
///
/// Windows are stored as absolute expiry instants taken from the injected
/// clock; expired entries are ignored on read and dropped by
/// [`InMemoryCooldownRepository::purge_expired`].
pub struct InMemoryCooldownRepository<C>
where
    C: Clock + Send + Sync,
{
    expiries: Arc<RwLock<HashMap<CooldownKey, DateTime<Utc>>>>,
    clock: Arc<C>,
}

impl<C> Clone for InMemoryCooldownRepository<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            expiries: Arc::clone(&self.expiries),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<C> InMemoryCooldownRepository<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty repository driven by `clock`.
    #[must_use]
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            expiries: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }

    /// Drops every expired window and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns [`CooldownStoreError::Unavailable`] when the lock is poisoned.
    pub fn purge_expired(&self) -> CooldownStoreResult<usize> {
        let now = self.clock.utc();
        let mut expiries = self.expiries.write().map_err(|err| {
            CooldownStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let before = expiries.len();
        expiries.retain(|_, expires_at| *expires_at > now);
        Ok(before - expiries.len())
    }
}

fn key(command: &str, user: &UserId) -> CooldownKey {
    (command.to_owned(), user.clone())
}

#[async_trait]
impl<C> CooldownRepository for InMemoryCooldownRepository<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn remaining(&self, command: &str, user: &UserId) -> CooldownStoreResult<Duration> {
        let expiries = self.expiries.read().map_err(|err| {
            CooldownStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let Some(expires_at) = expiries.get(&key(command, user)) else {
            return Ok(Duration::ZERO);
        };
        Ok((*expires_at - self.clock.utc())
            .to_std()
            .unwrap_or(Duration::ZERO))
    }

    async fn commit(
        &self,
        command: &str,
        user: &UserId,
        duration: Duration,
    ) -> CooldownStoreResult<()> {
        let window = chrono::Duration::from_std(duration)
            .map_err(|_| CooldownStoreError::InvalidDuration(duration))?;
        let expires_at = self
            .clock
            .utc()
            .checked_add_signed(window)
            .ok_or(CooldownStoreError::InvalidDuration(duration))?;
        let mut expiries = self.expiries.write().map_err(|err| {
            CooldownStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        expiries.insert(key(command, user), expires_at);
        Ok(())
    }

    async fn clear(&self, command: &str, user: &UserId) -> CooldownStoreResult<bool> {
        let mut expiries = self.expiries.write().map_err(|err| {
            CooldownStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        Ok(expiries.remove(&key(command, user)).is_some())
    }

    async fn clear_all(&self, user: &UserId) -> CooldownStoreResult<usize> {
        let mut expiries = self.expiries.write().map_err(|err| {
            CooldownStoreError::unavailable(std::io::Error::other(err.to_string()))
        })?;
        let before = expiries.len();
        expiries.retain(|(_, owner), _| owner != user);
        Ok(before - expiries.len())
    }
}
