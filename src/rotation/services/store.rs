//! Lock-guarded cursor map.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::gateway::domain::TenantId;
use crate::rotation::{
    domain::{RotationError, RotationKey},
    ports::{RotationAccess, RotationResult},
};

/// In-process rotation cursors.
///
/// One reader/writer lock guards the whole map. Every read-modify-write
/// happens under the write lock, so `advance` calls on one key never
/// observe a torn cursor.
#[derive(Debug, Default)]
pub struct RotationStore {
    cursors: RwLock<HashMap<RotationKey, usize>>,
}

const fn wrap(index: usize, size: usize) -> usize {
    let next = index.saturating_add(1);
    if next >= size { 0 } else { next }
}

impl RotationStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cursors created so far.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::Unavailable`] when the lock is poisoned.
    pub fn tracked_keys(&self) -> RotationResult<usize> {
        let cursors = self
            .cursors
            .read()
            .map_err(|err| RotationError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(cursors.len())
    }

    fn update<F>(&self, tenant: &TenantId, command: &str, step: F) -> RotationResult<usize>
    where
        F: FnOnce(&mut usize) -> usize,
    {
        let mut cursors = self
            .cursors
            .write()
            .map_err(|err| RotationError::unavailable(std::io::Error::other(err.to_string())))?;
        let cursor = cursors
            .entry(RotationKey::new(tenant.clone(), command))
            .or_insert(0);
        Ok(step(cursor))
    }
}

impl RotationAccess for RotationStore {
    fn current_index(&self, tenant: &TenantId, command: &str) -> RotationResult<usize> {
        let cursors = self
            .cursors
            .read()
            .map_err(|err| RotationError::unavailable(std::io::Error::other(err.to_string())))?;
        Ok(cursors
            .get(&RotationKey::new(tenant.clone(), command))
            .copied()
            .unwrap_or(0))
    }

    fn advance(&self, tenant: &TenantId, command: &str, size: usize) -> RotationResult<usize> {
        if size == 0 {
            return Err(RotationError::EmptyResultSet);
        }
        self.update(tenant, command, |cursor| {
            *cursor = wrap(*cursor, size);
            *cursor
        })
    }

    fn next(&self, tenant: &TenantId, command: &str, size: usize) -> RotationResult<usize> {
        if size == 0 {
            return Err(RotationError::EmptyResultSet);
        }
        self.update(tenant, command, |cursor| {
            let selected = if *cursor < size { *cursor } else { 0 };
            *cursor = wrap(selected, size);
            selected
        })
    }
}
