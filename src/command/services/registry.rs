//! Trigger-to-handler registry.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock, RwLockReadGuard};
use thiserror::Error;
use tracing::debug;

use crate::command::{domain::CommandDescriptor, ports::CommandHandler};

/// Result type for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors returned by [`CommandRegistry`].
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// Another command already answers to this trigger.
    #[error("trigger '{trigger}' is already registered by '{existing}'")]
    DuplicateTrigger {
        /// The contested trigger.
        trigger: String,
        /// Canonical trigger of the command that owns it.
        existing: String,
    },

    /// The registry lock is poisoned.
    #[error("command registry unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    /// Wraps an internal failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}

/// A registered command: its descriptor and handler.
#[derive(Clone)]
pub struct RegistryEntry {
    descriptor: Arc<CommandDescriptor>,
    handler: Arc<dyn CommandHandler>,
}

impl RegistryEntry {
    /// Returns the command metadata.
    #[must_use]
    pub const fn descriptor(&self) -> &Arc<CommandDescriptor> {
        &self.descriptor
    }

    /// Returns the handler.
    #[must_use]
    pub const fn handler(&self) -> &Arc<dyn CommandHandler> {
        &self.handler
    }
}

/// Append-only command registry.
///
/// Registration is expected to finish before dispatch starts; a
/// reader/writer lock still makes concurrent lookups safe. When two
/// entries share a trigger, the earlier registration wins.
pub struct CommandRegistry {
    entries: RwLock<Vec<RegistryEntry>>,
    reject_duplicates: bool,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a registry that rejects duplicate triggers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            reject_duplicates: true,
        }
    }

    /// Creates a registry that accepts duplicate triggers.
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            reject_duplicates: false,
        }
    }

    fn read(&self) -> RegistryResult<RwLockReadGuard<'_, Vec<RegistryEntry>>> {
        self.entries
            .read()
            .map_err(|err| RegistryError::unavailable(std::io::Error::other(err.to_string())))
    }

    /// Appends a command.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateTrigger`] when duplicate checking
    /// is enabled and a trigger is taken, or
    /// [`RegistryError::Unavailable`] when the lock is poisoned.
    pub fn register<H>(&self, descriptor: CommandDescriptor, handler: H) -> RegistryResult<()>
    where
        H: CommandHandler + 'static,
    {
        self.register_shared(descriptor, Arc::new(handler))
    }

    /// Appends a command whose handler is already shared.
    ///
    /// # Errors
    ///
    /// See [`CommandRegistry::register`].
    pub fn register_shared(
        &self,
        descriptor: CommandDescriptor,
        handler: Arc<dyn CommandHandler>,
    ) -> RegistryResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|err| RegistryError::unavailable(std::io::Error::other(err.to_string())))?;

        if self.reject_duplicates {
            for trigger in descriptor.triggers() {
                if let Some(existing) = entries
                    .iter()
                    .find(|entry| entry.descriptor.answers_to(trigger))
                {
                    return Err(RegistryError::DuplicateTrigger {
                        trigger: trigger.clone(),
                        existing: existing.descriptor.canonical_trigger().to_owned(),
                    });
                }
            }
        }

        debug!(command = descriptor.canonical_trigger(), "registered command");
        entries.push(RegistryEntry {
            descriptor: Arc::new(descriptor),
            handler,
        });
        Ok(())
    }

    /// Finds the first command answering to `trigger`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] when the lock is poisoned.
    pub fn lookup(&self, trigger: &str) -> RegistryResult<Option<RegistryEntry>> {
        let wanted = trigger.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .find(|entry| entry.descriptor.answers_to(&wanted))
            .cloned())
    }

    /// Returns the commands in `category` (case-insensitive), in
    /// registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] when the lock is poisoned.
    pub fn list_by_category(&self, category: &str) -> RegistryResult<Vec<Arc<CommandDescriptor>>> {
        let wanted = category.to_lowercase();
        Ok(self
            .read()?
            .iter()
            .filter(|entry| entry.descriptor.category().to_lowercase() == wanted)
            .map(|entry| Arc::clone(&entry.descriptor))
            .collect())
    }

    /// Returns every command in registration order.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] when the lock is poisoned.
    pub fn list_all(&self) -> RegistryResult<Vec<Arc<CommandDescriptor>>> {
        Ok(self
            .read()?
            .iter()
            .map(|entry| Arc::clone(&entry.descriptor))
            .collect())
    }

    /// Returns the distinct non-empty categories, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] when the lock is poisoned.
    pub fn categories(&self) -> RegistryResult<Vec<String>> {
        let categories: BTreeSet<String> = self
            .read()?
            .iter()
            .map(|entry| entry.descriptor.category())
            .filter(|category| !category.is_empty())
            .map(str::to_owned)
            .collect();
        Ok(categories.into_iter().collect())
    }

    /// Returns the number of registered commands.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unavailable`] when the lock is poisoned.
    pub fn count(&self) -> RegistryResult<usize> {
        Ok(self.read()?.len())
    }
}
