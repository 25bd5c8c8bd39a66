//! Tenant configuration record.

use crate::gateway::domain::TenantId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Prefix used when nothing else is configured.
pub const DEFAULT_PREFIX: &str = "pls";

/// Longest prefix a tenant may configure, in characters.
pub const MAX_PREFIX_LEN: usize = 32;

/// Pseudo-trigger that disables every adult-content command at once.
pub const NSFW_TOGGLE: &str = "nsfw";

/// Runtime configuration for one tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenantConfig {
    tenant_id: TenantId,
    prefix: String,
    disabled_commands: BTreeSet<String>,
}

impl TenantConfig {
    /// Creates a configuration with nothing disabled.
    #[must_use]
    pub fn new(tenant_id: TenantId, prefix: impl Into<String>) -> Self {
        Self {
            tenant_id,
            prefix: prefix.into(),
            disabled_commands: BTreeSet::new(),
        }
    }

    /// Returns the owning tenant.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Returns the configured literal prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the disabled canonical triggers (and possibly [`NSFW_TOGGLE`]).
    #[must_use]
    pub const fn disabled_commands(&self) -> &BTreeSet<String> {
        &self.disabled_commands
    }

    /// Returns `true` when `trigger` has been disabled.
    #[must_use]
    pub fn is_disabled(&self, trigger: &str) -> bool {
        self.disabled_commands.contains(trigger)
    }

    /// Replaces the prefix.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Adds triggers to the disabled list.
    pub fn disable<I, S>(&mut self, triggers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.disabled_commands
            .extend(triggers.into_iter().map(Into::into));
    }

    /// Removes triggers from the disabled list.
    pub fn enable<I, S>(&mut self, triggers: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for trigger in triggers {
            self.disabled_commands.remove(trigger.as_ref());
        }
    }
}
