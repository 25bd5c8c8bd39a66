//! Cursor key.

use crate::gateway::domain::TenantId;
use std::fmt;

/// Identifies one cursor: a tenant and a canonical command trigger.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RotationKey {
    tenant: TenantId,
    command: String,
}

impl RotationKey {
    /// Creates a key.
    #[must_use]
    pub fn new(tenant: TenantId, command: impl Into<String>) -> Self {
        Self {
            tenant,
            command: command.into(),
        }
    }

    /// Returns the tenant component.
    #[must_use]
    pub const fn tenant(&self) -> &TenantId {
        &self.tenant
    }

    /// Returns the command component.
    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }
}

impl fmt::Display for RotationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.tenant, self.command)
    }
}
