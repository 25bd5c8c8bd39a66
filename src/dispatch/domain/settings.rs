//! Dispatcher settings.

use std::collections::BTreeSet;

use crate::gateway::domain::{TenantId, UserId};
use crate::tenant::domain::DEFAULT_PREFIX;

/// Static dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchSettings {
    default_prefix: String,
    operators: BTreeSet<UserId>,
    bot_user_id: Option<UserId>,
    premium_only: bool,
    premium_tenants: BTreeSet<TenantId>,
    max_concurrent_executions: Option<usize>,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl DispatchSettings {
    /// Creates settings with the given default tenant prefix.
    #[must_use]
    pub fn new(default_prefix: impl Into<String>) -> Self {
        Self {
            default_prefix: default_prefix.into().to_lowercase(),
            operators: BTreeSet::new(),
            bot_user_id: None,
            premium_only: false,
            premium_tenants: BTreeSet::new(),
            max_concurrent_executions: None,
        }
    }

    /// Sets the operator allow-list used by owner-only commands.
    #[must_use]
    pub fn with_operators(mut self, operators: impl IntoIterator<Item = UserId>) -> Self {
        self.operators = operators.into_iter().collect();
        self
    }

    /// Enables mention prefixes for the bot's own user id.
    #[must_use]
    pub fn with_bot_user(mut self, bot_user_id: impl Into<UserId>) -> Self {
        self.bot_user_id = Some(bot_user_id.into());
        self
    }

    /// Restricts the bot to an allow-list of tenants.
    #[must_use]
    pub fn with_premium_tenants(mut self, tenants: impl IntoIterator<Item = TenantId>) -> Self {
        self.premium_only = true;
        self.premium_tenants = tenants.into_iter().collect();
        self
    }

    /// Caps the number of handlers running at once.
    ///
    /// Without a cap every accepted message gets its own task immediately.
    #[must_use]
    pub const fn with_max_concurrent_executions(mut self, limit: usize) -> Self {
        self.max_concurrent_executions = Some(limit);
        self
    }

    /// Returns the prefix for tenants without one.
    #[must_use]
    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }

    /// Returns `true` when `user` is an operator.
    #[must_use]
    pub fn is_operator(&self, user: &UserId) -> bool {
        self.operators.contains(user)
    }

    /// Returns the bot's own user id, if mention prefixes are enabled.
    #[must_use]
    pub const fn bot_user_id(&self) -> Option<&UserId> {
        self.bot_user_id.as_ref()
    }

    /// Returns `false` when premium-only mode excludes `tenant`.
    #[must_use]
    pub fn admits(&self, tenant: &TenantId) -> bool {
        !self.premium_only || self.premium_tenants.contains(tenant)
    }

    /// Returns the concurrent execution cap, if any.
    #[must_use]
    pub const fn max_concurrent_executions(&self) -> Option<usize> {
        self.max_concurrent_executions
    }
}
