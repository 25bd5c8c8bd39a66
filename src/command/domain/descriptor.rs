//! Immutable command metadata.

use crate::cooldown::domain::{DEFAULT_COOLDOWN, DEFAULT_COOLDOWN_MESSAGE};
use crate::gateway::domain::{Capability, CapabilitySet};
use std::time::Duration;

use super::CommandDomainError;

/// Placeholder in usage strings replaced by `"<prefix> <trigger>"`.
pub const USAGE_PLACEHOLDER: &str = "{command}";

/// Metadata describing one command.
///
/// Triggers are stored lower-cased; the first one is canonical and keys
/// cooldowns, rotation cursors and the tenant disabled list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    triggers: Vec<String>,
    description: String,
    usage: String,
    category: String,
    cooldown: Duration,
    cooldown_message: Option<String>,
    required_capabilities: CapabilitySet,
    nsfw: bool,
    owner_only: bool,
}

impl CommandDescriptor {
    /// Creates a descriptor from its triggers, canonical trigger first.
    ///
    /// # Errors
    ///
    /// Returns [`CommandDomainError`] when no trigger is given or a trigger
    /// is empty or contains whitespace.
    pub fn new<I, S>(triggers: I) -> Result<Self, CommandDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for raw in triggers {
            let trigger = raw.as_ref().trim().to_lowercase();
            if trigger.is_empty() {
                return Err(CommandDomainError::EmptyTrigger);
            }
            if trigger.chars().any(char::is_whitespace) {
                return Err(CommandDomainError::WhitespaceInTrigger(trigger));
            }
            if !normalized.contains(&trigger) {
                normalized.push(trigger);
            }
        }
        if normalized.is_empty() {
            return Err(CommandDomainError::NoTriggers);
        }

        Ok(Self {
            triggers: normalized,
            description: String::new(),
            usage: USAGE_PLACEHOLDER.to_owned(),
            category: String::new(),
            cooldown: DEFAULT_COOLDOWN,
            cooldown_message: None,
            required_capabilities: CapabilitySet::new(),
            nsfw: false,
            owner_only: false,
        })
    }

    /// Sets the help description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the usage pattern, e.g. `"{command} <text>"`.
    #[must_use]
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets the help category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the per-user cooldown.
    #[must_use]
    pub const fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    /// Sets the cooldown refusal text; `{cooldown}` is filled in.
    #[must_use]
    pub fn with_cooldown_message(mut self, message: impl Into<String>) -> Self {
        self.cooldown_message = Some(message.into());
        self
    }

    /// Adds a capability the bot must hold in the invoking channel.
    #[must_use]
    pub fn requiring(mut self, capability: Capability) -> Self {
        self.required_capabilities = self.required_capabilities.with(capability);
        self
    }

    /// Flags the command as adult content.
    #[must_use]
    pub const fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    /// Restricts the command to operators.
    #[must_use]
    pub const fn with_owner_only(mut self, owner_only: bool) -> Self {
        self.owner_only = owner_only;
        self
    }

    /// Returns every trigger in registration order.
    #[must_use]
    pub fn triggers(&self) -> &[String] {
        &self.triggers
    }

    /// Returns the canonical trigger.
    #[must_use]
    pub fn canonical_trigger(&self) -> &str {
        self.triggers.first().map_or("", String::as_str)
    }

    /// Returns `true` when `trigger` (already lower-cased) names this command.
    #[must_use]
    pub fn answers_to(&self, trigger: &str) -> bool {
        self.triggers.iter().any(|own| own == trigger)
    }

    /// Returns the help description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the usage pattern.
    #[must_use]
    pub fn usage(&self) -> &str {
        &self.usage
    }

    /// Returns the usage pattern rendered for a tenant prefix.
    #[must_use]
    pub fn usage_for(&self, prefix: &str) -> String {
        self.usage.replace(
            USAGE_PLACEHOLDER,
            &format!("{prefix} {}", self.canonical_trigger()),
        )
    }

    /// Returns the help category, possibly empty.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the per-user cooldown.
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Returns the cooldown refusal template.
    #[must_use]
    pub fn cooldown_message(&self) -> &str {
        self.cooldown_message
            .as_deref()
            .unwrap_or(DEFAULT_COOLDOWN_MESSAGE)
    }

    /// Returns the capabilities the bot needs in the invoking channel.
    #[must_use]
    pub const fn required_capabilities(&self) -> &CapabilitySet {
        &self.required_capabilities
    }

    /// Returns `true` for adult-content commands.
    #[must_use]
    pub const fn is_nsfw(&self) -> bool {
        self.nsfw
    }

    /// Returns `true` for operator-only commands.
    #[must_use]
    pub const fn is_owner_only(&self) -> bool {
        self.owner_only
    }
}
