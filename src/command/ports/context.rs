//! Per-invocation context handed to handlers.

use std::sync::Arc;

use crate::audio::ports::AudioAccess;
use crate::command::{domain::CommandDescriptor, services::CommandRegistry};
use crate::cooldown::ports::CooldownRepository;
use crate::gateway::{
    domain::{Author, CapabilitySet, ChannelId, InboundMessage, TenantId},
    ports::{GatewayResult, MessageGateway},
};
use crate::rotation::ports::RotationAccess;
use crate::tenant::{domain::TenantConfig, ports::TenantConfigRepository};

/// Shared components a handler may reach through its context.
#[derive(Clone)]
pub struct InvocationServices {
    registry: Arc<CommandRegistry>,
    rotation: Arc<dyn RotationAccess>,
    audio: Arc<dyn AudioAccess>,
    tenants: Arc<dyn TenantConfigRepository>,
    cooldowns: Arc<dyn CooldownRepository>,
    gateway: Arc<dyn MessageGateway>,
}

impl InvocationServices {
    /// Bundles the shared components.
    #[must_use]
    pub fn new(
        registry: Arc<CommandRegistry>,
        rotation: Arc<dyn RotationAccess>,
        audio: Arc<dyn AudioAccess>,
        tenants: Arc<dyn TenantConfigRepository>,
        cooldowns: Arc<dyn CooldownRepository>,
        gateway: Arc<dyn MessageGateway>,
    ) -> Self {
        Self {
            registry,
            rotation,
            audio,
            tenants,
            cooldowns,
            gateway,
        }
    }
}

/// Per-message values resolved by the dispatcher.
#[derive(Debug, Clone)]
pub struct InvocationParams {
    /// The triggering message.
    pub message: InboundMessage,
    /// Tenant the message was posted in.
    pub tenant: TenantId,
    /// The prefix exactly as typed.
    pub prefix: String,
    /// The lower-cased trigger as typed.
    pub trigger: String,
    /// Positional arguments after the trigger.
    pub args: Vec<String>,
    /// Arguments with user mentions replaced by names.
    pub clean_args: Vec<String>,
    /// The tenant configuration in effect.
    pub tenant_config: TenantConfig,
    /// The resolved command.
    pub command: Arc<CommandDescriptor>,
    /// Whether the author is on the operator allow-list.
    pub is_operator: bool,
}

/// Everything a handler sees for one invocation.
///
/// Created per message and dropped when the invocation completes.
pub struct InvocationContext {
    params: InvocationParams,
    services: InvocationServices,
}

impl InvocationContext {
    /// Creates a context.
    #[must_use]
    pub const fn new(params: InvocationParams, services: InvocationServices) -> Self {
        Self { params, services }
    }

    /// Returns the triggering message.
    #[must_use]
    pub const fn message(&self) -> &InboundMessage {
        &self.params.message
    }

    /// Returns the message author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        self.params.message.author()
    }

    /// Returns the tenant.
    #[must_use]
    pub const fn tenant_id(&self) -> &TenantId {
        &self.params.tenant
    }

    /// Returns the invoking channel.
    #[must_use]
    pub const fn channel_id(&self) -> &ChannelId {
        self.params.message.channel_id()
    }

    /// Returns the prefix as typed.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.params.prefix
    }

    /// Returns the lower-cased trigger as typed.
    #[must_use]
    pub fn trigger(&self) -> &str {
        &self.params.trigger
    }

    /// Returns the raw positional arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.params.args
    }

    /// Returns the mention-resolved arguments.
    #[must_use]
    pub fn clean_args(&self) -> &[String] {
        &self.params.clean_args
    }

    /// Returns the tenant configuration in effect.
    #[must_use]
    pub const fn tenant_config(&self) -> &TenantConfig {
        &self.params.tenant_config
    }

    /// Returns the resolved command.
    #[must_use]
    pub fn command(&self) -> &CommandDescriptor {
        &self.params.command
    }

    /// Returns `true` when the author is an operator.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        self.params.is_operator
    }

    /// Returns the command registry.
    #[must_use]
    pub fn registry(&self) -> &CommandRegistry {
        &self.services.registry
    }

    /// Returns the rotation cursors.
    #[must_use]
    pub fn rotation(&self) -> &dyn RotationAccess {
        self.services.rotation.as_ref()
    }

    /// Returns the tenant's audio access.
    #[must_use]
    pub fn audio(&self) -> &dyn AudioAccess {
        self.services.audio.as_ref()
    }

    /// Returns the tenant configuration store.
    #[must_use]
    pub fn tenants(&self) -> &dyn TenantConfigRepository {
        self.services.tenants.as_ref()
    }

    /// Returns the cooldown store.
    #[must_use]
    pub fn cooldowns(&self) -> &dyn CooldownRepository {
        self.services.cooldowns.as_ref()
    }

    /// Returns the voice channel the author is connected to.
    ///
    /// # Errors
    ///
    /// Returns the gateway error when voice state cannot be read.
    pub async fn author_voice_channel(&self) -> GatewayResult<Option<ChannelId>> {
        self.services
            .gateway
            .member_voice_channel(self.tenant_id(), self.author().id())
            .await
    }

    /// Returns the author's capabilities in the invoking channel.
    ///
    /// # Errors
    ///
    /// Returns the gateway error when the lookup fails.
    pub async fn author_capabilities(&self) -> GatewayResult<CapabilitySet> {
        self.services
            .gateway
            .member_capabilities(self.channel_id(), self.author().id())
            .await
    }

    /// Returns the bot's capabilities in `channel`.
    ///
    /// # Errors
    ///
    /// Returns the gateway error when the lookup fails.
    pub async fn bot_capabilities_in(&self, channel: &ChannelId) -> GatewayResult<CapabilitySet> {
        self.services.gateway.bot_capabilities(channel).await
    }

    /// Reacts to the triggering message.
    ///
    /// # Errors
    ///
    /// Returns the gateway error when the reaction is rejected.
    pub async fn react(&self, emoji: &str) -> GatewayResult<()> {
        self.services
            .gateway
            .add_reaction(self.channel_id(), self.message().id(), emoji)
            .await
    }
}
