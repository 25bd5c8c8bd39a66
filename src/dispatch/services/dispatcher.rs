//! The per-message dispatch state machine.

use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, error, trace, warn};

use super::gates::{missing_capabilities, nsfw_allowed};
use super::supervisor::Execution;
use crate::audio::ports::AudioAccess;
use crate::command::{
    ports::{InvocationContext, InvocationParams, InvocationServices},
    services::{CommandRegistry, RegistryEntry},
};
use crate::cooldown::ports::CooldownRepository;
use crate::dispatch::domain::{
    DispatchOutcome, DispatchSettings, DropReason, PREMIUM_NOTICE, ParsedInvocation, Refusal,
    clean_args, cooldown_refusal, missing_capabilities_refusal, nsfw_refusal, parse_invocation,
};
use crate::gateway::{
    domain::{ChannelId, InboundMessage, OutboundMessage, TenantId},
    ports::MessageGateway,
};
use crate::rotation::ports::RotationAccess;
use crate::tenant::{
    domain::{NSFW_TOGGLE, TenantConfig},
    ports::{BlockList, TenantConfigRepository},
};

/// Components the dispatcher is wired to.
#[derive(Clone)]
pub struct DispatcherPorts {
    /// Registered commands.
    pub registry: Arc<CommandRegistry>,
    /// The chat platform.
    pub gateway: Arc<dyn MessageGateway>,
    /// Tenant configuration store.
    pub tenants: Arc<dyn TenantConfigRepository>,
    /// Blocked users and tenants.
    pub block_list: Arc<dyn BlockList>,
    /// Cooldown windows.
    pub cooldowns: Arc<dyn CooldownRepository>,
    /// Feed rotation cursors.
    pub rotation: Arc<dyn RotationAccess>,
    /// Voice sessions.
    pub audio: Arc<dyn AudioAccess>,
}

/// Routes inbound messages to command handlers.
pub struct Dispatcher {
    ports: DispatcherPorts,
    services: InvocationServices,
    settings: DispatchSettings,
    limiter: Option<Arc<Semaphore>>,
}

impl Dispatcher {
    /// Creates a dispatcher.
    #[must_use]
    pub fn new(ports: DispatcherPorts, settings: DispatchSettings) -> Self {
        let services = InvocationServices::new(
            Arc::clone(&ports.registry),
            Arc::clone(&ports.rotation),
            Arc::clone(&ports.audio),
            Arc::clone(&ports.tenants),
            Arc::clone(&ports.cooldowns),
            Arc::clone(&ports.gateway),
        );
        let limiter = settings
            .max_concurrent_executions()
            .map(|limit| Arc::new(Semaphore::new(limit.max(1))));
        Self {
            ports,
            services,
            settings,
            limiter,
        }
    }

    /// Returns the dispatcher settings.
    #[must_use]
    pub const fn settings(&self) -> &DispatchSettings {
        &self.settings
    }

    /// Runs one message through filter, prefix, lookup and gates, then
    /// spawns its handler without waiting for it.
    pub async fn dispatch(&self, message: InboundMessage) -> DispatchOutcome {
        if message.author().is_bot() {
            return DispatchOutcome::Dropped(DropReason::Bot);
        }
        let Some(tenant) = message.tenant_id().cloned() else {
            return DispatchOutcome::Dropped(DropReason::DirectMessage);
        };
        if self.is_blocked(&message, &tenant).await {
            return DispatchOutcome::Dropped(DropReason::Blocked);
        }
        if !self.settings.admits(&tenant) {
            return self.refuse_non_premium(&message).await;
        }

        let config = self.tenant_config(&tenant).await;
        let Some(parsed) = parse_invocation(
            message.content(),
            self.settings.bot_user_id(),
            config.prefix(),
        ) else {
            return DispatchOutcome::Dropped(DropReason::NotACommand);
        };

        let entry = match self.ports.registry.lookup(&parsed.trigger) {
            Ok(Some(entry)) => entry,
            Ok(None) => return DispatchOutcome::Dropped(DropReason::UnknownCommand),
            Err(err) => {
                error!(trigger = %parsed.trigger, error = %err, "command lookup failed");
                return DispatchOutcome::Dropped(DropReason::RegistryUnavailable);
            }
        };

        self.run_gates(message, tenant, config, parsed, entry).await
    }

    async fn run_gates(
        &self,
        message: InboundMessage,
        tenant: TenantId,
        config: TenantConfig,
        parsed: ParsedInvocation,
        entry: RegistryEntry,
    ) -> DispatchOutcome {
        let command = entry.descriptor();
        let canonical = command.canonical_trigger();
        let author = message.author().id();
        let channel = message.channel_id();

        let is_operator = self.settings.is_operator(author);
        if command.is_owner_only() && !is_operator {
            trace!(command = canonical, user = %author, "owner-only command from non-operator");
            return DispatchOutcome::Dropped(DropReason::OwnerOnly);
        }

        if config.is_disabled(canonical) || (command.is_nsfw() && config.is_disabled(NSFW_TOGGLE))
        {
            trace!(command = canonical, tenant = %tenant, "command disabled in tenant");
            return DispatchOutcome::Dropped(DropReason::Disabled);
        }

        match self.ports.cooldowns.remaining(canonical, author).await {
            Ok(remaining) if !remaining.is_zero() => {
                self.send(channel, cooldown_refusal(command, remaining))
                    .await;
                return DispatchOutcome::Refused(Refusal::Cooldown { remaining });
            }
            Ok(_) => {}
            Err(err) => {
                warn!(command = canonical, user = %author, error = %err, "cooldown lookup failed");
            }
        }

        let missing = missing_capabilities(self.ports.gateway.as_ref(), channel, command).await;
        if !missing.is_empty() {
            self.send(channel, missing_capabilities_refusal(&missing))
                .await;
            return DispatchOutcome::Refused(Refusal::MissingCapabilities(missing));
        }

        if !nsfw_allowed(self.ports.gateway.as_ref(), channel, command).await {
            self.send(channel, nsfw_refusal()).await;
            return DispatchOutcome::Refused(Refusal::NsfwChannel);
        }

        self.spawn(message, tenant, config, parsed, entry, is_operator)
    }

    fn spawn(
        &self,
        message: InboundMessage,
        tenant: TenantId,
        tenant_config: TenantConfig,
        parsed: ParsedInvocation,
        entry: RegistryEntry,
        is_operator: bool,
    ) -> DispatchOutcome {
        let ParsedInvocation {
            prefix,
            trigger,
            args,
        } = parsed;
        let clean = clean_args(&args, message.mentions());
        let context = InvocationContext::new(
            InvocationParams {
                message,
                tenant,
                prefix,
                trigger,
                args,
                clean_args: clean,
                tenant_config,
                command: Arc::clone(entry.descriptor()),
                is_operator,
            },
            self.services.clone(),
        );
        let execution = Execution {
            handler: Arc::clone(entry.handler()),
            context,
            gateway: Arc::clone(&self.ports.gateway),
            cooldowns: Arc::clone(&self.ports.cooldowns),
        };

        let limiter = self.limiter.clone();
        DispatchOutcome::Spawned(tokio::spawn(async move {
            let _permit = match limiter {
                Some(semaphore) => semaphore.acquire_owned().await.ok(),
                None => None,
            };
            execution.run().await
        }))
    }

    async fn is_blocked(&self, message: &InboundMessage, tenant: &TenantId) -> bool {
        match self
            .ports
            .block_list
            .is_blocked(message.author().id(), tenant)
            .await
        {
            Ok(blocked) => blocked,
            Err(err) => {
                warn!(user = %message.author().id(), tenant = %tenant, error = %err, "block list lookup failed");
                false
            }
        }
    }

    async fn refuse_non_premium(&self, message: &InboundMessage) -> DispatchOutcome {
        if message
            .content()
            .to_lowercase()
            .starts_with(self.settings.default_prefix())
        {
            self.send(message.channel_id(), OutboundMessage::text(PREMIUM_NOTICE))
                .await;
            return DispatchOutcome::Refused(Refusal::NotPremium);
        }
        DispatchOutcome::Dropped(DropReason::NotPremium)
    }

    async fn tenant_config(&self, tenant: &TenantId) -> TenantConfig {
        match self
            .ports
            .tenants
            .get_or_create(tenant, self.settings.default_prefix())
            .await
        {
            Ok(config) => config,
            Err(err) => {
                error!(tenant = %tenant, error = %err, "failed to load tenant config");
                TenantConfig::new(tenant.clone(), self.settings.default_prefix())
            }
        }
    }

    async fn send(&self, channel: &ChannelId, message: OutboundMessage) {
        if let Err(err) = self.ports.gateway.send(channel, message).await {
            debug!(channel = %channel, error = %err, "failed to send refusal");
        }
    }
}
