//! Shared wiring for dispatcher tests.

use std::sync::Arc;

use crate::audio::{
    adapters::memory::InMemoryVoiceGateway, domain::AudioSettings, services::AudioSessionManager,
};
use crate::command::{
    domain::{CommandDescriptor, CommandResponse},
    ports::{CommandHandler, HandlerResult, handler_fn},
    services::CommandRegistry,
};
use crate::cooldown::adapters::memory::InMemoryCooldownRepository;
use crate::dispatch::{
    domain::DispatchSettings,
    services::{Dispatcher, DispatcherPorts},
};
use crate::gateway::{
    adapters::InMemoryGateway,
    domain::{Author, InboundMessage},
    ports::MessageGateway,
};
use crate::rotation::services::RotationStore;
use crate::tenant::adapters::memory::InMemoryTenantStore;
use mockable::DefaultClock;

pub(super) type TestCooldowns = InMemoryCooldownRepository<DefaultClock>;

pub(super) struct Harness {
    pub(super) gateway: Arc<InMemoryGateway>,
    pub(super) tenants: Arc<InMemoryTenantStore>,
    pub(super) cooldowns: Arc<TestCooldowns>,
    pub(super) registry: Arc<CommandRegistry>,
}

impl Harness {
    pub(super) fn new() -> Self {
        Self {
            gateway: Arc::new(InMemoryGateway::new()),
            tenants: Arc::new(InMemoryTenantStore::new()),
            cooldowns: Arc::new(InMemoryCooldownRepository::new(Arc::new(DefaultClock))),
            registry: Arc::new(CommandRegistry::new()),
        }
    }

    pub(super) fn register<H>(&self, descriptor: CommandDescriptor, handler: H)
    where
        H: CommandHandler + 'static,
    {
        self.registry
            .register(descriptor, handler)
            .expect("registration should succeed");
    }

    pub(super) fn dispatcher(&self, settings: DispatchSettings) -> Dispatcher {
        dispatcher_with_gateway(self, Arc::clone(&self.gateway) as _, settings)
    }
}

pub(super) fn dispatcher_with_gateway(
    harness: &Harness,
    gateway: Arc<dyn MessageGateway>,
    settings: DispatchSettings,
) -> Dispatcher {
    let voice = Arc::new(InMemoryVoiceGateway::new());
    Dispatcher::new(
        DispatcherPorts {
            registry: Arc::clone(&harness.registry),
            gateway,
            tenants: Arc::clone(&harness.tenants) as _,
            block_list: Arc::clone(&harness.tenants) as _,
            cooldowns: Arc::clone(&harness.cooldowns) as _,
            rotation: Arc::new(RotationStore::new()),
            audio: Arc::new(AudioSessionManager::new(voice, AudioSettings::new())),
        },
        settings,
    )
}

pub(super) fn echo() -> impl CommandHandler {
    handler_fn(|ctx| -> HandlerResult {
        Ok(Some(CommandResponse::text(format!(
            "{} {}",
            ctx.command().canonical_trigger(),
            ctx.clean_args().join(" ")
        ))))
    })
}

pub(super) fn command(triggers: &[&str]) -> CommandDescriptor {
    CommandDescriptor::new(triggers.iter().copied()).expect("descriptor should build")
}

pub(super) fn message(content: &str) -> InboundMessage {
    message_from("u1", content)
}

pub(super) fn message_from(user: &str, content: &str) -> InboundMessage {
    InboundMessage::new("m1", Author::new(user, "someone"), "c1", content).in_tenant("g1")
}
