//! Shared world state for command dispatch BDD scenarios.

use std::sync::Arc;

use memer::audio::{
    adapters::memory::InMemoryVoiceGateway, domain::AudioSettings, services::AudioSessionManager,
};
use memer::command::services::CommandRegistry;
use memer::cooldown::adapters::memory::InMemoryCooldownRepository;
use memer::dispatch::{
    domain::{DispatchOutcome, DispatchSettings, ExecutionOutcome},
    services::{Dispatcher, DispatcherPorts},
};
use memer::gateway::{
    adapters::InMemoryGateway,
    domain::{Author, InboundMessage, UserId},
};
use memer::handlers::adapters::{InMemoryAudioOpener, InMemoryFeedSource};
use memer::rotation::services::RotationStore;
use memer::tenant::adapters::memory::InMemoryTenantStore;
use mockable::DefaultClock;
use rstest::fixture;

/// Tenant every scenario message is sent from.
pub const TENANT: &str = "g1";

/// User granted operator rights in every scenario.
pub const OPERATOR: &str = "owner";

/// Endpoint the built-in shower thoughts command reads.
pub const SHOWER_THOUGHTS: &str = "/r/showerthoughts/top/.json?sort=top&t=week&limit=100";

/// Outcome of dispatching one scenario message.
pub enum LastOutcome {
    /// The message never reached a handler.
    Settled(DispatchOutcome),
    /// The handler ran to completion.
    Executed(ExecutionOutcome),
}

/// Scenario world for dispatch behaviour tests.
pub struct DispatchWorld {
    /// Recording chat gateway.
    pub gateway: Arc<InMemoryGateway>,
    /// Tenant configuration and block list.
    pub tenants: Arc<InMemoryTenantStore>,
    /// Cooldown windows.
    pub cooldowns: Arc<InMemoryCooldownRepository<DefaultClock>>,
    /// Registered commands.
    pub registry: Arc<CommandRegistry>,
    /// Posts served to feed commands.
    pub feeds: Arc<InMemoryFeedSource>,
    /// Clips served to sound commands.
    pub clips: Arc<InMemoryAudioOpener>,
    /// The dispatcher under test.
    pub dispatcher: Dispatcher,
    /// Outcome of the most recent message.
    pub last: Option<LastOutcome>,
}

impl DispatchWorld {
    /// Creates a world with an empty registry and default settings.
    #[must_use]
    pub fn new() -> Self {
        let gateway = Arc::new(InMemoryGateway::new());
        let tenants = Arc::new(InMemoryTenantStore::new());
        let cooldowns = Arc::new(InMemoryCooldownRepository::new(Arc::new(DefaultClock)));
        let registry = Arc::new(CommandRegistry::new());
        let audio = Arc::new(AudioSessionManager::new(
            Arc::new(InMemoryVoiceGateway::new()),
            AudioSettings::new(),
        ));
        let dispatcher = Dispatcher::new(
            DispatcherPorts {
                registry: Arc::clone(&registry),
                gateway: Arc::clone(&gateway) as _,
                tenants: Arc::clone(&tenants) as _,
                block_list: Arc::clone(&tenants) as _,
                cooldowns: Arc::clone(&cooldowns) as _,
                rotation: Arc::new(RotationStore::new()),
                audio,
            },
            DispatchSettings::default().with_operators([UserId::new(OPERATOR)]),
        );
        Self {
            gateway,
            tenants,
            cooldowns,
            registry,
            feeds: Arc::new(InMemoryFeedSource::new()),
            clips: Arc::new(InMemoryAudioOpener::new()),
            dispatcher,
            last: None,
        }
    }
}

impl Default for DispatchWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> DispatchWorld {
    DispatchWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

/// Builds a message from `user` in the scenario tenant.
#[must_use]
pub fn message_from(user: &str, content: &str) -> InboundMessage {
    InboundMessage::new("m1", Author::new(user, user), "c1", content).in_tenant(TENANT)
}
