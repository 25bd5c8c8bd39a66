//! Shared wiring for handler tests.

use std::sync::Arc;
use std::time::Duration;

use crate::audio::{
    adapters::memory::InMemoryVoiceGateway, domain::AudioSettings, services::AudioSessionManager,
};
use crate::command::{
    domain::CommandResponse,
    ports::{InvocationContext, InvocationParams, InvocationServices},
    services::CommandRegistry,
};
use crate::cooldown::adapters::memory::InMemoryCooldownRepository;
use crate::gateway::{
    adapters::InMemoryGateway,
    domain::{Author, InboundMessage, TenantId},
};
use crate::handlers::{
    adapters::{InMemoryAudioOpener, InMemoryFeedSource},
    services::{BuiltinPorts, register_builtin},
};
use crate::rotation::services::RotationStore;
use crate::tenant::{adapters::memory::InMemoryTenantStore, ports::TenantConfigRepository};
use mockable::DefaultClock;

pub(super) type TestAudio = AudioSessionManager<InMemoryVoiceGateway>;

pub(super) struct Fixture {
    pub(super) gateway: Arc<InMemoryGateway>,
    pub(super) tenants: Arc<InMemoryTenantStore>,
    pub(super) registry: Arc<CommandRegistry>,
    pub(super) rotation: Arc<RotationStore>,
    pub(super) voice: Arc<InMemoryVoiceGateway>,
    pub(super) audio: Arc<TestAudio>,
    pub(super) feeds: Arc<InMemoryFeedSource>,
    pub(super) clips: Arc<InMemoryAudioOpener>,
}

impl Fixture {
    pub(super) fn new() -> Self {
        let voice = Arc::new(InMemoryVoiceGateway::new());
        let settings = AudioSettings::new()
            .with_ready_delay(Duration::ZERO)
            .with_send_timeout(Duration::from_millis(50));
        let fixture = Self {
            gateway: Arc::new(InMemoryGateway::new()),
            tenants: Arc::new(InMemoryTenantStore::new()),
            registry: Arc::new(CommandRegistry::new()),
            rotation: Arc::new(RotationStore::new()),
            audio: Arc::new(AudioSessionManager::new(Arc::clone(&voice), settings)),
            voice,
            feeds: Arc::new(InMemoryFeedSource::new()),
            clips: Arc::new(InMemoryAudioOpener::new()),
        };
        register_builtin(
            &fixture.registry,
            &BuiltinPorts {
                feeds: Arc::clone(&fixture.feeds) as _,
                clips: Arc::clone(&fixture.clips) as _,
            },
        )
        .expect("built-in commands should register");
        fixture
    }

    /// Builds the context the dispatcher would hand to `trigger`.
    pub(super) async fn context(&self, tenant: &str, content: &str) -> InvocationContext {
        self.context_for(tenant, "u1", content, false).await
    }

    pub(super) async fn context_for(
        &self,
        tenant: &str,
        user: &str,
        content: &str,
        is_operator: bool,
    ) -> InvocationContext {
        let tenant_id = TenantId::new(tenant);
        let tenant_config = self
            .tenants
            .get_or_create(&tenant_id, "pls")
            .await
            .expect("tenant config should load");
        let mut tokens = content.split_whitespace().map(str::to_owned);
        let trigger = tokens.next().expect("content should name a command");
        let args: Vec<String> = tokens.collect();
        let command = Arc::clone(
            self.registry
                .lookup(&trigger)
                .expect("lookup should succeed")
                .expect("command should be registered")
                .descriptor(),
        );
        let message = InboundMessage::new("m1", Author::new(user, "someone"), "c1", content)
            .in_tenant(tenant);
        let services = InvocationServices::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.rotation) as _,
            Arc::clone(&self.audio) as _,
            Arc::clone(&self.tenants) as _,
            Arc::new(InMemoryCooldownRepository::new(Arc::new(DefaultClock))),
            Arc::clone(&self.gateway) as _,
        );
        InvocationContext::new(
            InvocationParams {
                message,
                tenant: tenant_id,
                prefix: "pls".to_owned(),
                trigger,
                clean_args: args.clone(),
                args,
                tenant_config,
                command,
                is_operator,
            },
            services,
        )
    }

    /// Runs the registered handler for `content` in tenant `g1`.
    pub(super) async fn run(&self, content: &str) -> Option<CommandResponse> {
        let ctx = self.context("g1", content).await;
        self.run_in(&ctx).await
    }

    pub(super) async fn run_in(&self, ctx: &InvocationContext) -> Option<CommandResponse> {
        let entry = self
            .registry
            .lookup(ctx.trigger())
            .expect("lookup should succeed")
            .expect("command should be registered");
        entry
            .handler()
            .run(ctx)
            .await
            .expect("handler should succeed")
    }
}

pub(super) fn text(response: Option<CommandResponse>) -> String {
    response
        .and_then(|response| response.content)
        .expect("response should carry text")
}

pub(super) async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
