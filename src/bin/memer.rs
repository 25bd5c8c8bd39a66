//! Console harness for the command dispatcher.
//!
//! Usage:
//!
//! ```text
//! memer [config-path]
//! ```
//!
//! Each line read from standard input is dispatched as a message from a
//! single console user in a single console tenant. Responses are written to
//! standard output; logs go to standard error. Voice commands stream into
//! an in-memory voice transport.

use std::path::PathBuf;
use std::sync::Arc;

use memer::{
    audio::{adapters::memory::InMemoryVoiceGateway, services::AudioSessionManager},
    command::services::CommandRegistry,
    config::BotConfig,
    cooldown::adapters::memory::InMemoryCooldownRepository,
    dispatch::services::{Dispatcher, DispatcherPorts},
    gateway::{
        adapters::ConsoleGateway,
        domain::{Author, InboundMessage},
    },
    handlers::{
        adapters::{FsAudioOpener, InMemoryFeedSource},
        services::{BuiltinPorts, register_builtin},
    },
    rotation::services::RotationStore,
    telemetry,
    tenant::adapters::memory::InMemoryTenantStore,
};
use mockable::DefaultClock;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

const CONSOLE_TENANT: &str = "console";
const CONSOLE_CHANNEL: &str = "console";
const CONSOLE_VOICE_CHANNEL: &str = "console-voice";
const CONSOLE_USER: &str = "console-user";

async fn load_feeds(config: &BotConfig) -> Result<InMemoryFeedSource, BoxError> {
    let Some(path) = &config.feeds_path else {
        return Ok(InMemoryFeedSource::new());
    };
    let json = tokio::fs::read_to_string(path).await?;
    Ok(InMemoryFeedSource::from_json(&json)?)
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = BotConfig::load(config_path.as_deref())?;
    telemetry::init(&config.log_filter)?;

    let registry = Arc::new(CommandRegistry::new());
    register_builtin(
        &registry,
        &BuiltinPorts {
            feeds: Arc::new(load_feeds(&config).await?),
            clips: Arc::new(FsAudioOpener::new(&config.voice.audio_path)),
        },
    )?;

    let tenants = Arc::new(InMemoryTenantStore::new());
    let audio = Arc::new(AudioSessionManager::new(
        Arc::new(InMemoryVoiceGateway::new()),
        config.audio_settings(),
    ));
    let dispatcher = Dispatcher::new(
        DispatcherPorts {
            registry: Arc::clone(&registry),
            gateway: Arc::new(ConsoleGateway::new(CONSOLE_VOICE_CHANNEL)),
            tenants: Arc::clone(&tenants) as _,
            block_list: tenants,
            cooldowns: Arc::new(InMemoryCooldownRepository::new(Arc::new(DefaultClock))),
            rotation: Arc::new(RotationStore::new()),
            audio: Arc::clone(&audio) as _,
        },
        config.dispatch_settings(),
    );
    info!(
        commands = registry.count()?,
        prefix = %dispatcher.settings().default_prefix(),
        "console harness ready"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut sequence: u64 = 0;
    while let Some(line) = lines.next_line().await? {
        sequence = sequence.saturating_add(1);
        let message = InboundMessage::new(
            sequence.to_string().as_str(),
            Author::new(CONSOLE_USER, "console"),
            CONSOLE_CHANNEL,
            line,
        )
        .in_tenant(CONSOLE_TENANT);
        let outcome = dispatcher.dispatch(message).await;
        debug!(?outcome, "dispatched");
        if let Some(finished) = outcome.finished().await {
            debug!(?finished, "execution finished");
        }
    }

    let stopped = audio.stop_all();
    info!(stopped, "console harness shutting down");
    Ok(())
}
