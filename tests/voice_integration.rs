//! Integration tests for sound commands driven through the dispatcher.
//!
//! Clips are read from a temporary directory by the filesystem opener and
//! streamed into the in-memory voice transport, so each test covers the
//! path from a chat message to a torn-down voice session.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use memer::audio::{
    adapters::memory::InMemoryVoiceGateway, domain::AudioSettings, services::AudioSessionManager,
};
use memer::command::services::CommandRegistry;
use memer::cooldown::adapters::memory::InMemoryCooldownRepository;
use memer::dispatch::{
    domain::{DispatchSettings, ExecutionOutcome},
    services::{Dispatcher, DispatcherPorts},
};
use memer::gateway::{
    adapters::InMemoryGateway,
    domain::{Author, ChannelId, InboundMessage, MessageId, TenantId},
};
use memer::handlers::{
    adapters::{FsAudioOpener, InMemoryFeedSource},
    services::{BuiltinPorts, JOIN_VOICE_MESSAGE, register_builtin},
};
use memer::rotation::services::RotationStore;
use memer::tenant::adapters::memory::InMemoryTenantStore;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct VoiceHarness {
    clips: TempDir,
    gateway: Arc<InMemoryGateway>,
    voice: Arc<InMemoryVoiceGateway>,
    audio: Arc<AudioSessionManager<InMemoryVoiceGateway>>,
    dispatcher: Dispatcher,
}

fn write_clip(root: &Path, name: &str, bytes: usize) {
    let path = root.join(name);
    let parent = path.parent().expect("clip path should have a parent");
    std::fs::create_dir_all(parent).expect("clip directory should be created");
    std::fs::write(path, vec![7_u8; bytes]).expect("clip should be written");
}

#[fixture]
fn harness() -> VoiceHarness {
    let clips = TempDir::new().expect("temporary clip directory");
    write_clip(clips.path(), "horns/1.opus", 7_680);

    let gateway = Arc::new(InMemoryGateway::new());
    let tenants = Arc::new(InMemoryTenantStore::new());
    let registry = Arc::new(CommandRegistry::new());
    let voice = Arc::new(InMemoryVoiceGateway::new());
    let audio = Arc::new(AudioSessionManager::new(
        Arc::clone(&voice),
        AudioSettings::new()
            .with_ready_delay(Duration::ZERO)
            .with_send_timeout(Duration::from_millis(50)),
    ));
    register_builtin(
        &registry,
        &BuiltinPorts {
            feeds: Arc::new(InMemoryFeedSource::new()),
            clips: Arc::new(FsAudioOpener::new(clips.path())),
        },
    )
    .expect("built-in commands should register");

    let dispatcher = Dispatcher::new(
        DispatcherPorts {
            registry,
            gateway: Arc::clone(&gateway) as _,
            tenants: Arc::clone(&tenants) as _,
            block_list: tenants,
            cooldowns: Arc::new(InMemoryCooldownRepository::new(Arc::new(DefaultClock))),
            rotation: Arc::new(RotationStore::new()),
            audio: Arc::clone(&audio) as _,
        },
        DispatchSettings::default(),
    );
    VoiceHarness {
        clips,
        gateway,
        voice,
        audio,
        dispatcher,
    }
}

impl VoiceHarness {
    async fn send(&self, user: &str, content: &str) -> ExecutionOutcome {
        let message =
            InboundMessage::new("m1", Author::new(user, user), "c1", content).in_tenant("g1");
        self.dispatcher
            .dispatch(message)
            .await
            .finished()
            .await
            .expect("message should have been spawned")
    }
}

async fn eventually(mut condition: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

fn g1() -> TenantId {
    TenantId::new("g1")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn airhorn_streams_clip_from_disk_and_leaves(harness: VoiceHarness) {
    harness.gateway.join_voice("g1", "u1", "vc1");

    let outcome = harness.send("u1", "pls airhorn").await;

    assert_eq!(outcome, ExecutionOutcome::Completed { responded: false });
    assert_eq!(
        harness.gateway.reactions(),
        vec![(MessageId::new("m1"), "\u{1f601}".to_owned())]
    );
    assert!(eventually(|| harness.voice.stats().disconnects == 1).await);
    let stats = harness.voice.stats();
    assert_eq!(stats.joins, 1);
    assert!(stats.bytes > 0);
    assert!(harness.audio.session(&g1()).is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn author_outside_voice_is_told_to_join(harness: VoiceHarness) {
    let outcome = harness.send("u1", "pls horn").await;

    assert_eq!(outcome, ExecutionOutcome::Completed { responded: true });
    assert_eq!(harness.gateway.sent_texts(), vec![JOIN_VOICE_MESSAGE.to_owned()]);
    assert_eq!(harness.voice.stats().joins, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn busy_tenant_refuses_other_sounds_until_stopped(harness: VoiceHarness) {
    harness.gateway.join_voice("g1", "u1", "vc1");
    harness.gateway.join_voice("g1", "u2", "vc1");
    let (reader, _writer) = tokio::io::duplex(64);
    let playback = harness
        .audio
        .start(&g1(), &ChannelId::new("vc1"), Box::new(reader))
        .await
        .expect("play should succeed");

    harness.send("u1", "pls fart").await;
    assert_eq!(
        harness.gateway.sent_texts(),
        vec!["I can only fart one at a time! Please wait.".to_owned()]
    );

    let stopped = harness.send("u2", "pls stop").await;
    assert_eq!(stopped, ExecutionOutcome::Completed { responded: false });
    playback.finished().await;
    assert_eq!(harness.audio.active_sessions(), 0);
    assert!(harness.clips.path().join("horns/1.opus").exists());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn missing_clip_file_is_reported(harness: VoiceHarness) {
    harness.gateway.join_voice("g1", "u1", "vc1");
    std::fs::remove_file(harness.clips.path().join("horns/1.opus"))
        .expect("clip should be removable");

    harness.send("u1", "pls airhorn").await;

    assert_eq!(
        harness.gateway.sent_texts(),
        vec!["Error playing audio: audio clip not found: horns/1.opus".to_owned()]
    );
    assert!(harness.audio.session(&g1()).is_none());
}
