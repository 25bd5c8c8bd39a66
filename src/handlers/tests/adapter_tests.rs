//! Unit tests for the handler adapters and built-in registration.

use std::sync::Arc;

use rstest::rstest;
use tokio::io::AsyncReadExt;

use crate::command::services::{CommandRegistry, RegistryError};
use crate::handlers::{
    adapters::{FsAudioOpener, InMemoryAudioOpener, InMemoryFeedSource},
    ports::{AudioOpener, ClipError, FeedError, FeedSource},
    services::{BuiltinPorts, BuiltinRegistrationError, register_builtin},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn fs_opener_reads_clips_below_root() {
    let root = tempfile::tempdir().expect("tempdir should be created");
    std::fs::create_dir(root.path().join("horns")).expect("clip dir should be created");
    std::fs::write(root.path().join("horns/1.opus"), [1_u8, 2, 3])
        .expect("clip should be written");
    let opener = FsAudioOpener::new(root.path());

    let mut source = opener.open("horns/1.opus").await.expect("clip should open");
    let mut data = Vec::new();
    source
        .read_to_end(&mut data)
        .await
        .expect("clip should be readable");

    assert_eq!(data, vec![1, 2, 3]);
}

#[rstest]
#[case("horns/9.opus")]
#[case("../secret.opus")]
#[case("/etc/passwd")]
#[case("")]
#[tokio::test(flavor = "multi_thread")]
async fn fs_opener_rejects_missing_or_escaping_clips(#[case] clip: &str) {
    let root = tempfile::tempdir().expect("tempdir should be created");
    let opener = FsAudioOpener::new(root.path());

    let result = opener.open(clip).await;

    assert!(matches!(result, Err(ClipError::NotFound(name)) if name == clip));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn memory_opener_serves_inserted_clips() {
    let opener = InMemoryAudioOpener::new();
    opener.insert("beep", vec![9_u8; 4]);

    let mut data = Vec::new();
    opener
        .open("beep")
        .await
        .expect("clip should open")
        .read_to_end(&mut data)
        .await
        .expect("clip should be readable");

    assert_eq!(data, vec![9; 4]);
    assert!(matches!(
        opener.open("boop").await,
        Err(ClipError::NotFound(_))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn memory_feed_reports_unknown_endpoints() {
    let feeds = InMemoryFeedSource::new();
    feeds.publish("/r/known", Vec::new());

    let known = feeds.fetch("/r/known").await.expect("feed should exist");
    let unknown = feeds.fetch("/r/unknown").await;

    assert!(known.is_empty());
    assert!(matches!(unknown, Err(FeedError::UnknownEndpoint(endpoint)) if endpoint == "/r/unknown"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn memory_feed_loads_json_fixtures() {
    let feeds = InMemoryFeedSource::from_json(
        r#"{"/r/memes": [{"title": "hi", "url": "https://i.example/1.png", "post_hint": "image"}]}"#,
    )
    .expect("fixture should parse");

    let items = feeds.fetch("/r/memes").await.expect("feed should exist");

    assert_eq!(items.len(), 1);
    assert!(items.first().is_some_and(|item| item.is_image() && item.body.is_empty()));
}

#[rstest]
fn malformed_feed_fixtures_are_rejected() {
    assert!(InMemoryFeedSource::from_json("[1, 2]").is_err());
}

#[rstest]
fn builtin_commands_register_once() {
    let registry = CommandRegistry::new();
    let ports = BuiltinPorts {
        feeds: Arc::new(InMemoryFeedSource::new()),
        clips: Arc::new(InMemoryAudioOpener::new()),
    };

    register_builtin(&registry, &ports).expect("first registration should succeed");
    let again = register_builtin(&registry, &ports);

    assert_eq!(registry.count().expect("count should succeed"), 9);
    assert!(matches!(
        again,
        Err(BuiltinRegistrationError::Registry(RegistryError::DuplicateTrigger { .. }))
    ));
}
