//! Unit tests for the command registry.

use std::sync::Arc;

use crate::command::{
    domain::CommandDescriptor,
    ports::handler_fn,
    services::{CommandRegistry, RegistryError},
};
use rstest::{fixture, rstest};

fn descriptor(triggers: &[&str], category: &str) -> CommandDescriptor {
    CommandDescriptor::new(triggers.iter().copied())
        .expect("descriptor should build")
        .with_category(category)
}

fn register(registry: &CommandRegistry, triggers: &[&str], category: &str) {
    registry
        .register(descriptor(triggers, category), handler_fn(|_| Ok(None)))
        .expect("registration should succeed");
}

#[fixture]
fn registry() -> CommandRegistry {
    let registry = CommandRegistry::new();
    register(&registry, &["meme", "memes"], "Meme Commands");
    register(&registry, &["joke"], "Fun Commands");
    register(&registry, &["airhorn"], "Voice Commands");
    register(&registry, &["eval"], "");
    registry
}

#[rstest]
#[case("meme")]
#[case("MEME")]
#[case("MeMeS")]
fn lookup_ignores_case(registry: CommandRegistry, #[case] trigger: &str) {
    let entry = registry
        .lookup(trigger)
        .expect("lookup should succeed")
        .expect("command should exist");

    assert_eq!(entry.descriptor().canonical_trigger(), "meme");
}

#[rstest]
fn unknown_trigger_is_not_found(registry: CommandRegistry) {
    assert!(registry.lookup("nope").expect("lookup should succeed").is_none());
}

#[rstest]
fn duplicate_trigger_is_rejected(registry: CommandRegistry) {
    let result = registry.register(descriptor(&["dank", "MEMES"], ""), handler_fn(|_| Ok(None)));

    assert!(matches!(
        result,
        Err(RegistryError::DuplicateTrigger { trigger, existing })
            if trigger == "memes" && existing == "meme"
    ));
    assert_eq!(registry.count().expect("count should succeed"), 4);
}

#[rstest]
fn permissive_registry_keeps_first_match() {
    let registry = CommandRegistry::permissive();
    register(&registry, &["meme"], "first");
    register(&registry, &["meme"], "second");

    let entry = registry
        .lookup("meme")
        .expect("lookup should succeed")
        .expect("command should exist");

    assert_eq!(entry.descriptor().category(), "first");
    assert_eq!(registry.count().expect("count should succeed"), 2);
}

#[rstest]
fn projections_reflect_registration(registry: CommandRegistry) {
    let voice = registry
        .list_by_category("voice commands")
        .expect("listing should succeed");
    let all = registry.list_all().expect("listing should succeed");
    let categories = registry.categories().expect("listing should succeed");

    assert_eq!(voice.len(), 1);
    assert_eq!(
        all.iter()
            .map(|command| command.canonical_trigger())
            .collect::<Vec<_>>(),
        vec!["meme", "joke", "airhorn", "eval"]
    );
    assert_eq!(
        categories,
        vec!["Fun Commands", "Meme Commands", "Voice Commands"]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_lookups_during_registration_are_consistent() {
    let registry = Arc::new(CommandRegistry::new());
    register(&registry, &["meme"], "");

    let readers: Vec<_> = (0..16)
        .map(|_| {
            let shared = Arc::clone(&registry);
            tokio::spawn(async move {
                (0..100).all(|_| matches!(shared.lookup("meme"), Ok(Some(_))))
            })
        })
        .collect();
    for index in 0..50 {
        let trigger = format!("cmd{index}");
        register(&registry, &[trigger.as_str()], "");
    }

    for reader in readers {
        assert!(reader.await.expect("reader task should finish"));
    }
    assert_eq!(registry.count().expect("count should succeed"), 51);
}
