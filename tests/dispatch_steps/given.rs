//! Given steps for command dispatch BDD scenarios.

use std::sync::Arc;

use eyre::WrapErr;
use memer::command::{
    domain::{CommandDescriptor, CommandResponse},
    ports::{HandlerResult, handler_fn},
};
use memer::gateway::domain::TenantId;
use memer::handlers::{
    domain::FeedItem,
    services::{BuiltinPorts, register_builtin},
};
use memer::tenant::{domain::DEFAULT_PREFIX, ports::TenantConfigRepository};
use rstest_bdd_macros::given;

use super::world::{DispatchWorld, SHOWER_THOUGHTS, TENANT, run_async};

#[given(r#"an echo command answering to "{first}" and "{second}""#)]
fn echo_command(
    world: &mut DispatchWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let descriptor =
        CommandDescriptor::new([first, second]).wrap_err("build echo descriptor")?;
    world
        .registry
        .register(
            descriptor,
            handler_fn(|ctx| -> HandlerResult {
                Ok(Some(CommandResponse::text(format!(
                    "ran {}",
                    ctx.command().canonical_trigger()
                ))))
            }),
        )
        .wrap_err("register echo command")
}

#[given(r#"a command "{trigger}" that panics"#)]
fn panicking_command(world: &mut DispatchWorld, trigger: String) -> Result<(), eyre::Report> {
    let descriptor = CommandDescriptor::new([trigger]).wrap_err("build panicking descriptor")?;
    world
        .registry
        .register(
            descriptor,
            handler_fn(|_ctx| -> HandlerResult { panic!("handler blew up") }),
        )
        .wrap_err("register panicking command")
}

#[given(r#"the tenant has disabled "{trigger}""#)]
fn tenant_disabled(world: &mut DispatchWorld, trigger: String) -> Result<(), eyre::Report> {
    let tenant = TenantId::new(TENANT);
    run_async(world.tenants.get_or_create(&tenant, DEFAULT_PREFIX))
        .wrap_err("create tenant configuration")?;
    run_async(world.tenants.disable_commands(&tenant, &[trigger]))
        .wrap_err("disable command for tenant")?;
    Ok(())
}

#[given("the built-in commands")]
fn builtin_commands(world: &mut DispatchWorld) -> Result<(), eyre::Report> {
    let ports = BuiltinPorts {
        feeds: Arc::clone(&world.feeds) as _,
        clips: Arc::clone(&world.clips) as _,
    };
    register_builtin(&world.registry, &ports).wrap_err("register built-in commands")
}

#[given("the shower thoughts feed has {count:usize} posts")]
fn shower_thoughts_posts(world: &mut DispatchWorld, count: usize) {
    let posts = (0..count)
        .map(|index| FeedItem {
            title: format!("thought {index}"),
            permalink: format!("/r/showerthoughts/{index}"),
            author: "thinker".to_owned(),
            body: format!("body {index}"),
            ..FeedItem::default()
        })
        .collect();
    world.feeds.publish(SHOWER_THOUGHTS, posts);
}
