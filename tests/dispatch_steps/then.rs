//! Then steps for command dispatch BDD scenarios.

use std::time::Duration;

use memer::cooldown::ports::CooldownRepository;
use memer::dispatch::domain::{DropReason, ExecutionOutcome, Refusal};
use memer::gateway::domain::UserId;
use rstest_bdd_macros::then;

use super::world::{DispatchWorld, LastOutcome, run_async};

fn executed(world: &DispatchWorld) -> Result<&ExecutionOutcome, eyre::Report> {
    match world.last.as_ref() {
        Some(LastOutcome::Executed(outcome)) => Ok(outcome),
        Some(LastOutcome::Settled(outcome)) => {
            Err(eyre::eyre!("expected an execution, message settled as {outcome:?}"))
        }
        None => Err(eyre::eyre!("no message has been sent in this scenario")),
    }
}

#[then("the execution completes with a response")]
fn execution_completes(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let outcome = executed(world)?;
    if *outcome != (ExecutionOutcome::Completed { responded: true }) {
        return Err(eyre::eyre!("expected a delivered response, got {outcome:?}"));
    }
    Ok(())
}

#[then("the execution panicked")]
fn execution_panicked(world: &DispatchWorld) -> Result<(), eyre::Report> {
    let outcome = executed(world)?;
    if *outcome != ExecutionOutcome::Panicked {
        return Err(eyre::eyre!("expected a panicked execution, got {outcome:?}"));
    }
    Ok(())
}

#[then(r#"the last reply is "{text}""#)]
fn last_reply(world: &DispatchWorld, text: String) -> Result<(), eyre::Report> {
    let texts = world.gateway.sent_texts();
    match texts.last() {
        Some(last) if *last == text => Ok(()),
        other => Err(eyre::eyre!("expected last reply '{text}', found {other:?}")),
    }
}

#[then(r#"user "{user}" is cooling down on "{trigger}""#)]
fn user_cooling_down(
    world: &DispatchWorld,
    user: String,
    trigger: String,
) -> Result<(), eyre::Report> {
    let remaining = run_async(world.cooldowns.remaining(&trigger, &UserId::new(user)))
        .map_err(|err| eyre::eyre!("cooldown lookup failed: {err}"))?;
    if remaining == Duration::ZERO {
        return Err(eyre::eyre!("expected an open cooldown on '{trigger}'"));
    }
    Ok(())
}

#[then("the message is refused with a cooldown")]
fn refused_with_cooldown(world: &DispatchWorld) -> Result<(), eyre::Report> {
    match world.last.as_ref() {
        Some(LastOutcome::Settled(outcome))
            if matches!(outcome.refusal(), Some(Refusal::Cooldown { .. })) =>
        {
            Ok(())
        }
        _ => Err(eyre::eyre!("expected a cooldown refusal")),
    }
}

#[then("the message is dropped as disabled")]
fn dropped_as_disabled(world: &DispatchWorld) -> Result<(), eyre::Report> {
    match world.last.as_ref() {
        Some(LastOutcome::Settled(outcome)) if outcome.dropped() == Some(DropReason::Disabled) => {
            Ok(())
        }
        _ => Err(eyre::eyre!("expected the message to be dropped as disabled")),
    }
}

#[then("{count:usize} messages have been sent")]
fn messages_sent(world: &DispatchWorld, count: usize) -> Result<(), eyre::Report> {
    let sent = world.gateway.sent().len();
    if sent != count {
        return Err(eyre::eyre!("expected {count} sent messages, found {sent}"));
    }
    Ok(())
}

#[then(r#"the embed titles sent are "{titles}""#)]
fn embed_titles(world: &DispatchWorld, titles: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = titles.split(", ").collect();
    let sent: Vec<String> = world
        .gateway
        .sent()
        .into_iter()
        .filter_map(|sent| sent.message.embed.and_then(|embed| embed.title))
        .collect();
    if sent != expected {
        return Err(eyre::eyre!("expected embed titles {expected:?}, found {sent:?}"));
    }
    Ok(())
}
