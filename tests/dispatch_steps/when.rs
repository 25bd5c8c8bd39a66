//! When steps for command dispatch BDD scenarios.

use memer::dispatch::domain::{DispatchOutcome, ExecutionOutcome};
use rstest_bdd_macros::when;

use super::world::{DispatchWorld, LastOutcome, message_from, run_async};

#[when(r#"user "{user}" sends "{content}""#)]
fn user_sends(world: &mut DispatchWorld, user: String, content: String) {
    let dispatched = run_async(world.dispatcher.dispatch(message_from(&user, &content)));
    world.last = Some(match dispatched {
        DispatchOutcome::Spawned(handle) => {
            LastOutcome::Executed(run_async(handle).unwrap_or(ExecutionOutcome::Panicked))
        }
        settled => LastOutcome::Settled(settled),
    });
}
