//! Dispatch settings, parsing and outcomes.

mod invocation;
mod messages;
mod outcome;
mod settings;

pub use invocation::{ParsedInvocation, clean_args, parse_invocation};
pub use messages::{
    HANDLER_PANIC_MESSAGE, NSFW_REFUSAL_DESCRIPTION, NSFW_REFUSAL_TITLE, PREMIUM_NOTICE,
    cooldown_refusal, handler_failure, missing_capabilities_refusal, nsfw_refusal,
};
pub use outcome::{DispatchOutcome, DropReason, ExecutionOutcome, Refusal};
pub use settings::DispatchSettings;
