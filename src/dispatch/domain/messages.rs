//! User-facing refusal and failure messages.

use std::time::Duration;

use crate::command::domain::{CommandDescriptor, HandlerError};
use crate::cooldown::domain::render_cooldown_message;
use crate::gateway::domain::{Capability, Embed, OutboundMessage};

/// Sent when a handler panics.
pub const HANDLER_PANIC_MESSAGE: &str =
    "Something went wrong while executing that command. Please try again later.";

/// Sent to non-premium tenants that try to use the bot in premium-only mode.
pub const PREMIUM_NOTICE: &str =
    "This server is not a premium activated server. Want it activated? https://patreon.com/dank";

/// Title of the adult-content refusal.
pub const NSFW_REFUSAL_TITLE: &str = "NSFW not allowed here";

/// Body of the adult-content refusal.
pub const NSFW_REFUSAL_DESCRIPTION: &str = "Use NSFW commands in a NSFW marked channel";

/// Refusal for a command still cooling down.
#[must_use]
pub fn cooldown_refusal(command: &CommandDescriptor, remaining: Duration) -> OutboundMessage {
    OutboundMessage::text(render_cooldown_message(
        command.cooldown_message(),
        remaining,
    ))
}

/// Refusal naming the capabilities the bot lacks.
#[must_use]
pub fn missing_capabilities_refusal(missing: &[Capability]) -> OutboundMessage {
    let names: Vec<&str> = missing.iter().map(|cap| cap.display_name()).collect();
    OutboundMessage::embed(
        Embed::new()
            .with_title("I'm missing permissions!")
            .with_description(format!(
                "I need the following permissions to run this command:\n`{}`\n\nPlease give me these permissions and try again.",
                names.join("`, `")
            )),
    )
}

/// Refusal for an adult-content command outside an adult channel.
#[must_use]
pub fn nsfw_refusal() -> OutboundMessage {
    OutboundMessage::embed(
        Embed::new()
            .with_title(NSFW_REFUSAL_TITLE)
            .with_description(NSFW_REFUSAL_DESCRIPTION),
    )
}

/// Report for a handler that returned an error.
#[must_use]
pub fn handler_failure(err: &HandlerError) -> OutboundMessage {
    OutboundMessage::text(format!("Something went wrong: `{err}`"))
}
