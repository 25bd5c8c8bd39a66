//! Gates that consult the gateway.

use tracing::{trace, warn};

use crate::command::domain::CommandDescriptor;
use crate::gateway::{
    domain::{Capability, ChannelId},
    ports::MessageGateway,
};

/// Returns the capabilities the bot lacks for `command` in `channel`.
///
/// A failed capability lookup lets the command through: the platform
/// re-validates privileged operations itself.
pub(super) async fn missing_capabilities(
    gateway: &dyn MessageGateway,
    channel: &ChannelId,
    command: &CommandDescriptor,
) -> Vec<Capability> {
    let required = command.required_capabilities();
    if required.is_empty() {
        return Vec::new();
    }
    match gateway.bot_capabilities(channel).await {
        Ok(granted) => required.missing_from(&granted),
        Err(err) => {
            warn!(
                command = command.canonical_trigger(),
                channel = %channel,
                error = %err,
                "capability lookup failed, allowing command"
            );
            Vec::new()
        }
    }
}

/// Returns `true` when `command` may run in `channel`.
///
/// Adult-content commands need an adult channel; a failed lookup counts
/// as a regular channel.
pub(super) async fn nsfw_allowed(
    gateway: &dyn MessageGateway,
    channel: &ChannelId,
    command: &CommandDescriptor,
) -> bool {
    if !command.is_nsfw() {
        return true;
    }
    match gateway.channel_is_nsfw(channel).await {
        Ok(flagged) => flagged,
        Err(err) => {
            trace!(channel = %channel, error = %err, "channel lookup failed");
            false
        }
    }
}
