//! The `prefix` command.

use async_trait::async_trait;
use std::time::Duration;

use super::access::may_manage_tenant;
use crate::command::{
    domain::{CommandDescriptor, CommandResponse},
    ports::{CommandHandler, HandlerResult, InvocationContext},
};
use crate::gateway::domain::{Capability, Embed};
use crate::tenant::domain::MAX_PREFIX_LEN;

/// Changes the invoking tenant's literal prefix.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixCommand;

impl PrefixCommand {
    /// Applies the prefix-command defaults to `descriptor`.
    #[must_use]
    pub fn describe(descriptor: CommandDescriptor) -> CommandDescriptor {
        descriptor
            .with_cooldown(Duration::from_secs(5))
            .requiring(Capability::EmbedLinks)
    }
}

#[async_trait]
impl CommandHandler for PrefixCommand {
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        if !may_manage_tenant(ctx).await {
            return Ok(Some(CommandResponse::text(
                "You are not authorized to use this command. You must have `Manage Server` to change the prefix.",
            )));
        }

        let current = ctx.tenant_config().prefix();
        if ctx.args().is_empty() {
            return Ok(Some(CommandResponse::text(format!(
                "What do you want your new prefix to be?\n\nExample: `{current} prefix pepe`"
            ))));
        }

        let requested = ctx.args().join(" ").to_lowercase();
        let length = requested.chars().count();
        if length > MAX_PREFIX_LEN {
            return Ok(Some(CommandResponse::text(format!(
                "Your prefix can't be over {MAX_PREFIX_LEN} characters long. You're {} characters over the limit.",
                length.saturating_sub(MAX_PREFIX_LEN)
            ))));
        }
        if requested == current {
            return Ok(Some(CommandResponse::text(format!(
                "`{current}` is already your current prefix."
            ))));
        }

        let updated = ctx.tenants().set_prefix(ctx.tenant_id(), &requested).await?;
        Ok(Some(CommandResponse::embed(Embed::new().with_description(
            format!("Prefix successfully changed to `{}`.", updated.prefix()),
        ))))
    }
}
