//! The `enable` and `disable` commands.

use async_trait::async_trait;

use super::access::may_manage_tenant;
use crate::command::{
    domain::{CommandResponse, HandlerError},
    ports::{CommandHandler, HandlerResult, InvocationContext},
};
use crate::handlers::domain::code_list;
use crate::tenant::domain::NSFW_TOGGLE;

/// Whether a [`ToggleCommand`] enables or disables commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleMode {
    /// Re-enables disabled commands.
    Enable,
    /// Disables commands in the tenant.
    Disable,
}

impl ToggleMode {
    const fn verb(self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
        }
    }
}

/// Enables or disables commands for the invoking tenant.
#[derive(Debug, Clone, Copy)]
pub struct ToggleCommand {
    mode: ToggleMode,
}

impl ToggleCommand {
    /// Creates the handler for `mode`.
    #[must_use]
    pub const fn new(mode: ToggleMode) -> Self {
        Self { mode }
    }

    /// Maps arguments to canonical triggers, keeping the adult-content
    /// toggle and dropping anything unknown.
    fn normalise(ctx: &InvocationContext) -> Result<Vec<String>, HandlerError> {
        let mut names: Vec<String> = Vec::new();
        for arg in ctx.args() {
            let lowered = arg.to_lowercase();
            let name = match ctx.registry().lookup(&lowered)? {
                Some(entry) => entry.descriptor().canonical_trigger().to_owned(),
                None if lowered == NSFW_TOGGLE => lowered,
                None => continue,
            };
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }
}

#[async_trait]
impl CommandHandler for ToggleCommand {
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        let verb = self.mode.verb();
        if !may_manage_tenant(ctx).await {
            return Ok(Some(CommandResponse::text(format!(
                "You are not authorized to use this command. You must have `Manage Server` to {verb} commands."
            ))));
        }

        let prefix = ctx.tenant_config().prefix();
        if ctx.args().is_empty() {
            return Ok(Some(
                CommandResponse::text(format!(
                    "Specify a command to {verb}, or multiple.\n\nExample: `{prefix} {verb} meme trigger shitsound` or `{prefix} {verb} meme`"
                ))
                .as_reply(),
            ));
        }

        let names = Self::normalise(ctx)?;
        if names.is_empty() {
            return Ok(Some(
                CommandResponse::text("No valid commands specified.").as_reply(),
            ));
        }

        let config = ctx.tenant_config();
        let tenant = ctx.tenant_id();
        match self.mode {
            ToggleMode::Disable => {
                let already: Vec<&String> =
                    names.iter().filter(|name| config.is_disabled(name)).collect();
                if !already.is_empty() {
                    return Ok(Some(CommandResponse::text(format!(
                        "These commands are already disabled:\n\n{}\n\nHow tf do you plan to disable already disabled commands??",
                        code_list(&already)
                    ))));
                }
                ctx.tenants().disable_commands(tenant, &names).await?;
            }
            ToggleMode::Enable => {
                let enabled: Vec<&String> =
                    names.iter().filter(|name| !config.is_disabled(name)).collect();
                if !enabled.is_empty() {
                    return Ok(Some(CommandResponse::text(format!(
                        "These commands aren't disabled:\n\n{}\n\nHow tf do you plan to enable already enabled commands??",
                        code_list(&enabled)
                    ))));
                }
                ctx.tenants().enable_commands(tenant, &names).await?;
            }
        }

        Ok(Some(CommandResponse::text(format!(
            "The following commands have been {verb}d successfully:\n\n{}",
            code_list(&names)
        ))))
    }
}
