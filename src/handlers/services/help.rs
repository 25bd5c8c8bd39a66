//! The `help` command.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::command::{
    domain::{CommandDescriptor, CommandResponse},
    ports::{CommandHandler, HandlerResult, InvocationContext},
};
use crate::gateway::domain::{Capability, Embed};

/// Category shown for commands registered without one.
pub const UNCATEGORISED: &str = "Other";

/// Reply when the requested command does not exist.
pub const COMMAND_NOT_FOUND: &str = "Command not found.";

/// Lists commands by category or describes one command.
#[derive(Debug, Clone, Copy, Default)]
pub struct HelpCommand;

impl HelpCommand {
    /// Applies the help-command defaults to `descriptor`.
    #[must_use]
    pub fn describe(descriptor: CommandDescriptor) -> CommandDescriptor {
        descriptor.requiring(Capability::EmbedLinks)
    }

    fn overview(commands: &[Arc<CommandDescriptor>]) -> Embed {
        let mut categories: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for command in commands.iter().filter(|command| !command.is_owner_only()) {
            let category = match command.category() {
                "" => UNCATEGORISED,
                named => named,
            };
            categories
                .entry(category)
                .or_default()
                .push(command.canonical_trigger());
        }

        categories.into_iter().fold(
            Embed::new().with_title("Available Commands"),
            |embed, (category, mut triggers)| {
                triggers.sort_unstable();
                embed.with_field(category, triggers.join(", "), false)
            },
        )
    }

    fn details(command: &CommandDescriptor, prefix: &str) -> Embed {
        Embed::new()
            .with_field("Description:", command.description(), false)
            .with_field("Usage:", format!("```{}```", command.usage_for(prefix)), false)
            .with_field("Triggers:", command.triggers().join(", "), false)
    }
}

#[async_trait]
impl CommandHandler for HelpCommand {
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        let Some(name) = ctx.args().first() else {
            let commands = ctx.registry().list_all()?;
            return Ok(Some(CommandResponse::embed(Self::overview(&commands))));
        };

        match ctx.registry().lookup(name)? {
            Some(entry) => Ok(Some(CommandResponse::embed(Self::details(
                entry.descriptor(),
                ctx.tenant_config().prefix(),
            )))),
            None => Ok(Some(CommandResponse::text(COMMAND_NOT_FOUND))),
        }
    }
}
