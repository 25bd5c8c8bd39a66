//! Registration of the built-in command set.

use std::sync::Arc;
use thiserror::Error;

use super::{
    FeedCommand, HelpCommand, PrefixCommand, SoundCommand, StopCommand, ToggleCommand, ToggleMode,
    VOICE_CATEGORY,
};
use crate::command::{
    domain::{CommandDescriptor, CommandDomainError},
    services::{CommandRegistry, RegistryError},
};
use crate::handlers::{
    domain::FeedKind,
    ports::{AudioOpener, FeedSource},
};

/// Sources the built-in handlers read content from.
#[derive(Clone)]
pub struct BuiltinPorts {
    /// Posts for feed commands.
    pub feeds: Arc<dyn FeedSource>,
    /// Clips for sound commands.
    pub clips: Arc<dyn AudioOpener>,
}

/// Errors raised while registering the built-in commands.
#[derive(Debug, Error)]
pub enum BuiltinRegistrationError {
    /// A descriptor was malformed.
    #[error(transparent)]
    Descriptor(#[from] CommandDomainError),
    /// The registry refused a command.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

fn command(
    triggers: &[&str],
    description: &str,
    category: &str,
) -> Result<CommandDescriptor, CommandDomainError> {
    Ok(CommandDescriptor::new(triggers.iter().copied())?
        .with_description(description)
        .with_category(category))
}

/// Registers the built-in commands against `registry`.
///
/// # Errors
///
/// Returns [`BuiltinRegistrationError`] when a trigger is already taken.
pub fn register_builtin(
    registry: &CommandRegistry,
    ports: &BuiltinPorts,
) -> Result<(), BuiltinRegistrationError> {
    registry.register(
        HelpCommand::describe(command(
            &["help", "cmds", "commands"],
            "See a list of commands available.",
            "Utility",
        )?),
        HelpCommand,
    )?;
    registry.register(
        PrefixCommand::describe(
            command(&["prefix"], "Change the bot's prefix!", "Utility")?
                .with_usage("{command} <prefix of your choice>"),
        ),
        PrefixCommand,
    )?;
    registry.register(
        command(
            &["disable"],
            "Use this command to disable commands you do not wish for your server to use",
            "Utility",
        )?
        .with_usage("{command} <command> [command...]"),
        ToggleCommand::new(ToggleMode::Disable),
    )?;
    registry.register(
        command(
            &["enable"],
            "Use this command to enable disabled commands.",
            "Utility",
        )?
        .with_usage("{command} <command> [command...]"),
        ToggleCommand::new(ToggleMode::Enable),
    )?;

    registry.register(
        FeedCommand::describe(command(&["meirl", "me_irl"], "same tbh", "Memey Commands")?),
        FeedCommand::new(
            Arc::clone(&ports.feeds),
            "/r/me_irl/top/.json?sort=top&t=daily&limit=100",
            FeedKind::Image,
        ),
    )?;
    registry.register(
        FeedCommand::describe(command(
            &["showerthoughts"],
            "Things to think about in the shower",
            "Fun Commands",
        )?),
        FeedCommand::new(
            Arc::clone(&ports.feeds),
            "/r/showerthoughts/top/.json?sort=top&t=week&limit=100",
            FeedKind::Text,
        ),
    )?;

    registry.register(
        SoundCommand::describe(command(
            &["airhorn", "horn"],
            "Who needs a bot just for airhorns when your meme bot does it all?",
            VOICE_CATEGORY,
        )?),
        SoundCommand::new(Arc::clone(&ports.clips), ["horns/1.opus", "horns/2.opus"])
            .with_reaction("\u{1f601}")
            .with_busy_message(
                "I only have one airhorn, dude. Please wait until the current sound is done",
            ),
    )?;
    registry.register(
        SoundCommand::describe(command(&["fart"], "Fart in your voice channel!", VOICE_CATEGORY)?),
        SoundCommand::new(
            Arc::clone(&ports.clips),
            (1..=5).map(|clip| format!("farts/{clip}.opus")),
        )
        .with_reaction("\u{1f4a8}")
        .with_busy_message("I can only fart one at a time! Please wait."),
    )?;
    registry.register(
        command(&["stop"], "Stop the sound that's playing", VOICE_CATEGORY)?,
        StopCommand,
    )?;
    Ok(())
}
