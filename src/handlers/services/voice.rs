//! Sound commands and the stop command.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

use crate::audio::ports::AudioSessionError;
use crate::command::{
    domain::{CommandDescriptor, CommandResponse},
    ports::{CommandHandler, HandlerResult, InvocationContext},
};
use crate::gateway::domain::{Capability, CapabilitySet};
use crate::handlers::ports::AudioOpener;

/// Category sound commands are listed under.
pub const VOICE_CATEGORY: &str = "Voice Commands";

/// Cooldown sound commands use unless configured otherwise.
pub const SOUND_COOLDOWN: Duration = Duration::from_secs(10);

/// Reply when the author is not in a voice channel.
pub const JOIN_VOICE_MESSAGE: &str = "join a voice channel fam";

/// Reply when the tenant already has a live session.
pub const DEFAULT_BUSY_MESSAGE: &str =
    "I'm already playing something. Please wait until the current sound is done.";

/// Reply when the bot cannot join or talk in the author's channel.
pub const VOICE_PERMISSIONS_MESSAGE: &str = "Make sure I have `connect` and `speak` permissions in the voice channel!";

/// Reply when a sound command has no clips configured.
pub const NO_CLIPS_MESSAGE: &str = "This sound has no clips.";

/// Reply to `stop` when nothing is playing.
pub const NOT_PLAYING_MESSAGE: &str = "I'm not playing anything right now!";

/// Reaction added when playback is stopped.
pub const STOP_REACTION: &str = "\u{274c}";

/// Plays one of a set of clips in the author's voice channel.
pub struct SoundCommand {
    opener: Arc<dyn AudioOpener>,
    clips: Vec<String>,
    reaction: Option<String>,
    busy_message: String,
}

impl SoundCommand {
    /// Creates a sound command cycling through `clips`.
    #[must_use]
    pub fn new<I, S>(opener: Arc<dyn AudioOpener>, clips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            opener,
            clips: clips.into_iter().map(Into::into).collect(),
            reaction: None,
            busy_message: DEFAULT_BUSY_MESSAGE.to_owned(),
        }
    }

    /// Reacts with `emoji` when playback starts.
    #[must_use]
    pub fn with_reaction(mut self, emoji: impl Into<String>) -> Self {
        self.reaction = Some(emoji.into());
        self
    }

    /// Replaces the reply sent while the tenant is busy.
    #[must_use]
    pub fn with_busy_message(mut self, message: impl Into<String>) -> Self {
        self.busy_message = message.into();
        self
    }

    /// Applies the sound-command defaults to `descriptor`.
    #[must_use]
    pub fn describe(descriptor: CommandDescriptor) -> CommandDescriptor {
        descriptor
            .with_category(VOICE_CATEGORY)
            .with_cooldown(SOUND_COOLDOWN)
            .requiring(Capability::AddReactions)
    }

    fn voice_capabilities() -> CapabilitySet {
        CapabilitySet::new()
            .with(Capability::Connect)
            .with(Capability::Speak)
    }
}

#[async_trait]
impl CommandHandler for SoundCommand {
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        let channel = match ctx.author_voice_channel().await {
            Ok(Some(channel)) => channel,
            Ok(None) => return Ok(Some(CommandResponse::text(JOIN_VOICE_MESSAGE))),
            Err(err) => {
                debug!(user = %ctx.author().id(), error = %err, "voice state lookup failed");
                return Ok(Some(CommandResponse::text(JOIN_VOICE_MESSAGE)));
            }
        };

        let tenant = ctx.tenant_id();
        if ctx.audio().is_playing(tenant) {
            return Ok(Some(CommandResponse::text(self.busy_message.as_str())));
        }

        if let Ok(granted) = ctx.bot_capabilities_in(&channel).await
            && !Self::voice_capabilities().missing_from(&granted).is_empty()
        {
            return Ok(Some(CommandResponse::text(VOICE_PERMISSIONS_MESSAGE)));
        }

        if self.clips.is_empty() {
            return Ok(Some(CommandResponse::text(NO_CLIPS_MESSAGE)));
        }
        let index = ctx.rotation().next(
            tenant,
            ctx.command().canonical_trigger(),
            self.clips.len(),
        )?;
        let Some(clip) = self.clips.get(index) else {
            return Ok(Some(CommandResponse::text(NO_CLIPS_MESSAGE)));
        };
        let source = match self.opener.open(clip).await {
            Ok(source) => source,
            Err(err) => {
                return Ok(Some(CommandResponse::text(format!(
                    "Error playing audio: {err}"
                ))));
            }
        };

        if let Some(emoji) = &self.reaction
            && let Err(err) = ctx.react(emoji).await
        {
            warn!(channel = %ctx.channel_id(), error = %err, "failed to add reaction");
        }

        match ctx.audio().play(tenant, &channel, source).await {
            Ok(session) => {
                debug!(tenant = %tenant, session = %session, clip = %clip, "sound started");
                Ok(None)
            }
            Err(AudioSessionError::AlreadyPlaying(_) | AudioSessionError::TearingDown(_)) => {
                Ok(Some(CommandResponse::text(self.busy_message.as_str())))
            }
            Err(err) => Ok(Some(CommandResponse::text(format!(
                "Error playing audio: {err}"
            )))),
        }
    }
}

/// Stops playback in the author's tenant.
///
/// A session that is already tearing down counts as not playing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopCommand;

#[async_trait]
impl CommandHandler for StopCommand {
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        match ctx.author_voice_channel().await {
            Ok(Some(_)) => {}
            Ok(None) | Err(_) => return Ok(Some(CommandResponse::text(JOIN_VOICE_MESSAGE))),
        }
        let audio = ctx.audio();
        if !audio.is_playing(ctx.tenant_id()) {
            return Ok(Some(CommandResponse::text(NOT_PLAYING_MESSAGE)));
        }
        audio.stop(ctx.tenant_id());
        if let Err(err) = ctx.react(STOP_REACTION).await {
            warn!(channel = %ctx.channel_id(), error = %err, "failed to add reaction");
        }
        Ok(None)
    }
}
