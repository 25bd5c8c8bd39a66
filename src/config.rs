//! Layered bot configuration.
//!
//! Values come from built-in defaults, then an optional TOML file, then
//! `MEMER_`-prefixed environment variables. Nested keys use `__`, so
//! `MEMER_VOICE__SEND_TIMEOUT_MS=500` sets `voice.send_timeout_ms`.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::audio::domain::AudioSettings;
use crate::dispatch::domain::DispatchSettings;
use crate::gateway::domain::{TenantId, UserId};
use crate::tenant::domain::{DEFAULT_PREFIX, MAX_PREFIX_LEN};

/// Prefix of the environment variables read by [`BotConfig::load`].
pub const ENV_PREFIX: &str = "MEMER";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialised.
    #[error("failed to load configuration: {0}")]
    Load(Arc<config::ConfigError>),

    /// The default prefix is empty.
    #[error("default_prefix must not be empty")]
    EmptyPrefix,

    /// The default prefix is too long.
    #[error(
        "default_prefix is {length} characters long, the maximum is {max}",
        max = MAX_PREFIX_LEN
    )]
    PrefixTooLong {
        /// Length of the configured prefix in characters.
        length: usize,
    },

    /// Audio frames would be empty.
    #[error("voice.frame_size must be greater than zero")]
    ZeroFrameSize,

    /// Frame sends would time out immediately.
    #[error("voice.send_timeout_ms must be greater than zero")]
    ZeroSendTimeout,
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        Self::Load(Arc::new(err))
    }
}

/// Voice streaming configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Root directory of the clip library.
    pub audio_path: PathBuf,
    /// Per-frame send timeout in milliseconds.
    pub send_timeout_ms: u64,
    /// Pause after joining before streaming, in milliseconds.
    pub ready_delay_ms: u64,
    /// Bytes per audio frame.
    pub frame_size: usize,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            audio_path: PathBuf::from("assets/audio"),
            send_timeout_ms: millis(AudioSettings::DEFAULT_SEND_TIMEOUT),
            ready_delay_ms: millis(AudioSettings::DEFAULT_READY_DELAY),
            frame_size: AudioSettings::DEFAULT_FRAME_SIZE,
        }
    }
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Top-level bot configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Prefix for tenants that never set one.
    pub default_prefix: String,
    /// Operator user ids.
    #[serde(deserialize_with = "id_list")]
    pub owners: Vec<String>,
    /// The bot's own user id; enables mention prefixes.
    pub bot_user_id: Option<String>,
    /// Restrict the bot to `premium_tenants`.
    pub premium_only: bool,
    /// Tenants served in premium-only mode.
    #[serde(deserialize_with = "id_list")]
    pub premium_tenants: Vec<String>,
    /// Default tracing filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// JSON file of feed posts served by the console harness.
    pub feeds_path: Option<PathBuf>,
    /// Voice settings.
    pub voice: VoiceConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            default_prefix: DEFAULT_PREFIX.to_owned(),
            owners: Vec::new(),
            bot_user_id: None,
            premium_only: false,
            premium_tenants: Vec::new(),
            log_filter: "info".to_owned(),
            feeds_path: None,
            voice: VoiceConfig::default(),
        }
    }
}

/// Accepts either a list or a comma-separated string, so lists can be set
/// from a single environment variable.
fn id_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Ids {
        Joined(String),
        Listed(Vec<String>),
    }

    Ok(match Ids::deserialize(deserializer)? {
        Ids::Joined(joined) => joined
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
            .collect(),
        Ids::Listed(ids) => ids,
    })
}

impl BotConfig {
    /// Loads configuration from `path` (if given and present) and the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or a value fails
    /// validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(path, None)
    }

    /// Loads configuration from `path` and an explicit variable map in
    /// place of the process environment.
    ///
    /// # Errors
    ///
    /// See [`BotConfig::load`].
    pub fn load_with_env<S: BuildHasher>(
        path: Option<&Path>,
        vars: HashMap<String, String, S>,
    ) -> Result<Self, ConfigError> {
        Self::load_from(path, Some(vars.into_iter().collect()))
    }

    fn load_from(
        path: Option<&Path>,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(file) = path {
            builder = builder.add_source(
                File::from(file)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
        let loaded: Self = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(vars),
            )
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let length = self.default_prefix.chars().count();
        if self.default_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        if length > MAX_PREFIX_LEN {
            return Err(ConfigError::PrefixTooLong { length });
        }
        if self.voice.frame_size == 0 {
            return Err(ConfigError::ZeroFrameSize);
        }
        if self.voice.send_timeout_ms == 0 {
            return Err(ConfigError::ZeroSendTimeout);
        }
        Ok(())
    }

    /// Builds the dispatcher settings.
    #[must_use]
    pub fn dispatch_settings(&self) -> DispatchSettings {
        let mut settings = DispatchSettings::new(self.default_prefix.as_str())
            .with_operators(self.owners.iter().map(|id| UserId::new(id.as_str())));
        if let Some(bot) = &self.bot_user_id {
            settings = settings.with_bot_user(bot.as_str());
        }
        if self.premium_only {
            settings = settings.with_premium_tenants(
                self.premium_tenants
                    .iter()
                    .map(|id| TenantId::new(id.as_str())),
            );
        }
        settings
    }

    /// Builds the voice streaming settings.
    #[must_use]
    pub const fn audio_settings(&self) -> AudioSettings {
        AudioSettings::new()
            .with_frame_size(self.voice.frame_size)
            .with_send_timeout(Duration::from_millis(self.voice.send_timeout_ms))
            .with_ready_delay(Duration::from_millis(self.voice.ready_delay_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::{BotConfig, ConfigError};
    use crate::gateway::domain::{TenantId, UserId};
    use rstest::rstest;
    use std::collections::HashMap;
    use std::time::Duration;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect()
    }

    #[rstest]
    fn defaults_apply_without_sources() {
        let config =
            BotConfig::load_with_env(None, HashMap::new()).expect("defaults should load");

        assert_eq!(config, BotConfig::default());
        assert_eq!(config.default_prefix, "pls");
        assert_eq!(config.voice.frame_size, 3840);
        assert_eq!(config.voice.send_timeout_ms, 1000);
        assert_eq!(config.voice.ready_delay_ms, 250);
    }

    #[rstest]
    fn file_values_are_read_and_env_overrides_them() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("memer.toml");
        std::fs::write(
            &path,
            "default_prefix = \"pepe\"\nowners = [\"1\", \"2\"]\n\n[voice]\nsend_timeout_ms = 500\n",
        )
        .expect("config should be written");

        let config = BotConfig::load_with_env(
            Some(&path),
            vars(&[
                ("MEMER_VOICE__SEND_TIMEOUT_MS", "750"),
                ("MEMER_BOT_USER_ID", "42"),
            ]),
        )
        .expect("config should load");

        assert_eq!(config.default_prefix, "pepe");
        assert_eq!(config.owners, vec!["1", "2"]);
        assert_eq!(config.voice.send_timeout_ms, 750);
        assert_eq!(config.bot_user_id.as_deref(), Some("42"));
    }

    #[rstest]
    fn missing_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let path = dir.path().join("absent.toml");

        let config =
            BotConfig::load_with_env(Some(&path), HashMap::new()).expect("defaults should load");

        assert_eq!(config, BotConfig::default());
    }

    #[rstest]
    fn comma_separated_lists_come_from_env() {
        let config = BotConfig::load_with_env(
            None,
            vars(&[
                ("MEMER_PREMIUM_ONLY", "true"),
                ("MEMER_PREMIUM_TENANTS", "g1, g2"),
            ]),
        )
        .expect("config should load");

        let settings = config.dispatch_settings();

        assert!(settings.admits(&TenantId::new("g2")));
        assert!(!settings.admits(&TenantId::new("g3")));
    }

    #[rstest]
    #[case(&[("MEMER_DEFAULT_PREFIX", " ")], "default_prefix must not be empty")]
    #[case(&[("MEMER_VOICE__FRAME_SIZE", "0")], "voice.frame_size must be greater than zero")]
    #[case(&[("MEMER_VOICE__SEND_TIMEOUT_MS", "0")], "voice.send_timeout_ms must be greater than zero")]
    fn invalid_values_are_rejected(#[case] pairs: &[(&str, &str)], #[case] message: &str) {
        let err = BotConfig::load_with_env(None, vars(pairs)).expect_err("config should fail");

        assert_eq!(err.to_string(), message);
    }

    #[rstest]
    fn long_prefix_is_rejected() {
        let config = BotConfig {
            default_prefix: "x".repeat(33),
            ..BotConfig::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::PrefixTooLong { length: 33 })
        ));
    }

    #[rstest]
    fn converts_into_runtime_settings() {
        let config = BotConfig {
            owners: vec!["op".to_owned()],
            ..BotConfig::default()
        };

        let dispatch = config.dispatch_settings();
        let audio = config.audio_settings();

        assert!(dispatch.is_operator(&UserId::new("op")));
        assert!(dispatch.admits(&TenantId::new("anyone")));
        assert_eq!(dispatch.bot_user_id(), None);
        assert_eq!(audio.send_timeout(), Duration::from_secs(1));
        assert_eq!(audio.ready_delay(), Duration::from_millis(250));
        assert_eq!(audio.frame_size(), 3840);
    }
}
