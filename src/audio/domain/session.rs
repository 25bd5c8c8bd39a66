//! Session identity and lifecycle states.

use crate::gateway::domain::ChannelId;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of one voice session.
///
/// A tenant reuses its slot across sessions; the id tells a late teardown
/// apart from the session that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random session identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a live session. An absent session is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceSessionState {
    /// Connection handshake in progress.
    Joining,
    /// Frames are being streamed.
    Playing,
    /// Cancellation requested; teardown pending.
    Stopping,
}

impl VoiceSessionState {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Joining => "joining",
            Self::Playing => "playing",
            Self::Stopping => "stopping",
        }
    }
}

impl fmt::Display for VoiceSessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Session identifier.
    pub id: SessionId,
    /// Voice channel the session targets.
    pub channel: ChannelId,
    /// Current state.
    pub state: VoiceSessionState,
}

/// Why a streaming loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamEnd {
    /// The source was exhausted or could not be read.
    EndOfSource,
    /// Stop or disconnect was requested.
    Stopped,
    /// The sink did not accept a frame within the send timeout.
    SendTimeout,
    /// The sink's receiving side went away.
    SinkClosed,
    /// The loop panicked.
    Faulted,
}

impl StreamEnd {
    /// Returns the canonical lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EndOfSource => "end_of_source",
            Self::Stopped => "stopped",
            Self::SendTimeout => "send_timeout",
            Self::SinkClosed => "sink_closed",
            Self::Faulted => "faulted",
        }
    }
}

impl fmt::Display for StreamEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
