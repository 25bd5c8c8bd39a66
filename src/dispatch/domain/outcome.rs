//! Dispatch and execution outcomes.

use std::time::Duration;
use tokio::task::JoinHandle;

use crate::gateway::domain::Capability;

/// Why a message was dropped without any reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Sent by an automated account.
    Bot,
    /// Sent outside a tenant.
    DirectMessage,
    /// Author or tenant is blocked.
    Blocked,
    /// Tenant excluded by premium-only mode.
    NotPremium,
    /// No prefix matched or nothing followed it.
    NotACommand,
    /// No command answers to the trigger.
    UnknownCommand,
    /// The registry could not be read.
    RegistryUnavailable,
    /// Operator-only command from a non-operator.
    OwnerOnly,
    /// Tenant disabled the command or its category.
    Disabled,
}

/// Why a message was answered with a refusal instead of running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// Tenant excluded by premium-only mode and used the default prefix.
    NotPremium,
    /// The author's window for this command has not elapsed.
    Cooldown {
        /// Time left in the window.
        remaining: Duration,
    },
    /// The bot lacks capabilities in the channel.
    MissingCapabilities(Vec<Capability>),
    /// Adult-content command outside an adult channel.
    NsfwChannel,
}

/// How a supervised execution ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The handler succeeded and the cooldown was committed.
    Completed {
        /// Whether a response was delivered.
        responded: bool,
    },
    /// The handler returned an error, reported to the user.
    Failed(String),
    /// The handler panicked.
    Panicked,
}

/// Result of dispatching one message.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// Dropped silently.
    Dropped(DropReason),
    /// Answered with a refusal.
    Refused(Refusal),
    /// Handed to its own task.
    Spawned(JoinHandle<ExecutionOutcome>),
}

impl DispatchOutcome {
    /// Returns the drop reason, if dropped.
    #[must_use]
    pub const fn dropped(&self) -> Option<DropReason> {
        match self {
            Self::Dropped(reason) => Some(*reason),
            Self::Refused(_) | Self::Spawned(_) => None,
        }
    }

    /// Returns the refusal, if refused.
    #[must_use]
    pub const fn refusal(&self) -> Option<&Refusal> {
        match self {
            Self::Refused(refusal) => Some(refusal),
            Self::Dropped(_) | Self::Spawned(_) => None,
        }
    }

    /// Waits for a spawned execution. Returns `None` for other outcomes.
    pub async fn finished(self) -> Option<ExecutionOutcome> {
        match self {
            Self::Spawned(handle) => Some(handle.await.unwrap_or(ExecutionOutcome::Panicked)),
            Self::Dropped(_) | Self::Refused(_) => None,
        }
    }
}
