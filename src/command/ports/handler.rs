//! The command handler contract.

use async_trait::async_trait;

use super::InvocationContext;
use crate::command::domain::{CommandResponse, HandlerError};

/// Result of running a handler. `Ok(None)` means nothing to deliver.
pub type HandlerResult = Result<Option<CommandResponse>, HandlerError>;

/// Business logic behind a command.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Runs the command for one invocation.
    ///
    /// # Errors
    ///
    /// Returns [`HandlerError`] whose message is shown to the user.
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult;
}

/// Adapts a synchronous closure into a [`CommandHandler`].
pub struct FnHandler<F>(F);

/// Wraps a synchronous closure as a handler.
#[must_use]
pub const fn handler_fn<F>(handler: F) -> FnHandler<F>
where
    F: Fn(&InvocationContext) -> HandlerResult + Send + Sync,
{
    FnHandler(handler)
}

#[async_trait]
impl<F> CommandHandler for FnHandler<F>
where
    F: Fn(&InvocationContext) -> HandlerResult + Send + Sync,
{
    async fn run(&self, ctx: &InvocationContext) -> HandlerResult {
        (self.0)(ctx)
    }
}
