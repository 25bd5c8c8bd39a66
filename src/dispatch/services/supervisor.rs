//! Panic-isolated handler execution.

use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

use crate::command::ports::{CommandHandler, InvocationContext};
use crate::cooldown::ports::CooldownRepository;
use crate::dispatch::domain::{ExecutionOutcome, HANDLER_PANIC_MESSAGE, handler_failure};
use crate::gateway::{domain::OutboundMessage, ports::MessageGateway};

/// One accepted invocation, ready to run on its own task.
pub(super) struct Execution {
    pub(super) handler: Arc<dyn CommandHandler>,
    pub(super) context: InvocationContext,
    pub(super) gateway: Arc<dyn MessageGateway>,
    pub(super) cooldowns: Arc<dyn CooldownRepository>,
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

impl Execution {
    /// Runs the handler, then commits the cooldown and delivers the
    /// response. Failures and panics are reported to the channel.
    pub(super) async fn run(self) -> ExecutionOutcome {
        let ctx = &self.context;
        let command = ctx.command().canonical_trigger();
        let user = ctx.author().id();
        let tenant = ctx.tenant_id();
        debug!(command, user = %user, tenant = %tenant, args = ?ctx.args(), "executing command");

        let started = Instant::now();
        let result = AssertUnwindSafe(self.handler.run(ctx)).catch_unwind().await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match result {
            Err(payload) => {
                error!(
                    command,
                    user = %user,
                    tenant = %tenant,
                    panic = %panic_message(payload.as_ref()),
                    "command panicked"
                );
                self.deliver(OutboundMessage::text(HANDLER_PANIC_MESSAGE))
                    .await;
                ExecutionOutcome::Panicked
            }
            Ok(Err(err)) => {
                error!(
                    command,
                    user = %user,
                    tenant = %tenant,
                    args = ?ctx.args(),
                    duration_ms,
                    error = %err,
                    "command error"
                );
                self.deliver(handler_failure(&err)).await;
                ExecutionOutcome::Failed(err.message().to_owned())
            }
            Ok(Ok(response)) => {
                if let Err(err) = self
                    .cooldowns
                    .commit(command, user, ctx.command().cooldown())
                    .await
                {
                    warn!(command, user = %user, error = %err, "cooldown commit failed");
                }
                let responded = match response {
                    Some(reply) => {
                        let outbound = reply.into_outbound(ctx.message().id());
                        !outbound.is_empty() && self.deliver(outbound).await
                    }
                    None => false,
                };
                debug!(command, duration_ms, responded, "command completed");
                ExecutionOutcome::Completed { responded }
            }
        }
    }

    async fn deliver(&self, message: OutboundMessage) -> bool {
        let channel = self.context.channel_id();
        match self.gateway.send(channel, message).await {
            Ok(()) => true,
            Err(err) => {
                error!(channel = %channel, error = %err, "failed to send response");
                false
            }
        }
    }
}
