//! Authorisation shared by the tenant-management commands.

use tracing::debug;

use crate::command::ports::InvocationContext;
use crate::gateway::domain::Capability;

/// Returns `true` when the author may change tenant settings.
///
/// Operators always may. Everyone else needs Manage Server in the invoking
/// channel; a failed lookup denies.
pub(super) async fn may_manage_tenant(ctx: &InvocationContext) -> bool {
    if ctx.is_operator() {
        return true;
    }
    match ctx.author_capabilities().await {
        Ok(granted) => granted.contains(Capability::ManageServer),
        Err(err) => {
            debug!(user = %ctx.author().id(), error = %err, "member capability lookup failed");
            false
        }
    }
}
