//! Handler-facing contracts.

pub mod context;
pub mod handler;

pub use context::{InvocationContext, InvocationParams, InvocationServices};
pub use handler::{CommandHandler, FnHandler, HandlerResult, handler_fn};
