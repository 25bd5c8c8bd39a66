//! Domain model for commands.

mod descriptor;
mod error;
mod response;

pub use descriptor::{CommandDescriptor, USAGE_PLACEHOLDER};
pub use error::{CommandDomainError, HandlerError};
pub use response::CommandResponse;
