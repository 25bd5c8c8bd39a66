//! Domain types for rotation cursors.

mod error;
mod key;

pub use error::RotationError;
pub use key::RotationKey;
