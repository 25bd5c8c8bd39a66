//! Narrow rotation interface exposed to command handlers.

use crate::gateway::domain::TenantId;
use crate::rotation::domain::RotationError;

/// Result type for rotation operations.
pub type RotationResult<T> = Result<T, RotationError>;

/// Cursor access for paginated feed commands.
pub trait RotationAccess: Send + Sync {
    /// Returns the stored cursor, `0` when none exists yet.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::Unavailable`] when the store is unusable.
    fn current_index(&self, tenant: &TenantId, command: &str) -> RotationResult<usize>;

    /// Increments the cursor, wrapping to `0` at `size`, and returns the new
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::EmptyResultSet`] when `size` is zero.
    fn advance(&self, tenant: &TenantId, command: &str, size: usize) -> RotationResult<usize>;

    /// Returns the cursor to use for a result set of `size` items and
    /// advances past it in one step.
    ///
    /// A cursor outside `0..size` (the set shrank) is treated as `0`.
    ///
    /// # Errors
    ///
    /// Returns [`RotationError::EmptyResultSet`] when `size` is zero.
    fn next(&self, tenant: &TenantId, command: &str, size: usize) -> RotationResult<usize>;
}
