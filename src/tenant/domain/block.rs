//! Block-list entries.

use serde::{Deserialize, Serialize};

/// What a block entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// A single user account.
    User,
    /// A whole tenant.
    Tenant,
}

/// A blocked user or tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Blocked user or tenant id.
    pub id: String,
    /// Kind of the blocked id.
    pub kind: BlockKind,
    /// Free-form reason kept for operators.
    pub reason: Option<String>,
}

impl BlockEntry {
    /// Creates a block entry without a reason.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            kind,
            reason: None,
        }
    }

    /// Records why the entry was blocked.
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}
