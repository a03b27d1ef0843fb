//! Error types for target resolution and query evaluation.

use crate::label::Label;

/// A label did not resolve to any target in the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no such target '{label}': {cause}")]
pub struct TargetNotFound {
    pub label: Label,
    pub cause: String,
}

impl TargetNotFound {
    pub fn new(label: Label, cause: impl Into<String>) -> Self {
        Self {
            label,
            cause: cause.into(),
        }
    }
}

/// Fatal query-level failures. Unlike per-label traversal diagnostics, these
/// abort the operation that raised them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// A visibility declaration references a package group that does not
    /// resolve. Visibility cannot be computed partially, so this is fatal.
    #[error("invalid visibility on '{target}': {source}")]
    UnresolvedPackageGroup {
        target: Label,
        #[source]
        source: TargetNotFound,
    },

    #[error(transparent)]
    TargetNotFound(#[from] TargetNotFound),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
