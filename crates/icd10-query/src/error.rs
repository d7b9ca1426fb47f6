//! Error types for classification queries.

use thiserror::Error;

/// Errors produced by the fail-fast query tier.
///
/// Classification predicates (`is_chapter`, `is_block`, ...) never fail;
/// every operation that must return data about a specific node reports an
/// unresolvable input through this type instead of returning a partial
/// result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The queried code does not resolve to any node, even after
    /// separator normalization. Carries the code as the caller wrote it.
    #[error("the code \"{0}\" does not exist")]
    UnknownCode(String),
}

/// Result type for classification queries.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
