//! Error types for query building.
//!
//! Every variant signals invalid caller input; none represents a system or
//! environment failure. Errors are raised at the offending call (mutators)
//! or at render time (the disjunction count check) and never leave the
//! builder partially mutated.

use thiserror::Error;

/// All possible errors raised while accumulating filters or rendering the
/// search query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// A word-adding operation was given an empty string.
    #[error("word cannot be empty")]
    EmptyWord,

    /// A username failed syntactic validation.
    #[error("invalid username: '{0}'")]
    InvalidUsername(String),

    /// A hashtag failed syntactic validation.
    #[error("invalid hashtag: '{0}'")]
    InvalidHashtag(String),

    /// Fewer than two "any of these words" terms were present at render time.
    #[error("need at least two \"any\" words to build an OR group")]
    NotEnoughAnyWords,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QueryError>;
