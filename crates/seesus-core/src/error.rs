//! Error types for seesus.

use thiserror::Error;

/// Result type for seesus operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading, editing or evaluating rules.
#[derive(Debug, Error)]
pub enum Error {
    /// The statement handed to the matcher is not usable text.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Why the statement was rejected.
        reason: String,
    },

    /// An edit referenced a goal that is not in the registry.
    #[error("Unknown goal: {goal_id}")]
    UnknownGoal {
        /// The goal id that failed validation.
        goal_id: String,
    },

    /// A rule pattern does not compile as a regular expression.
    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Compiler or limit diagnostic.
        reason: String,
    },

    /// A match type string is neither `direct` nor `indirect`.
    #[error("Invalid match type '{0}': use 'direct' or 'indirect'")]
    InvalidMatchType(String),

    /// A goal, target or rule identifier is malformed.
    #[error("Invalid identifier '{id}': {reason}")]
    InvalidId {
        /// The identifier as given.
        id: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A data set could not be turned into a registry and rule table.
    #[error("Failed to load data from {source_name}: {reason}")]
    Load {
        /// File path or name of the embedded data set.
        source_name: String,
        /// Description of the problem.
        reason: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidPattern`].
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Shorthand for [`Error::Load`].
    pub fn load(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Load {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
