//! Script parsing errors.

use thiserror::Error;

/// A token in a script that is not a move.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid move {token:?} at position {position}")]
pub struct InvalidToken {
    pub position: usize,
    pub token: String,
}

/// Errors that can occur while reading a move script
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScriptError {
    /// One or more tokens were not move tokens. Holds every offender, in order.
    #[error("script contains {} invalid token(s)", .0.len())]
    InvalidTokens(Vec<InvalidToken>),
}

impl ScriptError {
    pub fn invalid_tokens(&self) -> &[InvalidToken] {
        match self {
            Self::InvalidTokens(errors) => errors,
        }
    }
}
