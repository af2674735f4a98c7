//! Common lexer module
//!
//! This module contains the token source contract the parser is written against, and the
//! errors lexer construction can report.

use crate::rolemark::token::Token;
use std::fmt::Debug;
use thiserror::Error;

/// A rewindable source of tokens.
///
/// Implementations must be a pure function of position: rolling back to a checkpoint and
/// requesting tokens again yields exactly the tokens that were produced the first time.
/// Once the end of input is reached, every further request returns an EndOfInput token.
pub trait TokenSource {
    /// Opaque position marker
    type Checkpoint: Copy + Debug;

    /// Advance and return the next token
    fn next_token(&mut self) -> Token;

    /// Capture the current position
    fn checkpoint(&self) -> Self::Checkpoint;

    /// Rewind to a previously captured position. Rolling back to a checkpoint that this
    /// source never produced breaks the contract and may panic.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}

/// Errors that can occur while configuring a lexer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A marker prefix is empty or spans lines
    #[error("Invalid {name}: {reason}")]
    InvalidMarker { name: &'static str, reason: String },
    /// A role name that could never be recognized at the start of a line
    #[error("Invalid role name '{0}': expected a letter followed by letters, digits, '_' or '-'")]
    InvalidRole(String),
}
