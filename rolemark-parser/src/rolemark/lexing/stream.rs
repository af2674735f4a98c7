//! Vector-backed token stream
//!
//! The whole token sequence is materialized up front, so a checkpoint is just an index and
//! rolling back is an assignment. The cursor never moves past the EndOfInput token, which
//! is what makes the end of the stream idempotent.

use super::common::TokenSource;
use crate::rolemark::token::Token;

/// Position in a [TokenStream]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Checkpoint(usize);

/// A rewindable, in-memory token source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    position: usize,
}

impl TokenStream {
    /// Wrap a token sequence. An EndOfInput token is appended when the sequence does not
    /// already end with one. Tokens after an earlier EndOfInput are unreachable.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_end_of_input) {
            let offset = tokens.last().map(|t| t.span.end).unwrap_or(0);
            tokens.push(Token::end_of_input(offset));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    /// All tokens, EndOfInput included
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Index of the next token to be returned
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl TokenSource for TokenStream {
    type Checkpoint = Checkpoint;

    fn next_token(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        if !token.is_end_of_input() {
            self.position += 1;
        }
        token
    }

    fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    fn rollback(&mut self, checkpoint: Checkpoint) {
        assert!(
            checkpoint.0 < self.tokens.len(),
            "rollback to position {} outside a stream of {} tokens",
            checkpoint.0,
            self.tokens.len()
        );
        self.position = checkpoint.0;
    }
}
