//! The backtracking combinator
//!
//!     All lookahead in the grammar goes through this module. [Parser::attempt] runs a
//!     production speculatively and undoes everything it consumed if it does not match;
//!     [Parser::peek_kind] is the one-token special case. No production rewinds the token
//!     source on its own.

use super::parser::Parser;
use crate::rolemark::lexing::TokenSource;
use crate::rolemark::token::TokenKind;

impl<S: TokenSource> Parser<'_, S> {
    /// Run `production`; on no match, rewind the token source to where it started.
    /// On a match the consumed tokens stay consumed.
    pub fn attempt<T>(&mut self, production: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let checkpoint = self.source.checkpoint();
        let result = production(self);
        if result.is_none() {
            self.source.rollback(checkpoint);
        }
        result
    }

    /// Kind of the next token, without consuming it
    pub fn peek_kind(&mut self) -> TokenKind {
        let checkpoint = self.source.checkpoint();
        let kind = self.source.next_token().kind;
        self.source.rollback(checkpoint);
        kind
    }
}
