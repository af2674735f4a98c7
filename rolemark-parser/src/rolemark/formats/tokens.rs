//! Token dumps
//!
//! `token-simple` writes each token with its [Display](std::fmt::Display) form and breaks
//! the output after every Newline token, so the dump lines up with the source lines.

use super::FormatError;
use crate::rolemark::token::{Token, TokenKind};

pub fn tokens_to_json(tokens: &[Token]) -> Result<String, FormatError> {
    Ok(serde_json::to_string_pretty(tokens)?)
}

pub fn tokens_to_simple(tokens: &[Token]) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&token.to_string());
        if matches!(token.kind, TokenKind::Newline | TokenKind::EndOfInput) {
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rolemark::lexing::Lexer;

    #[test]
    fn test_simple_lines_follow_source() {
        let tokens = Lexer::default().tokenize("File: a.py\n```python\nx = 1\n```\nEOF_a.py");
        assert_eq!(
            tokens_to_simple(&tokens),
            "<file-start:a.py><newline>\n\
             <fence:python><newline>\n\
             <text:x = 1><newline>\n\
             <fence:><newline>\n\
             <file-end:a.py><end>\n"
        );
    }

    #[test]
    fn test_json_keeps_spans() {
        let tokens = Lexer::default().tokenize("AI: ok");
        let json = tokens_to_json(&tokens).unwrap();
        let back: Vec<Token> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
        assert!(json.contains("\"kind\": \"Role\""));
    }
}
