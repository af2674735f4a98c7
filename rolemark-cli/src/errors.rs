//! Errors surfaced by the command line tool

use rolemark_config::ConfigError;
use rolemark_parser::rolemark::lexing::LexError;
use rolemark_parser::FormatError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid lexer settings: {0}")]
    Lexer(#[from] LexError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Refusing to write '{0}': file names must be relative paths inside the output directory")]
    UnsafePath(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}
