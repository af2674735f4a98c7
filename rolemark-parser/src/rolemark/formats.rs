//! Output formats
//!
//!     Every rendering of a parsed document goes through this module. The tree formats are
//!     built from the [NodeRecord](crate::rolemark::ast::NodeRecord) snapshot, so they all
//!     agree on field names and child order; the token formats dump the lexer output.
//!
//!         ast-json            indented JSON records
//!         ast-json-compact    single-line JSON records
//!         ast-yaml            the same records as YAML
//!         ast-treeviz         one line per node, see [treeviz](treeviz)
//!         token-json          the token list as JSON
//!         token-simple        tokens as `<kind:payload>`, one line per source line
//!
//!     Output is one-directional: nothing here parses a rendering back into a tree.

pub mod serializer;
pub mod tokens;
pub mod treeviz;

pub use serializer::{serialize, to_yaml, Snapshot};
pub use tokens::{tokens_to_json, tokens_to_simple};
pub use treeviz::to_treeviz_str;

use crate::rolemark::ast::Root;
use crate::rolemark::token::Token;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while rendering output
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "Unknown format '{0}'. Available formats: {list}",
        list = OutputFormat::names().join(", ")
    )]
    UnknownFormat(String),

    #[error("Format '{format}' renders {renders}, not {requested}")]
    WrongInput {
        format: &'static str,
        renders: &'static str,
        requested: &'static str,
    },
}

/// A named output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    AstJson,
    AstJsonCompact,
    AstYaml,
    AstTreeviz,
    TokenJson,
    TokenSimple,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::AstJson,
        OutputFormat::AstJsonCompact,
        OutputFormat::AstYaml,
        OutputFormat::AstTreeviz,
        OutputFormat::TokenJson,
        OutputFormat::TokenSimple,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::AstJson => "ast-json",
            OutputFormat::AstJsonCompact => "ast-json-compact",
            OutputFormat::AstYaml => "ast-yaml",
            OutputFormat::AstTreeviz => "ast-treeviz",
            OutputFormat::TokenJson => "token-json",
            OutputFormat::TokenSimple => "token-simple",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::AstJson => "Parsed tree as indented JSON",
            OutputFormat::AstJsonCompact => "Parsed tree as single-line JSON",
            OutputFormat::AstYaml => "Parsed tree as YAML",
            OutputFormat::AstTreeviz => "Parsed tree, one line per node",
            OutputFormat::TokenJson => "Lexer tokens as JSON",
            OutputFormat::TokenSimple => "Lexer tokens, one line per source line",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(OutputFormat::name).collect()
    }

    /// True for formats that render the token list instead of the tree
    pub fn is_token_format(&self) -> bool {
        matches!(self, OutputFormat::TokenJson | OutputFormat::TokenSimple)
    }

    /// Render a tree format. Token formats need the token list, see
    /// [render_tokens](Self::render_tokens).
    pub fn render_tree(&self, root: &Root) -> Result<String, FormatError> {
        match self {
            OutputFormat::AstJson => serialize(root, true),
            OutputFormat::AstJsonCompact => serialize(root, false),
            OutputFormat::AstYaml => to_yaml(root),
            OutputFormat::AstTreeviz => Ok(to_treeviz_str(root)),
            OutputFormat::TokenJson | OutputFormat::TokenSimple => Err(self.wrong_input("a tree")),
        }
    }

    pub fn render_tokens(&self, tokens: &[Token]) -> Result<String, FormatError> {
        match self {
            OutputFormat::TokenJson => tokens_to_json(tokens),
            OutputFormat::TokenSimple => Ok(tokens_to_simple(tokens)),
            _ => Err(self.wrong_input("tokens")),
        }
    }

    fn wrong_input(&self, requested: &'static str) -> FormatError {
        FormatError::WrongInput {
            format: self.name(),
            renders: if self.is_token_format() {
                "tokens"
            } else {
                "a tree"
            },
            requested,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| FormatError::UnknownFormat(s.to_string()))
    }
}
