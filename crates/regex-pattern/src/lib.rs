//! Grammar for regular-expression pattern literals.
//!
//! Parses `/body/flags` into the lossless concrete syntax tree defined in
//! [`regex_pattern_core`]: every input character, delimiters and escape
//! backslashes included, ends up in a token of a typed node.
//!
//! # Example
//!
//! ```
//! use regex_pattern::{SyntaxTree, parse_pattern};
//!
//! let pattern = parse_pattern("/a+|[^b-d]/gi").expect("valid pattern");
//! assert_eq!(pattern.alternatives().len(), 2);
//! assert!(pattern.flags().ignore_case());
//! assert_eq!(pattern.text(), "/a+|[^b-d]/gi");
//! ```
//!
//! Subtrees built elsewhere can be spliced in through a [`Template`]:
//!
//! ```
//! use regex_pattern::{Node, Production, SyntaxTree, Template, parse, parse_flags};
//!
//! let flags = parse_flags("i").expect("valid flags");
//! let template = Template::new("/ab/").embed(flags);
//! let Node::Pattern(pattern) = parse(&template, Production::Pattern).expect("valid") else {
//!     unreachable!()
//! };
//! assert!(pattern.flags().ignore_case());
//! assert_eq!(pattern.text(), "/ab/i");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;
pub mod printer;
pub mod syntax;
pub mod template;

#[cfg(test)]
mod template_tests;
#[cfg(test)]
pub(crate) mod test_utils;

pub use diagnostics::{DiagnosticPrinter, ErrorKind, ParseError, RelatedInfo};
pub use parser::{Parser, Production};
pub use printer::CstPrinter;
pub use template::Template;

pub use regex_pattern_core::{
    Alternative, Bound, Braces, Category, Character, CharacterClass, CharacterClassRange,
    ClassElement, Element, EscapeSequence, Flag, Flags, Gap, InvalidNode, Node, NodeType, Pattern,
    Quantifier, Sigil, SpanName, SyntaxTree, Token, WordCharacterSet, check_balance,
};

/// Errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many lexemes consumed).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl Error {
    /// The grammar violation, if this is one.
    pub fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Parse(err) => Some(err),
            Error::ExecFuelExhausted => None,
        }
    }
}

/// Result type for parsing operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Parses a complete `/body/flags` literal.
pub fn parse_pattern(source: &str) -> Result<Pattern> {
    let template = Template::new(source);
    Parser::new(&template).pattern()
}

/// Parses flag letters alone, e.g. the `gi` of `/x/gi`.
pub fn parse_flags(source: &str) -> Result<Flags> {
    let template = Template::new(source);
    Parser::new(&template).flags()
}

/// Parses a template with embedded subtrees as the given production.
pub fn parse(template: &Template, production: Production) -> Result<Node> {
    Parser::new(template).parse(production)
}
