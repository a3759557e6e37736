//! Parser infrastructure for pattern literals.
//!
//! # Architecture
//!
//! A hand-written recursive-descent parser over one-character lexemes:
//!
//! - Zero-copy lexing: lexemes carry spans, text sliced only when building tokens
//! - Typed output: productions return `regex-pattern-core` nodes directly
//! - Bounded lookahead: one lexeme, plus a scan for `{m,n}` and class ranges
//! - Delimiter stack: open `/` and `[` are remembered for error locations
//!
//! # Failure policy
//!
//! There is no recovery. The first violation aborts with a single
//! [`ParseError`](crate::ParseError); fuel exhaustion aborts with
//! [`Error::ExecFuelExhausted`](crate::Error::ExecFuelExhausted).

pub mod cst;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{RegexLang, SyntaxKind, SyntaxNode, SyntaxToken};

pub use core::Parser;

/// Top-level grammar entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Production {
    /// `/body/flags`
    #[default]
    Pattern,
    /// Flag letters alone.
    Flags,
}
