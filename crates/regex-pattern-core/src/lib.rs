#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Concrete syntax tree for regular-expression pattern literals.
//!
//! The tree keeps every source character: delimiters, escape backslashes
//! and flag letters are tokens inside typed nodes. This crate holds the data
//! model and its construction API; parsing lives in `regex-pattern`.
//!
//! - [`Token`]: terminal with category, text and balance markers
//! - [`Node`] and the per-type structs ([`Pattern`], [`Quantifier`], ...)
//! - [`Flag`]: the fixed six-flag table
//! - [`check_balance`]: re-validates span pairing on any tree
//! - [`SyntaxTree`]: source-order token walk and lossless text
//! - [`InvalidNode`]: why decoded JSON was rejected as a node

pub mod balance;
pub mod flags;
pub mod node;
pub mod token;
pub mod tree;

mod invariants;
mod raw;
mod validate;

#[cfg(test)]
mod balance_tests;
#[cfg(test)]
mod flags_tests;

pub use balance::{BalanceError, SpanStack, check_balance};
pub use flags::Flag;
pub use node::{
    Alternative, Bound, Braces, Character, CharacterClass, CharacterClassRange, ClassElement,
    Element, EscapeSequence, Flags, Gap, Node, NodeType, Pattern, Quantifier, Sigil,
    WordCharacterSet,
};
pub use token::{Category, SpanName, Token};
pub use tree::SyntaxTree;
pub use validate::InvalidNode;
