//! Grammar productions for pattern literals.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`.
//! Each production consumes exactly its own lexemes and returns a typed node.

mod class;
mod escape;
mod flags;
mod gap;
mod pattern;
mod quantifier;
