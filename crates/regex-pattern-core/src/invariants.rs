//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::token::Token;
use crate::validate::{Check, InvalidNode};

/// Constructors trust their caller; a failed rule is a bug upstream.
pub(crate) fn assert_valid(check: Check) {
    if let Err(err) = check {
        broken(err);
    }
}

pub(crate) fn broken(err: InvalidNode) -> ! {
    panic!(
        "{}::new: {} (caller's responsibility)",
        err.owner, err.message
    )
}

pub(crate) fn broken_literal_character(token: &Token) -> ! {
    panic!(
        "Character: literal token `{}` must be exactly one character",
        token.text()
    )
}
