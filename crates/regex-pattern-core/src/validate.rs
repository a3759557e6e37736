//! Structural rules of tokens and nodes.
//!
//! Constructors panic when a rule fails (see `invariants`). Deserialization
//! runs the same rules and reports the failure as an [`InvalidNode`].

use thiserror::Error;

use crate::node::{Alternative, Bound, Element, EscapeSequence, Sigil};
use crate::token::{Category, SpanName, Token};
use crate::tree::SyntaxTree;

/// A token or node that breaks a structural rule of its type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {owner}: {message}")]
pub struct InvalidNode {
    /// Type whose rule failed, e.g. `Pattern`.
    pub owner: &'static str,
    pub message: String,
}

pub(crate) type Check = Result<(), InvalidNode>;

pub(crate) fn fail(owner: &'static str, message: impl Into<String>) -> Check {
    Err(InvalidNode {
        owner,
        message: message.into(),
    })
}

fn expect_text(owner: &'static str, role: &str, token: &Token, text: &str) -> Check {
    if token.text() != text {
        return fail(
            owner,
            format!("{role} must be `{text}`, got `{}`", token.text()),
        );
    }
    Ok(())
}

/// Decimal brace bound. Signs and empty text are rejected.
pub(crate) fn parse_bound(text: &str) -> Option<u32> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

pub(crate) fn token(text: &str, balanced: Option<char>, balanced_span: Option<SpanName>) -> Check {
    if text.is_empty() {
        return fail("Token", "empty token text");
    }
    if balanced.is_some() != balanced_span.is_some() {
        return fail("Token", "`balanced` and `balancedSpan` must be set together");
    }
    Ok(())
}

pub(crate) fn pattern(
    open_token: &Token,
    alternatives: &[Alternative],
    separator_tokens: &[Token],
    close_token: &Token,
) -> Check {
    const OWNER: &str = "Pattern";
    if alternatives.is_empty() {
        return fail(OWNER, "a pattern has at least one alternative");
    }
    if separator_tokens.len() + 1 != alternatives.len() {
        return fail(
            OWNER,
            format!(
                "expected exactly one separator between adjacent alternatives, got {} for {}",
                separator_tokens.len(),
                alternatives.len()
            ),
        );
    }
    for separator in separator_tokens {
        expect_text(OWNER, "separator", separator, "|")?;
    }
    expect_text(OWNER, "open token", open_token, "/")?;
    if open_token.balanced_span() != Some(SpanName::Pattern) || open_token.balanced() != Some('/')
    {
        return fail(OWNER, "open token must open the Pattern span");
    }
    expect_text(OWNER, "close token", close_token, "/")?;
    if !close_token.is_balancer() {
        return fail(OWNER, "close token must be a balancer");
    }
    Ok(())
}

pub(crate) fn literal_character(token: &Token) -> Check {
    if token.category() != Category::Character {
        return fail(
            "Character",
            format!("expected a Character token, got {}", token.category()),
        );
    }
    if token.as_char().is_none() {
        return fail(
            "Character",
            format!("literal token `{}` must be exactly one character", token.text()),
        );
    }
    Ok(())
}

pub(crate) fn escape_sequence(cooked: char, escape: &Token, code: &Token) -> Check {
    const OWNER: &str = "EscapeSequence";
    expect_text(OWNER, "escape", escape, "\\")?;
    if escape.open_span() != Some(SpanName::Escape) {
        return fail(OWNER, "backslash must open the Escape span");
    }
    if code.close_span() != Some(SpanName::Escape) {
        return fail(OWNER, "code must close the Escape span");
    }
    let Some(c) = code.as_char() else {
        return fail(
            OWNER,
            format!("code `{}` must be exactly one character", code.text()),
        );
    };
    if EscapeSequence::decode(c) != cooked {
        return fail(
            OWNER,
            format!("cooked value {cooked:?} does not decode `\\{c}`"),
        );
    }
    Ok(())
}

pub(crate) fn character_class(open: &Token, negate: Option<&Token>, close: &Token) -> Check {
    const OWNER: &str = "CharacterClass";
    expect_text(OWNER, "open token", open, "[")?;
    if open.balanced_span() != Some(SpanName::CharacterClass) || open.balanced() != Some(']') {
        return fail(OWNER, "open token must open the CharacterClass span");
    }
    expect_text(OWNER, "close token", close, "]")?;
    if !close.is_balancer() {
        return fail(OWNER, "close token must be a balancer");
    }
    if let Some(negate) = negate {
        expect_text(OWNER, "negate token", negate, "^")?;
    }
    Ok(())
}

pub(crate) fn range_sigil(sigil: &Token) -> Check {
    expect_text("CharacterClassRange", "sigil", sigil, "-")
}

pub(crate) fn quantifier(element: &Element, sigil: &Sigil, min: u32, max: Bound) -> Check {
    const OWNER: &str = "Quantifier";
    if !max.admits(min) {
        return fail(OWNER, format!("min {min} exceeds max {max}"));
    }
    if matches!(element, Element::Quantifier(_)) {
        return fail(OWNER, "quantifiers do not nest");
    }
    if sigil.bounds() != Some((min, max)) {
        return fail(
            OWNER,
            format!("`{}` does not repeat {min} to {max} times", sigil.text()),
        );
    }
    Ok(())
}

pub(crate) fn braces(
    open: &Token,
    min_token: &Token,
    separator: Option<&Token>,
    max_token: Option<&Token>,
    close: &Token,
) -> Check {
    const OWNER: &str = "Braces";
    expect_text(OWNER, "open token", open, "{")?;
    if open.balanced_span() != Some(SpanName::Quantifier) || open.balanced() != Some('}') {
        return fail(OWNER, "open token must open the Quantifier span");
    }
    expect_text(OWNER, "close token", close, "}")?;
    if !close.is_balancer() {
        return fail(OWNER, "close token must be a balancer");
    }
    if let Some(separator) = separator {
        expect_text(OWNER, "separator", separator, ",")?;
    } else if max_token.is_some() {
        return fail(OWNER, "max bound without `,` separator");
    }
    for bound in std::iter::once(min_token).chain(max_token) {
        if parse_bound(bound.text()).is_none() {
            return fail(
                OWNER,
                format!("bound `{}` is not a 32-bit decimal number", bound.text()),
            );
        }
    }
    Ok(())
}

pub(crate) fn word_character_set(escape: &Token, value: &Token) -> Check {
    const OWNER: &str = "WordCharacterSet";
    expect_text(OWNER, "escape token", escape, "\\")?;
    if !matches!(value.text(), "w" | "W") {
        return fail(
            OWNER,
            format!("value must be `w` or `W`, got `{}`", value.text()),
        );
    }
    Ok(())
}

pub(crate) fn gap(escape: &Token, value: &Token) -> Check {
    expect_text("Gap", "escape token", escape, "\\")?;
    expect_text("Gap", "value", value, "g")
}
