//! Wire shapes of the checked types.
//!
//! Each CST type deserializes through one of these and is rebuilt by its
//! constructor, so decoded JSON obeys the same rules as parser output.

use serde::Deserialize;

use crate::node::{
    Alternative, Bound, Braces, Character, CharacterClass, CharacterClassRange, ClassElement,
    Element, EscapeSequence, Flags, Gap, Pattern, Quantifier, Sigil, WordCharacterSet,
};
use crate::token::{Category, SpanName, Token};
use crate::validate::{self, InvalidNode};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawToken {
    category: Category,
    text: String,
    #[serde(default)]
    balanced: Option<char>,
    #[serde(default)]
    balanced_span: Option<SpanName>,
    #[serde(default)]
    balancer: bool,
    #[serde(default)]
    open_span: Option<SpanName>,
    #[serde(default)]
    close_span: Option<SpanName>,
}

impl TryFrom<RawToken> for Token {
    type Error = InvalidNode;

    fn try_from(raw: RawToken) -> Result<Self, Self::Error> {
        validate::token(&raw.text, raw.balanced, raw.balanced_span)?;
        let mut token = Token::new(raw.category, raw.text);
        if let (Some(closer), Some(span)) = (raw.balanced, raw.balanced_span) {
            token = token.with_balanced(closer, span);
        }
        if raw.balancer {
            token = token.as_balancer();
        }
        if let Some(span) = raw.open_span {
            token = token.with_open_span(span);
        }
        if let Some(span) = raw.close_span {
            token = token.with_close_span(span);
        }
        Ok(token)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPattern {
    open_token: Token,
    alternatives: Vec<Alternative>,
    separator_tokens: Vec<Token>,
    close_token: Token,
    flags: Flags,
}

impl TryFrom<RawPattern> for Pattern {
    type Error = InvalidNode;

    fn try_from(raw: RawPattern) -> Result<Self, Self::Error> {
        validate::pattern(
            &raw.open_token,
            &raw.alternatives,
            &raw.separator_tokens,
            &raw.close_token,
        )?;
        Ok(Pattern::new(
            raw.open_token,
            raw.alternatives,
            raw.separator_tokens,
            raw.close_token,
            raw.flags,
        ))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) enum RawCharacter {
    Literal(Token),
    Escaped(EscapeSequence),
}

impl TryFrom<RawCharacter> for Character {
    type Error = InvalidNode;

    fn try_from(raw: RawCharacter) -> Result<Self, Self::Error> {
        match raw {
            RawCharacter::Literal(token) => {
                validate::literal_character(&token)?;
                Ok(Character::literal(token))
            }
            RawCharacter::Escaped(escape) => Ok(Character::Escaped(escape)),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawEscapeSequence {
    cooked: char,
    escape: Token,
    code: Token,
}

impl TryFrom<RawEscapeSequence> for EscapeSequence {
    type Error = InvalidNode;

    fn try_from(raw: RawEscapeSequence) -> Result<Self, Self::Error> {
        validate::escape_sequence(raw.cooked, &raw.escape, &raw.code)?;
        Ok(EscapeSequence::new(raw.cooked, raw.escape, raw.code))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCharacterClass {
    open_token: Token,
    negate_token: Option<Token>,
    elements: Vec<ClassElement>,
    close_token: Token,
}

impl TryFrom<RawCharacterClass> for CharacterClass {
    type Error = InvalidNode;

    fn try_from(raw: RawCharacterClass) -> Result<Self, Self::Error> {
        validate::character_class(&raw.open_token, raw.negate_token.as_ref(), &raw.close_token)?;
        Ok(CharacterClass::new(
            raw.open_token,
            raw.negate_token,
            raw.elements,
            raw.close_token,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCharacterClassRange {
    min: Character,
    sigil_token: Token,
    max: Character,
}

impl TryFrom<RawCharacterClassRange> for CharacterClassRange {
    type Error = InvalidNode;

    fn try_from(raw: RawCharacterClassRange) -> Result<Self, Self::Error> {
        validate::range_sigil(&raw.sigil_token)?;
        Ok(CharacterClassRange::new(raw.min, raw.sigil_token, raw.max))
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawQuantifier {
    element: Box<Element>,
    sigil: Sigil,
    min: u32,
    max: Bound,
}

impl TryFrom<RawQuantifier> for Quantifier {
    type Error = InvalidNode;

    fn try_from(raw: RawQuantifier) -> Result<Self, Self::Error> {
        validate::quantifier(&raw.element, &raw.sigil, raw.min, raw.max)?;
        Ok(Quantifier::new(*raw.element, raw.sigil, raw.min, raw.max))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawBraces {
    open_token: Token,
    min_token: Token,
    separator_token: Option<Token>,
    max_token: Option<Token>,
    close_token: Token,
}

impl TryFrom<RawBraces> for Braces {
    type Error = InvalidNode;

    fn try_from(raw: RawBraces) -> Result<Self, Self::Error> {
        validate::braces(
            &raw.open_token,
            &raw.min_token,
            raw.separator_token.as_ref(),
            raw.max_token.as_ref(),
            &raw.close_token,
        )?;
        Ok(Braces::new(
            raw.open_token,
            raw.min_token,
            raw.separator_token,
            raw.max_token,
            raw.close_token,
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawWordCharacterSet {
    escape_token: Token,
    value: Token,
}

impl TryFrom<RawWordCharacterSet> for WordCharacterSet {
    type Error = InvalidNode;

    fn try_from(raw: RawWordCharacterSet) -> Result<Self, Self::Error> {
        validate::word_character_set(&raw.escape_token, &raw.value)?;
        Ok(WordCharacterSet::new(raw.escape_token, raw.value))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGap {
    escape_token: Token,
    value: Token,
}

impl TryFrom<RawGap> for Gap {
    type Error = InvalidNode;

    fn try_from(raw: RawGap) -> Result<Self, Self::Error> {
        validate::gap(&raw.escape_token, &raw.value)?;
        Ok(Gap::new(raw.escape_token, raw.value))
    }
}

/// The attributes are redundant with `tokens` and must agree with them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawFlags {
    global: bool,
    ignore_case: bool,
    multiline: bool,
    dot_all: bool,
    unicode: bool,
    sticky: bool,
    tokens: Vec<Token>,
}

impl TryFrom<RawFlags> for Flags {
    type Error = InvalidNode;

    fn try_from(raw: RawFlags) -> Result<Self, Self::Error> {
        let claimed = [
            raw.global,
            raw.ignore_case,
            raw.multiline,
            raw.dot_all,
            raw.unicode,
            raw.sticky,
        ];
        let flags = Flags::try_new(raw.tokens)?;
        for ((flag, on), claim) in flags.iter().zip(claimed) {
            if on != claim {
                return Err(InvalidNode {
                    owner: "Flags",
                    message: format!("attribute `{flag}` disagrees with the flag tokens"),
                });
            }
        }
        Ok(flags)
    }
}
