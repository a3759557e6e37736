//! Typed CST nodes.
//!
//! One struct per node type, with a [`Node`] sum type over all of them.
//! Constructors check the structural invariants of their node; fields are
//! private so a constructed node cannot be changed afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::flags::Flag;
use crate::invariants;
use crate::token::Token;
use crate::validate::{self, InvalidNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Pattern,
    Alternative,
    Character,
    CharacterClass,
    CharacterClassRange,
    Quantifier,
    Flags,
    EscapeSequence,
    WordCharacterSet,
    Gap,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Root node: `/alt|alt/flags`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawPattern")]
pub struct Pattern {
    open_token: Token,
    alternatives: Vec<Alternative>,
    separator_tokens: Vec<Token>,
    close_token: Token,
    flags: Flags,
}

impl Pattern {
    pub fn new(
        open_token: Token,
        alternatives: Vec<Alternative>,
        separator_tokens: Vec<Token>,
        close_token: Token,
        flags: Flags,
    ) -> Self {
        invariants::assert_valid(validate::pattern(
            &open_token,
            &alternatives,
            &separator_tokens,
            &close_token,
        ));
        Self {
            open_token,
            alternatives,
            separator_tokens,
            close_token,
            flags,
        }
    }

    pub fn open_token(&self) -> &Token {
        &self.open_token
    }

    /// Never empty.
    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    /// One fewer than [`Pattern::alternatives`].
    pub fn separator_tokens(&self) -> &[Token] {
        &self.separator_tokens
    }

    pub fn close_token(&self) -> &Token {
        &self.close_token
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Alternative {
    elements: Vec<Element>,
}

impl Alternative {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Anything that can appear in an alternative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Character(Character),
    CharacterClass(CharacterClass),
    Quantifier(Quantifier),
    WordCharacterSet(WordCharacterSet),
    Gap(Gap),
}

impl Element {
    pub fn node_type(&self) -> NodeType {
        match self {
            Element::Character(_) => NodeType::Character,
            Element::CharacterClass(_) => NodeType::CharacterClass,
            Element::Quantifier(_) => NodeType::Quantifier,
            Element::WordCharacterSet(_) => NodeType::WordCharacterSet,
            Element::Gap(_) => NodeType::Gap,
        }
    }
}

/// A single matched character: a literal token or a decoded escape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::raw::RawCharacter")]
pub enum Character {
    Literal(Token),
    Escaped(EscapeSequence),
}

impl Character {
    pub fn literal(token: Token) -> Self {
        invariants::assert_valid(validate::literal_character(&token));
        Character::Literal(token)
    }

    /// The character this node stands for.
    pub fn value(&self) -> char {
        match self {
            Character::Literal(token) => token
                .as_char()
                .unwrap_or_else(|| invariants::broken_literal_character(token)),
            Character::Escaped(escape) => escape.cooked(),
        }
    }

    pub fn as_escape(&self) -> Option<&EscapeSequence> {
        match self {
            Character::Literal(_) => None,
            Character::Escaped(escape) => Some(escape),
        }
    }
}

/// `\<` and friends: backslash plus code, with the decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::raw::RawEscapeSequence")]
pub struct EscapeSequence {
    cooked: char,
    escape: Token,
    code: Token,
}

/// Codes whose decoded value differs from the code itself.
static CONTROL_ESCAPES: [(char, char); 6] = [
    ('n', '\n'),
    ('r', '\r'),
    ('t', '\t'),
    ('v', '\u{b}'),
    ('f', '\u{c}'),
    ('0', '\0'),
];

impl EscapeSequence {
    /// `cooked` must be [`EscapeSequence::decode`] of the code's character.
    pub fn new(cooked: char, escape: Token, code: Token) -> Self {
        invariants::assert_valid(validate::escape_sequence(cooked, &escape, &code));
        Self {
            cooked,
            escape,
            code,
        }
    }

    /// Value of `\code`: a control character for `n r t v f 0`, else the code.
    pub fn decode(code: char) -> char {
        CONTROL_ESCAPES
            .iter()
            .find(|(c, _)| *c == code)
            .map_or(code, |&(_, cooked)| cooked)
    }

    pub fn cooked(&self) -> char {
        self.cooked
    }

    pub fn escape(&self) -> &Token {
        &self.escape
    }

    pub fn code(&self) -> &Token {
        &self.code
    }
}

/// `[...]` or `[^...]`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawCharacterClass")]
pub struct CharacterClass {
    open_token: Token,
    negate_token: Option<Token>,
    elements: Vec<ClassElement>,
    close_token: Token,
}

impl CharacterClass {
    pub fn new(
        open_token: Token,
        negate_token: Option<Token>,
        elements: Vec<ClassElement>,
        close_token: Token,
    ) -> Self {
        invariants::assert_valid(validate::character_class(
            &open_token,
            negate_token.as_ref(),
            &close_token,
        ));
        Self {
            open_token,
            negate_token,
            elements,
            close_token,
        }
    }

    pub fn negate(&self) -> bool {
        self.negate_token.is_some()
    }

    pub fn open_token(&self) -> &Token {
        &self.open_token
    }

    pub fn negate_token(&self) -> Option<&Token> {
        self.negate_token.as_ref()
    }

    pub fn elements(&self) -> &[ClassElement] {
        &self.elements
    }

    pub fn close_token(&self) -> &Token {
        &self.close_token
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassElement {
    Character(Character),
    Range(CharacterClassRange),
    WordCharacterSet(WordCharacterSet),
}

impl ClassElement {
    pub fn node_type(&self) -> NodeType {
        match self {
            ClassElement::Character(_) => NodeType::Character,
            ClassElement::Range(_) => NodeType::CharacterClassRange,
            ClassElement::WordCharacterSet(_) => NodeType::WordCharacterSet,
        }
    }
}

/// `a-z` inside a class. Endpoint order is not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawCharacterClassRange")]
pub struct CharacterClassRange {
    min: Character,
    sigil_token: Token,
    max: Character,
}

impl CharacterClassRange {
    pub fn new(min: Character, sigil_token: Token, max: Character) -> Self {
        invariants::assert_valid(validate::range_sigil(&sigil_token));
        Self {
            min,
            sigil_token,
            max,
        }
    }

    pub fn min(&self) -> &Character {
        &self.min
    }

    pub fn sigil_token(&self) -> &Token {
        &self.sigil_token
    }

    pub fn max(&self) -> &Character {
        &self.max
    }
}

/// Upper repetition bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bound {
    Finite(u32),
    Infinite,
}

impl Bound {
    pub fn admits(self, min: u32) -> bool {
        match self {
            Bound::Finite(max) => min <= max,
            Bound::Infinite => true,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Finite(n) => write!(f, "{n}"),
            Bound::Infinite => write!(f, "+Infinity"),
        }
    }
}

/// `element+`, `element{2,5}`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "crate::raw::RawQuantifier")]
pub struct Quantifier {
    element: Box<Element>,
    sigil: Sigil,
    min: u32,
    max: Bound,
}

impl Quantifier {
    /// `min` and `max` must be the bounds `sigil` spells.
    pub fn new(element: Element, sigil: Sigil, min: u32, max: Bound) -> Self {
        invariants::assert_valid(validate::quantifier(&element, &sigil, min, max));
        Self {
            element: Box::new(element),
            sigil,
            min,
            max,
        }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn sigil(&self) -> &Sigil {
        &self.sigil
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> Bound {
        self.max
    }
}

/// The quantifier's literal syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sigil {
    /// `+`, `*` or `?`
    Token(Token),
    /// `{m}`, `{m,}` or `{m,n}`
    Braces(Braces),
}

/// Repetition bounds of the single-token sigils.
static SIGIL_BOUNDS: [(&str, u32, Bound); 3] = [
    ("+", 1, Bound::Infinite),
    ("*", 0, Bound::Infinite),
    ("?", 0, Bound::Finite(1)),
];

impl Sigil {
    /// Bounds of `+`, `*` or `?`.
    pub fn token_bounds(text: &str) -> Option<(u32, Bound)> {
        SIGIL_BOUNDS
            .iter()
            .find(|(t, _, _)| *t == text)
            .map(|&(_, min, max)| (min, max))
    }

    /// The `(min, max)` this sigil spells, if it spells any.
    pub fn bounds(&self) -> Option<(u32, Bound)> {
        match self {
            Sigil::Token(token) => Self::token_bounds(token.text()),
            Sigil::Braces(braces) => braces.bounds(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawBraces")]
pub struct Braces {
    open_token: Token,
    min_token: Token,
    separator_token: Option<Token>,
    max_token: Option<Token>,
    close_token: Token,
}

impl Braces {
    pub fn new(
        open_token: Token,
        min_token: Token,
        separator_token: Option<Token>,
        max_token: Option<Token>,
        close_token: Token,
    ) -> Self {
        invariants::assert_valid(validate::braces(
            &open_token,
            &min_token,
            separator_token.as_ref(),
            max_token.as_ref(),
            &close_token,
        ));
        Self {
            open_token,
            min_token,
            separator_token,
            max_token,
            close_token,
        }
    }

    /// `{m}` is exactly m, `{m,}` unbounded.
    pub fn bounds(&self) -> Option<(u32, Bound)> {
        let min = validate::parse_bound(self.min_token.text())?;
        let max = match (&self.separator_token, &self.max_token) {
            (None, _) => Bound::Finite(min),
            (Some(_), None) => Bound::Infinite,
            (Some(_), Some(max)) => Bound::Finite(validate::parse_bound(max.text())?),
        };
        Some((min, max))
    }

    pub fn open_token(&self) -> &Token {
        &self.open_token
    }

    pub fn min_token(&self) -> &Token {
        &self.min_token
    }

    pub fn separator_token(&self) -> Option<&Token> {
        self.separator_token.as_ref()
    }

    pub fn max_token(&self) -> Option<&Token> {
        self.max_token.as_ref()
    }

    pub fn close_token(&self) -> &Token {
        &self.close_token
    }
}

/// `\w` or `\W`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawWordCharacterSet")]
pub struct WordCharacterSet {
    escape_token: Token,
    value: Token,
}

impl WordCharacterSet {
    pub fn new(escape_token: Token, value: Token) -> Self {
        invariants::assert_valid(validate::word_character_set(&escape_token, &value));
        Self {
            escape_token,
            value,
        }
    }

    /// `\W` matches non-word characters.
    pub fn negate(&self) -> bool {
        self.value.text() == "W"
    }

    pub fn escape_token(&self) -> &Token {
        &self.escape_token
    }

    pub fn value(&self) -> &Token {
        &self.value
    }
}

/// `\g`: a placeholder written directly in pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawGap")]
pub struct Gap {
    escape_token: Token,
    value: Token,
}

impl Gap {
    pub fn new(escape_token: Token, value: Token) -> Self {
        invariants::assert_valid(validate::gap(&escape_token, &value));
        Self {
            escape_token,
            value,
        }
    }

    pub fn escape_token(&self) -> &Token {
        &self.escape_token
    }

    pub fn value(&self) -> &Token {
        &self.value
    }
}

/// Decoded flag letters. The six attributes always agree with `tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawFlags")]
pub struct Flags {
    global: bool,
    ignore_case: bool,
    multiline: bool,
    dot_all: bool,
    unicode: bool,
    sticky: bool,
    tokens: Vec<Token>,
}

impl Flags {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Tokens must be distinct known flag letters, in source order.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::try_new(tokens).unwrap_or_else(|err| invariants::broken(err))
    }

    /// Like [`Flags::new`], but reports a bad letter instead of panicking.
    pub fn try_new(tokens: Vec<Token>) -> Result<Self, InvalidNode> {
        let mut flags = Self::default();
        for token in &tokens {
            let Some(flag) = token.as_char().and_then(Flag::from_letter) else {
                return Err(InvalidNode {
                    owner: "Flags",
                    message: format!("`{}` is not a flag letter", token.text()),
                });
            };
            if flags.get(flag) {
                return Err(InvalidNode {
                    owner: "Flags",
                    message: format!("duplicate flag `{}`", flag.letter()),
                });
            }
            *flags.slot(flag) = true;
        }
        flags.tokens = tokens;
        Ok(flags)
    }

    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Global => self.global,
            Flag::IgnoreCase => self.ignore_case,
            Flag::Multiline => self.multiline,
            Flag::DotAll => self.dot_all,
            Flag::Unicode => self.unicode,
            Flag::Sticky => self.sticky,
        }
    }

    fn slot(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::Global => &mut self.global,
            Flag::IgnoreCase => &mut self.ignore_case,
            Flag::Multiline => &mut self.multiline,
            Flag::DotAll => &mut self.dot_all,
            Flag::Unicode => &mut self.unicode,
            Flag::Sticky => &mut self.sticky,
        }
    }

    /// All six flags in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Flag, bool)> + '_ {
        Flag::ALL.into_iter().map(|flag| (flag, self.get(flag)))
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn global(&self) -> bool {
        self.global
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    pub fn multiline(&self) -> bool {
        self.multiline
    }

    pub fn dot_all(&self) -> bool {
        self.dot_all
    }

    pub fn unicode(&self) -> bool {
        self.unicode
    }

    pub fn sticky(&self) -> bool {
        self.sticky
    }
}

/// Any CST node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Node {
    Pattern(Pattern),
    Alternative(Alternative),
    Character(Character),
    CharacterClass(CharacterClass),
    CharacterClassRange(CharacterClassRange),
    Quantifier(Quantifier),
    Flags(Flags),
    EscapeSequence(EscapeSequence),
    WordCharacterSet(WordCharacterSet),
    Gap(Gap),
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Pattern(_) => NodeType::Pattern,
            Node::Alternative(_) => NodeType::Alternative,
            Node::Character(_) => NodeType::Character,
            Node::CharacterClass(_) => NodeType::CharacterClass,
            Node::CharacterClassRange(_) => NodeType::CharacterClassRange,
            Node::Quantifier(_) => NodeType::Quantifier,
            Node::Flags(_) => NodeType::Flags,
            Node::EscapeSequence(_) => NodeType::EscapeSequence,
            Node::WordCharacterSet(_) => NodeType::WordCharacterSet,
            Node::Gap(_) => NodeType::Gap,
        }
    }
}

macro_rules! node_from {
    ($($ty:ident),*) => {
        $(
            impl From<$ty> for Node {
                fn from(node: $ty) -> Self {
                    Node::$ty(node)
                }
            }
        )*
    };
}

node_from!(
    Pattern,
    Alternative,
    Character,
    CharacterClass,
    CharacterClassRange,
    Quantifier,
    Flags,
    EscapeSequence,
    WordCharacterSet,
    Gap
);

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        match element {
            Element::Character(n) => Node::Character(n),
            Element::CharacterClass(n) => Node::CharacterClass(n),
            Element::Quantifier(n) => Node::Quantifier(n),
            Element::WordCharacterSet(n) => Node::WordCharacterSet(n),
            Element::Gap(n) => Node::Gap(n),
        }
    }
}

impl From<ClassElement> for Node {
    fn from(element: ClassElement) -> Self {
        match element {
            ClassElement::Character(n) => Node::Character(n),
            ClassElement::Range(n) => Node::CharacterClassRange(n),
            ClassElement::WordCharacterSet(n) => Node::WordCharacterSet(n),
        }
    }
}

/// Element family. A bare escape sequence is wrapped as a `Character`.
impl TryFrom<Node> for Element {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        match node {
            Node::Character(n) => Ok(Element::Character(n)),
            Node::EscapeSequence(n) => Ok(Element::Character(Character::Escaped(n))),
            Node::CharacterClass(n) => Ok(Element::CharacterClass(n)),
            Node::Quantifier(n) => Ok(Element::Quantifier(n)),
            Node::WordCharacterSet(n) => Ok(Element::WordCharacterSet(n)),
            Node::Gap(n) => Ok(Element::Gap(n)),
            other => Err(other),
        }
    }
}

/// Class-element family.
impl TryFrom<Node> for ClassElement {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        match node {
            Node::Character(n) => Ok(ClassElement::Character(n)),
            Node::EscapeSequence(n) => Ok(ClassElement::Character(Character::Escaped(n))),
            Node::CharacterClassRange(n) => Ok(ClassElement::Range(n)),
            Node::WordCharacterSet(n) => Ok(ClassElement::WordCharacterSet(n)),
            other => Err(other),
        }
    }
}

impl TryFrom<Node> for Flags {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        match node {
            Node::Flags(flags) => Ok(flags),
            other => Err(other),
        }
    }
}

impl TryFrom<Node> for Pattern {
    type Error = Node;

    fn try_from(node: Node) -> Result<Self, Self::Error> {
        match node {
            Node::Pattern(pattern) => Ok(pattern),
            other => Err(other),
        }
    }
}
