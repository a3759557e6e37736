//! Syntax kinds for pattern literals.
//!
//! `SyntaxKind` serves dual roles: lexeme kinds (from the lexer) and kinds of
//! the untyped green tree (see [`crate::syntax`]). Logos derives lexeme
//! recognition; tree kinds lack token/regex attributes.
//! `RegexLang` implements Rowan's `Language` trait for tree construction.

use logos::Logos;
use rowan::Language;

/// All lexeme and tree kinds. Lexemes first, then green tokens, then nodes,
/// then the `__LAST` sentinel.
/// `#[repr(u16)]` enables safe transmute in `kind_from_raw`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("/")]
    Slash = 0,

    #[token("|")]
    Pipe,

    #[token("^")]
    Caret,

    #[token("-")]
    Minus,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token("?")]
    Question,

    #[token("\\")]
    Backslash,

    #[token(",")]
    Comma,

    /// One digit. Brace bounds are coalesced by the parser.
    #[regex("[0-9]")]
    Digit,

    /// One ASCII letter: flag letters and escape codes.
    #[regex("[a-zA-Z]")]
    Letter,

    /// Any other single character except line terminators.
    #[regex(r"[^/|^\-\[\]{}()+*?\\,0-9a-zA-Z\n\r\x{2028}\x{2029}]")]
    Other,

    /// Zero-width marker between template segments.
    Interpolation,
    /// Coalesced line terminators
    Garbage,
    Eof,

    // --- Green tree tokens, one per token category ---
    PunctuatorToken,
    KeywordToken,
    CharacterToken,

    // --- Node kinds ---
    Pattern,
    Alternative,
    Character,
    CharacterClass,
    CharacterClassRange,
    Quantifier,
    Braces,
    Flags,
    EscapeSequence,
    WordCharacterSet,
    Gap,

    // Must be last - used for bounds checking in `kind_from_raw`
    #[doc(hidden)]
    __LAST,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_error(self) -> bool {
        self == Garbage
    }

    #[inline]
    pub fn is_token(self) -> bool {
        matches!(self, PunctuatorToken | KeywordToken | CharacterToken)
    }
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    #[inline]
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

/// Language tag for Rowan's tree types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegexLang {}

impl Language for RegexLang {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 < __LAST as u16);
        // SAFETY: We've verified the value is in bounds, and SyntaxKind is repr(u16)
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}

pub type SyntaxNode = rowan::SyntaxNode<RegexLang>;
pub type SyntaxToken = rowan::SyntaxToken<RegexLang>;
pub type SyntaxElement = rowan::NodeOrToken<SyntaxNode, SyntaxToken>;

/// 64-bit bitset of `SyntaxKind`s for O(1) membership testing.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Panics at compile time if any kind's discriminant >= 64.
    #[inline]
    pub const fn new(kinds: &[SyntaxKind]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < kinds.len() {
            let kind = kinds[i] as u16;
            assert!(kind < 64, "SyntaxKind value exceeds TokenSet capacity");
            bits |= 1 << kind;
            i += 1;
        }
        TokenSet(bits)
    }

    #[inline]
    pub const fn contains(&self, kind: SyntaxKind) -> bool {
        let kind = kind as u16;
        if kind >= 64 {
            return false;
        }
        self.0 & (1 << kind) != 0
    }
}

impl std::fmt::Debug for TokenSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_set();
        for i in 0..64u16 {
            if self.0 & (1 << i) != 0 && i < __LAST as u16 {
                let kind: SyntaxKind = unsafe { std::mem::transmute(i) };
                list.entry(&kind);
            }
        }
        list.finish()
    }
}

/// Pre-defined token sets for the parser.
pub mod token_sets {
    use super::*;

    /// Single-lexeme quantifier sigils. Brace sigils need lookahead.
    pub const QUANTIFIERS: TokenSet = TokenSet::new(&[Plus, Star, Question]);

    /// Lexemes that end an alternative.
    pub const ALTERNATIVE_END: TokenSet = TokenSet::new(&[Slash, Pipe, Eof]);

    /// Lexemes that cannot start a range endpoint after `-` in a class.
    pub const RANGE_END: TokenSet = TokenSet::new(&[BracketClose, Eof, Garbage]);
}
