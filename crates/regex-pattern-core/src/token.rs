//! Terminal lexemes of the CST.
//!
//! A [`Token`] owns its source text and carries the structural markers the
//! grammar attaches to it: delimiter balancing (`balanced`, `balancedSpan`,
//! `balancer`) and composite escape spans (`openSpan`, `closeSpan`).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::invariants;
use crate::validate;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Punctuator,
    Keyword,
    Character,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Punctuator => write!(f, "Punctuator"),
            Category::Keyword => write!(f, "Keyword"),
            Category::Character => write!(f, "Character"),
        }
    }
}

/// Names of the spans a token can open or close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpanName {
    Pattern,
    CharacterClass,
    /// Brace bounds of a quantifier: `{2,5}`
    Quantifier,
    /// Backslash plus its code: `\<`
    Escape,
}

impl fmt::Display for SpanName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpanName::Pattern => write!(f, "Pattern"),
            SpanName::CharacterClass => write!(f, "CharacterClass"),
            SpanName::Quantifier => write!(f, "Quantifier"),
            SpanName::Escape => write!(f, "Escape"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "crate::raw::RawToken")]
pub struct Token {
    category: Category,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balanced: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balanced_span: Option<SpanName>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    balancer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open_span: Option<SpanName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    close_span: Option<SpanName>,
}

impl Token {
    pub fn new(category: Category, text: impl Into<String>) -> Self {
        let text = text.into();
        invariants::assert_valid(validate::token(&text, None, None));
        Self {
            category,
            text,
            balanced: None,
            balanced_span: None,
            balancer: false,
            open_span: None,
            close_span: None,
        }
    }

    pub fn punctuator(text: impl Into<String>) -> Self {
        Self::new(Category::Punctuator, text)
    }

    pub fn keyword(text: impl Into<String>) -> Self {
        Self::new(Category::Keyword, text)
    }

    pub fn character(text: impl Into<String>) -> Self {
        Self::new(Category::Character, text)
    }

    /// Marks this token as the opener of `span`, closed by `closer`.
    pub fn with_balanced(mut self, closer: char, span: SpanName) -> Self {
        self.balanced = Some(closer);
        self.balanced_span = Some(span);
        self
    }

    /// Marks this token as the closer of the innermost balanced span.
    pub fn as_balancer(mut self) -> Self {
        self.balancer = true;
        self
    }

    pub fn with_open_span(mut self, span: SpanName) -> Self {
        self.open_span = Some(span);
        self
    }

    pub fn with_close_span(mut self, span: SpanName) -> Self {
        self.close_span = Some(span);
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn balanced(&self) -> Option<char> {
        self.balanced
    }

    pub fn balanced_span(&self) -> Option<SpanName> {
        self.balanced_span
    }

    pub fn is_balancer(&self) -> bool {
        self.balancer
    }

    pub fn open_span(&self) -> Option<SpanName> {
        self.open_span
    }

    pub fn close_span(&self) -> Option<SpanName> {
        self.close_span
    }

    /// The single character of a one-character token.
    pub fn as_char(&self) -> Option<char> {
        let mut chars = self.text.chars();
        let c = chars.next()?;
        chars.next().is_none().then_some(c)
    }
}
