//! Parse errors and their rendering.
//!
//! The grammar aborts on the first violation, so a failed parse yields exactly
//! one [`ParseError`]. Rendering against the source goes through
//! [`DiagnosticPrinter`].

mod printer;


use rowan::TextRange;
use serde::{Serialize, Serializer};

pub use printer::DiagnosticPrinter;

/// Class of grammar violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Missing or unclosed `/`, or an unterminated escape.
    Delimiter,
    /// Unknown or repeated flag letter.
    Flag,
    /// Malformed or misplaced quantifier.
    Quantifier,
    /// Unclosed character class.
    CharacterClass,
    /// Embedded subtree missing, misplaced, or of the wrong node type.
    Composition,
    /// Character that cannot appear in a pattern literal.
    Lexical,
}

impl ErrorKind {
    /// Base message for this kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Delimiter => "unbalanced pattern delimiter",
            Self::Flag => "invalid flag",
            Self::Quantifier => "invalid quantifier",
            Self::CharacterClass => "unclosed character class",
            Self::Composition => "invalid embedded subtree",
            Self::Lexical => "line terminators cannot appear in a pattern",
        }
    }

    /// Hint shown under the offending span when rendering.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::Delimiter => Some("a pattern is written `/body/flags`"),
            Self::Flag => Some("valid flags are `g`, `i`, `m`, `s`, `u` and `y`, each at most once"),
            Self::Quantifier => Some("a quantifier repeats the single element before it"),
            Self::CharacterClass => Some("close the class with `]`"),
            Self::Composition => None,
            Self::Lexical => Some("use `\\n` to match a line break"),
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delimiter => write!(f, "DelimiterError"),
            Self::Flag => write!(f, "FlagError"),
            Self::Quantifier => write!(f, "QuantifierError"),
            Self::CharacterClass => write!(f, "CharacterClassError"),
            Self::Composition => write!(f, "CompositionError"),
            Self::Lexical => write!(f, "LexicalError"),
        }
    }
}

/// Related location for a parse error.
/// Used to point to where a construct started (e.g., unclosed delimiter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    pub message: String,
}

impl RelatedInfo {
    pub fn new(range: TextRange, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

/// A grammar violation with location and message.
///
/// `range.start()` is the cursor position where parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub kind: ErrorKind,
    #[serde(serialize_with = "serialize_text_range")]
    pub range: TextRange,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<RelatedInfo>,
}

fn serialize_text_range<S: Serializer>(range: &TextRange, s: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeStruct;
    let mut state = s.serialize_struct("TextRange", 2)?;
    state.serialize_field("start", &u32::from(range.start()))?;
    state.serialize_field("end", &u32::from(range.end()))?;
    state.end()
}

impl ParseError {
    pub fn new(kind: ErrorKind, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            related: Vec::new(),
        }
    }

    /// Uses the kind's fallback message.
    pub fn with_default_message(kind: ErrorKind, range: TextRange) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn related_to(mut self, range: TextRange, message: impl Into<String>) -> Self {
        self.related.push(RelatedInfo::new(range, message));
        self
    }

    /// Byte offset where parsing stopped.
    pub fn offset(&self) -> u32 {
        u32::from(self.range.start())
    }

    pub fn printer<'e, 's>(&'e self, source: &'s str) -> DiagnosticPrinter<'e, 's> {
        DiagnosticPrinter::new(self, source)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.kind,
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.range.start()),
                u32::from(related.range.end())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
