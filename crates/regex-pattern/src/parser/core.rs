//! Parser state machine and low-level operations.

use std::cell::Cell;

use rowan::{TextRange, TextSize};

use regex_pattern_core::{Category, Flags, Node, Pattern, Token};

use super::Production;
use super::cst::{SyntaxKind, TokenSet};
use super::lexer::{Lexeme, lex_template, lexeme_text};
use crate::diagnostics::{ErrorKind, ParseError};
use crate::template::Template;
use crate::{Error, Result};

/// Lookaheads allowed between two consumed lexemes.
const LOOKAHEAD_BUDGET: u32 = 256;

#[derive(Debug, Clone, Copy)]
pub(super) struct OpenDelimiter {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

/// Single-pass parser over a template's lexemes.
pub struct Parser<'t> {
    pub(super) template: &'t Template,
    pub(super) lexemes: Vec<Lexeme>,
    pub(super) pos: usize,
    pub(super) delimiter_stack: Vec<OpenDelimiter>,
    pub(super) lookahead_budget: Cell<u32>,
    next_substitution: usize,
    exec_fuel_remaining: Option<u32>,
}

impl<'t> Parser<'t> {
    pub fn new(template: &'t Template) -> Self {
        Self {
            template,
            lexemes: lex_template(template),
            pos: 0,
            delimiter_stack: Vec::with_capacity(4),
            lookahead_budget: Cell::new(LOOKAHEAD_BUDGET),
            next_substitution: 0,
            exec_fuel_remaining: None,
        }
    }

    /// Caps the number of lexemes the parser may consume.
    pub fn with_exec_fuel(mut self, limit: Option<u32>) -> Self {
        self.exec_fuel_remaining = limit;
        self
    }

    pub fn parse(self, production: Production) -> Result<Node> {
        match production {
            Production::Pattern => self.pattern().map(Node::from),
            Production::Flags => self.flags().map(Node::from),
        }
    }

    /// Parses the whole input as `/body/flags`.
    pub fn pattern(mut self) -> Result<Pattern> {
        let pattern = self.parse_pattern()?;
        self.finish()?;
        Ok(pattern)
    }

    /// Parses the whole input as flag letters.
    pub fn flags(mut self) -> Result<Flags> {
        let flags = self.parse_flags()?;
        self.finish()?;
        Ok(flags)
    }

    /// Every supplied subtree must have been spliced at an interpolation.
    fn finish(&self) -> Result<()> {
        self.expect_lexeme(SyntaxKind::Eof);
        let index = self.next_substitution;
        if index != self.template.substitutions().len() {
            return Err(self.error_at(
                ErrorKind::Composition,
                TextRange::empty(self.eof_offset()),
                format!("no interpolation for supplied subtree {index}"),
            ));
        }
        Ok(())
    }

    fn refill_lookahead(&self) {
        self.lookahead_budget.set(LOOKAHEAD_BUDGET);
    }

    pub(super) fn nth(&self, lookahead: usize) -> SyntaxKind {
        self.spend_lookahead();
        self.lexemes
            .get(self.pos + lookahead)
            .map_or(SyntaxKind::Eof, |l| l.kind)
    }

    pub(super) fn current(&self) -> SyntaxKind {
        self.nth(0)
    }

    pub(super) fn at(&self, kind: SyntaxKind) -> bool {
        self.current() == kind
    }

    pub(super) fn at_set(&self, set: TokenSet) -> bool {
        set.contains(self.current())
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.lexemes.len()
    }

    pub(super) fn eof_offset(&self) -> TextSize {
        TextSize::from(self.template.source().len() as u32)
    }

    pub(super) fn nth_span(&self, lookahead: usize) -> TextRange {
        self.lexemes
            .get(self.pos + lookahead)
            .map_or_else(|| TextRange::empty(self.eof_offset()), |l| l.span)
    }

    pub(super) fn current_span(&self) -> TextRange {
        self.nth_span(0)
    }

    /// Text of a lexeme ahead of the cursor. Empty at EOF and for interpolations.
    pub(super) fn nth_text(&self, lookahead: usize) -> &'t str {
        let template: &'t Template = self.template;
        self.lexemes
            .get(self.pos + lookahead)
            .map_or("", |l| lexeme_text(template.source(), l))
    }

    pub(super) fn current_text(&self) -> &'t str {
        self.nth_text(0)
    }

    fn consume_exec_fuel(&mut self) -> Result<()> {
        if let Some(ref mut remaining) = self.exec_fuel_remaining {
            if *remaining == 0 {
                return Err(Error::ExecFuelExhausted);
            }
            *remaining -= 1;
        }
        Ok(())
    }

    /// Consumes the current lexeme. Line terminators are rejected here, so every
    /// production that consumes input reports them the same way.
    pub(super) fn bump(&mut self) -> Result<Lexeme> {
        assert!(!self.eof(), "bump called at EOF");
        if self.at(SyntaxKind::Garbage) {
            return Err(self.lexical_error());
        }
        self.refill_lookahead();
        self.consume_exec_fuel()?;

        let lexeme = self.lexemes[self.pos];
        self.pos += 1;
        Ok(lexeme)
    }

    /// Consumes the current lexeme as a CST token of the given category.
    pub(super) fn bump_token(&mut self, category: Category) -> Result<Token> {
        let text = self.current_text();
        self.bump()?;
        Ok(Token::new(category, text))
    }

    /// Takes the subtree for the interpolation under the cursor.
    pub(super) fn take_substitution(&mut self) -> Result<Node> {
        self.expect_lexeme(SyntaxKind::Interpolation);
        let index = self.next_substitution;
        let Some(node) = self.template.substitution(index) else {
            return Err(self.error(
                ErrorKind::Composition,
                format!("no subtree supplied for interpolation {index}"),
            ));
        };
        self.bump()?;
        self.next_substitution += 1;
        Ok(node.clone())
    }

    /// Subtree the next interpolation would take, without consuming it.
    pub(super) fn peek_substitution(&self) -> Option<&'t Node> {
        let template: &'t Template = self.template;
        template.substitution(self.next_substitution)
    }

    pub(super) fn push_delimiter(&mut self, kind: SyntaxKind) {
        let span = self.current_span();
        self.delimiter_stack.push(OpenDelimiter { kind, span });
    }

    pub(super) fn pop_delimiter(&mut self) -> Option<OpenDelimiter> {
        self.delimiter_stack.pop()
    }

    /// Line terminator under the cursor.
    pub(super) fn lexical_error(&self) -> Error {
        self.error(ErrorKind::Lexical, ErrorKind::Lexical.fallback_message())
    }

    /// Error at the cursor.
    pub(super) fn error(&self, kind: ErrorKind, message: impl Into<String>) -> Error {
        self.error_at(kind, self.current_span(), message)
    }

    pub(super) fn error_at(
        &self,
        kind: ErrorKind,
        range: TextRange,
        message: impl Into<String>,
    ) -> Error {
        Error::Parse(ParseError::new(kind, range, message))
    }

    /// Error at the cursor pointing back to the innermost open delimiter.
    pub(super) fn error_unclosed(
        &self,
        kind: ErrorKind,
        message: impl Into<String>,
        related_msg: impl Into<String>,
    ) -> Error {
        let mut error = ParseError::new(kind, self.current_span(), message);
        if let Some(open) = self.delimiter_stack.last() {
            debug_assert!(matches!(
                open.kind,
                SyntaxKind::Slash | SyntaxKind::BracketOpen
            ));
            error = error.related_to(open.span, related_msg);
        }
        Error::Parse(error)
    }
}
