//! Lexer for pattern literals.
//!
//! Produces span-based lexemes without storing text - text is sliced from source only when needed.
//! Every lexeme is one character; grammar decisions (which punctuator is literal, how digits
//! group into bounds) are left to the parser.
//!
//! ## Error handling
//!
//! Line terminators cannot appear in a pattern literal. The lexer coalesces consecutive ones
//! into single `Garbage` lexemes; the parser rejects them when it reaches one.
//!
//! ## Templates
//!
//! A [`Template`] is lexed segment by segment. A zero-width `Interpolation` lexeme sits at
//! each segment boundary, so no lexeme ever spans an embedded subtree.

use logos::Logos;
use rowan::{TextRange, TextSize};
use std::ops::Range;

use super::cst::SyntaxKind;
use crate::template::Template;

/// Zero-copy lexeme: kind + span, text retrieved via [`lexeme_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Lexeme {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

fn range_to_text_range(range: Range<usize>) -> TextRange {
    TextRange::new((range.start as u32).into(), (range.end as u32).into())
}

/// Tokenizes plain source into a vector of span-based lexemes.
pub fn lex(source: &str) -> Vec<Lexeme> {
    let mut lexemes = Vec::new();
    lex_segment(source, 0, &mut lexemes);
    lexemes
}

/// Tokenizes every template segment, with an `Interpolation` lexeme at each boundary.
pub fn lex_template(template: &Template) -> Vec<Lexeme> {
    let source = template.source();
    let mut lexemes = Vec::new();
    let mut start = 0;

    for &boundary in template.boundaries() {
        lex_segment(&source[start..boundary], start, &mut lexemes);
        lexemes.push(Lexeme::new(
            SyntaxKind::Interpolation,
            TextRange::empty(TextSize::from(boundary as u32)),
        ));
        start = boundary;
    }
    lex_segment(&source[start..], start, &mut lexemes);

    lexemes
}

/// Lexes `segment`, whose first byte sits at `base` in the full source.
fn lex_segment(segment: &str, base: usize, lexemes: &mut Vec<Lexeme>) {
    let mut lexer = SyntaxKind::lexer(segment);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    lexemes.push(Lexeme::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(base + start..base + end),
                    ));
                }

                let span = lexer.span();
                lexemes.push(Lexeme::new(
                    kind,
                    range_to_text_range(base + span.start..base + span.end),
                ));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    lexemes.push(Lexeme::new(
                        SyntaxKind::Garbage,
                        range_to_text_range(base + start..base + segment.len()),
                    ));
                }
                break;
            }
        }
    }
}

/// Retrieves the text slice for a lexeme. O(1) slice into source.
#[inline]
pub fn lexeme_text<'s>(source: &'s str, lexeme: &Lexeme) -> &'s str {
    &source[std::ops::Range::<usize>::from(lexeme.span)]
}
