//! Quantifier sigils: `+`, `*`, `?` and the brace forms `{m}`, `{m,}`, `{m,n}`.
//!
//! A `{` that does not complete one of the brace forms is an ordinary
//! character, so brace sigils are recognized by scanning ahead first.

use std::ops::Range;

use rowan::TextRange;

use regex_pattern_core::{
    Bound, Braces, Category, Element, Quantifier, Sigil, SpanName, SyntaxTree, Token,
};

use crate::Result;
use crate::diagnostics::ErrorKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::QUANTIFIERS;

impl Parser<'_> {
    pub(crate) fn at_quantifier(&self) -> bool {
        self.at_set(QUANTIFIERS) || self.at_brace_sigil()
    }

    /// Whether a complete brace sigil starts at the cursor.
    fn at_brace_sigil(&self) -> bool {
        let Some(rest) = self.lexemes.get(self.pos..) else {
            return false;
        };
        let kind = |i: usize| rest.get(i).map(|l| l.kind);
        let skip_digits = |mut i: usize| {
            while kind(i) == Some(SyntaxKind::Digit) {
                i += 1;
            }
            i
        };

        if kind(0) != Some(SyntaxKind::BraceOpen) {
            return false;
        }
        let mut i = skip_digits(1);
        if i == 1 {
            return false;
        }
        if kind(i) == Some(SyntaxKind::Comma) {
            i = skip_digits(i + 1);
        }
        kind(i) == Some(SyntaxKind::BraceClose)
    }

    /// Wraps `element` in a quantifier if a sigil follows it.
    pub(crate) fn parse_quantified(&mut self, element: Element) -> Result<Element> {
        if !self.at_quantifier() {
            return Ok(element);
        }
        if matches!(element, Element::Quantifier(_)) {
            return Err(self.error_stacked_quantifier());
        }

        let (sigil, min, max) = self.parse_sigil()?;
        if self.at(SyntaxKind::Question) {
            return Err(self.error(
                ErrorKind::Quantifier,
                format!("lazy quantifier `{}?` is not supported", sigil.text()),
            ));
        }
        if self.at_quantifier() {
            return Err(self.error_stacked_quantifier());
        }
        Ok(Element::Quantifier(Quantifier::new(element, sigil, min, max)))
    }

    fn error_stacked_quantifier(&self) -> crate::Error {
        self.error(
            ErrorKind::Quantifier,
            "a quantifier cannot follow another quantifier",
        )
    }

    fn parse_sigil(&mut self) -> Result<(Sigil, u32, Bound)> {
        if self.at(SyntaxKind::BraceOpen) {
            return self.parse_braces();
        }
        let bounds = self
            .at_set(QUANTIFIERS)
            .then(|| Sigil::token_bounds(self.current_text()))
            .flatten();
        let Some((min, max)) = bounds else {
            return Err(self.error(ErrorKind::Quantifier, "expected a quantifier"));
        };
        let token = self.bump_token(Category::Keyword)?;
        Ok((Sigil::Token(token), min, max))
    }

    /// `{m}` | `{m,}` | `{m,n}`
    fn parse_braces(&mut self) -> Result<(Sigil, u32, Bound)> {
        let start = self.current_span().start();
        let open_token = self
            .bump_token(Category::Punctuator)?
            .with_balanced('}', SpanName::Quantifier);
        let (min_token, min) = self.parse_bound()?;

        let mut separator_token = None;
        let mut max_token = None;
        let mut max = Bound::Finite(min);
        if self.at(SyntaxKind::Comma) {
            separator_token = Some(self.bump_token(Category::Punctuator)?);
            max = Bound::Infinite;
            if self.at(SyntaxKind::Digit) {
                let (token, value) = self.parse_bound()?;
                max_token = Some(token);
                max = Bound::Finite(value);
            }
        }

        let end = self.current_span().end();
        let close_token = self.bump_token(Category::Punctuator)?.as_balancer();

        if !max.admits(min) {
            return Err(self.error_at(
                ErrorKind::Quantifier,
                TextRange::new(start, end),
                format!("numbers out of order in `{{{min},{max}}}` quantifier"),
            ));
        }

        let braces = Braces::new(open_token, min_token, separator_token, max_token, close_token);
        Ok((Sigil::Braces(braces), min, max))
    }

    /// Coalesces a digit run into one numeric token.
    fn parse_bound(&mut self) -> Result<(Token, u32)> {
        let start = self.current_span().start();
        let mut end = start;
        while self.at(SyntaxKind::Digit) {
            end = self.bump()?.span.end();
        }

        let range = TextRange::new(start, end);
        let text = &self.template.source()[Range::<usize>::from(range)];
        let Ok(value) = text.parse::<u32>() else {
            return Err(self.error_at(
                ErrorKind::Quantifier,
                range,
                format!("bound `{text}` does not fit in 32 bits"),
            ));
        };
        Ok((Token::character(text), value))
    }
}
