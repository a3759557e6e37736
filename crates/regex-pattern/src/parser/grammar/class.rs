//! Character classes: `[...]` and `[^...]`.
//!
//! Inside a class every lexeme other than `]` and `\` is a literal
//! character, including `/`, `|` and the quantifier sigils.

use regex_pattern_core::{
    Category, Character, CharacterClass, CharacterClassRange, ClassElement, Node, NodeType,
    SpanName,
};

use crate::Result;
use crate::diagnostics::ErrorKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::RANGE_END;

impl Parser<'_> {
    pub(crate) fn parse_class(&mut self) -> Result<CharacterClass> {
        self.expect_lexeme(SyntaxKind::BracketOpen);
        self.push_delimiter(SyntaxKind::BracketOpen);
        let open_token = self
            .bump_token(Category::Punctuator)?
            .with_balanced(']', SpanName::CharacterClass);

        let negate_token = if self.at(SyntaxKind::Caret) {
            Some(self.bump_token(Category::Punctuator)?)
        } else {
            None
        };

        let mut elements = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::BracketClose => break,
                SyntaxKind::Eof => {
                    return Err(self.error_unclosed(
                        ErrorKind::CharacterClass,
                        "unclosed character class",
                        "class opened here",
                    ));
                }
                _ => elements.push(self.parse_class_element()?),
            }
        }

        let close_token = self.bump_token(Category::Punctuator)?.as_balancer();
        self.pop_delimiter();

        Ok(CharacterClass::new(
            open_token,
            negate_token,
            elements,
            close_token,
        ))
    }

    /// Character, word set, or `min-max` range.
    fn parse_class_element(&mut self) -> Result<ClassElement> {
        let min = match self.current() {
            SyntaxKind::Backslash => match self.parse_class_escape()? {
                ClassElement::Character(c) => c,
                other => return Ok(other),
            },
            SyntaxKind::Interpolation => match self.splice_class_element()? {
                ClassElement::Character(c) => c,
                other => return Ok(other),
            },
            _ => self.parse_literal()?,
        };

        if !self.at_range_sigil() {
            return Ok(ClassElement::Character(min));
        }
        let sigil_token = self.bump_token(Category::Punctuator)?;
        let max = self.parse_range_max()?;

        Ok(ClassElement::Range(CharacterClassRange::new(
            min,
            sigil_token,
            max,
        )))
    }

    /// `-` followed by something that can end a range.
    fn at_range_sigil(&self) -> bool {
        if !self.at(SyntaxKind::Minus) {
            return false;
        }
        match self.nth(1) {
            kind if RANGE_END.contains(kind) => false,
            SyntaxKind::Backslash => !matches!(self.nth_text(2), "w" | "W"),
            SyntaxKind::Interpolation => matches!(
                self.peek_substitution().map(Node::node_type),
                Some(NodeType::Character | NodeType::EscapeSequence)
            ),
            _ => true,
        }
    }

    fn parse_range_max(&mut self) -> Result<Character> {
        let span = self.current_span();
        let element = match self.current() {
            SyntaxKind::Backslash => self.parse_class_escape()?,
            SyntaxKind::Interpolation => self.splice_class_element()?,
            _ => return self.parse_literal(),
        };
        match element {
            ClassElement::Character(c) => Ok(c),
            other => Err(self.error_at(
                ErrorKind::Composition,
                span,
                format!(
                    "a range must end in a character, found `{}`",
                    other.node_type()
                ),
            )),
        }
    }
}
