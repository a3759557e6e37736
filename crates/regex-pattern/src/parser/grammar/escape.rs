//! Backslash escapes.
//!
//! `\w`/`\W` become word-character sets and `\g` outside a class becomes a
//! gap. Every other code is a character escape decoded by
//! [`EscapeSequence::decode`].

use regex_pattern_core::{
    Character, ClassElement, Element, EscapeSequence, Gap, SpanName, Token, WordCharacterSet,
};

use crate::diagnostics::{ErrorKind, ParseError};
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::{Error, Result};

fn escaped_character(code: char) -> Character {
    Character::Escaped(EscapeSequence::new(
        EscapeSequence::decode(code),
        Token::punctuator("\\").with_open_span(SpanName::Escape),
        Token::keyword(code).with_close_span(SpanName::Escape),
    ))
}

fn is_word_set(code: char) -> bool {
    matches!(code, 'w' | 'W')
}

fn word_set(code: char) -> WordCharacterSet {
    WordCharacterSet::new(Token::punctuator("\\"), Token::keyword(code))
}

impl Parser<'_> {
    /// `\` plus code at element position.
    pub(crate) fn parse_escape(&mut self) -> Result<Element> {
        let code = self.bump_escape()?;
        Ok(match code {
            c if is_word_set(c) => Element::WordCharacterSet(word_set(c)),
            'g' => Element::Gap(Gap::new(Token::punctuator("\\"), Token::keyword(code))),
            c => Element::Character(escaped_character(c)),
        })
    }

    /// `\` plus code inside a class, where `\g` is an ordinary escape.
    pub(crate) fn parse_class_escape(&mut self) -> Result<ClassElement> {
        let code = self.bump_escape()?;
        Ok(if is_word_set(code) {
            ClassElement::WordCharacterSet(word_set(code))
        } else {
            ClassElement::Character(escaped_character(code))
        })
    }

    /// Consumes `\` and the lexeme after it, returning that lexeme's character.
    fn bump_escape(&mut self) -> Result<char> {
        self.expect_lexeme(SyntaxKind::Backslash);
        let backslash = self.current_span();
        self.bump()?;

        if self.at(SyntaxKind::Interpolation) {
            return Err(self.error(
                ErrorKind::Composition,
                "an escape sequence cannot end in an embedded subtree",
            ));
        }
        if self.at(SyntaxKind::Garbage) {
            return Err(self.lexical_error());
        }
        let Some(code) = self.current_text().chars().next() else {
            let error = ParseError::new(
                ErrorKind::Delimiter,
                self.current_span(),
                "unterminated escape sequence",
            )
            .related_to(backslash, "escape started here");
            return Err(Error::Parse(error));
        };
        self.bump()?;
        Ok(code)
    }
}
