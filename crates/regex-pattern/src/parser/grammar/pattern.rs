use regex_pattern_core::{Alternative, Category, Character, Element, Pattern, SpanName};

use crate::Result;
use crate::diagnostics::ErrorKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;
use crate::parser::cst::token_sets::ALTERNATIVE_END;

impl Parser<'_> {
    /// `/alt|alt/flags`
    pub(crate) fn parse_pattern(&mut self) -> Result<Pattern> {
        match self.current() {
            SyntaxKind::Slash => {}
            SyntaxKind::Interpolation => {
                return Err(self.error(
                    ErrorKind::Composition,
                    "an embedded subtree cannot open a pattern",
                ));
            }
            SyntaxKind::Garbage => return Err(self.lexical_error()),
            _ => {
                return Err(self.error(ErrorKind::Delimiter, "expected `/` to open the pattern"));
            }
        }

        self.push_delimiter(SyntaxKind::Slash);
        let open_token = self
            .bump_token(Category::Punctuator)?
            .with_balanced('/', SpanName::Pattern);

        let mut alternatives = vec![self.parse_alternative()?];
        let mut separator_tokens = Vec::new();
        while self.at(SyntaxKind::Pipe) {
            separator_tokens.push(self.bump_token(Category::Punctuator)?);
            alternatives.push(self.parse_alternative()?);
        }

        if !self.at(SyntaxKind::Slash) {
            return Err(self.error_unclosed(
                ErrorKind::Delimiter,
                "missing closing `/`",
                "pattern opened here",
            ));
        }
        let close_token = self.bump_token(Category::Punctuator)?.as_balancer();
        self.pop_delimiter();

        let flags = self.parse_flags()?;

        Ok(Pattern::new(
            open_token,
            alternatives,
            separator_tokens,
            close_token,
            flags,
        ))
    }

    /// Elements up to the next `|`, closing `/`, or end of input.
    fn parse_alternative(&mut self) -> Result<Alternative> {
        let mut elements = Vec::new();
        while !self.at_set(ALTERNATIVE_END) {
            let element = self.parse_element()?;
            elements.push(self.parse_quantified(element)?);
        }
        Ok(Alternative::new(elements))
    }

    fn parse_element(&mut self) -> Result<Element> {
        match self.current() {
            SyntaxKind::BracketOpen => Ok(Element::CharacterClass(self.parse_class()?)),
            SyntaxKind::Backslash => self.parse_escape(),
            SyntaxKind::Interpolation => self.splice_element(),
            _ if self.at_quantifier() => Err(self.error(ErrorKind::Quantifier, "nothing to repeat")),
            _ => Ok(Element::Character(self.parse_literal()?)),
        }
    }

    /// Any single lexeme taken verbatim.
    pub(crate) fn parse_literal(&mut self) -> Result<Character> {
        Ok(Character::literal(self.bump_token(Category::Character)?))
    }
}
