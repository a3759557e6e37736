//! Flag letters after the closing `/`, or an embedded `Flags` subtree.

use regex_pattern_core::{Category, Flag, Flags};

use crate::Result;
use crate::diagnostics::ErrorKind;
use crate::parser::Parser;
use crate::parser::cst::SyntaxKind;

impl Parser<'_> {
    /// Consumes the rest of the input as flags.
    pub(crate) fn parse_flags(&mut self) -> Result<Flags> {
        if self.at(SyntaxKind::Interpolation) {
            let flags = self.splice_flags()?;
            if !self.at(SyntaxKind::Eof) {
                return Err(self.error_mixed_flags());
            }
            return Ok(flags);
        }

        let mut seen = [false; Flag::ALL.len()];
        let mut tokens = Vec::new();
        loop {
            match self.current() {
                SyntaxKind::Eof => break,
                SyntaxKind::Interpolation => return Err(self.error_mixed_flags()),
                SyntaxKind::Garbage => return Err(self.lexical_error()),
                _ => {
                    let text = self.current_text();
                    let Some(flag) = text.chars().next().and_then(Flag::from_letter) else {
                        return Err(self.error(ErrorKind::Flag, format!("unknown flag `{text}`")));
                    };
                    if std::mem::replace(&mut seen[flag.index()], true) {
                        return Err(self.error(ErrorKind::Flag, format!("duplicate flag `{text}`")));
                    }
                    tokens.push(self.bump_token(Category::Keyword)?);
                }
            }
        }

        Ok(Flags::new(tokens))
    }

    fn error_mixed_flags(&self) -> crate::Error {
        self.error(
            ErrorKind::Composition,
            "flag letters cannot be mixed with embedded flags",
        )
    }
}
