//! Balanced-span bookkeeping.
//!
//! Opening tokens (`balancedSpan`, `openSpan`) push onto a stack; closing
//! tokens (`balancer`, `closeSpan`) must match the innermost open span.

use thiserror::Error;

use crate::token::{SpanName, Token};
use crate::tree::SyntaxTree;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("token {index} (`{text}`) closes a span that was never opened")]
    Unmatched { index: usize, text: String },

    #[error("token {index} (`{text}`) cannot close the open `{open}` span")]
    Mismatched {
        index: usize,
        open: SpanName,
        text: String,
    },

    #[error("`{span}` span is never closed")]
    Unclosed { span: SpanName },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenSpan {
    span: SpanName,
    /// `None` for `openSpan`/`closeSpan` pairs, which match by name only.
    closer: Option<char>,
}

#[derive(Debug, Clone, Default)]
pub struct SpanStack {
    open: Vec<OpenSpan>,
    index: usize,
}

impl SpanStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the next token in source order. Closers are applied before openers.
    pub fn push(&mut self, token: &Token) -> Result<(), BalanceError> {
        let index = self.index;
        self.index += 1;

        if token.is_balancer() {
            self.close(index, token, |open| {
                open.closer.is_some() && open.closer == token.as_char()
            })?;
        }
        if let Some(span) = token.close_span() {
            self.close(index, token, |open| {
                open.closer.is_none() && open.span == span
            })?;
        }
        if let Some(span) = token.balanced_span() {
            self.open.push(OpenSpan {
                span,
                closer: token.balanced(),
            });
        }
        if let Some(span) = token.open_span() {
            self.open.push(OpenSpan { span, closer: None });
        }
        Ok(())
    }

    fn close(
        &mut self,
        index: usize,
        token: &Token,
        matches: impl FnOnce(&OpenSpan) -> bool,
    ) -> Result<(), BalanceError> {
        let Some(open) = self.open.pop() else {
            return Err(BalanceError::Unmatched {
                index,
                text: token.text().to_string(),
            });
        };
        if !matches(&open) {
            return Err(BalanceError::Mismatched {
                index,
                open: open.span,
                text: token.text().to_string(),
            });
        }
        Ok(())
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn innermost(&self) -> Option<SpanName> {
        self.open.last().map(|open| open.span)
    }

    pub fn finish(self) -> Result<(), BalanceError> {
        match self.innermost() {
            Some(span) => Err(BalanceError::Unclosed { span }),
            None => Ok(()),
        }
    }
}

/// Checks that every span opened in `tree` is closed in stack order.
pub fn check_balance<T: SyntaxTree + ?Sized>(tree: &T) -> Result<(), BalanceError> {
    let mut stack = SpanStack::new();
    let mut result = Ok(());
    tree.walk_tokens(&mut |token| {
        if result.is_ok() {
            result = stack.push(token);
        }
    });
    result?;
    stack.finish()
}
