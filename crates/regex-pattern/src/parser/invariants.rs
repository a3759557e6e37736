//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::core::Parser;
use super::cst::SyntaxKind;

impl Parser<'_> {
    /// Each lookahead spends budget; consuming a lexeme refills it. Running
    /// dry means a grammar loop peeks without ever bumping.
    #[inline]
    pub(super) fn spend_lookahead(&self) {
        let budget = self.lookahead_budget.get();
        assert!(
            budget != 0,
            "grammar loop made no progress at lexeme {} of {} in {:?}",
            self.pos,
            self.lexemes.len(),
            self.template.source(),
        );
        self.lookahead_budget.set(budget - 1);
    }

    /// Grammar functions are entered only once their first lexeme has been seen.
    #[inline]
    pub(super) fn expect_lexeme(&self, expected: SyntaxKind) {
        let found = self.current();
        if found != expected {
            panic!(
                "grammar entered on {found:?} `{}` at {:?}, but starts with {expected:?}",
                self.current_text(),
                self.current_span(),
            );
        }
    }
}
