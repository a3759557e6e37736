//! Source-order token traversal.
//!
//! Every node yields its tokens in the order they appeared in source, so
//! concatenating their text reproduces the input exactly.

use crate::node::{
    Alternative, Braces, Character, CharacterClass, CharacterClassRange, ClassElement, Element,
    EscapeSequence, Flags, Gap, Node, Pattern, Quantifier, Sigil, WordCharacterSet,
};
use crate::token::Token;

pub trait SyntaxTree {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token));

    fn tokens(&self) -> Vec<&Token> {
        let mut out = Vec::new();
        self.walk_tokens(&mut |t| out.push(t));
        out
    }

    /// Lossless source text.
    fn text(&self) -> String {
        let mut out = String::new();
        self.walk_tokens(&mut |t| out.push_str(t.text()));
        out
    }
}

impl SyntaxTree for Token {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self)
    }
}

impl SyntaxTree for Pattern {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self.open_token());
        for (i, alternative) in self.alternatives().iter().enumerate() {
            if i > 0 {
                f(&self.separator_tokens()[i - 1]);
            }
            alternative.walk_tokens(f);
        }
        f(self.close_token());
        self.flags().walk_tokens(f);
    }
}

impl SyntaxTree for Alternative {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        for element in self.elements() {
            element.walk_tokens(f);
        }
    }
}

impl SyntaxTree for Element {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        match self {
            Element::Character(n) => n.walk_tokens(f),
            Element::CharacterClass(n) => n.walk_tokens(f),
            Element::Quantifier(n) => n.walk_tokens(f),
            Element::WordCharacterSet(n) => n.walk_tokens(f),
            Element::Gap(n) => n.walk_tokens(f),
        }
    }
}

impl SyntaxTree for Character {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        match self {
            Character::Literal(token) => f(token),
            Character::Escaped(escape) => escape.walk_tokens(f),
        }
    }
}

impl SyntaxTree for EscapeSequence {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self.escape());
        f(self.code());
    }
}

impl SyntaxTree for CharacterClass {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self.open_token());
        if let Some(negate) = self.negate_token() {
            f(negate);
        }
        for element in self.elements() {
            element.walk_tokens(f);
        }
        f(self.close_token());
    }
}

impl SyntaxTree for ClassElement {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        match self {
            ClassElement::Character(n) => n.walk_tokens(f),
            ClassElement::Range(n) => n.walk_tokens(f),
            ClassElement::WordCharacterSet(n) => n.walk_tokens(f),
        }
    }
}

impl SyntaxTree for CharacterClassRange {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        self.min().walk_tokens(f);
        f(self.sigil_token());
        self.max().walk_tokens(f);
    }
}

impl SyntaxTree for Quantifier {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        self.element().walk_tokens(f);
        self.sigil().walk_tokens(f);
    }
}

impl SyntaxTree for Sigil {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        match self {
            Sigil::Token(token) => f(token),
            Sigil::Braces(braces) => braces.walk_tokens(f),
        }
    }
}

impl SyntaxTree for Braces {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self.open_token());
        f(self.min_token());
        if let Some(separator) = self.separator_token() {
            f(separator);
        }
        if let Some(max) = self.max_token() {
            f(max);
        }
        f(self.close_token());
    }
}

impl SyntaxTree for WordCharacterSet {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self.escape_token());
        f(self.value());
    }
}

impl SyntaxTree for Gap {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        f(self.escape_token());
        f(self.value());
    }
}

impl SyntaxTree for Flags {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        for token in self.tokens() {
            f(token);
        }
    }
}

impl SyntaxTree for Node {
    fn walk_tokens<'a>(&'a self, f: &mut dyn FnMut(&'a Token)) {
        match self {
            Node::Pattern(n) => n.walk_tokens(f),
            Node::Alternative(n) => n.walk_tokens(f),
            Node::Character(n) => n.walk_tokens(f),
            Node::CharacterClass(n) => n.walk_tokens(f),
            Node::CharacterClassRange(n) => n.walk_tokens(f),
            Node::Quantifier(n) => n.walk_tokens(f),
            Node::Flags(n) => n.walk_tokens(f),
            Node::EscapeSequence(n) => n.walk_tokens(f),
            Node::WordCharacterSet(n) => n.walk_tokens(f),
            Node::Gap(n) => n.walk_tokens(f),
        }
    }
}
