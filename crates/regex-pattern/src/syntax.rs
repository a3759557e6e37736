//! Untyped view of a typed tree.
//!
//! Lowers any [`Node`] into a Rowan green tree so generic tooling (the raw
//! printer, text-range queries) can walk it without knowing the node types.
//! Token kinds follow the token category; node kinds follow the node type.

use rowan::{GreenNode, GreenNodeBuilder};

use regex_pattern_core::{
    Alternative, Braces, Category, Character, CharacterClass, CharacterClassRange, ClassElement,
    Element, EscapeSequence, Flags, Gap, Node, Pattern, Quantifier, Sigil, Token,
    WordCharacterSet,
};

use crate::parser::cst::{SyntaxKind, SyntaxNode};

pub fn build_green(node: &Node) -> GreenNode {
    let mut lowering = Lowering {
        builder: GreenNodeBuilder::new(),
    };
    lowering.node(node);
    lowering.builder.finish()
}

pub fn syntax_node(node: &Node) -> SyntaxNode {
    SyntaxNode::new_root(build_green(node))
}

fn token_kind(category: Category) -> SyntaxKind {
    match category {
        Category::Punctuator => SyntaxKind::PunctuatorToken,
        Category::Keyword => SyntaxKind::KeywordToken,
        Category::Character => SyntaxKind::CharacterToken,
    }
}

struct Lowering {
    builder: GreenNodeBuilder<'static>,
}

impl Lowering {
    fn token(&mut self, token: &Token) {
        self.builder
            .token(token_kind(token.category()).into(), token.text());
    }

    fn start(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn finish(&mut self) {
        self.builder.finish_node();
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Pattern(n) => self.pattern(n),
            Node::Alternative(n) => self.alternative(n),
            Node::Character(n) => self.character(n),
            Node::CharacterClass(n) => self.class(n),
            Node::CharacterClassRange(n) => self.range(n),
            Node::Quantifier(n) => self.quantifier(n),
            Node::Flags(n) => self.flags(n),
            Node::EscapeSequence(n) => self.escape(n),
            Node::WordCharacterSet(n) => self.word_set(n),
            Node::Gap(n) => self.gap(n),
        }
    }

    fn pattern(&mut self, pattern: &Pattern) {
        self.start(SyntaxKind::Pattern);
        self.token(pattern.open_token());
        for (i, alternative) in pattern.alternatives().iter().enumerate() {
            if i > 0 {
                self.token(&pattern.separator_tokens()[i - 1]);
            }
            self.alternative(alternative);
        }
        self.token(pattern.close_token());
        self.flags(pattern.flags());
        self.finish();
    }

    fn alternative(&mut self, alternative: &Alternative) {
        self.start(SyntaxKind::Alternative);
        for element in alternative.elements() {
            self.element(element);
        }
        self.finish();
    }

    fn element(&mut self, element: &Element) {
        match element {
            Element::Character(n) => self.character(n),
            Element::CharacterClass(n) => self.class(n),
            Element::Quantifier(n) => self.quantifier(n),
            Element::WordCharacterSet(n) => self.word_set(n),
            Element::Gap(n) => self.gap(n),
        }
    }

    fn character(&mut self, character: &Character) {
        self.start(SyntaxKind::Character);
        match character {
            Character::Literal(token) => self.token(token),
            Character::Escaped(escape) => self.escape(escape),
        }
        self.finish();
    }

    fn escape(&mut self, escape: &EscapeSequence) {
        self.start(SyntaxKind::EscapeSequence);
        self.token(escape.escape());
        self.token(escape.code());
        self.finish();
    }

    fn class(&mut self, class: &CharacterClass) {
        self.start(SyntaxKind::CharacterClass);
        self.token(class.open_token());
        if let Some(negate) = class.negate_token() {
            self.token(negate);
        }
        for element in class.elements() {
            match element {
                ClassElement::Character(n) => self.character(n),
                ClassElement::Range(n) => self.range(n),
                ClassElement::WordCharacterSet(n) => self.word_set(n),
            }
        }
        self.token(class.close_token());
        self.finish();
    }

    fn range(&mut self, range: &CharacterClassRange) {
        self.start(SyntaxKind::CharacterClassRange);
        self.character(range.min());
        self.token(range.sigil_token());
        self.character(range.max());
        self.finish();
    }

    fn quantifier(&mut self, quantifier: &Quantifier) {
        self.start(SyntaxKind::Quantifier);
        self.element(quantifier.element());
        match quantifier.sigil() {
            Sigil::Token(token) => self.token(token),
            Sigil::Braces(braces) => self.braces(braces),
        }
        self.finish();
    }

    fn braces(&mut self, braces: &Braces) {
        self.start(SyntaxKind::Braces);
        self.token(braces.open_token());
        self.token(braces.min_token());
        if let Some(separator) = braces.separator_token() {
            self.token(separator);
        }
        if let Some(max) = braces.max_token() {
            self.token(max);
        }
        self.token(braces.close_token());
        self.finish();
    }

    fn word_set(&mut self, set: &WordCharacterSet) {
        self.start(SyntaxKind::WordCharacterSet);
        self.token(set.escape_token());
        self.token(set.value());
        self.finish();
    }

    fn gap(&mut self, gap: &Gap) {
        self.start(SyntaxKind::Gap);
        self.token(gap.escape_token());
        self.token(gap.value());
        self.finish();
    }

    fn flags(&mut self, flags: &Flags) {
        self.start(SyntaxKind::Flags);
        for token in flags.tokens() {
            self.token(token);
        }
        self.finish();
    }
}
