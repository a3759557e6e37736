//! Deterministic text dumps of a CST.
//!
//! The typed view prints one line per node or token, named after the
//! attribute that holds it:
//!
//! ```text
//! Pattern
//!   openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
//!   alternatives[0]: Alternative
//!     elements[0]: <Character 'a'>
//!   ...
//! ```
//!
//! The raw view dumps the untyped Rowan tree from [`crate::syntax`].

use std::fmt::Write;

use rowan::NodeOrToken;

use regex_pattern_core::{
    Alternative, Braces, Character, CharacterClass, CharacterClassRange, ClassElement, Element,
    EscapeSequence, Flags, Gap, Node, Pattern, Quantifier, Sigil, Token, WordCharacterSet,
};

use crate::parser::cst::SyntaxNode;
use crate::syntax::syntax_node;

pub struct CstPrinter<'n> {
    node: &'n Node,
    raw: bool,
    spans: bool,
}

impl<'n> CstPrinter<'n> {
    pub fn new(node: &'n Node) -> Self {
        Self {
            node,
            raw: false,
            spans: false,
        }
    }

    /// Print the untyped Rowan tree instead of the typed attributes.
    pub fn raw(mut self, value: bool) -> Self {
        self.raw = value;
        self
    }

    /// Append `[start..end]` to raw lines. Ignored by the typed view.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.raw {
            self.format_raw(&syntax_node(self.node), 0, w)
        } else {
            format_node(self.node, w)
        }
    }

    fn format_raw(&self, node: &SyntaxNode, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        let span = self.span_str(node.text_range());
        writeln!(w, "{}{:?}{}", prefix, node.kind(), span)?;

        for child in node.children_with_tokens() {
            match child {
                NodeOrToken::Node(n) => self.format_raw(&n, indent + 1, w)?,
                NodeOrToken::Token(t) => {
                    let child_prefix = "  ".repeat(indent + 1);
                    let child_span = self.span_str(t.text_range());
                    writeln!(
                        w,
                        "{}{:?}{} {:?}",
                        child_prefix,
                        t.kind(),
                        child_span,
                        t.text()
                    )?;
                }
            }
        }
        Ok(())
    }

    fn span_str(&self, range: rowan::TextRange) -> String {
        if !self.spans {
            return String::new();
        }
        format!(
            " [{}..{}]",
            u32::from(range.start()),
            u32::from(range.end())
        )
    }
}

fn format_node(node: &Node, w: &mut impl Write) -> std::fmt::Result {
    let mut out = Typed { w };
    match node {
        Node::Pattern(n) => out.pattern(None, n, 0),
        Node::Alternative(n) => out.alternative(None, n, 0),
        Node::Character(n) => out.character(None, n, 0),
        Node::CharacterClass(n) => out.class(None, n, 0),
        Node::CharacterClassRange(n) => out.range(None, n, 0),
        Node::Quantifier(n) => out.quantifier(None, n, 0),
        Node::Flags(n) => out.flags(None, n, 0),
        Node::EscapeSequence(n) => out.escape(None, n, 0),
        Node::WordCharacterSet(n) => out.word_set(None, n, 0),
        Node::Gap(n) => out.gap(None, n, 0),
    }
}

/// `<Category 'text' markers...>`
fn token_str(token: &Token) -> String {
    let mut out = format!("<{} '{}'", token.category(), escape_text(token.text()));
    if let Some(closer) = token.balanced() {
        out.push_str(&format!(" balanced='{}'", escape_text(&closer.to_string())));
    }
    if let Some(span) = token.balanced_span() {
        out.push_str(&format!(" balancedSpan='{span}'"));
    }
    if token.is_balancer() {
        out.push_str(" balancer");
    }
    if let Some(span) = token.open_span() {
        out.push_str(&format!(" openSpan='{span}'"));
    }
    if let Some(span) = token.close_span() {
        out.push_str(&format!(" closeSpan='{span}'"));
    }
    out.push('>');
    out
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{{{:x}}}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

fn flag_str(flags: &Flags) -> String {
    let mut out = String::new();
    for (flag, set) in flags.iter() {
        out.push(' ');
        if !set {
            out.push('!');
        }
        out.push_str(flag.name());
    }
    out
}

struct Typed<'w, W: Write> {
    w: &'w mut W,
}

impl<W: Write> Typed<'_, W> {
    /// Writes `label: text` (or bare `text` at the root) at `indent`.
    fn line(&mut self, label: Option<&str>, indent: usize, text: &str) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        match label {
            Some(label) => writeln!(self.w, "{prefix}{label}: {text}"),
            None => writeln!(self.w, "{prefix}{text}"),
        }
    }

    fn token(&mut self, label: &str, token: &Token, indent: usize) -> std::fmt::Result {
        self.line(Some(label), indent, &token_str(token))
    }

    fn optional_token(
        &mut self,
        label: &str,
        token: Option<&Token>,
        indent: usize,
    ) -> std::fmt::Result {
        match token {
            Some(token) => self.token(label, token, indent),
            None => self.line(Some(label), indent, "null"),
        }
    }

    fn empty_list(&mut self, label: &str, indent: usize) -> std::fmt::Result {
        self.line(Some(label), indent, "[]")
    }

    fn pattern(&mut self, label: Option<&str>, pattern: &Pattern, indent: usize) -> std::fmt::Result {
        self.line(label, indent, "Pattern")?;
        let inner = indent + 1;
        self.token("openToken", pattern.open_token(), inner)?;
        for (i, alternative) in pattern.alternatives().iter().enumerate() {
            if i > 0 {
                let separator = &pattern.separator_tokens()[i - 1];
                self.token(&format!("separatorTokens[{}]", i - 1), separator, inner)?;
            }
            self.alternative(Some(&format!("alternatives[{i}]")), alternative, inner)?;
        }
        if pattern.separator_tokens().is_empty() {
            self.empty_list("separatorTokens", inner)?;
        }
        self.token("closeToken", pattern.close_token(), inner)?;
        self.flags(Some("flags"), pattern.flags(), inner)
    }

    fn alternative(
        &mut self,
        label: Option<&str>,
        alternative: &Alternative,
        indent: usize,
    ) -> std::fmt::Result {
        self.line(label, indent, "Alternative")?;
        if alternative.is_empty() {
            return self.empty_list("elements", indent + 1);
        }
        for (i, element) in alternative.elements().iter().enumerate() {
            self.element(&format!("elements[{i}]"), element, indent + 1)?;
        }
        Ok(())
    }

    fn element(&mut self, label: &str, element: &Element, indent: usize) -> std::fmt::Result {
        let label = Some(label);
        match element {
            Element::Character(n) => self.character(label, n, indent),
            Element::CharacterClass(n) => self.class(label, n, indent),
            Element::Quantifier(n) => self.quantifier(label, n, indent),
            Element::WordCharacterSet(n) => self.word_set(label, n, indent),
            Element::Gap(n) => self.gap(label, n, indent),
        }
    }

    /// Literal characters print as their token.
    fn character(
        &mut self,
        label: Option<&str>,
        character: &Character,
        indent: usize,
    ) -> std::fmt::Result {
        match character {
            Character::Literal(token) => self.line(label, indent, &token_str(token)),
            Character::Escaped(escape) => {
                self.line(label, indent, "Character")?;
                self.escape(Some("sequence"), escape, indent + 1)
            }
        }
    }

    fn escape(
        &mut self,
        label: Option<&str>,
        escape: &EscapeSequence,
        indent: usize,
    ) -> std::fmt::Result {
        let cooked = escape_text(&escape.cooked().to_string());
        self.line(label, indent, &format!("EscapeSequence cooked='{cooked}'"))?;
        self.token("escape", escape.escape(), indent + 1)?;
        self.token("code", escape.code(), indent + 1)
    }

    fn class(
        &mut self,
        label: Option<&str>,
        class: &CharacterClass,
        indent: usize,
    ) -> std::fmt::Result {
        let negate = if class.negate() { "negate" } else { "!negate" };
        self.line(label, indent, &format!("CharacterClass {negate}"))?;
        let inner = indent + 1;
        self.token("openToken", class.open_token(), inner)?;
        self.optional_token("negateToken", class.negate_token(), inner)?;
        if class.elements().is_empty() {
            self.empty_list("elements", inner)?;
        }
        for (i, element) in class.elements().iter().enumerate() {
            let label = format!("elements[{i}]");
            match element {
                ClassElement::Character(n) => self.character(Some(&label), n, inner)?,
                ClassElement::Range(n) => self.range(Some(&label), n, inner)?,
                ClassElement::WordCharacterSet(n) => self.word_set(Some(&label), n, inner)?,
            }
        }
        self.token("closeToken", class.close_token(), inner)
    }

    fn range(
        &mut self,
        label: Option<&str>,
        range: &CharacterClassRange,
        indent: usize,
    ) -> std::fmt::Result {
        self.line(label, indent, "CharacterClassRange")?;
        self.character(Some("min"), range.min(), indent + 1)?;
        self.token("sigilToken", range.sigil_token(), indent + 1)?;
        self.character(Some("max"), range.max(), indent + 1)
    }

    fn quantifier(
        &mut self,
        label: Option<&str>,
        quantifier: &Quantifier,
        indent: usize,
    ) -> std::fmt::Result {
        let header = format!(
            "Quantifier min={} max={}",
            quantifier.min(),
            quantifier.max()
        );
        self.line(label, indent, &header)?;
        self.element("element", quantifier.element(), indent + 1)?;
        match quantifier.sigil() {
            Sigil::Token(token) => self.token("sigilToken", token, indent + 1),
            Sigil::Braces(braces) => self.braces(braces, indent + 1),
        }
    }

    fn braces(&mut self, braces: &Braces, indent: usize) -> std::fmt::Result {
        self.line(Some("sigil"), indent, "Braces")?;
        let inner = indent + 1;
        self.token("openToken", braces.open_token(), inner)?;
        self.token("minToken", braces.min_token(), inner)?;
        self.optional_token("separatorToken", braces.separator_token(), inner)?;
        self.optional_token("maxToken", braces.max_token(), inner)?;
        self.token("closeToken", braces.close_token(), inner)
    }

    fn word_set(
        &mut self,
        label: Option<&str>,
        set: &WordCharacterSet,
        indent: usize,
    ) -> std::fmt::Result {
        let negate = if set.negate() { "negate" } else { "!negate" };
        self.line(label, indent, &format!("WordCharacterSet {negate}"))?;
        self.token("escapeToken", set.escape_token(), indent + 1)?;
        self.token("value", set.value(), indent + 1)
    }

    fn gap(&mut self, label: Option<&str>, gap: &Gap, indent: usize) -> std::fmt::Result {
        self.line(label, indent, "Gap")?;
        self.token("escapeToken", gap.escape_token(), indent + 1)?;
        self.token("value", gap.value(), indent + 1)
    }

    fn flags(&mut self, label: Option<&str>, flags: &Flags, indent: usize) -> std::fmt::Result {
        self.line(label, indent, &format!("Flags{}", flag_str(flags)))?;
        if flags.tokens().is_empty() {
            return self.empty_list("tokens", indent + 1);
        }
        for (i, token) in flags.tokens().iter().enumerate() {
            self.token(&format!("tokens[{i}]"), token, indent + 1)?;
        }
        Ok(())
    }
}
