use crate::test_utils::{expect_valid, expect_valid_cst, expect_valid_raw};
use regex_pattern_core::{ClassElement, Element, Node};

fn first_element(source: &str) -> Element {
    let Node::Pattern(pattern) = expect_valid(source) else {
        panic!("expected a pattern");
    };
    pattern.alternatives()[0].elements()[0].clone()
}

fn escaped_value(source: &str) -> char {
    match first_element(source) {
        Element::Character(c) => {
            assert!(c.as_escape().is_some(), "{source} should hold an escape");
            c.value()
        }
        other => panic!("expected a character, got {:?}", other.node_type()),
    }
}

#[test]
fn identity_escape() {
    let res = expect_valid_cst(r"/\</");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: Character
          sequence: EscapeSequence cooked='<'
            escape: <Punctuator '\\' openSpan='Escape'>
            code: <Keyword '<' closeSpan='Escape'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn control_escape() {
    let res = expect_valid_cst(r"/\n/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: Character
          sequence: EscapeSequence cooked='\n'
            escape: <Punctuator '\\' openSpan='Escape'>
            code: <Keyword 'n' closeSpan='Escape'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn decoded_values() {
    assert_eq!(escaped_value(r"/\n/"), '\n');
    assert_eq!(escaped_value(r"/\r/"), '\r');
    assert_eq!(escaped_value(r"/\t/"), '\t');
    assert_eq!(escaped_value(r"/\v/"), '\u{b}');
    assert_eq!(escaped_value(r"/\f/"), '\u{c}');
    assert_eq!(escaped_value(r"/\0/"), '\0');
    assert_eq!(escaped_value(r"/\//"), '/');
    assert_eq!(escaped_value(r"/\\/"), '\\');
    assert_eq!(escaped_value(r"/\d/"), 'd');
    assert_eq!(escaped_value(r"/\é/"), 'é');
}

#[test]
fn negated_word_set() {
    let res = expect_valid_cst(r"/\W/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: WordCharacterSet negate
          escapeToken: <Punctuator '\\'>
          value: <Keyword 'W'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn word_set() {
    let Element::WordCharacterSet(set) = first_element(r"/\w/") else {
        panic!("expected a word character set");
    };
    assert!(!set.negate());
}

#[test]
fn unresolved_gap() {
    let res = expect_valid_cst(r"/\g/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: Gap
          escapeToken: <Punctuator '\\'>
          value: <Keyword 'g'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn gap_inside_class_is_an_escape() {
    let Element::CharacterClass(class) = first_element(r"/[\g]/") else {
        panic!("expected a class");
    };
    let ClassElement::Character(c) = &class.elements()[0] else {
        panic!("expected a character");
    };
    assert_eq!(c.value(), 'g');
}

#[test]
fn escaped_metacharacters_do_not_act() {
    let res = expect_valid_raw(r"/\[\|\+/");

    insta::assert_snapshot!(res, @r#"
    Pattern
      PunctuatorToken "/"
      Alternative
        Character
          EscapeSequence
            PunctuatorToken "\\"
            KeywordToken "["
        Character
          EscapeSequence
            PunctuatorToken "\\"
            KeywordToken "|"
        Character
          EscapeSequence
            PunctuatorToken "\\"
            KeywordToken "+"
      PunctuatorToken "/"
      Flags
    "#);
}

#[test]
fn escape_can_be_quantified() {
    let Element::Quantifier(q) = first_element(r"/\.+/") else {
        panic!("expected a quantifier");
    };
    assert!(matches!(q.element(), Element::Character(c) if c.value() == '.'));
}
