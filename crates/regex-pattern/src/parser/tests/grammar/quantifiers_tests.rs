use crate::test_utils::{expect_valid, expect_valid_cst, expect_valid_raw};
use regex_pattern_core::{Bound, Element, Node, Sigil};

fn first_quantifier(source: &str) -> (u32, Bound) {
    let Node::Pattern(pattern) = expect_valid(source) else {
        panic!("expected a pattern");
    };
    match &pattern.alternatives()[0].elements()[0] {
        Element::Quantifier(q) => (q.min(), q.max()),
        other => panic!("expected a quantifier, got {:?}", other.node_type()),
    }
}

#[test]
fn plus() {
    let res = expect_valid_cst("/2+/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: Quantifier min=1 max=+Infinity
          element: <Character '2'>
          sigilToken: <Keyword '+'>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn sigil_bounds() {
    assert_eq!(first_quantifier("/a+/"), (1, Bound::Infinite));
    assert_eq!(first_quantifier("/a*/"), (0, Bound::Infinite));
    assert_eq!(first_quantifier("/a?/"), (0, Bound::Finite(1)));
}

#[test]
fn brace_bounds() {
    assert_eq!(first_quantifier("/a{3}/"), (3, Bound::Finite(3)));
    assert_eq!(first_quantifier("/a{2,}/"), (2, Bound::Infinite));
    assert_eq!(first_quantifier("/a{2,5}/"), (2, Bound::Finite(5)));
    assert_eq!(first_quantifier("/a{0,0}/"), (0, Bound::Finite(0)));
    assert_eq!(first_quantifier("/a{007}/"), (7, Bound::Finite(7)));
}

#[test]
fn brace_with_open_max() {
    let res = expect_valid_cst("/a{12,}/");

    insta::assert_snapshot!(res, @r"
    Pattern
      openToken: <Punctuator '/' balanced='/' balancedSpan='Pattern'>
      alternatives[0]: Alternative
        elements[0]: Quantifier min=12 max=+Infinity
          element: <Character 'a'>
          sigil: Braces
            openToken: <Punctuator '{' balanced='}' balancedSpan='Quantifier'>
            minToken: <Character '12'>
            separatorToken: <Punctuator ','>
            maxToken: null
            closeToken: <Punctuator '}' balancer>
      separatorTokens: []
      closeToken: <Punctuator '/' balancer>
      flags: Flags !global !ignoreCase !multiline !dotAll !unicode !sticky
        tokens: []
    ");
}

#[test]
fn brace_exact_has_no_separator() {
    let Node::Pattern(pattern) = expect_valid("/a{4}/") else {
        panic!("expected a pattern");
    };
    let Element::Quantifier(q) = &pattern.alternatives()[0].elements()[0] else {
        panic!("expected a quantifier");
    };
    let Sigil::Braces(braces) = q.sigil() else {
        panic!("expected a brace sigil");
    };
    assert_eq!(braces.min_token().text(), "4");
    assert!(braces.separator_token().is_none());
    assert!(braces.max_token().is_none());
}

#[test]
fn incomplete_braces_are_literal() {
    for source in ["/a{/", "/a{}/", "/a{,5}/", "/a{2/", "/a{2,x}/", "/{/"] {
        let Node::Pattern(pattern) = expect_valid(source) else {
            panic!("expected a pattern");
        };
        let elements = pattern.alternatives()[0].elements();
        assert!(
            elements
                .iter()
                .all(|e| matches!(e, Element::Character(_))),
            "{source} should hold only characters"
        );
    }
}

#[test]
fn quantified_class_and_word_set() {
    let res = expect_valid_raw(r"/[a]*\w?/");

    insta::assert_snapshot!(res, @r#"
    Pattern
      PunctuatorToken "/"
      Alternative
        Quantifier
          CharacterClass
            PunctuatorToken "["
            Character
              CharacterToken "a"
            PunctuatorToken "]"
          KeywordToken "*"
        Quantifier
          WordCharacterSet
            PunctuatorToken "\\"
            KeywordToken "w"
          KeywordToken "?"
      PunctuatorToken "/"
      Flags
    "#);
}

#[test]
fn quantifier_binds_to_last_element_only() {
    let Node::Pattern(pattern) = expect_valid("/ab+/") else {
        panic!("expected a pattern");
    };
    let elements = pattern.alternatives()[0].elements();
    assert_eq!(elements.len(), 2);
    assert!(matches!(elements[0], Element::Character(_)));
    assert!(matches!(elements[1], Element::Quantifier(_)));
}
